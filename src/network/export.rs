use serde::Serialize;

use super::arc::ArcLayout;
use super::types::{Interpolate, Node, Orientation};

#[derive(Debug, Serialize)]
pub struct ArcLinkSnapshot {
    pub source: usize,
    pub target: usize,
    pub value: f32,
    /// Node indices in drawing order.
    pub endpoints: [usize; 2],
}

/// The computed layout, as handed to a renderer. Every field describes the
/// last build, even if settings changed since.
#[derive(Debug, Serialize)]
pub struct LayoutSnapshot<'a> {
    pub orient: Orientation,
    pub directed: bool,
    pub reverse: bool,
    pub interpolate: Interpolate,
    pub width: f32,
    pub height: f32,
    pub nodes: &'a [Node],
    pub links: Vec<ArcLinkSnapshot>,
}

impl ArcLayout {
    pub fn snapshot(&self) -> LayoutSnapshot<'_> {
        let (width, height) = self.built_size();
        LayoutSnapshot {
            orient: self.built_orient(),
            directed: self.is_directed_built(),
            reverse: self.is_reversed(),
            interpolate: self.interpolate(),
            width,
            height,
            nodes: self.nodes(),
            links: self
                .arcs()
                .map(|arc| ArcLinkSnapshot {
                    source: arc.link.source,
                    target: arc.link.target,
                    value: arc.link.value,
                    endpoints: [arc.from.index, arc.to.index],
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.snapshot())
    }
}
