use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// A node along the arc axis. `breadth`, `x`, `y` and `mid_angle` are
/// written by the layout; the rest comes from the input network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub index: usize,
    pub name: String,
    pub group: Option<i64>,
    pub link_degree: f32,
    pub breadth: f32,
    pub x: f32,
    pub y: f32,
    pub mid_angle: f32,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            index: 0,
            name: name.into(),
            group: None,
            link_degree: 0.0,
            breadth: 0.0,
            x: 0.0,
            y: 0.0,
            mid_angle: 0.0,
        }
    }

    pub fn with_group(mut self, group: i64) -> Self {
        self.group = Some(group);
        self
    }
}

/// A link between two nodes, by index into the node collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub source: usize,
    pub target: usize,
    #[serde(default = "default_link_value")]
    pub value: f32,
}

fn default_link_value() -> f32 {
    1.0
}

impl Link {
    pub fn new(source: usize, target: usize) -> Self {
        Self {
            source,
            target,
            value: default_link_value(),
        }
    }

    pub fn with_value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }
}

/// Where the nodes are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
    Radial,
}

impl Orientation {
    pub const ALL: [Orientation; 5] = [
        Orientation::Top,
        Orientation::Bottom,
        Orientation::Left,
        Orientation::Right,
        Orientation::Radial,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Top => "top",
            Orientation::Bottom => "bottom",
            Orientation::Left => "left",
            Orientation::Right => "right",
            Orientation::Radial => "radial",
        }
    }

    /// Undirected links are drawn from the higher-breadth node on these
    /// orientations so that arcs stay inside the box.
    pub fn is_reversed(self) -> bool {
        matches!(self, Orientation::Top | Orientation::Right)
    }

    pub fn interpolate(self) -> Interpolate {
        match self {
            Orientation::Radial => Interpolate::Linear,
            _ => Interpolate::Polar,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Orientation::ALL
            .into_iter()
            .find(|orient| orient.as_str() == normalized)
            .ok_or_else(|| LayoutError::UnsupportedOrientation {
                value: s.to_string(),
            })
    }
}

/// Curve style used to draw a link between its two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolate {
    Linear,
    #[default]
    Polar,
}

impl Interpolate {
    pub fn as_str(self) -> &'static str {
        match self {
            Interpolate::Linear => "linear",
            Interpolate::Polar => "polar",
        }
    }
}

impl fmt::Display for Interpolate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
