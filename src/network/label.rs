use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::types::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    End,
}

impl TextAnchor {
    pub fn as_svg(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::End => "end",
        }
    }
}

/// Where and how a node label is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub x: f32,
    pub y: f32,
    /// Text rotation in radians.
    pub angle: f32,
    pub anchor: TextAnchor,
}

/// True when text along `angle` reads left to right.
pub fn is_upright(angle: f32) -> bool {
    let angle = angle.rem_euclid(TAU);
    angle < FRAC_PI_2 || angle >= 3.0 * FRAC_PI_2
}

/// Label pushed `margin` away from the node along its mid-angle, rotated to
/// stay readable.
pub fn label_placement(node: &Node, margin: f32) -> LabelPlacement {
    let angle = node.mid_angle;
    let (sin, cos) = angle.sin_cos();
    let (angle, anchor) = if is_upright(angle) {
        (angle, TextAnchor::Start)
    } else {
        (angle + PI, TextAnchor::End)
    };
    LabelPlacement {
        x: node.x + margin * cos,
        y: node.y + margin * sin,
        angle,
        anchor,
    }
}
