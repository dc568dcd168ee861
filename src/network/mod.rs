//! Arc diagram layout for networks.
//!
//! Nodes are spread evenly along one edge of the layout box or around a
//! circle; links become arcs whose endpoint order decides which side of the
//! axis they bulge to.

mod arc;
mod export;
mod label;
mod layout;
mod parser;
mod render;
mod sort;
mod style;
mod types;

pub use arc::{ArcGeometry, ArcLayout, ArcLink};
pub use export::{ArcLinkSnapshot, LayoutSnapshot};
pub use label::{is_upright, label_placement, LabelPlacement, TextAnchor};
pub use layout::{NetworkLayout, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use parser::{parse_network, NetworkFormat};
pub use render::render_arc_diagram;
pub use sort::{NodeComparator, SortOrder};
pub use style::MarkStyle;
pub use types::{Interpolate, Link, Node, Orientation};
