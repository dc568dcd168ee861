use std::cmp::Ordering;
use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;

use crate::error::LayoutError;

use super::layout::NetworkLayout;
use super::sort::{NodeComparator, SortOrder};
use super::style::MarkStyle;
use super::types::{Interpolate, Link, Node, Orientation};

/// Maps a breadth in [0, 1] to coordinates for one orientation inside a
/// `width` x `height` box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub orient: Orientation,
    pub width: f32,
    pub height: f32,
}

impl ArcGeometry {
    pub fn new(orient: Orientation, width: f32, height: f32) -> Self {
        Self {
            orient,
            width,
            height,
        }
    }

    /// Radius of the circle used by radial layouts.
    pub fn radius(&self) -> f32 {
        self.width.min(self.height) / 2.0
    }

    pub fn mid_angle(&self, breadth: f32) -> f32 {
        match self.orient {
            Orientation::Top => -FRAC_PI_2,
            Orientation::Bottom => FRAC_PI_2,
            Orientation::Left => PI,
            Orientation::Right => 0.0,
            Orientation::Radial => (breadth - 0.25) * TAU,
        }
    }

    pub fn x(&self, breadth: f32) -> f32 {
        match self.orient {
            Orientation::Top | Orientation::Bottom => breadth * self.width,
            Orientation::Left => 0.0,
            Orientation::Right => self.width,
            Orientation::Radial => {
                self.width / 2.0 + self.radius() * self.mid_angle(breadth).cos()
            }
        }
    }

    pub fn y(&self, breadth: f32) -> f32 {
        match self.orient {
            Orientation::Top => 0.0,
            Orientation::Bottom => self.height,
            Orientation::Left | Orientation::Right => breadth * self.height,
            Orientation::Radial => {
                self.height / 2.0 + self.radius() * self.mid_angle(breadth).sin()
            }
        }
    }

    pub fn position(&self, breadth: f32) -> (f32, f32) {
        (self.x(breadth), self.y(breadth))
    }
}

/// A link with its endpoints in drawing order.
#[derive(Debug, Clone, Copy)]
pub struct ArcLink<'a> {
    pub link: &'a Link,
    pub from: &'a Node,
    pub to: &'a Node,
    pub interpolate: Interpolate,
}

/// One-dimensional network layout: nodes on a line or circle, links as arcs.
pub struct ArcLayout {
    network: NetworkLayout,
    orient: Orientation,
    directed: bool,
    sort: Option<NodeComparator>,
    style: MarkStyle,
    // Derived on each fresh build.
    interpolate: Interpolate,
    built_orient: Orientation,
    built_size: (f32, f32),
    built_directed: bool,
    reverse: bool,
}

impl Default for ArcLayout {
    fn default() -> Self {
        Self::new(NetworkLayout::default())
    }
}

impl fmt::Debug for ArcLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArcLayout")
            .field("network", &self.network)
            .field("orient", &self.orient)
            .field("directed", &self.directed)
            .field("sort", &self.sort.is_some())
            .field("built_orient", &self.built_orient)
            .field("interpolate", &self.interpolate)
            .field("reverse", &self.reverse)
            .finish()
    }
}

impl ArcLayout {
    pub fn new(network: NetworkLayout) -> Self {
        let orient = Orientation::Bottom;
        let built_size = (network.width(), network.height());
        Self {
            network,
            orient,
            directed: false,
            sort: None,
            style: MarkStyle::default(),
            interpolate: orient.interpolate(),
            built_orient: orient,
            built_size,
            built_directed: false,
            reverse: orient.is_reversed(),
        }
    }

    pub fn from_network(nodes: Vec<Node>, links: Vec<Link>) -> Result<Self, LayoutError> {
        Ok(Self::new(NetworkLayout::new(nodes, links)?))
    }

    pub fn network(&self) -> &NetworkLayout {
        &self.network
    }

    /// Mutable access to the base; its own setters mark the layout stale.
    pub fn network_mut(&mut self) -> &mut NetworkLayout {
        &mut self.network
    }

    pub fn nodes(&self) -> &[Node] {
        self.network.nodes()
    }

    pub fn links(&self) -> &[Link] {
        self.network.links()
    }

    pub fn orient(&self) -> Orientation {
        self.orient
    }

    pub fn set_orient(&mut self, orient: Orientation) -> &mut Self {
        if orient != self.orient {
            self.orient = orient;
            self.network.invalidate();
        }
        self
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    pub fn set_directed(&mut self, directed: bool) -> &mut Self {
        if directed != self.directed {
            self.directed = directed;
            self.network.invalidate();
        }
        self
    }

    pub fn has_sort(&self) -> bool {
        self.sort.is_some()
    }

    /// Order nodes with `compare` on the next build.
    pub fn set_sort<F>(&mut self, compare: F) -> &mut Self
    where
        F: Fn(&Node, &Node) -> Ordering + 'static,
    {
        self.sort = Some(Box::new(compare));
        self.network.invalidate();
        self
    }

    pub fn set_sort_order(&mut self, order: SortOrder) -> &mut Self {
        self.sort = order.comparator();
        self.network.invalidate();
        self
    }

    /// Back to collection order.
    pub fn clear_sort(&mut self) -> &mut Self {
        if self.sort.take().is_some() {
            self.network.invalidate();
        }
        self
    }

    pub fn style(&self) -> &MarkStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: MarkStyle) -> &mut Self {
        self.style = style;
        self
    }

    pub fn geometry(&self) -> ArcGeometry {
        ArcGeometry::new(self.orient, self.network.width(), self.network.height())
    }

    /// Curve style of every link, as of the last build.
    pub fn interpolate(&self) -> Interpolate {
        self.interpolate
    }

    /// Orientation the node coordinates were computed for.
    pub fn built_orient(&self) -> Orientation {
        self.built_orient
    }

    /// Layout box the node coordinates were computed for.
    pub fn built_size(&self) -> (f32, f32) {
        self.built_size
    }

    /// Whether links were drawn asymmetrically at the last build.
    pub fn is_directed_built(&self) -> bool {
        self.built_directed
    }

    /// Whether the endpoint order is flipped for the last built orientation.
    pub fn is_reversed(&self) -> bool {
        self.reverse
    }

    /// Node indices in placement order.
    pub fn order(&self) -> Vec<usize> {
        let nodes = self.network.nodes();
        let mut order: Vec<usize> = (0..nodes.len()).collect();
        if let Some(compare) = &self.sort {
            order.sort_by(|&a, &b| compare(&nodes[a], &nodes[b]));
        }
        order
    }

    /// Place the nodes. A no-op when nothing changed since the last call.
    pub fn build(&mut self) {
        if !self.network.begin_build() {
            #[cfg(feature = "tracing")]
            tracing::trace!(orient = %self.orient, "arc layout up to date");
            return;
        }

        self.built_orient = self.orient;
        self.built_size = (self.network.width(), self.network.height());
        self.built_directed = self.directed;
        self.interpolate = self.orient.interpolate();
        self.reverse = self.orient.is_reversed();

        let order = self.order();
        let geometry = self.geometry();
        let count = order.len() as f32;
        let nodes = self.network.nodes_mut();
        for (i, &index) in order.iter().enumerate() {
            let node = &mut nodes[index];
            node.breadth = (i as f32 + 0.5) / count;
            let breadth = node.breadth;
            node.mid_angle = geometry.mid_angle(breadth);
            (node.x, node.y) = geometry.position(breadth);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            nodes = order.len(),
            links = self.network.links().len(),
            orient = %self.orient,
            directed = self.built_directed,
            interpolate = %self.interpolate,
            "arc layout built"
        );
    }

    /// Endpoints of `link` in drawing order. Without a forced reversal the
    /// lower-breadth node comes first; directed layouts keep source first.
    /// `None` when the link points outside the network.
    pub fn link_endpoints(&self, link: &Link) -> Option<[&Node; 2]> {
        let (source, target) = self.network.link_nodes(link)?;
        if self.reverse ^ (self.built_directed || source.breadth < target.breadth) {
            Some([source, target])
        } else {
            Some([target, source])
        }
    }

    pub fn arcs(&self) -> impl Iterator<Item = ArcLink<'_>> + '_ {
        self.network.links().iter().filter_map(move |link| {
            let [from, to] = self.link_endpoints(link)?;
            Some(ArcLink {
                link,
                from,
                to,
                interpolate: self.interpolate,
            })
        })
    }
}
