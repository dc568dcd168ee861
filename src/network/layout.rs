use crate::error::LayoutError;

use super::types::{Link, Node};

pub const DEFAULT_WIDTH: f32 = 800.0;
pub const DEFAULT_HEIGHT: f32 = 400.0;

/// Node and link collections shared by network layouts, plus the
/// "build only when something changed" guard.
#[derive(Debug, Clone)]
pub struct NetworkLayout {
    nodes: Vec<Node>,
    links: Vec<Link>,
    width: f32,
    height: f32,
    dirty: bool,
}

impl Default for NetworkLayout {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            links: Vec::new(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            dirty: true,
        }
    }
}

impl NetworkLayout {
    pub fn new(nodes: Vec<Node>, links: Vec<Link>) -> Result<Self, LayoutError> {
        let mut network = Self::default();
        network.set_network(nodes, links)?;
        Ok(network)
    }

    /// Replace both collections. Links must reference existing nodes.
    pub fn set_network(
        &mut self,
        mut nodes: Vec<Node>,
        links: Vec<Link>,
    ) -> Result<&mut Self, LayoutError> {
        for (i, link) in links.iter().enumerate() {
            for endpoint in [link.source, link.target] {
                if endpoint >= nodes.len() {
                    return Err(LayoutError::LinkOutOfRange {
                        link: i,
                        endpoint,
                        node_count: nodes.len(),
                    });
                }
            }
        }

        for (index, node) in nodes.iter_mut().enumerate() {
            node.index = index;
            node.link_degree = 0.0;
        }
        for link in &links {
            nodes[link.source].link_degree += link.value;
            nodes[link.target].link_degree += link.value;
        }

        self.nodes = nodes;
        self.links = links;
        self.dirty = true;
        Ok(self)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_size(&mut self, width: f32, height: f32) -> Result<&mut Self, LayoutError> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(LayoutError::InvalidSize { width, height });
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.dirty = true;
        }
        Ok(self)
    }

    /// Source and target nodes of a link, if both exist.
    pub fn link_nodes(&self, link: &Link) -> Option<(&Node, &Node)> {
        Some((self.nodes.get(link.source)?, self.nodes.get(link.target)?))
    }

    /// Force the next build to recompute.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn is_built(&self) -> bool {
        !self.dirty
    }

    /// Returns `true` when the caller must recompute, and marks the
    /// network as built.
    pub fn begin_build(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> NetworkLayout {
        NetworkLayout::new(
            vec![Node::new("a"), Node::new("b"), Node::new("c")],
            vec![
                Link::new(0, 1),
                Link::new(1, 2).with_value(2.5),
                Link::new(2, 0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn new_assigns_indices_and_link_degree() {
        let network = triangle();
        let indices: Vec<usize> = network.nodes().iter().map(|n| n.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);

        let degrees: Vec<f32> = network.nodes().iter().map(|n| n.link_degree).collect();
        assert_eq!(degrees, vec![2.0, 3.5, 3.5]);
    }

    #[test]
    fn rejects_dangling_link() {
        let err = NetworkLayout::new(vec![Node::new("a")], vec![Link::new(0, 4)]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::LinkOutOfRange {
                link: 0,
                endpoint: 4,
                node_count: 1
            }
        );
    }

    #[test]
    fn link_nodes_rejects_foreign_links() {
        let network = triangle();
        let (source, target) = network.link_nodes(&network.links()[1]).unwrap();
        assert_eq!((source.name.as_str(), target.name.as_str()), ("b", "c"));
        assert!(network.link_nodes(&Link::new(0, 3)).is_none());
    }

    #[test]
    fn begin_build_fires_once_per_change() {
        let mut network = triangle();
        assert!(network.begin_build());
        assert!(!network.begin_build());
        assert!(network.is_built());

        network.set_size(DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap();
        assert!(!network.begin_build(), "same size is not a change");

        network.set_size(300.0, 300.0).unwrap();
        assert!(network.begin_build());

        network.invalidate();
        assert!(network.begin_build());
    }

    #[test]
    fn rejects_bad_sizes() {
        let mut network = triangle();
        assert!(network.set_size(f32::NAN, 10.0).is_err());
        assert!(network.set_size(10.0, -1.0).is_err());
        assert_eq!(network.width(), DEFAULT_WIDTH);
    }
}
