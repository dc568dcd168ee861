use serde::Deserialize;

use crate::error::LayoutError;

use super::layout::NetworkLayout;
use super::types::{Link, Node};

/// Supported network file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkFormat {
    Json,
    Yaml,
    Toml,
}

impl NetworkFormat {
    /// Pick a format from a file extension. Unknown extensions are JSON.
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext.map(|e| e.to_ascii_lowercase()).as_deref() {
            Some("yaml" | "yml") => NetworkFormat::Yaml,
            Some("toml") => NetworkFormat::Toml,
            _ => NetworkFormat::Json,
        }
    }

    fn name(self) -> &'static str {
        match self {
            NetworkFormat::Json => "JSON",
            NetworkFormat::Yaml => "YAML",
            NetworkFormat::Toml => "TOML",
        }
    }
}

#[derive(Debug, Deserialize)]
struct NodeEntry {
    #[serde(default, alias = "nodeName")]
    name: Option<String>,
    #[serde(default)]
    group: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct NetworkDocument {
    #[serde(default)]
    nodes: Vec<NodeEntry>,
    #[serde(default)]
    links: Vec<Link>,
}

/// Parse a network document into a ready-to-lay-out base.
pub fn parse_network(source: &str, format: NetworkFormat) -> Result<NetworkLayout, LayoutError> {
    let document: NetworkDocument = match format {
        NetworkFormat::Json => serde_json::from_str(source).map_err(|e| e.to_string()),
        NetworkFormat::Yaml => serde_yaml::from_str(source).map_err(|e| e.to_string()),
        NetworkFormat::Toml => toml::from_str(source).map_err(|e| e.to_string()),
    }
    .map_err(|message| LayoutError::Parse {
        format: format.name(),
        message,
    })?;

    let nodes = document
        .nodes
        .into_iter()
        .enumerate()
        .map(|(i, node)| Node {
            group: node.group,
            ..Node::new(node.name.unwrap_or_else(|| i.to_string()))
        })
        .collect();

    NetworkLayout::new(nodes, document.links)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_network() {
        let input = r#"{
            "nodes": [{"name": "Myriel", "group": 1}, {"nodeName": "Napoleon"}, {}],
            "links": [{"source": 1, "target": 0}, {"source": 2, "target": 0, "value": 8}]
        }"#;
        let network = parse_network(input, NetworkFormat::Json).unwrap();
        let names: Vec<&str> = network.nodes().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Myriel", "Napoleon", "2"]);
        assert_eq!(network.nodes()[0].group, Some(1));
        assert_eq!(network.links()[1].value, 8.0);
        assert_eq!(network.nodes()[0].link_degree, 9.0);
    }

    #[test]
    fn test_parse_yaml_network() {
        let input = "nodes:\n  - name: a\n  - name: b\nlinks:\n  - source: 0\n    target: 1\n";
        let network = parse_network(input, NetworkFormat::Yaml).unwrap();
        assert_eq!(network.nodes().len(), 2);
        assert_eq!(network.links()[0], Link::new(0, 1));
    }

    #[test]
    fn test_parse_toml_network() {
        let input = r#"
[[nodes]]
name = "a"
group = 2

[[nodes]]
name = "b"

[[links]]
source = 1
target = 0
value = 0.5
"#;
        let network = parse_network(input, NetworkFormat::Toml).unwrap();
        assert_eq!(network.nodes()[0].group, Some(2));
        assert_eq!(network.links()[0], Link::new(1, 0).with_value(0.5));
    }

    #[test]
    fn test_parse_errors_are_tagged() {
        let err = parse_network("{ nodes: ", NetworkFormat::Json).unwrap_err();
        assert!(matches!(err, LayoutError::Parse { format: "JSON", .. }));

        let input = r#"{"nodes": [{}], "links": [{"source": 0, "target": 3}]}"#;
        let err = parse_network(input, NetworkFormat::Json).unwrap_err();
        assert!(matches!(err, LayoutError::LinkOutOfRange { endpoint: 3, .. }));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(NetworkFormat::from_extension(Some("YML")), NetworkFormat::Yaml);
        assert_eq!(NetworkFormat::from_extension(Some("toml")), NetworkFormat::Toml);
        assert_eq!(NetworkFormat::from_extension(None), NetworkFormat::Json);
    }
}
