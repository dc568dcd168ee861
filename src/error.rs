use std::fmt;

/// Errors raised while reading, configuring or laying out a network.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    UnsupportedOrientation { value: String },
    UnknownSort { value: String },
    LinkOutOfRange { link: usize, endpoint: usize, node_count: usize },
    InvalidSize { width: f32, height: f32 },
    Parse { format: &'static str, message: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedOrientation { value } => write!(
                f,
                "unsupported orientation '{value}' (expected top, bottom, left, right or radial)"
            ),
            Self::UnknownSort { value } => write!(
                f,
                "unknown sort order '{value}' (expected none, name, group or degree)"
            ),
            Self::LinkOutOfRange {
                link,
                endpoint,
                node_count,
            } => write!(
                f,
                "link {link} references node {endpoint}, but the network has {node_count} nodes"
            ),
            Self::InvalidSize { width, height } => {
                write!(f, "invalid layout size ({width} x {height})")
            }
            Self::Parse { format, message } => {
                write!(f, "failed to parse {format} network: {message}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::LayoutError;

    #[test]
    fn unsupported_orientation_names_the_value() {
        let err = LayoutError::UnsupportedOrientation {
            value: "diagonal".to_string(),
        };
        assert!(err.to_string().contains("unsupported orientation 'diagonal'"));
    }

    #[test]
    fn link_out_of_range_reports_counts() {
        let err = LayoutError::LinkOutOfRange {
            link: 3,
            endpoint: 9,
            node_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "link 3 references node 9, but the network has 4 nodes"
        );
    }
}
