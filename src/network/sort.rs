use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::LayoutError;

use super::types::Node;

/// Three-way node comparison used to order nodes along the axis.
pub type NodeComparator = Box<dyn Fn(&Node, &Node) -> Ordering>;

/// Built-in node orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Collection order.
    #[default]
    None,
    Name,
    /// Group, then name. Nodes without a group go last.
    Group,
    /// Highest link degree first.
    Degree,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::None => "none",
            SortOrder::Name => "name",
            SortOrder::Group => "group",
            SortOrder::Degree => "degree",
        }
    }

    pub fn comparator(self) -> Option<NodeComparator> {
        match self {
            SortOrder::None => None,
            SortOrder::Name => Some(Box::new(|a: &Node, b: &Node| a.name.cmp(&b.name))),
            SortOrder::Group => Some(Box::new(|a: &Node, b: &Node| {
                compare_groups(a.group, b.group).then_with(|| a.name.cmp(&b.name))
            })),
            SortOrder::Degree => Some(Box::new(|a: &Node, b: &Node| {
                b.link_degree.total_cmp(&a.link_degree)
            })),
        }
    }
}

fn compare_groups(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(SortOrder::None),
            "name" => Ok(SortOrder::Name),
            "group" => Ok(SortOrder::Group),
            "degree" => Ok(SortOrder::Degree),
            _ => Err(LayoutError::UnknownSort {
                value: s.to_string(),
            }),
        }
    }
}
