use crate::theme::Theme;

use super::types::Node;

/// Mark prototypes for dots, arcs and labels.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkStyle {
    pub background: String,
    pub node_fill: String,
    pub node_stroke: String,
    pub node_radius: f32,
    pub node_stroke_width: f32,
    pub group_fills: Vec<String>,
    pub link_stroke: String,
    pub link_width: f32,
    pub link_opacity: f32,
    pub label_color: String,
    pub label_margin: f32,
    pub font_family: String,
    pub font_size: f32,
}

impl Default for MarkStyle {
    fn default() -> Self {
        Self {
            background: "transparent".to_string(),
            node_fill: "#1f77b4".to_string(),
            node_stroke: "#ffffff".to_string(),
            node_radius: 4.5,
            node_stroke_width: 1.5,
            group_fills: Vec::new(),
            link_stroke: "#333333".to_string(),
            link_width: 1.0,
            link_opacity: 0.5,
            label_color: "#333333".to_string(),
            label_margin: 7.0,
            font_family: "sans-serif".to_string(),
            font_size: 11.0,
        }
    }
}

impl MarkStyle {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            background: theme.background_color.clone(),
            node_fill: theme.node_fill.clone(),
            node_stroke: theme.node_stroke.clone(),
            node_radius: theme.node_radius,
            node_stroke_width: theme.node_stroke_width,
            group_fills: theme.group_colors.clone(),
            link_stroke: theme.link_stroke.clone(),
            link_width: theme.link_width,
            link_opacity: theme.link_opacity,
            label_color: theme.label_color.clone(),
            label_margin: theme.label_margin,
            font_family: theme.font_family.clone(),
            font_size: theme.font_size,
        }
    }

    pub fn fill_for(&self, node: &Node) -> &str {
        match node.group {
            Some(group) if !self.group_fills.is_empty() => {
                let slot = group.rem_euclid(self.group_fills.len() as i64) as usize;
                &self.group_fills[slot]
            }
            _ => &self.node_fill,
        }
    }

    /// Heavier links get wider strokes.
    pub fn link_width_for(&self, value: f32) -> f32 {
        self.link_width * value.max(0.0).sqrt().max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_cycle_through_palette() {
        let style = MarkStyle {
            group_fills: vec!["#a".to_string(), "#b".to_string()],
            ..MarkStyle::default()
        };
        assert_eq!(style.fill_for(&Node::new("x").with_group(3)), "#b");
        assert_eq!(style.fill_for(&Node::new("y").with_group(-2)), "#a");
        assert_eq!(style.fill_for(&Node::new("z")), style.node_fill);
    }

    #[test]
    fn link_width_grows_with_sqrt_value() {
        let style = MarkStyle::default();
        assert_eq!(style.link_width_for(0.25), 1.0);
        assert_eq!(style.link_width_for(9.0), 3.0);
    }

    #[test]
    fn from_theme_copies_colors() {
        let theme = Theme::from_builtin("dark").unwrap();
        let style = MarkStyle::from_theme(&theme);
        assert_eq!(style.background, theme.background_color);
        assert_eq!(style.group_fills.len(), 10);
    }
}
