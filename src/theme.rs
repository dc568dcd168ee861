use serde::{Deserialize, Serialize};

const LIGHT_BACKGROUND: &str = "#ffffff";
const LIGHT_NODE_FILL: &str = "#1f77b4";
const LIGHT_NODE_STROKE: &str = "#ffffff";
const LIGHT_LINK_STROKE: &str = "#24292f";
const LIGHT_LABEL: &str = "#24292f";

const BUILTIN_THEMES: &[(&str, &str)] = &[
    ("dark", include_str!("../themes/dark.toml")),
    ("light", include_str!("../themes/light.toml")),
];

const FONT_FAMILY: &str = "sans-serif";
const FONT_SIZE: f32 = 11.0;
const NODE_RADIUS: f32 = 4.5;
const NODE_STROKE_WIDTH: f32 = 1.5;
const LINK_WIDTH: f32 = 1.0;
const LINK_OPACITY: f32 = 0.5;
const LABEL_MARGIN: f32 = 7.0;

/// Colors and sizes for arc diagrams, loadable from TOML or YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default = "default_background")]
    pub background_color: String,
    #[serde(default = "default_node_fill")]
    pub node_fill: String,
    #[serde(default = "default_node_stroke")]
    pub node_stroke: String,
    #[serde(default = "default_link_stroke")]
    pub link_stroke: String,
    #[serde(default = "default_label")]
    pub label_color: String,
    /// Fills for grouped nodes, cycled by group id.
    #[serde(default)]
    pub group_colors: Vec<String>,

    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    #[serde(default = "default_node_radius")]
    pub node_radius: f32,
    #[serde(default = "default_node_stroke_width")]
    pub node_stroke_width: f32,
    #[serde(default = "default_link_width")]
    pub link_width: f32,
    #[serde(default = "default_link_opacity")]
    pub link_opacity: f32,
    #[serde(default = "default_label_margin")]
    pub label_margin: f32,
}

fn default_background() -> String {
    LIGHT_BACKGROUND.to_string()
}
fn default_node_fill() -> String {
    LIGHT_NODE_FILL.to_string()
}
fn default_node_stroke() -> String {
    LIGHT_NODE_STROKE.to_string()
}
fn default_link_stroke() -> String {
    LIGHT_LINK_STROKE.to_string()
}
fn default_label() -> String {
    LIGHT_LABEL.to_string()
}
fn default_font_family() -> String {
    FONT_FAMILY.to_string()
}
fn default_font_size() -> f32 {
    FONT_SIZE
}
fn default_node_radius() -> f32 {
    NODE_RADIUS
}
fn default_node_stroke_width() -> f32 {
    NODE_STROKE_WIDTH
}
fn default_link_width() -> f32 {
    LINK_WIDTH
}
fn default_link_opacity() -> f32 {
    LINK_OPACITY
}
fn default_label_margin() -> f32 {
    LABEL_MARGIN
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_builtin("light").expect("built-in light theme must parse")
    }
}

impl Theme {
    pub fn from_builtin(name: &str) -> Result<Self, String> {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
        let content = BUILTIN_THEMES
            .iter()
            .find(|(n, _)| *n == normalized)
            .map(|(_, c)| *c)
            .ok_or_else(|| {
                format!(
                    "Unknown built-in theme '{}'. Available: {}",
                    name,
                    Self::list_builtins().join(", ")
                )
            })?;
        Self::from_toml(content)
    }

    pub fn list_builtins() -> Vec<&'static str> {
        BUILTIN_THEMES.iter().map(|(n, _)| *n).collect()
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Failed to parse theme TOML: {}", e))
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| format!("Failed to parse theme YAML: {}", e))
    }

    /// A built-in name, or a path to a TOML/YAML theme file.
    pub fn load(name_or_path: &str) -> Result<Self, String> {
        let path = std::path::Path::new(name_or_path);
        if !path.is_file() {
            return Self::from_builtin(name_or_path);
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read theme file: {}", e))?;
        if let Ok(theme) = Self::from_toml(&content) {
            Ok(theme)
        } else if let Ok(theme) = Self::from_yaml(&content) {
            Ok(theme)
        } else {
            Err("Failed to parse theme file as TOML or YAML".to_string())
        }
    }
}
