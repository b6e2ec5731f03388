//! Rendering configuration for ER diagrams
//!
//! The config is injected when the database is constructed and handed back
//! to the renderer unchanged through [`ErDatabase::config`]. Field names
//! follow the camelCase convention of diagram frontmatter directives, so a
//! JSON snippet like `{"layoutDirection": "LR"}` deserializes directly.
//!
//! [`ErDatabase::config`]: crate::er::ErDatabase::config

use serde::{Deserialize, Serialize};

use crate::core::DiagramError;

/// Direction the entity layout flows in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutDirection {
    /// Top to bottom (default)
    #[default]
    #[serde(rename = "TB")]
    TopBottom,
    /// Bottom to top
    #[serde(rename = "BT")]
    BottomTop,
    /// Left to right
    #[serde(rename = "LR")]
    LeftRight,
    /// Right to left
    #[serde(rename = "RL")]
    RightLeft,
}

/// Rendering-affecting options for ER diagrams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErConfig {
    /// Margin above the diagram title
    pub title_top_margin: u32,
    /// Padding around the whole diagram
    pub diagram_padding: u32,
    /// Direction entities are laid out in
    pub layout_direction: LayoutDirection,
    /// Minimum width of an entity box
    pub min_entity_width: u32,
    /// Minimum height of an entity box
    pub min_entity_height: u32,
    /// Padding between an entity label and its box border
    pub entity_padding: u32,
    /// Stroke color for boxes and relationship lines
    pub stroke: String,
    /// Fill color for entity boxes
    pub fill: String,
    pub font_size: u32,
    /// Scale the diagram to the available width
    pub use_max_width: bool,
}

impl Default for ErConfig {
    fn default() -> Self {
        Self {
            title_top_margin: 25,
            diagram_padding: 20,
            layout_direction: LayoutDirection::TopBottom,
            min_entity_width: 100,
            min_entity_height: 75,
            entity_padding: 15,
            stroke: "gray".to_string(),
            fill: "honeydew".to_string(),
            font_size: 12,
            use_max_width: true,
        }
    }
}

impl ErConfig {
    /// Parse a config from a JSON directive body, filling unspecified
    /// fields with their defaults
    pub fn from_json(input: &str) -> Result<Self, DiagramError> {
        Ok(serde_json::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ErConfig::default();
        assert_eq!(config.title_top_margin, 25);
        assert_eq!(config.diagram_padding, 20);
        assert_eq!(config.layout_direction, LayoutDirection::TopBottom);
        assert_eq!(config.min_entity_width, 100);
        assert_eq!(config.min_entity_height, 75);
        assert_eq!(config.entity_padding, 15);
        assert_eq!(config.stroke, "gray");
        assert_eq!(config.fill, "honeydew");
        assert_eq!(config.font_size, 12);
        assert!(config.use_max_width);
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let config = ErConfig::from_json(r#"{"diagramPadding": 5, "layoutDirection": "LR"}"#)
            .unwrap();
        assert_eq!(config.diagram_padding, 5);
        assert_eq!(config.layout_direction, LayoutDirection::LeftRight);
        assert_eq!(config.min_entity_width, 100);
        assert_eq!(config.fill, "honeydew");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let result = ErConfig::from_json("{diagramPadding: 5");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_direction_is_an_error() {
        let result = ErConfig::from_json(r#"{"layoutDirection": "XY"}"#);
        assert!(result.is_err());
    }
}
