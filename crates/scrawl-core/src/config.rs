//! Board configuration as read from settings files.

use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::style::{DEFAULT_STROKE_WIDTH, Style, StyleError, ToolSettings};
use crate::tools::Tool;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("History capacity must be at least 1")]
    ZeroCapacity,
    #[error("Invalid style: {0}")]
    Style(#[from] StyleError),
}

/// Initial palette state and history size.
///
/// Colors are kept as the hex strings the UI layer works with and validated
/// by [`BoardConfig::tool_settings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    pub history_capacity: usize,
    pub tool: Tool,
    pub stroke_color: String,
    /// Hex color, or `"transparent"`.
    pub fill_color: String,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            tool: Tool::default(),
            stroke_color: "#000000".to_string(),
            fill_color: "transparent".to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            opacity: 1.0,
        }
    }
}

impl BoardConfig {
    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tool_settings().map(|_| ())
    }

    /// Build the initial palette state.
    pub fn tool_settings(&self) -> Result<ToolSettings, ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        let style = Style::from_hex(
            &self.stroke_color,
            &self.fill_color,
            self.stroke_width,
            self.opacity,
        )?;
        Ok(ToolSettings::new(self.tool, style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::RgbaColor;

    #[test]
    fn test_default_is_valid() {
        let config = BoardConfig::default();
        let settings = config.tool_settings().unwrap();
        assert_eq!(settings.tool, Tool::Draw);
        assert_eq!(settings.style.stroke_color, RgbaColor::black());
        assert!(settings.style.fill_color.is_none());
        assert_eq!(config.history_capacity, 20);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: BoardConfig =
            serde_json::from_str(r##"{"tool": "rectangle", "fillColor": "#F6D6D6"}"##).unwrap();
        assert_eq!(config.tool, Tool::Rectangle);
        assert_eq!(config.history_capacity, DEFAULT_HISTORY_CAPACITY);
        let settings = config.tool_settings().unwrap();
        assert_eq!(settings.style.fill_color, Some(RgbaColor::rgb(0xF6, 0xD6, 0xD6)));
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let config = BoardConfig {
            history_capacity: 0,
            ..BoardConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroCapacity));
    }

    #[test]
    fn test_rejects_bad_color() {
        let config = BoardConfig {
            stroke_color: "black".to_string(),
            ..BoardConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Style(_))));
    }
}
