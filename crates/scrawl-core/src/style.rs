//! Paint style applied to strokes and shapes.

use crate::tools::Tool;
use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stroke widths offered by the palette.
pub const STROKE_WIDTHS: [f64; 4] = [2.0, 5.0, 10.0, 15.0];

/// Default freehand stroke width.
pub const DEFAULT_STROKE_WIDTH: f64 = 10.0;

/// Errors from style input coming across the UI boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
    #[error("Opacity must be within 0.0..=1.0, got {0}")]
    OpacityOutOfRange(String),
    #[error("Stroke width must be positive, got {0}")]
    InvalidStrokeWidth(String),
}

/// Serializable color representation (RGBA8, straight alpha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Scale alpha by `opacity` (clamped to 0..=1).
    pub fn with_opacity(self, opacity: f64) -> Self {
        let alpha = (self.a as f64 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a: alpha, ..self }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<Color> for RgbaColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<RgbaColor> for Color {
    fn from(color: RgbaColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Parse a CSS hex color (`#rgb`, `#rrggbb`, `#rrggbbaa`).
///
/// `"transparent"` is accepted and yields `None`.
pub fn parse_hex_color(input: &str) -> Result<Option<RgbaColor>, StyleError> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("transparent") {
        return Ok(None);
    }

    let invalid = || StyleError::InvalidHex(input.to_string());
    let hex = trimmed.strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };

    let color = match hex.len() {
        3 => {
            // #rgb -> #rrggbb
            let r = channel(0..1)? * 17;
            let g = channel(1..2)? * 17;
            let b = channel(2..3)? * 17;
            RgbaColor::rgb(r, g, b)
        }
        6 => RgbaColor::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?),
        8 => RgbaColor::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, channel(6..8)?),
        _ => return Err(invalid()),
    };
    Ok(Some(color))
}

/// How a stroke or shape is painted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Outline / pencil color.
    pub stroke_color: RgbaColor,
    /// Shape fill (None = transparent).
    pub fill_color: Option<RgbaColor>,
    /// Freehand stroke width.
    pub stroke_width: f64,
    /// Fill opacity (0.0 = fully transparent, 1.0 = fully opaque).
    pub opacity: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke_color: RgbaColor::black(),
            fill_color: None,
            stroke_width: DEFAULT_STROKE_WIDTH,
            opacity: 1.0,
        }
    }
}

impl Style {
    /// Build a style from the raw values the UI layer holds.
    pub fn from_hex(
        stroke: &str,
        fill: &str,
        stroke_width: f64,
        opacity: f64,
    ) -> Result<Self, StyleError> {
        let stroke_color = parse_hex_color(stroke)?
            .ok_or_else(|| StyleError::InvalidHex(stroke.to_string()))?;
        let fill_color = parse_hex_color(fill)?;

        if !(0.0..=1.0).contains(&opacity) {
            return Err(StyleError::OpacityOutOfRange(opacity.to_string()));
        }
        if !(stroke_width.is_finite() && stroke_width > 0.0) {
            return Err(StyleError::InvalidStrokeWidth(stroke_width.to_string()));
        }

        Ok(Self {
            stroke_color,
            fill_color,
            stroke_width,
            opacity,
        })
    }

    /// Outline color as a peniko Color.
    pub fn stroke_paint(&self) -> Color {
        self.stroke_color.into()
    }

    /// Fill color with opacity applied, or None for a transparent fill.
    pub fn fill_paint(&self) -> Option<Color> {
        self.fill_color.map(|c| c.with_opacity(self.opacity).into())
    }
}

/// Read-only view of the palette state handed to a drag when it starts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ToolSettings {
    pub tool: Tool,
    pub style: Style,
}

impl ToolSettings {
    pub fn new(tool: Tool, style: Style) -> Self {
        Self { tool, style }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse_hex_color("#000"), Ok(Some(RgbaColor::black())));
        assert_eq!(
            parse_hex_color("#F6D6D6"),
            Ok(Some(RgbaColor::rgb(0xF6, 0xD6, 0xD6)))
        );
        assert_eq!(
            parse_hex_color("#11223344"),
            Ok(Some(RgbaColor::new(0x11, 0x22, 0x33, 0x44)))
        );
        assert_eq!(parse_hex_color("transparent"), Ok(None));
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        assert!(parse_hex_color("000000").is_err());
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("#zzzzzz").is_err());
        assert!(parse_hex_color("#").is_err());
        assert!(parse_hex_color("#+1+2+3").is_err());
    }

    #[test]
    fn test_fill_paint_applies_opacity() {
        let style = Style {
            fill_color: Some(RgbaColor::rgb(246, 214, 214)),
            opacity: 0.5,
            ..Style::default()
        };
        let paint = RgbaColor::from(style.fill_paint().unwrap());
        assert_eq!((paint.r, paint.g, paint.b), (246, 214, 214));
        assert_eq!(paint.a, 128);
    }

    #[test]
    fn test_transparent_fill_has_no_paint() {
        let style = Style::default();
        assert!(style.fill_paint().is_none());
    }

    #[test]
    fn test_style_from_hex() {
        let style = Style::from_hex("#000000", "#F6D6D6", 2.0, 1.0).unwrap();
        assert_eq!(style.stroke_color, RgbaColor::black());
        assert_eq!(style.fill_color, Some(RgbaColor::rgb(0xF6, 0xD6, 0xD6)));

        assert!(Style::from_hex("transparent", "#fff", 2.0, 1.0).is_err());
        assert!(Style::from_hex("#000", "#fff", 2.0, 1.5).is_err());
        assert!(Style::from_hex("#000", "#fff", 0.0, 1.0).is_err());
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(RgbaColor::rgb(246, 214, 214).to_hex(), "#f6d6d6");
        assert_eq!(RgbaColor::new(0, 0, 0, 16).to_hex(), "#00000010");
    }
}
