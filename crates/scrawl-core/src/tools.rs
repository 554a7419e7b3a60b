//! Tool selection for the whiteboard.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when the UI hands over a tool name we don't know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tool: {0}")]
pub struct ToolParseError(pub String);

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Tool {
    /// Marquee preview. Never leaves anything in history.
    Move,
    #[default]
    Draw,
    Erase,
    Circle,
    Triangle,
    Rectangle,
    RoundedRectangle,
    Diamond,
    Arrow,
}

impl Tool {
    /// Every tool, in palette order.
    pub const ALL: [Tool; 9] = [
        Tool::Move,
        Tool::Draw,
        Tool::Erase,
        Tool::Circle,
        Tool::Triangle,
        Tool::Rectangle,
        Tool::RoundedRectangle,
        Tool::Diamond,
        Tool::Arrow,
    ];

    /// The name the UI layer uses for this tool.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Move => "move",
            Tool::Draw => "draw",
            Tool::Erase => "erase",
            Tool::Circle => "circle",
            Tool::Triangle => "triangle",
            Tool::Rectangle => "rectangle",
            Tool::RoundedRectangle => "roundedRectangle",
            Tool::Diamond => "diamond",
            Tool::Arrow => "arrow",
        }
    }

    /// Human readable label for tooltips.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Move => "Move",
            Tool::Draw => "Pencil",
            Tool::Erase => "Eraser",
            Tool::Circle => "Circle",
            Tool::Triangle => "Triangle",
            Tool::Rectangle => "Rectangle",
            Tool::RoundedRectangle => "Rounded rectangle",
            Tool::Diamond => "Diamond",
            Tool::Arrow => "Arrow",
        }
    }

    /// Freehand tools composite incrementally onto the live surface.
    pub fn is_freehand(self) -> bool {
        matches!(self, Tool::Draw | Tool::Erase)
    }

    /// Geometric shape tools.
    pub fn is_shape(self) -> bool {
        matches!(
            self,
            Tool::Circle
                | Tool::Triangle
                | Tool::Rectangle
                | Tool::RoundedRectangle
                | Tool::Diamond
                | Tool::Arrow
        )
    }

    /// Tools that redraw a full preview from the anchor on every move sample.
    pub fn is_previewed(self) -> bool {
        self.is_shape() || self == Tool::Move
    }

    /// Whether a finished drag with this tool stays in history.
    pub fn commits(self) -> bool {
        self != Tool::Move
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = ToolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "move" => Ok(Tool::Move),
            "draw" => Ok(Tool::Draw),
            "erase" => Ok(Tool::Erase),
            "circle" => Ok(Tool::Circle),
            "triangle" => Ok(Tool::Triangle),
            "rectangle" => Ok(Tool::Rectangle),
            "roundedrectangle" => Ok(Tool::RoundedRectangle),
            "diamond" => Ok(Tool::Diamond),
            "arrow" => Ok(Tool::Arrow),
            _ => Err(ToolParseError(s.to_string())),
        }
    }
}
