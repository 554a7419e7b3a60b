//! Scrawl Core Library
//!
//! Platform-agnostic stroke, gesture and snapshot-history engine for the
//! Scrawl whiteboard.

pub mod board;
pub mod config;
pub mod gesture;
pub mod history;
pub mod input;
pub mod style;
pub mod surface;
pub mod tools;

pub use board::Whiteboard;
pub use config::{BoardConfig, ConfigError};
pub use gesture::{GestureOutcome, GestureState, GestureTracker};
pub use history::{DEFAULT_HISTORY_CAPACITY, SnapshotHistory};
pub use input::{PointerEvent, ReleaseTarget, to_surface_local};
pub use style::{
    DEFAULT_STROKE_WIDTH, RgbaColor, STROKE_WIDTHS, Style, StyleError, ToolSettings,
    parse_hex_color,
};
pub use surface::{BYTES_PER_PIXEL, RasterSurface, Snapshot, SnapshotError, StrokeSegment};
pub use tools::{Tool, ToolParseError};
