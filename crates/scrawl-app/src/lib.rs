//! Scrawl Application
//!
//! The native egui shell: tool palette, canvas texture, input routing
//! and settings.

mod app;
mod config;
mod shortcuts;
mod ui;

pub use app::ScrawlApp;
pub use config::{AppConfig, AppConfigError};
pub use shortcuts::{Shortcut, ShortcutAction, ShortcutRegistry, action_for};
pub use ui::{PaletteOutput, UiAction, UiState, render_palette};
