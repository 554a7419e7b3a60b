//! Whiteboard controller: owns the surface, the undo history and the gesture tracker.

use crate::gesture::{GestureOutcome, GestureTracker};
use crate::history::SnapshotHistory;
use crate::input::PointerEvent;
use crate::style::{Style, ToolSettings};
use crate::surface::RasterSurface;
use crate::tools::Tool;

/// The drawing session.
///
/// Created by the top-level UI and passed around by reference. Gesture events
/// arriving before a surface is attached are dropped.
#[derive(Debug)]
pub struct Whiteboard<S: RasterSurface> {
    surface: Option<S>,
    history: SnapshotHistory,
    tracker: GestureTracker,
    settings: ToolSettings,
}

impl<S: RasterSurface> Whiteboard<S> {
    /// Create a board whose history keeps at most `history_capacity` states.
    pub fn new(history_capacity: usize, settings: ToolSettings) -> Self {
        Self {
            surface: None,
            history: SnapshotHistory::new(history_capacity),
            tracker: GestureTracker::new(),
            settings,
        }
    }

    /// Attach the drawing surface, replacing any previous one.
    pub fn attach_surface(&mut self, surface: S) {
        let (width, height) = surface.size();
        log::info!("Surface attached ({}x{})", width, height);
        self.abort_drag();
        self.surface = Some(surface);
    }

    /// Detach and return the surface. Gestures are ignored until one is attached again.
    pub fn detach_surface(&mut self) -> Option<S> {
        self.abort_drag();
        self.surface.take()
    }

    /// Whether a surface is attached.
    pub fn is_ready(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    /// Palette state used for the next drag.
    pub fn settings(&self) -> ToolSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: ToolSettings) {
        self.settings = settings;
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.settings.tool = tool;
    }

    pub fn set_style(&mut self, style: Style) {
        self.settings.style = style;
    }

    /// Route a pointer event into the gesture tracker.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> GestureOutcome {
        let Some(surface) = self.surface.as_mut() else {
            return GestureOutcome::Ignored;
        };

        match event {
            PointerEvent::Down { .. } => {
                self.tracker
                    .pointer_down(surface, &mut self.history, self.settings)
            }
            PointerEvent::Move { position } => {
                self.tracker
                    .pointer_move(surface, &mut self.history, position)
            }
            PointerEvent::Up { target, .. } => {
                self.tracker.pointer_up(surface, &mut self.history, target)
            }
        }
    }

    /// Erase the surface and forget all history.
    pub fn clear(&mut self) {
        self.abort_drag();
        self.history.clear();
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
        }
        log::info!("Board cleared");
    }

    /// Discard the latest state and show the one before it.
    /// Returns false when there was nothing to undo.
    ///
    /// A shape preview still on screen is dropped first; it was never committed.
    pub fn undo(&mut self) -> bool {
        self.abort_drag();
        let popped = self.history.pop_top();
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
            self.history.restore_top(surface);
        }
        if popped {
            log::debug!("Undo ({} states left)", self.history.len());
        }
        popped
    }

    /// Resize the surface.
    ///
    /// Resizing discards the pixels, and snapshots of the old size can no
    /// longer be restored faithfully, so history is cleared as well.
    pub fn resize(&mut self, width: u32, height: u32) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if surface.size() == (width, height) {
            return;
        }
        self.abort_drag();
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(width, height);
        }
        if !self.history.is_empty() {
            log::info!(
                "Surface resized to {}x{}, dropping {} history states",
                width,
                height,
                self.history.len()
            );
        }
        self.history.clear();
    }

    /// End any drag without committing it, removing its preview from history.
    fn abort_drag(&mut self) {
        match self.surface.as_mut() {
            Some(surface) => {
                self.tracker.abort(surface, &mut self.history);
            }
            None => {
                self.tracker.cancel();
                self.history.discard_provisional();
            }
        }
    }
}
