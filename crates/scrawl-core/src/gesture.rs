//! Gesture tracking: turns a pointer drag into strokes, previews and history entries.
//!
//! Freehand tools (draw, erase) composite every move sample straight onto the
//! live surface and commit one snapshot when the pointer is released.
//!
//! Previewed tools (shapes and the move marquee) redraw the whole shape from
//! the drag's anchor on every sample. The previous preview is discarded by
//! discarding its provisional snapshot and repainting the surface from the new
//! top of history, so at most one provisional entry exists at any time.
//! A provisional push never costs a committed entry: what it evicts comes
//! back when the preview is discarded.

use crate::history::SnapshotHistory;
use crate::input::{ReleaseTarget, to_surface_local};
use crate::style::ToolSettings;
use crate::surface::{RasterSurface, StrokeSegment};
use crate::tools::Tool;
use kurbo::Point;

/// State of the gesture tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum GestureState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A pointer drag is in progress.
    Dragging {
        /// Palette state captured at pointer-down.
        settings: ToolSettings,
        /// Fixed start for shapes, previous sample for freehand. Unset until the first move.
        anchor: Option<Point>,
    },
}

/// What a tracker call did to the surface and history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Nothing happened (no drag, or nothing to commit).
    Ignored,
    /// A freehand mark was composited onto the surface.
    Painted,
    /// A shape preview replaced the previous one.
    Previewed,
    /// The drag ended and its final state is in history.
    Committed,
    /// The drag ended without adding anything to history.
    Discarded,
}

impl GestureOutcome {
    /// Whether the surface pixels may have changed.
    pub fn changed_surface(self) -> bool {
        !matches!(self, GestureOutcome::Ignored)
    }
}

/// Converts pointer drags into raster marks and snapshot history entries.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    state: GestureState,
}

impl GestureTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Anchor of the current drag, in surface-local coordinates.
    pub fn anchor(&self) -> Option<Point> {
        match self.state {
            GestureState::Dragging { anchor, .. } => anchor,
            GestureState::Idle => None,
        }
    }

    /// Tool of the current drag.
    pub fn active_tool(&self) -> Option<Tool> {
        match self.state {
            GestureState::Dragging { settings, .. } => Some(settings.tool),
            GestureState::Idle => None,
        }
    }

    /// Start a drag. The tool and style are fixed for the rest of it.
    ///
    /// A drag still in progress (its release was lost) is first ended as if
    /// released over the surface; the returned outcome is that release's.
    pub fn pointer_down<S: RasterSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        history: &mut SnapshotHistory,
        settings: ToolSettings,
    ) -> GestureOutcome {
        let finished = if self.is_dragging() {
            log::debug!("Pointer down during a drag, ending the previous one");
            self.pointer_up(surface, history, ReleaseTarget::Surface)
        } else {
            GestureOutcome::Ignored
        };

        log::debug!("Drag started with {}", settings.tool);
        self.state = GestureState::Dragging {
            settings,
            anchor: None,
        };
        finished
    }

    /// Handle one move sample at `device` (device coordinates).
    pub fn pointer_move<S: RasterSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        history: &mut SnapshotHistory,
        device: Point,
    ) -> GestureOutcome {
        let GestureState::Dragging { settings, anchor } = &mut self.state else {
            return GestureOutcome::Ignored;
        };

        // The surface may have moved since the last sample.
        let point = to_surface_local(device, surface.origin());

        if settings.tool.is_previewed() {
            let start = *anchor.get_or_insert(point);

            if history.discard_provisional() {
                surface.clear();
                history.restore_top(surface);
            }

            surface.paint(&StrokeSegment {
                anchor: start,
                current: point,
                tool: settings.tool,
                style: settings.style,
            });
            history.push_provisional(surface.capture());
            GestureOutcome::Previewed
        } else {
            let previous = anchor.unwrap_or(point);
            surface.paint(&StrokeSegment {
                anchor: previous,
                current: point,
                tool: settings.tool,
                style: settings.style,
            });
            *anchor = Some(point);
            GestureOutcome::Painted
        }
    }

    /// End the drag.
    pub fn pointer_up<S: RasterSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        history: &mut SnapshotHistory,
        target: ReleaseTarget,
    ) -> GestureOutcome {
        let GestureState::Dragging { settings, .. } = std::mem::take(&mut self.state) else {
            return GestureOutcome::Ignored;
        };
        let tool = settings.tool;

        if !tool.commits() {
            // The marquee is feedback only: drop its preview.
            discard_preview(surface, history);
            return GestureOutcome::Discarded;
        }

        if tool.is_freehand() {
            if target == ReleaseTarget::Palette {
                log::debug!("Released {} over the palette, nothing committed", tool);
                return GestureOutcome::Discarded;
            }
            history.push(surface.capture());
            log::debug!("Committed {} stroke ({} in history)", tool, history.len());
            GestureOutcome::Committed
        } else if history.commit_provisional() {
            // The last preview already is the committed state.
            log::debug!("Committed {} ({} in history)", tool, history.len());
            GestureOutcome::Committed
        } else {
            GestureOutcome::Ignored
        }
    }

    /// Abandon the current drag. A pending preview is discarded and the
    /// surface repainted from history; freehand marks stay uncommitted.
    pub fn abort<S: RasterSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        history: &mut SnapshotHistory,
    ) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.state = GestureState::Idle;
        discard_preview(surface, history);
        true
    }

    /// Return to Idle without touching surface or history.
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }
}

/// Drop a provisional preview and repaint the state beneath it.
fn discard_preview<S: RasterSurface + ?Sized>(surface: &mut S, history: &mut SnapshotHistory) {
    if history.discard_provisional() {
        surface.clear();
        history.restore_top(surface);
    }
}
