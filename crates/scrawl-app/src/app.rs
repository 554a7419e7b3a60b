//! Main application: owns the board, routes egui input into it, shows the canvas.

use crate::config::AppConfig;
use crate::shortcuts::{ShortcutAction, action_for};
use crate::ui::{UiAction, UiState, render_palette};
use egui::{Color32, ColorImage, Pos2, Rect, TextureHandle, TextureOptions};
use kurbo::Point;
use scrawl_core::board::Whiteboard;
use scrawl_core::input::{PointerEvent, ReleaseTarget};
use scrawl_core::style::ToolSettings;
use scrawl_core::surface::RasterSurface;
use scrawl_core::tools::Tool;
use scrawl_render::PixmapSurface;

/// Canvas background under transparent pixels.
const CANVAS_BACKGROUND: Color32 = Color32::WHITE;

/// The Scrawl window.
pub struct ScrawlApp {
    board: Whiteboard<PixmapSurface>,
    ui_state: UiState,
    texture: Option<TextureHandle>,
    /// Surface pixels changed since the last upload.
    dirty: bool,
    /// Palette area from the previous frame.
    palette_rect: Rect,
    /// Last pointer position seen, for releases egui never reports.
    last_pointer: Pos2,
}

impl ScrawlApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        let settings = config.board.tool_settings().unwrap_or_else(|e| {
            log::warn!("Invalid board settings, using defaults: {}", e);
            ToolSettings::default()
        });
        log::info!(
            "Board ready: {} tool, history of {}",
            settings.tool,
            config.board.history_capacity
        );
        Self {
            board: Whiteboard::new(config.board.history_capacity, settings),
            ui_state: UiState::from_settings(&settings),
            texture: None,
            dirty: true,
            palette_rect: Rect::NOTHING,
            last_pointer: Pos2::ZERO,
        }
    }

    fn set_tool(&mut self, tool: Tool) {
        self.ui_state.current_tool = tool;
        self.board.set_tool(tool);
    }

    fn handle_ui_action(&mut self, action: UiAction) {
        match action {
            UiAction::SetTool(tool) => self.set_tool(tool),
            UiAction::StyleChanged => self.board.set_style(self.ui_state.to_style()),
            UiAction::Undo => {
                self.board.undo();
                self.dirty = true;
            }
            UiAction::Clear => {
                self.board.clear();
                self.dirty = true;
            }
        }
    }

    fn handle_shortcut(&mut self, action: ShortcutAction) {
        match action {
            ShortcutAction::Undo => self.handle_ui_action(UiAction::Undo),
            ShortcutAction::Clear => self.handle_ui_action(UiAction::Clear),
            ShortcutAction::SelectTool(tool) => self.set_tool(tool),
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let actions: Vec<ShortcutAction> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        modifiers,
                        ..
                    } => action_for(*key, *modifiers),
                    _ => None,
                })
                .collect()
        });
        for action in actions {
            self.handle_shortcut(action);
        }
    }

    /// Keep the surface the same size as the canvas and positioned on it.
    fn sync_surface(&mut self, canvas: Rect) {
        let width = canvas.width().round().max(0.0) as u32;
        let height = canvas.height().round().max(0.0) as u32;
        let origin = Point::new(f64::from(canvas.min.x), f64::from(canvas.min.y));

        if !self.board.is_ready() {
            match PixmapSurface::new(width, height) {
                Ok(surface) => {
                    self.board.attach_surface(surface);
                    self.dirty = true;
                }
                Err(e) => {
                    log::debug!("Surface not ready: {}", e);
                    return;
                }
            }
        } else if width > 0 && height > 0 {
            let before = self.board.surface().map(|s| s.size());
            self.board.resize(width, height);
            if before != Some((width, height)) {
                self.dirty = true;
            }
        }

        if let Some(surface) = self.board.surface_mut() {
            surface.set_origin(origin);
        }
    }

    /// Feed this frame's raw pointer events to the board.
    fn route_pointer_events(&mut self, ctx: &egui::Context, canvas: Rect) {
        let events = ctx.input(|i| i.events.clone());
        // One at a time: whether a move counts depends on the events before it.
        for event in &events {
            match event {
                egui::Event::PointerMoved(pos) | egui::Event::PointerButton { pos, .. } => {
                    self.last_pointer = *pos;
                }
                _ => {}
            }
            let routing = PointerRouting {
                canvas,
                palette: self.palette_rect,
                dragging: self.board.tracker().is_dragging(),
                last_pointer: self.last_pointer,
            };
            let Some(event) = routing.translate(event) else {
                continue;
            };
            if self.board.handle_pointer_event(event).changed_surface() {
                self.dirty = true;
            }
        }
    }

    /// Upload the pixmap when it changed.
    fn upload_texture(&mut self, ctx: &egui::Context) {
        if !self.dirty {
            return;
        }
        let Some(surface) = self.board.surface() else {
            return;
        };
        let pixmap = surface.pixmap();
        let image = ColorImage::from_rgba_premultiplied(
            [pixmap.width() as usize, pixmap.height() as usize],
            pixmap.data(),
        );
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
            }
        }
        self.dirty = false;
    }
}

/// What decides how a raw egui event reaches the board.
#[derive(Debug, Clone, Copy)]
struct PointerRouting {
    canvas: Rect,
    palette: Rect,
    dragging: bool,
    last_pointer: Pos2,
}

impl PointerRouting {
    fn translate(&self, event: &egui::Event) -> Option<PointerEvent> {
        let device = |pos: Pos2| Point::new(f64::from(pos.x), f64::from(pos.y));
        match event {
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: true,
                ..
            } if self.canvas.contains(*pos) && !self.palette.contains(*pos) => {
                Some(PointerEvent::Down {
                    position: device(*pos),
                })
            }
            egui::Event::PointerMoved(pos) if self.dragging => Some(PointerEvent::Move {
                position: device(*pos),
            }),
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: false,
                ..
            } if self.dragging => {
                let target = if self.palette.contains(*pos) {
                    ReleaseTarget::Palette
                } else {
                    ReleaseTarget::Surface
                };
                Some(PointerEvent::Up {
                    position: device(*pos),
                    target,
                })
            }
            // Left the window mid-drag: the release will not arrive.
            egui::Event::PointerGone if self.dragging => Some(PointerEvent::Up {
                position: device(self.last_pointer),
                target: ReleaseTarget::Surface,
            }),
            _ => None,
        }
    }
}

impl eframe::App for ScrawlApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let palette = render_palette(ctx, &mut self.ui_state, !self.board.history().is_empty());
        self.palette_rect = palette.rect;
        if let Some(action) = palette.action {
            self.handle_ui_action(action);
        }

        self.handle_keys(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(CANVAS_BACKGROUND))
            .show(ctx, |ui| {
                let canvas = ui.max_rect();
                self.sync_surface(canvas);
                self.route_pointer_events(ctx, canvas);
                self.upload_texture(ctx);

                if let Some(texture) = &self.texture {
                    let [w, h] = texture.size();
                    let rect = Rect::from_min_size(canvas.min, egui::vec2(w as f32, h as f32));
                    ui.painter().image(
                        texture.id(),
                        rect,
                        Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routing(dragging: bool) -> PointerRouting {
        PointerRouting {
            canvas: Rect::from_min_size(Pos2::ZERO, egui::vec2(200.0, 100.0)),
            palette: Rect::from_min_size(Pos2::new(50.0, 0.0), egui::vec2(100.0, 20.0)),
            dragging,
            last_pointer: Pos2::new(30.0, 40.0),
        }
    }

    fn button(x: f32, y: f32, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: Pos2::new(x, y),
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_press_on_canvas_starts_drag() {
        assert_eq!(
            routing(false).translate(&button(10.0, 50.0, true)),
            Some(PointerEvent::Down {
                position: Point::new(10.0, 50.0)
            })
        );
        // Presses on the palette belong to its widgets.
        assert_eq!(routing(false).translate(&button(60.0, 10.0, true)), None);
    }

    #[test]
    fn test_moves_only_while_dragging() {
        let moved = egui::Event::PointerMoved(Pos2::new(5.0, 5.0));
        assert_eq!(routing(false).translate(&moved), None);
        assert!(matches!(
            routing(true).translate(&moved),
            Some(PointerEvent::Move { .. })
        ));
    }

    #[test]
    fn test_release_over_palette() {
        assert_eq!(
            routing(true).translate(&button(60.0, 10.0, false)),
            Some(PointerEvent::Up {
                position: Point::new(60.0, 10.0),
                target: ReleaseTarget::Palette,
            })
        );
    }

    #[test]
    fn test_pointer_gone_ends_drag() {
        assert_eq!(
            routing(true).translate(&egui::Event::PointerGone),
            Some(PointerEvent::Up {
                position: Point::new(30.0, 40.0),
                target: ReleaseTarget::Surface,
            })
        );
        assert_eq!(routing(false).translate(&egui::Event::PointerGone), None);
    }
}
