//! Floating palette: tools, stroke width, colors, opacity, undo and clear.

use crate::shortcuts::tool_hint;
use egui::{Align2, Color32, Context, CornerRadius, Frame, Margin, Rect, Stroke, Vec2};
use scrawl_core::style::{RgbaColor, STROKE_WIDTHS, Style, ToolSettings};
use scrawl_core::tools::Tool;

/// Palette state, mirrored into the board's [`ToolSettings`] on change.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub current_tool: Tool,
    pub stroke_color: [u8; 3],
    pub fill_color: [u8; 3],
    /// Shapes are left unfilled.
    pub fill_transparent: bool,
    pub stroke_width: f64,
    pub opacity: f32,
}

impl Default for UiState {
    fn default() -> Self {
        Self::from_settings(&ToolSettings::default())
    }
}

impl UiState {
    pub fn from_settings(settings: &ToolSettings) -> Self {
        let style = &settings.style;
        let stroke = style.stroke_color;
        let fill = style.fill_color.unwrap_or_else(RgbaColor::white);
        Self {
            current_tool: settings.tool,
            stroke_color: [stroke.r, stroke.g, stroke.b],
            fill_color: [fill.r, fill.g, fill.b],
            fill_transparent: style.fill_color.is_none(),
            stroke_width: style.stroke_width,
            opacity: style.opacity as f32,
        }
    }

    pub fn to_style(&self) -> Style {
        let [r, g, b] = self.stroke_color;
        let [fr, fg, fb] = self.fill_color;
        Style {
            stroke_color: RgbaColor::rgb(r, g, b),
            fill_color: (!self.fill_transparent).then_some(RgbaColor::rgb(fr, fg, fb)),
            stroke_width: self.stroke_width,
            opacity: f64::from(self.opacity).clamp(0.0, 1.0),
        }
    }
}

/// Actions that can be triggered by the palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiAction {
    SetTool(Tool),
    /// Any color, width or opacity control changed.
    StyleChanged,
    Undo,
    Clear,
}

/// Output of one palette pass.
pub struct PaletteOutput {
    pub action: Option<UiAction>,
    /// Screen area covered by the palette. Releases inside it commit nothing.
    pub rect: Rect,
}

/// Render the palette and return any triggered action.
pub fn render_palette(ctx: &Context, ui_state: &mut UiState, can_undo: bool) -> PaletteOutput {
    let mut action = None;

    let response = egui::Area::new(egui::Id::new("palette"))
        .anchor(Align2::CENTER_TOP, Vec2::new(0.0, 12.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::new(4.0, 0.0);

                    for tool in Tool::ALL {
                        let selected = ui_state.current_tool == tool;
                        if ui
                            .selectable_label(selected, tool.label())
                            .on_hover_text(tool_hint(tool))
                            .clicked()
                        {
                            action = Some(UiAction::SetTool(tool));
                        }
                    }

                    separator(ui);

                    for width in STROKE_WIDTHS {
                        let selected = (ui_state.stroke_width - width).abs() < f64::EPSILON;
                        if ui
                            .selectable_label(selected, format!("{width}"))
                            .on_hover_text("Pencil width")
                            .clicked()
                        {
                            ui_state.stroke_width = width;
                            action = Some(UiAction::StyleChanged);
                        }
                    }

                    separator(ui);

                    if ui
                        .color_edit_button_srgb(&mut ui_state.stroke_color)
                        .on_hover_text("Stroke color")
                        .changed()
                    {
                        action = Some(UiAction::StyleChanged);
                    }
                    let fill_changed = ui
                        .add_enabled_ui(!ui_state.fill_transparent, |ui| {
                            ui.color_edit_button_srgb(&mut ui_state.fill_color)
                                .on_hover_text("Fill color")
                                .changed()
                        })
                        .inner;
                    if fill_changed {
                        action = Some(UiAction::StyleChanged);
                    }
                    if ui
                        .checkbox(&mut ui_state.fill_transparent, "No fill")
                        .changed()
                    {
                        action = Some(UiAction::StyleChanged);
                    }
                    if ui
                        .add(
                            egui::Slider::new(&mut ui_state.opacity, 0.0..=1.0)
                                .text("Fill opacity"),
                        )
                        .changed()
                    {
                        action = Some(UiAction::StyleChanged);
                    }

                    separator(ui);

                    if ui
                        .add_enabled(can_undo, egui::Button::new("Undo"))
                        .on_hover_text("Undo (Ctrl+Z)")
                        .clicked()
                    {
                        action = Some(UiAction::Undo);
                    }
                    if ui.button("Clear").on_hover_text("Clear (Delete)").clicked() {
                        action = Some(UiAction::Clear);
                    }
                });
            });
        });

    PaletteOutput {
        action,
        rect: response.response.rect,
    }
}

fn panel_frame() -> Frame {
    Frame::new()
        .fill(Color32::from_rgba_unmultiplied(250, 250, 252, 250))
        .corner_radius(CornerRadius::same(8))
        .stroke(Stroke::new(1.0, Color32::from_gray(220)))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 8,
            offset: [0, 2],
            color: Color32::from_black_alpha(15),
        })
        .inner_margin(Margin::same(8))
}

fn separator(ui: &mut egui::Ui) {
    ui.add_space(4.0);
    ui.label(egui::RichText::new("|").size(14.0).color(Color32::from_gray(200)));
    ui.add_space(4.0);
}
