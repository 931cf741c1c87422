//! Theme Styling Functions
//!
//! Helpers that apply the Pokédex palette consistently across views.

use eframe::egui::{self, Color32, CornerRadius, RichText, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::dark();
    style.visuals.window_fill = colors::CARD_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);
    style.visuals.panel_fill = colors::BG_DARK;
    style.visuals.extreme_bg_color = colors::INPUT_BG;

    style.visuals.widgets.inactive.bg_fill = colors::BUTTON_SECONDARY;
    style.visuals.widgets.inactive.weak_bg_fill = colors::BUTTON_SECONDARY;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.hovered.bg_fill = colors::CARD_HOVER;
    style.visuals.widgets.hovered.weak_bg_fill = colors::CARD_HOVER;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.active.bg_fill = colors::BUTTON_PRIMARY;
    style.visuals.widgets.active.weak_bg_fill = colors::BUTTON_PRIMARY;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.selection.bg_fill = colors::ACCENT;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for the main content area
pub fn page_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::symmetric(24, 16))
}

/// Frame for a catalog card or list row
pub fn card_frame(hovered: bool) -> egui::Frame {
    egui::Frame::new()
        .fill(if hovered { colors::CARD_HOVER } else { colors::CARD_BG })
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(egui::Margin::same(12))
}

/// Create a frame for modal dialogs
pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(2.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::same(20))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(90),
        })
}

/// Small rounded label, used for type badges.
pub fn badge(ui: &mut egui::Ui, text: &str, fill: Color32) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(12.0).strong().color(Color32::WHITE));
        });
}

/// Primary call-to-action button
pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text).color(colors::TEXT_LIGHT).strong())
        .fill(colors::BUTTON_PRIMARY)
        .corner_radius(CornerRadius::same(6))
}

/// Secondary button
pub fn secondary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text).color(colors::TEXT_LIGHT))
        .fill(colors::BUTTON_SECONDARY)
        .corner_radius(CornerRadius::same(6))
}

/// Heading with the standard page size and colour
pub fn page_title(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).size(28.0).strong().color(colors::TEXT_LIGHT));
}

/// Inline error under a form field
pub fn field_error(ui: &mut egui::Ui, message: Option<&str>) {
    if let Some(message) = message {
        ui.label(RichText::new(message).size(12.0).color(colors::ERROR));
    }
}
