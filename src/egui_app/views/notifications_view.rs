use eframe::egui::{self, RichText};

use crate::egui_app::notifications::NotificationLevel;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

/// Stacked notifications in the bottom-right corner.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if state.notifications.is_empty() {
        return;
    }

    let mut dismissed = None;
    egui::Area::new(egui::Id::new("notifications"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for notification in state.notifications.iter() {
                let (accent, icon) = match notification.level {
                    NotificationLevel::Success => (colors::SUCCESS, "✔"),
                    NotificationLevel::Info => (colors::INFO, "ℹ"),
                    NotificationLevel::Error => (colors::ERROR, "⚠"),
                };
                egui::Frame::new()
                    .fill(colors::CARD_BG)
                    .stroke(egui::Stroke::new(1.0, accent))
                    .corner_radius(egui::CornerRadius::same(8))
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(icon).color(accent));
                            ui.label(RichText::new(&notification.message).color(colors::TEXT_LIGHT));
                            if ui.small_button("✕").clicked() {
                                dismissed = Some(notification.id);
                            }
                        });
                    });
                ui.add_space(6.0);
            }
        });

    if let Some(id) = dismissed {
        state.notifications.dismiss(id);
    }
}
