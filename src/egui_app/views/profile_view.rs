use eframe::egui::{self, RichText};

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    styles::page_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            styles::page_title(ui, "Profile");
            if state.profile_result.is_some() {
                ui.spinner();
            }
        });
        ui.add_space(12.0);

        let Some(user) = state.auth_state.user.clone() else {
            ui.label(RichText::new("No user information available").color(colors::TEXT_SECONDARY));
            return;
        };

        styles::card_frame(false).show(ui, |ui| {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(56.0, 56.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 28.0, colors::ACCENT);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    user.initial().to_string(),
                    egui::FontId::proportional(26.0),
                    colors::TEXT_LIGHT,
                );
                ui.vertical(|ui| {
                    let full_name = user.full_name();
                    let heading = if full_name.is_empty() { user.username.clone() } else { full_name };
                    ui.label(RichText::new(heading).size(22.0).strong().color(colors::TEXT_LIGHT));
                    ui.label(RichText::new(format!("@{}", user.username)).color(colors::TEXT_SECONDARY));
                });
            });
            ui.add_space(12.0);

            egui::Grid::new("profile").num_columns(2).spacing([24.0, 6.0]).show(ui, |ui| {
                ui.label(RichText::new("Email").color(colors::TEXT_SECONDARY));
                ui.label(&user.email);
                ui.end_row();

                ui.label(RichText::new("Role").color(colors::TEXT_SECONDARY));
                ui.label(user.role.label());
                ui.end_row();

                ui.label(RichText::new("Status").color(colors::TEXT_SECONDARY));
                if user.is_active {
                    ui.label(RichText::new("Active").color(colors::SUCCESS));
                } else {
                    ui.label(RichText::new("Inactive").color(colors::WARNING));
                }
                ui.end_row();
            });
        });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.add(styles::secondary_button("⟳ Refresh")).clicked() {
                state.refresh_profile();
            }
            if ui.add(styles::primary_button("Logout")).clicked() {
                state.logout();
            }
        });
    });
}
