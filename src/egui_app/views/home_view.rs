use eframe::egui;

use crate::egui_app::AppView;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK);

    frame.show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);

            ui.colored_label(colors::ACCENT, egui::RichText::new("◓ Pokédex").size(48.0).strong());
            ui.add_space(10.0);

            match &state.auth_state.user {
                Some(user) => {
                    ui.colored_label(
                        colors::TEXT_LIGHT,
                        egui::RichText::new(format!("Welcome back, {}!", user.display_name())).size(28.0),
                    );
                }
                None => {
                    ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("Welcome to the Pokédex").size(28.0));
                    ui.colored_label(
                        colors::TEXT_SECONDARY,
                        egui::RichText::new("Discover, collect and catalog every Pokémon").size(16.0),
                    );
                }
            }
            ui.add_space(40.0);

            let browse = egui::Button::new(egui::RichText::new("🔍 Explore Pokédex").size(20.0))
                .min_size(egui::vec2(220.0, 50.0))
                .fill(colors::BUTTON_PRIMARY);
            if ui.add(browse).clicked() {
                state.navigate(AppView::Catalog);
            }
            ui.add_space(15.0);

            if state.auth_state.authenticated {
                let collection = egui::Button::new(egui::RichText::new("📚 My Collection").size(20.0))
                    .min_size(egui::vec2(220.0, 50.0))
                    .fill(colors::BUTTON_SECONDARY);
                if ui.add(collection).clicked() {
                    state.navigate(AppView::Collection);
                }
            } else {
                if ui.add(styles::secondary_button("Login").min_size(egui::vec2(220.0, 40.0))).clicked() {
                    state.is_signup_mode = false;
                    state.navigate(AppView::Auth);
                }
                ui.add_space(10.0);
                if ui.add(styles::secondary_button("Create Account").min_size(egui::vec2(220.0, 40.0))).clicked() {
                    state.is_signup_mode = true;
                    state.navigate(AppView::Auth);
                }
            }
        });
    });
}
