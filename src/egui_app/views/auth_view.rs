use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

const INPUT_WIDTH: f32 = 280.0;
const LABEL_WIDTH: f32 = 90.0;

fn labelled_input(ui: &mut egui::Ui, row_indent: f32, label: &str, value: &mut String, password: bool) {
    ui.horizontal(|ui| {
        ui.add_space(row_indent);
        ui.add_sized([LABEL_WIDTH, 24.0], egui::Label::new(
            egui::RichText::new(label).color(colors::TEXT_SECONDARY)
        ));
        ui.add_sized([INPUT_WIDTH, 28.0], egui::TextEdit::singleline(value)
            .password(password)
            .text_color(colors::TEXT_LIGHT));
    });
    ui.add_space(8.0);
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = if state.is_signup_mode { 470.0 } else { 300.0 };
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(egui::RichText::new("◓ Pokédex").size(32.0).strong().color(colors::ACCENT));
            ui.add_space(20.0);

            ui.label(
                egui::RichText::new(if state.is_signup_mode { "Create your account" } else { "Sign in to your account" })
                    .size(24.0)
                    .color(colors::TEXT_LIGHT)
            );
            ui.add_space(20.0);

            if let Some(ref error) = state.auth_state.error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(10.0);
            }

            let row_indent = ((available_rect.width() - INPUT_WIDTH - LABEL_WIDTH - 20.0) / 2.0).max(0.0);

            labelled_input(ui, row_indent, "Username:", &mut state.username_input, false);
            if state.is_signup_mode {
                labelled_input(ui, row_indent, "Email:", &mut state.email_input, false);
                labelled_input(ui, row_indent, "First name:", &mut state.first_name_input, false);
                labelled_input(ui, row_indent, "Last name:", &mut state.last_name_input, false);
            }
            labelled_input(ui, row_indent, "Password:", &mut state.password_input, true);
            if state.is_signup_mode {
                labelled_input(ui, row_indent, "Confirm:", &mut state.confirm_password_input, true);
            }

            ui.add_space(20.0);

            ui.horizontal(|ui| {
                let button_width = 140.0;
                let total_buttons_width = button_width * 2.0 + 10.0;
                ui.add_space(((available_rect.width() - total_buttons_width) / 2.0).max(0.0));

                let submit = ui.add_enabled(
                    !state.auth_state.loading,
                    egui::Button::new(
                        egui::RichText::new(if state.is_signup_mode { "Sign Up" } else { "Login" }).color(colors::TEXT_LIGHT)
                    )
                    .fill(colors::ACCENT)
                    .min_size(egui::vec2(button_width, 32.0)),
                );
                let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
                if submit.clicked() || (enter && !state.auth_state.loading) {
                    state.auth_state.clear_error();
                    if state.is_signup_mode {
                        state.handle_signup();
                    } else {
                        state.handle_login();
                    }
                }

                ui.add_space(10.0);

                if ui.add_sized([button_width, 32.0], egui::Button::new(
                    egui::RichText::new(if state.is_signup_mode { "Back to Login" } else { "Create Account" }).color(colors::TEXT_SECONDARY)
                )).clicked() {
                    state.toggle_auth_mode();
                }
            });

            if state.auth_state.loading {
                ui.add_space(15.0);
                ui.horizontal(|ui| {
                    ui.add_space(((available_rect.width() - 100.0) / 2.0).max(0.0));
                    ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
                    ui.spinner();
                });
            }
        });
    });
}
