use eframe::egui;

use crate::egui_app::AppView;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub mod auth_view;
pub mod catalog_view;
pub mod collection_view;
pub mod detail_view;
pub mod form_view;
pub mod home_view;
pub mod notifications_view;
pub mod pokemon_card;
pub mod profile_view;

fn nav_button(ui: &mut egui::Ui, state: &mut AppState, label: &str, view: AppView) {
    let active = state.current_view == view;
    let text = egui::RichText::new(label).color(colors::TEXT_LIGHT);
    let text = if active { text.strong().underline() } else { text };
    if ui.add(egui::Button::new(text).frame(false)).clicked() {
        state.navigate(view);
    }
}

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add(egui::Button::new(
                        egui::RichText::new("◓ Pokédex").size(18.0).strong().color(colors::TEXT_LIGHT),
                    ).frame(false))
                    .clicked()
                {
                    state.navigate(AppView::Home);
                }
                ui.add_space(16.0);

                nav_button(ui, state, "Home", AppView::Home);
                nav_button(ui, state, "Pokédex", AppView::Catalog);
                if state.auth_state.authenticated {
                    nav_button(ui, state, "My Collection", AppView::Collection);
                    if ui
                        .add(egui::Button::new(egui::RichText::new("Add Pokémon").color(colors::TEXT_LIGHT)).frame(false))
                        .clicked()
                    {
                        state.open_create_form();
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if state.auth_state.authenticated {
                        let initial = state
                            .auth_state
                            .user
                            .as_ref()
                            .map(|u| u.initial())
                            .unwrap_or('U');
                        let avatar = ui.add(
                            egui::Button::new(egui::RichText::new(initial.to_string()).strong().color(colors::TEXT_LIGHT))
                                .fill(colors::BUTTON_SECONDARY)
                                .corner_radius(egui::CornerRadius::same(14))
                                .min_size(egui::vec2(28.0, 28.0)),
                        );
                        if avatar.clicked() {
                            state.menu_open = !state.menu_open;
                        }
                        if let Some(ref user) = state.auth_state.user {
                            ui.colored_label(colors::TEXT_LIGHT, user.display_name());
                        }
                    } else {
                        if ui.add(styles::secondary_button("Register")).clicked() {
                            state.is_signup_mode = true;
                            state.navigate(AppView::Auth);
                        }
                        if ui.add(styles::secondary_button("Login")).clicked() {
                            state.is_signup_mode = false;
                            state.navigate(AppView::Auth);
                        }
                    }
                });
            });
        });

    if state.menu_open && state.auth_state.authenticated {
        render_user_menu(ctx, state);
    }
}

fn render_user_menu(ctx: &egui::Context, state: &mut AppState) {
    egui::Area::new(egui::Id::new("user_menu"))
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 48.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            styles::modal_frame().show(ui, |ui| {
                ui.set_min_width(160.0);
                if let Some(ref user) = state.auth_state.user {
                    ui.label(egui::RichText::new(format!("@{}", user.username)).color(colors::TEXT_SECONDARY));
                    ui.separator();
                }
                if ui.button("👤 Profile").clicked() {
                    state.navigate(AppView::Profile);
                }
                if ui.button("📚 My Collection").clicked() {
                    state.navigate(AppView::Collection);
                }
                if ui.button("🚪 Logout").clicked() {
                    state.logout();
                }
            });
        });
}

fn render_delete_confirmation(ctx: &egui::Context, state: &mut AppState) {
    let Some(id) = state.collection.confirm_delete else { return };
    let name = state
        .collection
        .name_of(id)
        .map(str::to_string)
        .or_else(|| state.detail.pokemon().filter(|p| p.id == id).map(|p| p.name.clone()))
        .unwrap_or_else(|| "this Pokémon".to_string());

    egui::Window::new("Delete Pokémon")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(styles::modal_frame())
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("Are you sure you want to delete {}?", name))
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.add(styles::primary_button("Delete")).clicked() {
                    state.confirm_delete();
                }
                if ui.add(styles::secondary_button("Cancel")).clicked() {
                    state.collection.cancel_delete();
                }
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_view {
            AppView::Home => home_view::render(ui, state),
            AppView::Auth => auth_view::render(ui, state),
            AppView::Catalog => catalog_view::render(ui, state),
            AppView::Detail => detail_view::render(ui, state),
            AppView::Collection => collection_view::render(ui, state),
            AppView::PokemonForm => form_view::render(ui, state),
            AppView::Profile => profile_view::render(ui, state),
        });

    render_delete_confirmation(ctx, state);
    notifications_view::render(ctx, state);
}
