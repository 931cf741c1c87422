use eframe::egui::{self, RichText};

use crate::egui_app::catalog::ViewMode;
use crate::egui_app::state::{AppState, CATALOG_LOAD_FAILED};
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::pokemon_card::{self, CardAction};
use crate::shared::pokemon::PokemonType;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    styles::page_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            styles::page_title(ui, "Pokédex");
            if state.catalog.is_loading() {
                ui.spinner();
            }
        });
        ui.label(RichText::new(state.catalog.result_summary()).color(colors::TEXT_SECONDARY));
        ui.add_space(12.0);

        render_toolbar(ui, state);
        ui.add_space(8.0);
        render_type_filter(ui, state);
        ui.add_space(12.0);

        if state.catalog.error().is_some() {
            ui.horizontal(|ui| {
                ui.label(RichText::new(CATALOG_LOAD_FAILED).color(colors::ERROR));
                if ui.add(styles::primary_button("Retry")).clicked() {
                    state.retry_catalog();
                }
            });
            ui.add_space(8.0);
        }

        if state.catalog.is_empty_result() {
            render_empty_state(ui, state);
            return;
        }

        let pagination = state.catalog.pagination();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .max_height((ui.available_height() - if pagination.is_some() { 48.0 } else { 0.0 }).max(120.0))
            .show(ui, |ui| {
                if let Some(action) = render_results(ui, state) {
                    pokemon_card::apply(state, action);
                }
            });

        if let Some(pagination) = pagination {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(pagination.has_prev(), styles::secondary_button("◀ Previous"))
                    .clicked()
                {
                    state.set_page(pagination.current - 1);
                }
                for page in pagination.window.clone() {
                    let label = RichText::new((page + 1).to_string());
                    let button = if page == pagination.current {
                        egui::Button::new(label.strong()).fill(colors::BUTTON_PRIMARY)
                    } else {
                        egui::Button::new(label)
                    };
                    if ui.add(button).clicked() {
                        state.set_page(page);
                    }
                }
                if ui
                    .add_enabled(pagination.has_next(), styles::secondary_button("Next ▶"))
                    .clicked()
                {
                    state.set_page(pagination.current + 1);
                }
                ui.label(
                    RichText::new(format!("Page {} of {}", pagination.current + 1, pagination.total_pages))
                        .color(colors::TEXT_SECONDARY),
                );
            });
        }
    });
}

fn render_toolbar(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        let search = ui.add_sized(
            [320.0, 28.0],
            egui::TextEdit::singleline(&mut state.search_input)
                .hint_text("Search Pokémon by name..."),
        );
        if search.changed() {
            state.on_search_changed();
        }

        ui.add_space(16.0);
        ui.label(RichText::new("Jump to #").color(colors::TEXT_SECONDARY));
        let jump = ui.add_sized([64.0, 28.0], egui::TextEdit::singleline(&mut state.jump_input));
        let submitted = jump.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.add(styles::secondary_button("Go")).clicked() || submitted {
            state.jump_to_number();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mode = state.catalog.query().view_mode;
            if ui.selectable_label(mode == ViewMode::List, "☰ List").clicked() {
                state.catalog.set_view_mode(ViewMode::List);
            }
            if ui.selectable_label(mode == ViewMode::Grid, "▦ Grid").clicked() {
                state.catalog.set_view_mode(ViewMode::Grid);
            }
        });
    });
}

fn render_type_filter(ui: &mut egui::Ui, state: &mut AppState) {
    let selected = state.catalog.query().selected_type;
    let mut clicked = None;

    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new("Type:").color(colors::TEXT_SECONDARY));
        for pokemon_type in PokemonType::ALL {
            let active = selected == Some(pokemon_type);
            let fill = if active {
                colors::type_color(pokemon_type)
            } else {
                colors::BUTTON_SECONDARY
            };
            let text = RichText::new(pokemon_type.as_str()).color(colors::TEXT_LIGHT);
            if ui.add(egui::Button::new(text).fill(fill)).clicked() {
                clicked = Some(pokemon_type);
            }
        }
        if state.catalog.has_filters() && ui.add(styles::secondary_button("✕ Clear filters")).clicked() {
            state.clear_filters();
        }
    });

    if let Some(pokemon_type) = clicked {
        state.toggle_type(pokemon_type);
    }
}

fn render_results(ui: &mut egui::Ui, state: &AppState) -> Option<CardAction> {
    let signed_in = state.auth_state.authenticated;
    let mut action = None;

    match state.catalog.query().view_mode {
        ViewMode::Grid => {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                for pokemon in &state.catalog.results().items {
                    let favourite = state.favourites.contains(&pokemon.id);
                    if let Some(a) = pokemon_card::render_grid_card(ui, pokemon, favourite, signed_in) {
                        action = Some(a);
                    }
                }
            });
        }
        ViewMode::List => {
            for pokemon in &state.catalog.results().items {
                let favourite = state.favourites.contains(&pokemon.id);
                if let Some(a) = pokemon_card::render_list_row(ui, pokemon, favourite, signed_in) {
                    action = Some(a);
                }
                ui.add_space(6.0);
            }
        }
    }

    action
}

fn render_empty_state(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(RichText::new("No Pokémon found").size(22.0).color(colors::TEXT_LIGHT));
        ui.label(RichText::new("Try adjusting your search or filters").color(colors::TEXT_SECONDARY));
        ui.add_space(12.0);
        if state.catalog.has_filters() && ui.add(styles::primary_button("Clear filters")).clicked() {
            state.clear_filters();
        }
    });
}
