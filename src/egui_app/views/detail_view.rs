use eframe::egui::{self, RichText};

use crate::egui_app::detail::{DetailState, StatTier};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::pokemon_card;
use crate::egui_app::AppView;
use crate::shared::pokemon::Pokemon;

/// Highest base stat in the main series, used to scale the bars.
const MAX_STAT: f32 = 255.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    styles::page_frame().show(ui, |ui| {
        if ui.add(styles::secondary_button("◀ Back to Pokédex")).clicked() {
            state.navigate(AppView::Catalog);
            return;
        }
        ui.add_space(12.0);

        match &state.detail {
            DetailState::Idle => {
                ui.label(RichText::new("Select a Pokémon from the Pokédex").color(colors::TEXT_SECONDARY));
            }
            DetailState::Loading(target) => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new(format!("Loading {}...", target)).color(colors::TEXT_LIGHT));
                });
            }
            DetailState::NotFound(target) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(RichText::new("Pokémon not found").size(26.0).color(colors::TEXT_LIGHT));
                    ui.label(
                        RichText::new(format!("Nothing in the Pokédex matches {}.", target))
                            .color(colors::TEXT_SECONDARY),
                    );
                });
            }
            DetailState::Failed { error, .. } => {
                let message = error.message();
                ui.label(RichText::new("Failed to load Pokémon details").color(colors::ERROR));
                ui.label(RichText::new(message).color(colors::TEXT_SECONDARY));
                if ui.add(styles::primary_button("Retry")).clicked() {
                    state.retry_detail();
                }
            }
            DetailState::Loaded(pokemon) => {
                let pokemon = pokemon.clone();
                egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                    render_loaded(ui, state, &pokemon);
                });
            }
        }
    });
}

fn render_loaded(ui: &mut egui::Ui, state: &mut AppState, pokemon: &Pokemon) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(pokemon.display_number()).size(20.0).color(colors::TEXT_SECONDARY));
        styles::page_title(ui, &pokemon.name);
    });
    pokemon_card::type_badges(ui, &pokemon.types);
    ui.add_space(8.0);

    if let Some(description) = pokemon.description.as_deref().filter(|d| !d.is_empty()) {
        ui.label(RichText::new(description).color(colors::TEXT_LIGHT));
        ui.add_space(8.0);
    }
    if let Some(url) = pokemon.picture_url() {
        ui.hyperlink_to(RichText::new("Artwork").color(colors::INFO), url);
        ui.add_space(8.0);
    }

    styles::card_frame(false).show(ui, |ui| {
        ui.label(RichText::new("Physical").strong().color(colors::TEXT_LIGHT));
        egui::Grid::new("physical").num_columns(2).spacing([24.0, 4.0]).show(ui, |ui| {
            ui.label(RichText::new("Height").color(colors::TEXT_SECONDARY));
            ui.label(format!("{} m", pokemon.height_m));
            ui.end_row();
            ui.label(RichText::new("Weight").color(colors::TEXT_SECONDARY));
            ui.label(format!("{} kg", pokemon.weight_kg));
            ui.end_row();
            ui.label(RichText::new("Base experience").color(colors::TEXT_SECONDARY));
            ui.label(pokemon.base_experience.to_string());
            ui.end_row();
        });

        if !pokemon.abilities.is_empty() {
            ui.add_space(8.0);
            ui.label(RichText::new("Abilities").strong().color(colors::TEXT_LIGHT));
            ui.label(pokemon.abilities.join(", "));
        }
    });
    ui.add_space(12.0);

    styles::card_frame(false).show(ui, |ui| {
        ui.label(RichText::new("Base Stats").strong().color(colors::TEXT_LIGHT));
        egui::Grid::new("stats").num_columns(3).spacing([12.0, 6.0]).show(ui, |ui| {
            for (label, value) in pokemon.stats.entries() {
                ui.label(RichText::new(label).color(colors::TEXT_SECONDARY));
                ui.label(value.to_string());
                ui.add(
                    egui::ProgressBar::new((value as f32 / MAX_STAT).clamp(0.0, 1.0))
                        .fill(colors::stat_color(StatTier::for_value(value)))
                        .desired_width(240.0),
                );
                ui.end_row();
            }
            ui.label(RichText::new("Total").strong().color(colors::TEXT_LIGHT));
            ui.label(RichText::new(pokemon.total_stats().to_string()).strong());
            ui.end_row();
        });
    });
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        let favourite = state.favourites.contains(&pokemon.id);
        let label = if favourite { "♥ Favorited" } else { "♡ Favorite" };
        if ui.add(styles::secondary_button(label)).clicked() {
            state.toggle_favourite(pokemon);
        }
        if ui.add(styles::primary_button("Add to Collection")).clicked() {
            state.add_to_collection(pokemon);
        }

        let owns = matches!(
            (state.auth_state.user.as_ref().and_then(|u| u.id), pokemon.user_id),
            (Some(user), Some(owner)) if user == owner
        );
        if owns {
            if ui.add(styles::secondary_button("✏ Edit")).clicked() {
                state.open_edit_form(pokemon);
            }
            if ui.add(styles::secondary_button("🗑 Delete")).clicked() {
                state.collection.request_delete(pokemon.id);
            }
        }
    });
}
