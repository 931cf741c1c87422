use eframe::egui::{self, RichText};

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::pokemon_card;
use crate::shared::pokemon::Pokemon;

enum RowAction {
    View(i64),
    Edit(Pokemon),
    Delete(i64),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    styles::page_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            styles::page_title(ui, "My Collection");
            if state.collection.loading {
                ui.spinner();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(styles::primary_button("＋ Add Pokémon")).clicked() {
                    state.open_create_form();
                }
            });
        });
        ui.label(RichText::new(state.collection.results.summary()).color(colors::TEXT_SECONDARY));
        ui.add_space(12.0);

        if state.collection.error.is_some() {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Failed to load your Pokémon collection").color(colors::ERROR));
                if ui.add(styles::primary_button("Retry")).clicked() {
                    state.load_collection();
                }
            });
            return;
        }

        if state.collection.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.label(RichText::new("No Pokémon yet").size(22.0).color(colors::TEXT_LIGHT));
                ui.label(
                    RichText::new("Start building your collection by adding your first Pokémon")
                        .color(colors::TEXT_SECONDARY),
                );
                ui.add_space(12.0);
                if ui.add(styles::primary_button("Add Your First Pokémon")).clicked() {
                    state.open_create_form();
                }
            });
            return;
        }

        let mut action = None;
        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            for pokemon in &state.collection.results.items {
                let deleting = state.collection.deleting == Some(pokemon.id);
                styles::card_frame(false).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(pokemon.display_number()).color(colors::TEXT_SECONDARY));
                        ui.label(RichText::new(&pokemon.name).size(16.0).strong().color(colors::TEXT_LIGHT));
                        pokemon_card::type_badges(ui, &pokemon.types);

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if deleting {
                                ui.spinner();
                            } else if ui.add(styles::secondary_button("🗑 Delete")).clicked() {
                                action = Some(RowAction::Delete(pokemon.id));
                            }
                            if ui.add(styles::secondary_button("✏ Edit")).clicked() {
                                action = Some(RowAction::Edit(pokemon.clone()));
                            }
                            if ui.add(styles::secondary_button("View")).clicked() {
                                action = Some(RowAction::View(pokemon.id));
                            }
                        });
                    });
                });
                ui.add_space(6.0);
            }
        });

        match action {
            Some(RowAction::View(id)) => state.open_detail(id),
            Some(RowAction::Edit(pokemon)) => state.open_edit_form(&pokemon),
            Some(RowAction::Delete(id)) => state.collection.request_delete(id),
            None => {}
        }
    });
}
