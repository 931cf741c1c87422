use eframe::egui::{self, RichText};

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::pokemon::Pokemon;

/// Click on a card, applied after the list has been drawn.
#[derive(Debug, Clone)]
pub enum CardAction {
    Open(i64),
    ToggleFavourite(Pokemon),
    AddToCollection(Pokemon),
}

pub fn apply(state: &mut AppState, action: CardAction) {
    match action {
        CardAction::Open(id) => state.open_detail(id),
        CardAction::ToggleFavourite(pokemon) => state.toggle_favourite(&pokemon),
        CardAction::AddToCollection(pokemon) => state.add_to_collection(&pokemon),
    }
}

pub fn type_badges(ui: &mut egui::Ui, types: &[String]) {
    ui.horizontal_wrapped(|ui| {
        for name in types {
            styles::badge(ui, name, colors::type_name_color(name));
        }
    });
}

fn avatar(ui: &mut egui::Ui, pokemon: &Pokemon, size: f32) {
    let fill = pokemon
        .known_types()
        .first()
        .copied()
        .map(colors::type_color)
        .unwrap_or(colors::BUTTON_SECONDARY);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), size / 2.0, fill);
    let initial = pokemon.name.chars().next().unwrap_or('?').to_string();
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial,
        egui::FontId::proportional(size * 0.5),
        egui::Color32::WHITE,
    );
}

fn favourite_button(ui: &mut egui::Ui, pokemon: &Pokemon, is_favourite: bool) -> Option<CardAction> {
    let (icon, color) = if is_favourite {
        ("♥", colors::FAVOURITE)
    } else {
        ("♡", colors::TEXT_SECONDARY)
    };
    let clicked = ui
        .add(egui::Button::new(RichText::new(icon).size(18.0).color(color)).frame(false))
        .on_hover_text(if is_favourite { "Remove from favorites" } else { "Add to favorites" })
        .clicked();
    clicked.then(|| CardAction::ToggleFavourite(pokemon.clone()))
}

pub fn render_grid_card(
    ui: &mut egui::Ui,
    pokemon: &Pokemon,
    is_favourite: bool,
    signed_in: bool,
) -> Option<CardAction> {
    let mut action = None;
    let hovered = ui.rect_contains_pointer(ui.available_rect_before_wrap());

    styles::card_frame(hovered).show(ui, |ui| {
        ui.set_width(180.0);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(pokemon.display_number()).color(colors::TEXT_SECONDARY));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(a) = favourite_button(ui, pokemon, is_favourite) {
                        action = Some(a);
                    }
                });
            });

            ui.vertical_centered(|ui| avatar(ui, pokemon, 72.0));
            ui.add_space(6.0);

            let name = ui.add(
                egui::Label::new(RichText::new(&pokemon.name).size(18.0).strong().color(colors::TEXT_LIGHT))
                    .sense(egui::Sense::click()),
            );
            if name.clicked() {
                action = Some(CardAction::Open(pokemon.id));
            }
            type_badges(ui, &pokemon.types);
            ui.label(
                RichText::new(format!("Total stats: {}", pokemon.total_stats()))
                    .size(12.0)
                    .color(colors::TEXT_SECONDARY),
            );

            ui.horizontal(|ui| {
                if ui.add(styles::secondary_button("View")).clicked() {
                    action = Some(CardAction::Open(pokemon.id));
                }
                if signed_in && ui.add(styles::primary_button("Add to Collection")).clicked() {
                    action = Some(CardAction::AddToCollection(pokemon.clone()));
                }
            });
        });
    });

    action
}

pub fn render_list_row(
    ui: &mut egui::Ui,
    pokemon: &Pokemon,
    is_favourite: bool,
    signed_in: bool,
) -> Option<CardAction> {
    let mut action = None;

    styles::card_frame(false).show(ui, |ui| {
        ui.horizontal(|ui| {
            avatar(ui, pokemon, 40.0);
            ui.label(RichText::new(pokemon.display_number()).color(colors::TEXT_SECONDARY));
            ui.label(RichText::new(&pokemon.name).size(16.0).strong().color(colors::TEXT_LIGHT));
            type_badges(ui, &pokemon.types);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add(styles::secondary_button("View")).clicked() {
                    action = Some(CardAction::Open(pokemon.id));
                }
                if signed_in && ui.add(styles::primary_button("Add")).clicked() {
                    action = Some(CardAction::AddToCollection(pokemon.clone()));
                }
                if let Some(a) = favourite_button(ui, pokemon, is_favourite) {
                    action = Some(a);
                }
                ui.label(
                    RichText::new(format!("Σ {}", pokemon.total_stats())).color(colors::TEXT_SECONDARY),
                );
            });
        });
    });

    action
}
