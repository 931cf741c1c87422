use eframe::egui::{self, RichText};

use crate::egui_app::form::FormMode;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::AppView;

fn field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str, error: Option<&str>) {
    ui.label(RichText::new(label).color(colors::TEXT_SECONDARY));
    ui.add(egui::TextEdit::singleline(value).hint_text(hint).desired_width(260.0));
    styles::field_error(ui, error);
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    styles::page_frame().show(ui, |ui| {
        styles::page_title(ui, state.form.title());
        ui.label(RichText::new("Fields marked * are required").color(colors::TEXT_SECONDARY));
        ui.add_space(12.0);

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            let form = &mut state.form;
            let errors = form.errors.clone();
            let error = |name: &str| {
                errors
                    .iter()
                    .find(|e| e.field() == Some(name))
                    .map(|e| e.message().to_string())
            };

            egui::Grid::new("pokemon_form").num_columns(2).spacing([32.0, 10.0]).show(ui, |ui| {
                ui.vertical(|ui| field(ui, "Pokémon Number *", &mut form.pokemon_number, "1", error("pokemonNumber").as_deref()));
                ui.vertical(|ui| field(ui, "Name *", &mut form.name, "Bulbasaur", error("name").as_deref()));
                ui.end_row();

                ui.vertical(|ui| field(ui, "Height (m) *", &mut form.height_m, "0.7", error("heightM").as_deref()));
                ui.vertical(|ui| field(ui, "Weight (kg) *", &mut form.weight_kg, "6.9", error("weightKg").as_deref()));
                ui.end_row();

                ui.vertical(|ui| field(ui, "Base Experience *", &mut form.base_experience, "64", error("baseExperience").as_deref()));
                ui.vertical(|ui| field(ui, "Sprite URL", &mut form.sprite_url, "https://example.com/sprite.png", None));
                ui.end_row();

                ui.vertical(|ui| field(ui, "Types", &mut form.types, "Grass, Poison", error("types").as_deref()));
                ui.vertical(|ui| field(ui, "Abilities", &mut form.abilities, "Overgrow, Chlorophyll", None));
                ui.end_row();
            });

            ui.add_space(8.0);
            ui.label(RichText::new("Description").color(colors::TEXT_SECONDARY));
            ui.add(
                egui::TextEdit::multiline(&mut form.description)
                    .hint_text("A strange seed was planted on its back at birth...")
                    .desired_rows(3)
                    .desired_width(560.0),
            );

            ui.add_space(12.0);
            ui.label(RichText::new("Base Stats").strong().color(colors::TEXT_LIGHT));
            egui::Grid::new("pokemon_form_stats").num_columns(3).spacing([24.0, 10.0]).show(ui, |ui| {
                ui.vertical(|ui| field(ui, "HP *", &mut form.hp, "45", error("hp").as_deref()));
                ui.vertical(|ui| field(ui, "Attack *", &mut form.attack, "49", error("attack").as_deref()));
                ui.vertical(|ui| field(ui, "Defense *", &mut form.defense, "49", error("defense").as_deref()));
                ui.end_row();
                ui.vertical(|ui| field(ui, "Special Attack *", &mut form.special_attack, "65", error("specialAttack").as_deref()));
                ui.vertical(|ui| field(ui, "Special Defense *", &mut form.special_defense, "65", error("specialDefense").as_deref()));
                ui.vertical(|ui| field(ui, "Speed *", &mut form.speed, "45", error("speed").as_deref()));
                ui.end_row();
            });
        });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            let label = match state.form.mode {
                FormMode::Create => "Add Pokémon",
                FormMode::Edit(_) => "Save Changes",
            };
            if ui
                .add_enabled(!state.form.submitting, styles::primary_button(label))
                .clicked()
            {
                state.submit_form();
            }
            if ui.add(styles::secondary_button("Cancel")).clicked() {
                let back = match state.form.mode {
                    FormMode::Create => AppView::Collection,
                    FormMode::Edit(_) => AppView::Detail,
                };
                state.navigate(back);
            }
            if state.form.submitting {
                ui.spinner();
            }
        });
    });
}
