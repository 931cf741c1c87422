//! Add/Edit Pokémon form
//!
//! Fields are kept as the text the user typed. `validate` runs the required
//! and numeric checks and either produces the request body or one
//! `SharedError::ValidationError` per offending field.

use crate::shared::error::SharedError;
use crate::shared::pokemon::{BaseStats, NewPokemon, Pokemon, PokemonType};

/// Whether the form creates a record or edits an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(i64),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PokemonForm {
    pub mode: FormMode,
    pub pokemon_number: String,
    pub name: String,
    pub description: String,
    pub height_m: String,
    pub weight_kg: String,
    pub base_experience: String,
    pub sprite_url: String,
    /// Comma separated
    pub types: String,
    /// Comma separated
    pub abilities: String,
    pub hp: String,
    pub attack: String,
    pub defense: String,
    pub special_attack: String,
    pub special_defense: String,
    pub speed: String,
    pub errors: Vec<SharedError>,
    pub submitting: bool,
}

fn required<'a>(
    field: &str,
    label: &str,
    value: &'a str,
    errors: &mut Vec<SharedError>,
) -> Option<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(SharedError::validation(field, format!("{} is required", label)));
        None
    } else {
        Some(trimmed)
    }
}

/// Like `required_number`, but `NaN` and infinities are rejected.
fn required_measure(field: &str, label: &str, value: &str, errors: &mut Vec<SharedError>) -> f64 {
    let number = required_number::<f64>(field, label, value, errors);
    if number.is_finite() {
        number
    } else {
        errors.push(SharedError::validation(field, format!("{} must be a number", label)));
        0.0
    }
}

fn required_number<T: std::str::FromStr>(
    field: &str,
    label: &str,
    value: &str,
    errors: &mut Vec<SharedError>,
) -> T
where
    T: Default,
{
    let Some(raw) = required(field, label, value, errors) else {
        return T::default();
    };
    match raw.parse::<T>() {
        Ok(number) => number,
        Err(_) => {
            errors.push(SharedError::validation(field, format!("{} must be a number", label)));
            T::default()
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn optional(value: &str) -> Option<String> {
    Some(value.trim()).filter(|v| !v.is_empty()).map(str::to_string)
}

impl PokemonForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-filled form for editing `pokemon`.
    pub fn from_pokemon(pokemon: &Pokemon) -> Self {
        let stats = pokemon.stats;
        Self {
            mode: FormMode::Edit(pokemon.id),
            pokemon_number: pokemon.pokemon_number.to_string(),
            name: pokemon.name.clone(),
            description: pokemon.description.clone().unwrap_or_default(),
            height_m: pokemon.height_m.to_string(),
            weight_kg: pokemon.weight_kg.to_string(),
            base_experience: pokemon.base_experience.to_string(),
            sprite_url: pokemon.sprite_url.clone().unwrap_or_default(),
            types: pokemon.types.join(", "),
            abilities: pokemon.abilities.join(", "),
            hp: stats.hp.to_string(),
            attack: stats.attack.to_string(),
            defense: stats.defense.to_string(),
            special_attack: stats.special_attack.to_string(),
            special_defense: stats.special_defense.to_string(),
            speed: stats.speed.to_string(),
            errors: Vec::new(),
            submitting: false,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add New Pokémon",
            FormMode::Edit(_) => "Edit Pokémon",
        }
    }

    /// First validation message for `field`, if any.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field() == Some(field))
            .map(SharedError::message)
    }

    /// Check required and numeric fields and build the request body.
    pub fn validate(&self) -> Result<NewPokemon, Vec<SharedError>> {
        let mut errors = Vec::new();

        let pokemon_number =
            required_number::<i32>("pokemonNumber", "Pokémon number", &self.pokemon_number, &mut errors);
        let name = required("name", "Name", &self.name, &mut errors).unwrap_or_default().to_string();
        let height_m = required_measure("heightM", "Height", &self.height_m, &mut errors);
        let weight_kg = required_measure("weightKg", "Weight", &self.weight_kg, &mut errors);
        let base_experience =
            required_number::<i32>("baseExperience", "Base experience", &self.base_experience, &mut errors);

        let stats = BaseStats::new(
            required_number("hp", "HP", &self.hp, &mut errors),
            required_number("attack", "Attack", &self.attack, &mut errors),
            required_number("defense", "Defense", &self.defense, &mut errors),
            required_number("specialAttack", "Special Attack", &self.special_attack, &mut errors),
            required_number("specialDefense", "Special Defense", &self.special_defense, &mut errors),
            required_number("speed", "Speed", &self.speed, &mut errors),
        );

        let mut types = Vec::new();
        for raw in split_list(&self.types) {
            match raw.parse::<PokemonType>() {
                Ok(t) => types.push(t.as_str().to_string()),
                Err(e) => errors.push(e),
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewPokemon {
            pokemon_number,
            name,
            description: optional(&self.description),
            height_m,
            weight_kg,
            base_experience,
            types,
            abilities: split_list(&self.abilities),
            stats,
            sprite_url: optional(&self.sprite_url),
        })
    }
}
