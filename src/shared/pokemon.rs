//! Pokémon Data Structures
//!
//! Defines the Pokémon record served by the catalog API, the payload sent
//! when creating or updating an entry, and the fixed set of elemental types
//! used by the type filter.
//!
//! JSON field names are camelCase to match the backend. Numeric fields that
//! the backend may send as `null` decode as zero.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::shared::error::SharedError;

/// Decode `null` (or a missing field, together with `#[serde(default)]`) as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The six base stats of a Pokémon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub hp: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attack: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub defense: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub special_attack: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub special_defense: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub speed: i32,
}

impl BaseStats {
    pub fn new(
        hp: i32,
        attack: i32,
        defense: i32,
        special_attack: i32,
        special_defense: i32,
        speed: i32,
    ) -> Self {
        Self { hp, attack, defense, special_attack, special_defense, speed }
    }

    /// Sum of the six base stats, widened so backend values cannot overflow it.
    pub fn total(&self) -> i64 {
        self.entries().iter().map(|(_, value)| i64::from(*value)).sum()
    }

    /// Labelled stats in display order.
    pub fn entries(&self) -> [(&'static str, i32); 6] {
        [
            ("HP", self.hp),
            ("Attack", self.attack),
            ("Defense", self.defense),
            ("Special Attack", self.special_attack),
            ("Special Defense", self.special_defense),
            ("Speed", self.speed),
        ]
    }
}

/// A catalog entry as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pokemon_number: i32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub height_m: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weight_kg: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_experience: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub types: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub abilities: Vec<String>,
    #[serde(flatten)]
    pub stats: BaseStats,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub sprite_url: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Pokemon {
    /// Total of the six base stats, computed on demand.
    pub fn total_stats(&self) -> i64 {
        self.stats.total()
    }

    /// Catalog number formatted the way the UI shows it, e.g. `#025`.
    pub fn display_number(&self) -> String {
        format!("#{:03}", self.pokemon_number)
    }

    /// Sprite if present, otherwise the full image.
    pub fn picture_url(&self) -> Option<&str> {
        self.sprite_url
            .as_deref()
            .or(self.image_url.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// Types that map onto a known elemental type, in record order.
    pub fn known_types(&self) -> Vec<PokemonType> {
        self.types.iter().filter_map(|t| t.parse().ok()).collect()
    }
}

/// Body of `POST /pokemons` and `PUT /pokemons/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPokemon {
    pub pokemon_number: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub height_m: f64,
    pub weight_kg: f64,
    pub base_experience: i32,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    #[serde(flatten)]
    pub stats: BaseStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprite_url: Option<String>,
}

impl From<&Pokemon> for NewPokemon {
    fn from(pokemon: &Pokemon) -> Self {
        Self {
            pokemon_number: pokemon.pokemon_number,
            name: pokemon.name.clone(),
            description: pokemon.description.clone(),
            height_m: pokemon.height_m,
            weight_kg: pokemon.weight_kg,
            base_experience: pokemon.base_experience,
            types: pokemon.types.clone(),
            abilities: pokemon.abilities.clone(),
            stats: pokemon.stats,
            sprite_url: pokemon.sprite_url.clone(),
        }
    }
}

/// The eighteen elemental types offered by the type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl PokemonType {
    pub const ALL: [PokemonType; 18] = [
        PokemonType::Normal,
        PokemonType::Fire,
        PokemonType::Water,
        PokemonType::Electric,
        PokemonType::Grass,
        PokemonType::Ice,
        PokemonType::Fighting,
        PokemonType::Poison,
        PokemonType::Ground,
        PokemonType::Flying,
        PokemonType::Psychic,
        PokemonType::Bug,
        PokemonType::Rock,
        PokemonType::Ghost,
        PokemonType::Dragon,
        PokemonType::Dark,
        PokemonType::Steel,
        PokemonType::Fairy,
    ];

    /// Name as used in `/pokemons/type/{type}`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PokemonType::Normal => "Normal",
            PokemonType::Fire => "Fire",
            PokemonType::Water => "Water",
            PokemonType::Electric => "Electric",
            PokemonType::Grass => "Grass",
            PokemonType::Ice => "Ice",
            PokemonType::Fighting => "Fighting",
            PokemonType::Poison => "Poison",
            PokemonType::Ground => "Ground",
            PokemonType::Flying => "Flying",
            PokemonType::Psychic => "Psychic",
            PokemonType::Bug => "Bug",
            PokemonType::Rock => "Rock",
            PokemonType::Ghost => "Ghost",
            PokemonType::Dragon => "Dragon",
            PokemonType::Dark => "Dark",
            PokemonType::Steel => "Steel",
            PokemonType::Fairy => "Fairy",
        }
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PokemonType {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        PokemonType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SharedError::validation("types", format!("Unknown type '{}'", trimmed)))
    }
}
