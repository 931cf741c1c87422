//! Color Constants for the Pokédex Theme
//!
//! Dark slate panels with Pokédex red accents, plus the per-type badge
//! colours and the stat-bar bands.

use eframe::egui::Color32;

use crate::egui_app::detail::StatTier;
use crate::shared::pokemon::PokemonType;

/// Top bar background - Pokédex red
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0xC6, 0x28, 0x28);

/// Dark background for main areas
pub const BG_DARK: Color32 = Color32::from_rgb(0x1E, 0x22, 0x2B);

/// Card background
pub const CARD_BG: Color32 = Color32::from_rgb(0x2A, 0x30, 0x3C);

/// Card hover background
pub const CARD_HOVER: Color32 = Color32::from_rgb(0x34, 0x3B, 0x4A);

/// Card border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0x3F, 0x47, 0x57);

/// Input background
pub const INPUT_BG: Color32 = Color32::from_rgb(0x15, 0x18, 0x1F);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF2, 0xF4, 0xF7);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9A, 0xA3, 0xB2);

/// Accent color for highlights
pub const ACCENT: Color32 = Color32::from_rgb(0xE5, 0x39, 0x35);

/// Button primary background
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0xD3, 0x2F, 0x2F);

/// Button secondary background
pub const BUTTON_SECONDARY: Color32 = Color32::from_rgb(0x45, 0x4E, 0x5E);

/// Selected item background
pub const SELECTED_ITEM: Color32 = Color32::from_rgb(0x8E, 0x24, 0xAA);

/// Favourite heart
pub const FAVOURITE: Color32 = Color32::from_rgb(0xEF, 0x53, 0x50);

pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);
pub const INFO: Color32 = Color32::from_rgb(0x42, 0xA5, 0xF5);
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Badge colour for an elemental type.
pub fn type_color(pokemon_type: PokemonType) -> Color32 {
    match pokemon_type {
        PokemonType::Normal => Color32::from_rgb(0xA8, 0xA8, 0x78),
        PokemonType::Fire => Color32::from_rgb(0xF0, 0x80, 0x30),
        PokemonType::Water => Color32::from_rgb(0x68, 0x90, 0xF0),
        PokemonType::Electric => Color32::from_rgb(0xF8, 0xD0, 0x30),
        PokemonType::Grass => Color32::from_rgb(0x78, 0xC8, 0x50),
        PokemonType::Ice => Color32::from_rgb(0x98, 0xD8, 0xD8),
        PokemonType::Fighting => Color32::from_rgb(0xC0, 0x30, 0x28),
        PokemonType::Poison => Color32::from_rgb(0xA0, 0x40, 0xA0),
        PokemonType::Ground => Color32::from_rgb(0xE0, 0xC0, 0x68),
        PokemonType::Flying => Color32::from_rgb(0xA8, 0x90, 0xF0),
        PokemonType::Psychic => Color32::from_rgb(0xF8, 0x58, 0x88),
        PokemonType::Bug => Color32::from_rgb(0xA8, 0xB8, 0x20),
        PokemonType::Rock => Color32::from_rgb(0xB8, 0xA0, 0x38),
        PokemonType::Ghost => Color32::from_rgb(0x70, 0x58, 0x98),
        PokemonType::Dragon => Color32::from_rgb(0x70, 0x38, 0xF8),
        PokemonType::Dark => Color32::from_rgb(0x70, 0x58, 0x48),
        PokemonType::Steel => Color32::from_rgb(0xB8, 0xB8, 0xD0),
        PokemonType::Fairy => Color32::from_rgb(0xEE, 0x99, 0xAC),
    }
}

/// Badge colour for a type string, grey when unknown.
pub fn type_name_color(name: &str) -> Color32 {
    name.parse::<PokemonType>().map(type_color).unwrap_or(BUTTON_SECONDARY)
}

/// Stat bar colour.
pub fn stat_color(tier: StatTier) -> Color32 {
    match tier {
        StatTier::Excellent => Color32::from_rgb(0x22, 0xC5, 0x5E),
        StatTier::Good => Color32::from_rgb(0x3B, 0x82, 0xF6),
        StatTier::Average => Color32::from_rgb(0xEA, 0xB3, 0x08),
        StatTier::Low => Color32::from_rgb(0xEF, 0x44, 0x44),
    }
}
