//! Theme Module
//!
//! Color scheme and styling for the Pokédex client:
//!
//! - Color constants, type badge colours and stat-bar bands
//! - Styling helper functions for consistent UI appearance
//! - Frame builders for cards, bars and dialogs
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame(false).show(ui, |ui| {
//!     styles::badge(ui, "Fire", colors::type_color(PokemonType::Fire));
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
