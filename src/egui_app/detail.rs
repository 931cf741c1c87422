//! Detail page state
//!
//! A 404 from the backend is its own state so the view can show "not found"
//! instead of a generic failure.

use crate::egui_app::api_client::ApiError;
use crate::shared::pokemon::Pokemon;

/// What the detail page was asked to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTarget {
    Id(i64),
    /// National Pokédex number, from "jump to #".
    Number(i32),
}

impl std::fmt::Display for DetailTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetailTarget::Id(id) => write!(f, "id {}", id),
            DetailTarget::Number(number) => write!(f, "#{:03}", number),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Idle,
    Loading(DetailTarget),
    Loaded(Pokemon),
    NotFound(DetailTarget),
    Failed { target: DetailTarget, error: ApiError },
}

impl DetailState {
    pub fn target(&self) -> Option<DetailTarget> {
        match self {
            DetailState::Idle => None,
            DetailState::Loading(target) | DetailState::NotFound(target) => Some(*target),
            DetailState::Failed { target, .. } => Some(*target),
            DetailState::Loaded(pokemon) => Some(DetailTarget::Id(pokemon.id)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading(_))
    }

    pub fn pokemon(&self) -> Option<&Pokemon> {
        match self {
            DetailState::Loaded(pokemon) => Some(pokemon),
            _ => None,
        }
    }

    /// Apply a fetch result. Results for anything but the pending target are dropped.
    pub fn complete(&mut self, target: DetailTarget, outcome: Result<Pokemon, ApiError>) -> bool {
        if *self != DetailState::Loading(target) {
            tracing::debug!("Dropping detail result for {}", target);
            return false;
        }
        *self = match outcome {
            Ok(pokemon) => DetailState::Loaded(pokemon),
            Err(e) if e.is_not_found() => DetailState::NotFound(target),
            Err(error) => DetailState::Failed { target, error },
        };
        true
    }
}

/// Bar colour band for a single base stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTier {
    Excellent,
    Good,
    Average,
    Low,
}

impl StatTier {
    pub fn for_value(value: i32) -> Self {
        match value {
            v if v >= 100 => StatTier::Excellent,
            v if v >= 80 => StatTier::Good,
            v if v >= 60 => StatTier::Average,
            _ => StatTier::Low,
        }
    }
}

/// Parse the "jump to #" box.
pub fn parse_number(input: &str) -> Option<i32> {
    input
        .trim()
        .trim_start_matches('#')
        .parse::<i32>()
        .ok()
        .filter(|n| *n > 0)
}
