//! Response Envelopes
//!
//! The catalog API is inconsistent about list responses: the paginated
//! listing and `/pokemons/my-pokemons` answer a page envelope, while search,
//! by-type and range answer a bare array. `PokemonPayload` accepts either and
//! `ResultSet` is the one shape the rest of the client works with.

use serde::{Deserialize, Serialize};

use crate::shared::pokemon::Pokemon;

/// Page envelope as serialized by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_elements: Option<u64>,
    /// Zero-based page index.
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
}

/// Any list-shaped answer from the catalog endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PokemonPayload {
    Paged(Page<Pokemon>),
    List(Vec<Pokemon>),
}

/// Pagination metadata kept alongside a normalized result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub total_pages: u32,
    pub total_elements: Option<u64>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// Normalized list result: the items plus page info when the backend sent it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    pub items: Vec<Pokemon>,
    pub page_info: Option<PageInfo>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.page_info.map(|info| info.total_pages)
    }

    pub fn total_elements(&self) -> Option<u64> {
        self.page_info.and_then(|info| info.total_elements)
    }

    /// "Showing N Pokémon" with "of M" when the total is known.
    pub fn summary(&self) -> String {
        match self.total_elements() {
            Some(total) => format!("Showing {} Pokémon of {}", self.len(), total),
            None => format!("Showing {} Pokémon", self.len()),
        }
    }

    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        let removed = self.items.len() != before;
        if removed {
            if let Some(total) = self.page_info.as_mut().and_then(|info| info.total_elements.as_mut()) {
                *total = total.saturating_sub(1);
            }
        }
        removed
    }
}

impl From<PokemonPayload> for ResultSet {
    fn from(payload: PokemonPayload) -> Self {
        match payload {
            PokemonPayload::List(items) => Self { items, page_info: None },
            PokemonPayload::Paged(page) => {
                let page_info = page.total_pages.map(|total_pages| PageInfo {
                    total_pages,
                    total_elements: page.total_elements,
                    page: page.number,
                    size: page.size,
                });
                Self { items: page.content, page_info }
            }
        }
    }
}

impl From<Vec<Pokemon>> for ResultSet {
    fn from(items: Vec<Pokemon>) -> Self {
        Self { items, page_info: None }
    }
}
