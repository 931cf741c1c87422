//! "My Collection" page state: the signed-in user's records and deletion.

use crate::egui_app::api_client::ApiError;
use crate::shared::page::{PokemonPayload, ResultSet};

#[derive(Debug, Default)]
pub struct CollectionState {
    pub results: ResultSet,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<ApiError>,
    /// Record awaiting delete confirmation.
    pub confirm_delete: Option<i64>,
    /// Record whose DELETE is in flight.
    pub deleting: Option<i64>,
}

impl CollectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, outcome: Result<PokemonPayload, ApiError>) -> Result<(), ApiError> {
        self.loading = false;
        match outcome {
            Ok(payload) => {
                self.results = ResultSet::from(payload);
                self.loaded = true;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.loaded && !self.loading && self.error.is_none() && self.results.is_empty()
    }

    pub fn request_delete(&mut self, id: i64) {
        self.confirm_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = None;
    }

    /// Confirm the pending deletion, returning the id to delete.
    pub fn confirm(&mut self) -> Option<i64> {
        if self.deleting.is_some() {
            return None;
        }
        let id = self.confirm_delete.take()?;
        self.deleting = Some(id);
        Some(id)
    }

    /// Drop the record locally once the backend accepted the delete.
    pub fn finish_delete(&mut self, id: i64, outcome: Result<(), ApiError>) -> Result<(), ApiError> {
        if self.deleting == Some(id) {
            self.deleting = None;
        }
        outcome?;
        self.results.remove(id);
        Ok(())
    }

    /// Name of a record currently listed, for confirmation and notices.
    pub fn name_of(&self, id: i64) -> Option<&str> {
        self.results.items.iter().find(|p| p.id == id).map(|p| p.name.as_str())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
