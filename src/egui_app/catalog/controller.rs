//! Catalog Controller
//!
//! State machine behind the catalog page. Input handlers mutate the query
//! and hand back a `FetchRequest` when the resolved backend query changed;
//! the caller runs it and reports the outcome through `complete`.
//!
//! Resolution precedence:
//! 1. non-empty debounced search text → name search
//! 2. selected type → by-type listing
//! 3. otherwise → paginated listing

use std::time::{Duration, Instant};

use crate::egui_app::api_client::ApiError;
use crate::egui_app::catalog::debounce::Debouncer;
use crate::egui_app::catalog::pagination::PaginationView;
use crate::shared::page::{PokemonPayload, ResultSet};
use crate::shared::pokemon::PokemonType;

/// Idle time before typed search text is committed.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Grid or list rendering of the results. Presentation only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// User-facing query state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Zero-based page index.
    pub page: u32,
    /// Text as typed.
    pub search: String,
    /// Text after the debounce window.
    pub debounced_search: String,
    pub selected_type: Option<PokemonType>,
    pub view_mode: ViewMode,
}

/// The backend query a `CatalogQuery` resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedQuery {
    Search { name: String },
    ByType { pokemon_type: PokemonType },
    Page { page: u32, size: u32 },
}

impl ResolvedQuery {
    pub fn is_paginated(&self) -> bool {
        matches!(self, ResolvedQuery::Page { .. })
    }
}

/// A query to run, tagged with its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub query: ResolvedQuery,
}

/// What `complete` did with an outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Applied,
    Failed(ApiError),
    /// A newer request was issued; the outcome was dropped.
    Stale,
}

#[derive(Debug)]
pub struct CatalogController {
    query: CatalogQuery,
    page_size: u32,
    debouncer: Debouncer<String>,
    results: ResultSet,
    /// Query that produced `results`.
    displayed: Option<ResolvedQuery>,
    last_issued: Option<ResolvedQuery>,
    in_flight: Option<FetchRequest>,
    next_seq: u64,
    error: Option<ApiError>,
}

impl CatalogController {
    pub fn new(page_size: u32, debounce: Duration) -> Self {
        Self {
            query: CatalogQuery::default(),
            page_size: page_size.max(1),
            debouncer: Debouncer::new(debounce),
            results: ResultSet::default(),
            displayed: None,
            last_issued: None,
            in_flight: None,
            next_seq: 0,
            error: None,
        }
    }

    /// Initial load.
    pub fn start(&mut self) -> Option<FetchRequest> {
        self.refresh()
    }

    /// Record a keystroke. Nothing is fetched until `tick` sees the window close.
    pub fn on_search_input(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        if text == self.query.search {
            return;
        }
        self.query.search = text.clone();
        self.debouncer.schedule(text, now);
    }

    /// Commit debounced text whose window has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<FetchRequest> {
        let text = self.debouncer.poll(now)?;
        if text == self.query.debounced_search {
            return None;
        }
        self.query.debounced_search = text;
        self.query.page = 0;
        self.refresh()
    }

    /// When the next `tick` could do something.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Select a type, or clear the filter when it is already selected.
    pub fn toggle_type(&mut self, pokemon_type: PokemonType) -> Option<FetchRequest> {
        self.query.selected_type = match self.query.selected_type {
            Some(active) if active == pokemon_type => None,
            _ => Some(pokemon_type),
        };
        self.query.page = 0;
        self.refresh()
    }

    /// Move to `page`, clamped to the last page the backend reported.
    pub fn set_page(&mut self, page: u32) -> Option<FetchRequest> {
        let page = match self.results.total_pages() {
            Some(total) if total > 0 => page.min(total - 1),
            _ => page,
        };
        self.query.page = page;
        self.refresh()
    }

    pub fn clear_filters(&mut self) -> Option<FetchRequest> {
        self.debouncer.cancel();
        self.query.search.clear();
        self.query.debounced_search.clear();
        self.query.selected_type = None;
        self.query.page = 0;
        self.refresh()
    }

    /// Re-issue the currently resolved query under a new sequence number.
    pub fn retry(&mut self) -> FetchRequest {
        let query = self.resolve();
        tracing::debug!("Retrying {:?}", query);
        self.issue(query)
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.query.view_mode = mode;
    }

    /// Apply the outcome of request `seq` if it is still the latest one.
    pub fn complete(&mut self, seq: u64, outcome: Result<PokemonPayload, ApiError>) -> Completion {
        let request = match self.in_flight.take() {
            Some(request) if request.seq == seq => request,
            other => {
                self.in_flight = other;
                tracing::debug!("Discarding stale catalog response #{}", seq);
                return Completion::Stale;
            }
        };

        match outcome {
            Ok(payload) => {
                self.results = ResultSet::from(payload);
                self.displayed = Some(request.query);
                self.error = None;
                Completion::Applied
            }
            Err(e) => {
                tracing::warn!("Catalog fetch #{} failed: {}", seq, e);
                self.error = Some(e.clone());
                Completion::Failed(e)
            }
        }
    }

    /// Apply the precedence rules to the current state.
    pub fn resolve(&self) -> ResolvedQuery {
        let name = self.query.debounced_search.trim();
        if !name.is_empty() {
            ResolvedQuery::Search { name: name.to_string() }
        } else if let Some(pokemon_type) = self.query.selected_type {
            ResolvedQuery::ByType { pokemon_type }
        } else {
            ResolvedQuery::Page { page: self.query.page, size: self.page_size }
        }
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    /// Mutable access for local edits such as dropping a deleted record.
    pub fn results_mut(&mut self) -> &mut ResultSet {
        &mut self.results
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn has_filters(&self) -> bool {
        !self.query.debounced_search.trim().is_empty() || self.query.selected_type.is_some()
    }

    /// A completed fetch came back with no records.
    pub fn is_empty_result(&self) -> bool {
        self.displayed.is_some() && !self.is_loading() && self.error.is_none() && self.results.is_empty()
    }

    pub fn result_summary(&self) -> String {
        self.results.summary()
    }

    /// Page controls, present only for an unfiltered listing with more than one page.
    pub fn pagination(&self) -> Option<PaginationView> {
        if self.has_filters() || !self.displayed.as_ref().is_some_and(ResolvedQuery::is_paginated) {
            return None;
        }
        let total_pages = self.results.total_pages()?;
        if total_pages <= 1 {
            return None;
        }
        Some(PaginationView::new(self.query.page.min(total_pages - 1), total_pages))
    }

    fn refresh(&mut self) -> Option<FetchRequest> {
        let query = self.resolve();
        if self.last_issued.as_ref() == Some(&query) {
            return None;
        }
        Some(self.issue(query))
    }

    fn issue(&mut self, query: ResolvedQuery) -> FetchRequest {
        let request = FetchRequest { seq: self.next_seq, query: query.clone() };
        self.next_seq += 1;
        self.last_issued = Some(query);
        self.in_flight = Some(request.clone());
        self.error = None;
        tracing::debug!("Issuing catalog fetch #{}: {:?}", request.seq, request.query);
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::page::Page;
    use crate::shared::pokemon::Pokemon;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    fn pokemon(id: i64, name: &str) -> Pokemon {
        serde_json::from_value(serde_json::json!({ "id": id, "pokemonNumber": id, "name": name }))
            .unwrap()
    }

    fn list(names: &[(i64, &str)]) -> PokemonPayload {
        PokemonPayload::List(names.iter().map(|(id, name)| pokemon(*id, name)).collect())
    }

    fn page(number: u32, total_pages: u32) -> PokemonPayload {
        PokemonPayload::Paged(Page {
            content: vec![pokemon(1, "Bulbasaur")],
            total_pages: Some(total_pages),
            total_elements: Some(u64::from(total_pages) * 20),
            number: Some(number),
            size: Some(20),
        })
    }

    fn controller() -> CatalogController {
        CatalogController::new(20, SEARCH_DEBOUNCE)
    }

    /// Controller with the first page loaded.
    fn loaded(total_pages: u32) -> CatalogController {
        let mut c = controller();
        let first = c.start().unwrap();
        assert_eq!(c.complete(first.seq, Ok(page(0, total_pages))), Completion::Applied);
        c
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_start_resolves_first_page() {
        let mut c = controller();
        let request = c.start().unwrap();
        assert_eq!(request.query, ResolvedQuery::Page { page: 0, size: 20 });
        assert!(c.is_loading());
    }

    #[test]
    fn test_rapid_typing_issues_single_search_with_final_text() {
        let t0 = Instant::now();
        let mut c = loaded(3);
        let mut issued = Vec::new();

        for (offset, text) in [(0, "p"), (120, "pi"), (250, "pik"), (400, "pikachu")] {
            c.on_search_input(text, t0 + ms(offset));
            issued.extend(c.tick(t0 + ms(offset + 50)));
        }
        for offset in [600, 850, 899, 900, 1200, 3000] {
            issued.extend(c.tick(t0 + ms(offset)));
        }

        assert_eq!(issued.len(), 1);
        assert_eq!(issued[0].query, ResolvedQuery::Search { name: "pikachu".to_string() });
    }

    #[test]
    fn test_debounced_search_resets_page() {
        let t0 = Instant::now();
        let mut c = loaded(5);
        let second = c.set_page(2).unwrap();
        c.complete(second.seq, Ok(page(2, 5)));
        assert_eq!(c.query().page, 2);

        c.on_search_input("char", t0);
        assert!(c.tick(t0 + SEARCH_DEBOUNCE).is_some());
        assert_eq!(c.query().page, 0);
    }

    #[test]
    fn test_search_takes_precedence_over_type() {
        let t0 = Instant::now();
        let mut c = loaded(3);
        c.on_search_input("bulba", t0);
        c.tick(t0 + SEARCH_DEBOUNCE).unwrap();

        assert_eq!(c.toggle_type(PokemonType::Fire), None);
        assert_eq!(c.query().selected_type, Some(PokemonType::Fire));

        c.on_search_input("", t0 + ms(1000));
        let request = c.tick(t0 + ms(1500)).unwrap();
        assert_eq!(request.query, ResolvedQuery::ByType { pokemon_type: PokemonType::Fire });
    }

    #[test]
    fn test_whitespace_search_is_empty() {
        let t0 = Instant::now();
        let mut c = loaded(3);
        c.on_search_input("   ", t0);
        assert_eq!(c.tick(t0 + SEARCH_DEBOUNCE), None);
        assert!(!c.has_filters());
    }

    #[test]
    fn test_toggle_same_type_clears_filter() {
        let mut c = loaded(3);
        let fire = c.toggle_type(PokemonType::Fire).unwrap();
        assert_eq!(fire.query, ResolvedQuery::ByType { pokemon_type: PokemonType::Fire });

        let back = c.toggle_type(PokemonType::Fire).unwrap();
        assert_eq!(c.query().selected_type, None);
        assert_eq!(back.query, ResolvedQuery::Page { page: 0, size: 20 });
    }

    #[test]
    fn test_set_page_with_filter_is_noop() {
        let t0 = Instant::now();
        let mut c = loaded(5);
        c.toggle_type(PokemonType::Water).unwrap();
        assert_eq!(c.set_page(3), None);

        c.toggle_type(PokemonType::Water).unwrap();
        c.on_search_input("squirtle", t0);
        c.tick(t0 + SEARCH_DEBOUNCE).unwrap();
        assert_eq!(c.set_page(1), None);
        assert_eq!(c.resolve(), ResolvedQuery::Search { name: "squirtle".to_string() });
    }

    #[test]
    fn test_set_page_clamps_to_last_page() {
        let mut c = loaded(4);
        let request = c.set_page(40).unwrap();
        assert_eq!(request.query, ResolvedQuery::Page { page: 3, size: 20 });
    }

    #[test]
    fn test_late_response_for_superseded_query_is_discarded() {
        let mut c = loaded(3);
        let a = c.toggle_type(PokemonType::Fire).unwrap();
        let b = c.toggle_type(PokemonType::Water).unwrap();

        assert_eq!(c.complete(b.seq, Ok(list(&[(7, "Squirtle")]))), Completion::Applied);
        assert_eq!(c.complete(a.seq, Ok(list(&[(4, "Charmander")]))), Completion::Stale);

        assert_eq!(c.results().items[0].name, "Squirtle");
        assert!(!c.is_loading());
    }

    #[test]
    fn test_early_response_for_superseded_query_is_discarded() {
        let mut c = loaded(3);
        let a = c.toggle_type(PokemonType::Fire).unwrap();
        let b = c.toggle_type(PokemonType::Water).unwrap();

        assert_eq!(c.complete(a.seq, Ok(list(&[(4, "Charmander")]))), Completion::Stale);
        assert!(c.is_loading());
        assert_eq!(c.complete(b.seq, Ok(list(&[(7, "Squirtle")]))), Completion::Applied);
        assert_eq!(c.results().items[0].name, "Squirtle");
    }

    #[test]
    fn test_previous_results_stay_visible_while_loading() {
        let mut c = loaded(3);
        c.toggle_type(PokemonType::Grass).unwrap();
        assert!(c.is_loading());
        assert_eq!(c.results().items[0].name, "Bulbasaur");
    }

    #[test]
    fn test_failure_then_retry_reissues_same_query() {
        let mut c = loaded(3);
        let failed = c.set_page(1).unwrap();
        let error = ApiError::Network("connection refused".into());

        assert_matches!(c.complete(failed.seq, Err(error.clone())), Completion::Failed(e) if e == error);
        assert_eq!(c.error(), Some(&error));
        assert!(!c.is_loading());

        let retry = c.retry();
        assert_eq!(retry.query, failed.query);
        assert!(retry.seq > failed.seq);
        assert!(c.error().is_none());
        assert_eq!(c.complete(failed.seq, Ok(page(1, 3))), Completion::Stale);
        assert_eq!(c.complete(retry.seq, Ok(page(1, 3))), Completion::Applied);
    }

    #[test]
    fn test_pagination_only_for_unfiltered_multi_page_listing() {
        let mut c = loaded(10);
        let view = c.pagination().unwrap();
        assert_eq!(view.window, 0..5);

        let fire = c.toggle_type(PokemonType::Fire).unwrap();
        assert!(c.pagination().is_none());
        c.complete(fire.seq, Ok(list(&[(4, "Charmander")])));
        assert!(c.pagination().is_none());

        assert!(loaded(1).pagination().is_none());
    }

    #[test]
    fn test_clear_filters_returns_to_listing() {
        let t0 = Instant::now();
        let mut c = loaded(3);
        c.toggle_type(PokemonType::Ice).unwrap();
        c.on_search_input("lapras", t0);

        let request = c.clear_filters().unwrap();
        assert_eq!(request.query, ResolvedQuery::Page { page: 0, size: 20 });
        assert!(c.query().search.is_empty());
        assert_eq!(c.next_deadline(), None);
    }

    #[test]
    fn test_empty_result_state() {
        let mut c = controller();
        let request = c.start().unwrap();
        assert!(!c.is_empty_result());
        c.complete(request.seq, Ok(PokemonPayload::List(Vec::new())));
        assert!(c.is_empty_result());
        assert_eq!(c.result_summary(), "Showing 0 Pokémon");
    }
}
