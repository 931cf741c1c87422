//! Catalog search, type filter and pagination.
//!
//! `CatalogController` is a plain state machine; `AppState` owns it, runs the
//! `FetchRequest`s it emits on the runtime and feeds results back.

pub mod controller;
pub mod debounce;
pub mod pagination;

pub use controller::{
    CatalogController, CatalogQuery, Completion, FetchRequest, ResolvedQuery, ViewMode,
    SEARCH_DEBOUNCE,
};
pub use debounce::Debouncer;
pub use pagination::{page_window, PaginationView, PAGE_WINDOW};
