use std::collections::HashSet;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::Handle;

use crate::egui_app::api_client::{ApiClient, ApiError};
use crate::egui_app::catalog::{CatalogController, Completion, FetchRequest};
use crate::egui_app::collection::CollectionState;
use crate::egui_app::detail::{parse_number, DetailState, DetailTarget};
use crate::egui_app::form::{FormMode, PokemonForm};
use crate::egui_app::notifications::Notifications;
use crate::egui_app::pokemon_api::PokemonApi;
use crate::egui_app::session::{AuthError, SessionStore};
use crate::egui_app::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use crate::egui_app::tasks::{spawn_into, spawn_reply};
use crate::egui_app::{AppView, AuthState, Config};
use crate::shared::page::PokemonPayload;
use crate::shared::pokemon::{Pokemon, PokemonType};
use crate::shared::user::{LoginRequest, RegisterRequest, User};

/// Uniform message for failed catalog loads.
pub const CATALOG_LOAD_FAILED: &str = "Failed to load Pokémon data";

type CatalogReply = (u64, Result<PokemonPayload, ApiError>);
type DetailReply = (DetailTarget, Result<Pokemon, ApiError>);

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    runtime: Handle,
    api: PokemonApi,
    pub session: SessionStore,

    pub auth_state: AuthState,
    pub current_view: AppView,
    /// Where to go after a login forced by an auth-only view.
    pub return_to: Option<AppView>,
    pub menu_open: bool,
    pub notifications: Notifications,

    pub username_input: String,
    pub email_input: String,
    pub password_input: String,
    pub confirm_password_input: String,
    pub first_name_input: String,
    pub last_name_input: String,
    pub is_signup_mode: bool,
    pub auth_result: Option<Receiver<Result<User, AuthError>>>,
    pub profile_result: Option<Receiver<Result<User, AuthError>>>,

    pub catalog: CatalogController,
    pub search_input: String,
    catalog_started: bool,
    catalog_tx: Sender<CatalogReply>,
    catalog_rx: Receiver<CatalogReply>,

    pub detail: DetailState,
    pub jump_input: String,
    detail_result: Option<Receiver<DetailReply>>,

    pub collection: CollectionState,
    collection_result: Option<Receiver<Result<PokemonPayload, ApiError>>>,
    delete_result: Option<Receiver<(i64, Result<(), ApiError>)>>,

    pub form: PokemonForm,
    form_result: Option<Receiver<Result<Pokemon, ApiError>>>,

    /// Local only, cleared on logout.
    pub favourites: HashSet<i64>,
}

impl AppState {
    /// State backed by the session file from `Config`.
    pub fn new(runtime: Handle) -> Self {
        let config = Config::new();
        let storage: Arc<dyn KeyValueStorage> = match FileStorage::open(config.storage_path()) {
            Ok(storage) => Arc::new(storage),
            Err(e) => {
                tracing::error!("Session storage unavailable, falling back to memory: {}", e);
                Arc::new(MemoryStorage::new())
            }
        };
        Self::with_parts(config, storage, runtime)
    }

    pub fn with_parts(config: Config, storage: Arc<dyn KeyValueStorage>, runtime: Handle) -> Self {
        let client = ApiClient::new(config.clone(), storage.clone());
        let session = SessionStore::new(storage, client.clone());
        let mut notifications = Notifications::default();

        let auth_state = match session.init() {
            Ok(Some(user)) => AuthState::signed_in(user),
            Ok(None) => AuthState::new(),
            Err(e) => {
                notifications.error(format!("Could not restore session: {}", e.message()));
                AuthState::new()
            }
        };

        let (catalog_tx, catalog_rx) = channel();
        tracing::info!("AppState initialized against {}", config.server_url());

        Self {
            catalog: CatalogController::new(config.page_size(), config.search_debounce()),
            config,
            runtime,
            api: PokemonApi::new(client),
            session,
            auth_state,
            current_view: AppView::Home,
            return_to: None,
            menu_open: false,
            notifications,
            username_input: String::new(),
            email_input: String::new(),
            password_input: String::new(),
            confirm_password_input: String::new(),
            first_name_input: String::new(),
            last_name_input: String::new(),
            is_signup_mode: false,
            auth_result: None,
            profile_result: None,
            search_input: String::new(),
            catalog_started: false,
            catalog_tx,
            catalog_rx,
            detail: DetailState::Idle,
            jump_input: String::new(),
            detail_result: None,
            collection: CollectionState::new(),
            collection_result: None,
            delete_result: None,
            form: PokemonForm::new(),
            form_result: None,
            favourites: HashSet::new(),
        }
    }

    /// Drain finished work and fire due timers. Called once per frame.
    pub fn poll(&mut self, now: Instant) {
        self.check_auth_result();
        self.check_profile_result();

        if let Some(request) = self.catalog.tick(now) {
            self.dispatch_catalog(request);
        }
        self.check_catalog_results();
        self.check_detail_result();
        self.check_collection_result();
        self.check_delete_result();
        self.check_form_result();

        self.notifications.prune(now);
    }

    /// Anything in flight or scheduled that needs another frame.
    pub fn has_pending_work(&self) -> bool {
        self.auth_result.is_some()
            || self.profile_result.is_some()
            || self.catalog.is_loading()
            || self.catalog.next_deadline().is_some()
            || self.detail_result.is_some()
            || self.collection_result.is_some()
            || self.delete_result.is_some()
            || self.form_result.is_some()
            || !self.notifications.is_empty()
    }

    // ----- navigation -----

    pub fn navigate(&mut self, view: AppView) {
        self.menu_open = false;
        if view.requires_auth() && !self.session.is_authenticated() {
            self.return_to = Some(view);
            self.is_signup_mode = false;
            self.current_view = AppView::Auth;
            self.notifications.info("Please log in to continue");
            return;
        }

        self.current_view = view;
        match view {
            AppView::Catalog => self.ensure_catalog_started(),
            AppView::Collection => self.load_collection(),
            AppView::Profile => self.refresh_profile(),
            _ => {}
        }
    }

    /// Route an API failure: expired credentials end the session, the rest notify.
    pub fn handle_api_error(&mut self, error: &ApiError, context: &str) {
        if error.is_unauthorized() {
            tracing::warn!("Unauthorized response ({}), clearing session", error);
            if let Err(e) = self.session.logout() {
                tracing::error!("Failed to clear session: {}", e);
            }
            self.reset_session_state();
            self.notifications.error("Your session has expired. Please log in again.");
            self.is_signup_mode = false;
            self.current_view = AppView::Auth;
        } else {
            self.notifications.error(format!("{}: {}", context, error.message()));
        }
    }

    fn handle_auth_error(&mut self, error: AuthError, context: &str) {
        match error {
            AuthError::Api(e) => self.handle_api_error(&e, context),
            other => {
                self.notifications.error(format!("{}: {}", context, other.message()));
            }
        }
    }

    fn reset_session_state(&mut self) {
        self.auth_state = AuthState::new();
        self.favourites.clear();
        self.collection.reset();
        self.menu_open = false;
    }

    // ----- authentication -----

    pub fn check_auth_result(&mut self) {
        let Some(rx) = &self.auth_result else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.auth_result = None;
        self.auth_state.loading = false;

        match result {
            Ok(user) if self.session.is_authenticated() => {
                let greeting = if self.is_signup_mode {
                    format!("Welcome to the Pokédex, {}!", user.display_name())
                } else {
                    format!("Welcome back, {}!", user.display_name())
                };
                self.notifications.success(greeting);
                self.auth_state = AuthState::signed_in(user);
                self.clear_auth_inputs();
                self.is_signup_mode = false;
                let next = self.return_to.take().unwrap_or(AppView::Home);
                self.navigate(next);
            }
            Ok(user) => {
                tracing::info!("Account {} created without a session", user.username);
                self.notifications.success("Account created. Please log in.");
                self.password_input.clear();
                self.confirm_password_input.clear();
                self.is_signup_mode = false;
            }
            Err(e) => {
                tracing::warn!("Authentication failed: {}", e);
                let message = e.message();
                self.notifications.error(message.clone());
                self.auth_state.set_error(message);
            }
        }
    }

    pub fn handle_login(&mut self) {
        if self.username_input.trim().is_empty() || self.password_input.is_empty() {
            self.auth_state
                .set_error("Username and password are required".to_string());
            return;
        }

        self.auth_state.loading = true;
        self.auth_state.error = None;

        let credentials = LoginRequest {
            username: self.username_input.trim().to_string(),
            password: self.password_input.clone(),
        };
        let session = self.session.clone();
        self.auth_result = Some(spawn_reply(&self.runtime, async move {
            session.login(credentials).await
        }));
    }

    pub fn handle_signup(&mut self) {
        if self.username_input.trim().is_empty() {
            self.auth_state.set_error("Username is required".to_string());
            return;
        }

        if self.email_input.trim().is_empty() || self.password_input.is_empty() {
            self.auth_state
                .set_error("Email and password are required".to_string());
            return;
        }

        if !self.email_input.contains('@') || !self.email_input.contains('.') {
            self.auth_state
                .set_error("Please enter a valid email address".to_string());
            return;
        }

        if self.password_input != self.confirm_password_input {
            self.auth_state.set_error("Passwords do not match".to_string());
            return;
        }

        self.auth_state.loading = true;
        self.auth_state.error = None;

        let optional = |s: &str| Some(s.trim().to_string()).filter(|s| !s.is_empty());
        let new_user = RegisterRequest {
            username: self.username_input.trim().to_string(),
            email: self.email_input.trim().to_string(),
            password: self.password_input.clone(),
            first_name: optional(&self.first_name_input),
            last_name: optional(&self.last_name_input),
        };
        let session = self.session.clone();
        self.auth_result = Some(spawn_reply(&self.runtime, async move {
            session.register(new_user).await
        }));
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.session.logout() {
            self.notifications.error(format!("Failed to log out: {}", e.message()));
            return;
        }
        self.reset_session_state();
        self.clear_auth_inputs();
        self.current_view = AppView::Home;
        self.notifications.success("Logged out successfully");
    }

    pub fn toggle_auth_mode(&mut self) {
        self.is_signup_mode = !self.is_signup_mode;
        self.auth_state.clear_error();
        self.password_input.clear();
        self.confirm_password_input.clear();
    }

    fn clear_auth_inputs(&mut self) {
        self.username_input.clear();
        self.email_input.clear();
        self.password_input.clear();
        self.confirm_password_input.clear();
        self.first_name_input.clear();
        self.last_name_input.clear();
    }

    pub fn refresh_profile(&mut self) {
        let session = self.session.clone();
        self.profile_result = Some(spawn_reply(&self.runtime, async move {
            session.fetch_current_user().await
        }));
    }

    fn check_profile_result(&mut self) {
        let Some(rx) = &self.profile_result else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.profile_result = None;

        match result {
            Ok(user) => self.auth_state.user = Some(user),
            Err(e) => self.handle_auth_error(e, "Failed to load profile"),
        }
    }

    // ----- catalog -----

    pub fn ensure_catalog_started(&mut self) {
        if self.catalog_started {
            return;
        }
        self.catalog_started = true;
        if let Some(request) = self.catalog.start() {
            self.dispatch_catalog(request);
        }
    }

    pub fn on_search_changed(&mut self) {
        self.catalog.on_search_input(self.search_input.clone(), Instant::now());
    }

    pub fn toggle_type(&mut self, pokemon_type: PokemonType) {
        if let Some(request) = self.catalog.toggle_type(pokemon_type) {
            self.dispatch_catalog(request);
        }
    }

    pub fn set_page(&mut self, page: u32) {
        if let Some(request) = self.catalog.set_page(page) {
            self.dispatch_catalog(request);
        }
    }

    pub fn clear_filters(&mut self) {
        self.search_input.clear();
        if let Some(request) = self.catalog.clear_filters() {
            self.dispatch_catalog(request);
        }
    }

    pub fn retry_catalog(&mut self) {
        let request = self.catalog.retry();
        self.dispatch_catalog(request);
    }

    fn dispatch_catalog(&mut self, request: FetchRequest) {
        let api = self.api.clone();
        spawn_into(&self.runtime, self.catalog_tx.clone(), async move {
            let outcome = api.fetch_catalog(&request.query).await;
            (request.seq, outcome)
        });
    }

    fn check_catalog_results(&mut self) {
        while let Ok((seq, outcome)) = self.catalog_rx.try_recv() {
            if let Completion::Failed(e) = self.catalog.complete(seq, outcome) {
                if e.is_unauthorized() {
                    self.handle_api_error(&e, CATALOG_LOAD_FAILED);
                } else {
                    self.notifications.error(CATALOG_LOAD_FAILED);
                }
            }
        }
    }

    // ----- favourites and local collection -----

    pub fn toggle_favourite(&mut self, pokemon: &Pokemon) {
        if !self.session.is_authenticated() {
            self.notifications.error("Please login to add favorites");
            return;
        }
        if self.favourites.remove(&pokemon.id) {
            self.notifications.success("Removed from favorites");
        } else {
            self.favourites.insert(pokemon.id);
            self.notifications.success("Added to favorites");
        }
    }

    pub fn add_to_collection(&mut self, pokemon: &Pokemon) {
        if !self.session.is_authenticated() {
            self.notifications.error("Please login to add Pokémon to your collection");
            return;
        }
        self.notifications
            .success(format!("{} added to your collection!", pokemon.name));
    }

    // ----- detail -----

    pub fn open_detail(&mut self, id: i64) {
        self.load_detail(DetailTarget::Id(id));
    }

    pub fn jump_to_number(&mut self) {
        match parse_number(&self.jump_input) {
            Some(number) => self.load_detail(DetailTarget::Number(number)),
            None => {
                self.notifications.error("Enter a Pokédex number, e.g. 25");
            }
        }
    }

    pub fn retry_detail(&mut self) {
        if let Some(target) = self.detail.target() {
            self.load_detail(target);
        }
    }

    fn load_detail(&mut self, target: DetailTarget) {
        self.menu_open = false;
        self.current_view = AppView::Detail;
        self.detail = DetailState::Loading(target);

        let api = self.api.clone();
        self.detail_result = Some(spawn_reply(&self.runtime, async move {
            let outcome = match target {
                DetailTarget::Id(id) => api.get(id).await,
                DetailTarget::Number(number) => api.get_by_number(number).await,
            };
            (target, outcome)
        }));
    }

    fn check_detail_result(&mut self) {
        let Some(rx) = &self.detail_result else { return };
        let Ok((target, outcome)) = rx.try_recv() else { return };
        self.detail_result = None;

        if let Err(e) = &outcome {
            if e.is_unauthorized() {
                self.handle_api_error(e, "Failed to load Pokémon details");
                self.detail = DetailState::Idle;
                return;
            }
        }
        if self.detail.complete(target, outcome) {
            if let DetailState::Failed { error, .. } = &self.detail {
                let error = error.clone();
                self.handle_api_error(&error, "Failed to load Pokémon details");
            }
        }
    }

    // ----- collection -----

    pub fn load_collection(&mut self) {
        self.collection.begin_load();
        let api = self.api.clone();
        self.collection_result = Some(spawn_reply(&self.runtime, async move {
            api.my_pokemons().await
        }));
    }

    fn check_collection_result(&mut self) {
        let Some(rx) = &self.collection_result else { return };
        let Ok(outcome) = rx.try_recv() else { return };
        self.collection_result = None;

        if let Err(e) = self.collection.finish_load(outcome) {
            self.handle_api_error(&e, "Failed to load your Pokémon collection");
        }
    }

    pub fn confirm_delete(&mut self) {
        let Some(id) = self.collection.confirm() else { return };
        let api = self.api.clone();
        self.delete_result = Some(spawn_reply(&self.runtime, async move {
            (id, api.delete(id).await)
        }));
    }

    fn check_delete_result(&mut self) {
        let Some(rx) = &self.delete_result else { return };
        let Ok((id, outcome)) = rx.try_recv() else { return };
        self.delete_result = None;

        let name = self.collection.name_of(id).unwrap_or("Pokémon").to_string();
        match self.collection.finish_delete(id, outcome) {
            Ok(()) => {
                self.catalog.results_mut().remove(id);
                if self.detail.pokemon().is_some_and(|p| p.id == id) {
                    self.detail = DetailState::Idle;
                }
                self.notifications.success(format!("{} deleted", name));
            }
            Err(e) => self.handle_api_error(&e, "Failed to delete Pokémon"),
        }
    }

    // ----- add / edit form -----

    pub fn open_create_form(&mut self) {
        self.form = PokemonForm::new();
        self.navigate(AppView::PokemonForm);
    }

    pub fn open_edit_form(&mut self, pokemon: &Pokemon) {
        self.form = PokemonForm::from_pokemon(pokemon);
        self.navigate(AppView::PokemonForm);
    }

    pub fn submit_form(&mut self) {
        if self.form.submitting {
            return;
        }
        let body = match self.form.validate() {
            Ok(body) => body,
            Err(errors) => {
                self.form.errors = errors;
                return;
            }
        };
        self.form.errors.clear();
        self.form.submitting = true;

        let api = self.api.clone();
        let mode = self.form.mode;
        self.form_result = Some(spawn_reply(&self.runtime, async move {
            match mode {
                FormMode::Create => api.create(&body).await,
                FormMode::Edit(id) => api.update(id, &body).await,
            }
        }));
    }

    fn check_form_result(&mut self) {
        let Some(rx) = &self.form_result else { return };
        let Ok(outcome) = rx.try_recv() else { return };
        self.form_result = None;
        self.form.submitting = false;

        match (self.form.mode, outcome) {
            (FormMode::Create, Ok(created)) => {
                tracing::info!("Created {} ({})", created.name, created.id);
                self.notifications.success("Pokémon added successfully!");
                self.form = PokemonForm::new();
                self.navigate(AppView::Collection);
            }
            (FormMode::Edit(_), Ok(updated)) => {
                self.notifications.success("Pokémon updated successfully!");
                self.form = PokemonForm::new();
                self.current_view = AppView::Detail;
                self.detail = DetailState::Loaded(updated);
            }
            (FormMode::Create, Err(e)) => self.handle_api_error(&e, "Failed to add Pokémon"),
            (FormMode::Edit(_), Err(e)) => self.handle_api_error(&e, "Failed to update Pokémon"),
        }
    }
}
