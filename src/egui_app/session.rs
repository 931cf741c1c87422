//! Session Store
//!
//! Owns the signed-in identity. The bearer token and the JSON user record
//! live in `KeyValueStorage` under `TOKEN_KEY` / `USER_KEY`; the token's
//! presence is the only authentication signal. The store is created once in
//! `AppState` and handed to whoever needs it.

use std::sync::Arc;

use thiserror::Error;

use crate::egui_app::api_client::{ApiClient, ApiError};
use crate::egui_app::auth;
use crate::egui_app::storage::{KeyValueStorage, StorageError, TOKEN_KEY, USER_KEY};
use crate::shared::user::{LoginRequest, RegisterRequest, RegisterResponse, User};

/// Session failures
#[derive(Debug, Error)]
pub enum AuthError {
    /// Credentials rejected; carries the backend's message.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Text suitable for a notification.
    pub fn message(&self) -> String {
        match self {
            AuthError::Authentication { message } => message.clone(),
            AuthError::Api(e) => e.message(),
            AuthError::Storage(e) => e.to_string(),
        }
    }

    fn from_credentials_failure(err: ApiError) -> Self {
        match err {
            ApiError::Status { status: 400 | 401 | 403, message } => {
                AuthError::Authentication { message }
            }
            other => AuthError::Api(other),
        }
    }
}

/// Persistent session store.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
    api: ApiClient,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>, api: ApiClient) -> Self {
        Self { storage, api }
    }

    /// Restore the session at startup.
    ///
    /// A token without a readable user record is not a session; both entries
    /// are removed in that case.
    pub fn init(&self) -> Result<Option<User>, AuthError> {
        let token = self.storage.get(TOKEN_KEY)?.filter(|t| !t.is_empty());
        let user = self.stored_user()?;

        match (token, user) {
            (Some(_), Some(user)) => {
                tracing::info!("Restored session for {}", user.username);
                Ok(Some(user))
            }
            (Some(_), None) => {
                tracing::warn!("Stored token has no user record, clearing session");
                self.logout()?;
                Ok(None)
            }
            (None, Some(_)) => {
                self.logout()?;
                Ok(None)
            }
            (None, None) => Ok(None),
        }
    }

    /// Sign in and persist user + token in one write.
    pub async fn login(&self, credentials: LoginRequest) -> Result<User, AuthError> {
        let response = auth::login(&self.api, &credentials)
            .await
            .map_err(AuthError::from_credentials_failure)?;

        self.persist(&response.user, &response.token)?;
        tracing::info!("Logged in as {}", response.user.username);
        Ok(response.user)
    }

    /// Create an account. A session is stored only when the backend issues a token.
    pub async fn register(&self, new_user: RegisterRequest) -> Result<User, AuthError> {
        let response = auth::register(&self.api, &new_user)
            .await
            .map_err(AuthError::from_credentials_failure)?;

        match response {
            RegisterResponse::Session(auth) => {
                self.persist(&auth.user, &auth.token)?;
                tracing::info!("Registered and signed in as {}", auth.user.username);
                Ok(auth.user)
            }
            RegisterResponse::Created(user) => {
                tracing::info!("Registered {}", user.username);
                Ok(user)
            }
        }
    }

    /// Forget the session locally. No backend call.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.storage.remove_entries(&[USER_KEY, TOKEN_KEY])?;
        tracing::info!("Session cleared");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.storage.get(TOKEN_KEY), Ok(Some(token)) if !token.is_empty())
    }

    /// Cached user record. An undecodable record reads as absent.
    pub fn stored_user(&self) -> Result<Option<User>, AuthError> {
        let Some(raw) = self.storage.get(USER_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!("Discarding unreadable user record: {}", e);
                Ok(None)
            }
        }
    }

    /// Cached record, or `GET /auth/me` when only a token is stored.
    pub async fn current_user(&self) -> Result<Option<User>, AuthError> {
        if let Some(user) = self.stored_user()? {
            return Ok(Some(user));
        }
        if !self.is_authenticated() {
            return Ok(None);
        }
        self.fetch_current_user().await.map(Some)
    }

    /// Always ask the backend and refresh the cached record.
    pub async fn fetch_current_user(&self) -> Result<User, AuthError> {
        let user = auth::get_me(&self.api).await?;
        let raw = serde_json::to_string(&user).map_err(StorageError::from)?;
        self.storage.set(USER_KEY, &raw)?;
        Ok(user)
    }

    fn persist(&self, user: &User, token: &str) -> Result<(), AuthError> {
        let raw = serde_json::to_string(user).map_err(StorageError::from)?;
        self.storage.set_entries(&[(USER_KEY, raw.as_str()), (TOKEN_KEY, token)])?;
        Ok(())
    }
}
