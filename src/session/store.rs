//! The in-memory session store.
//!
//! One store instance lives for the lifetime of the application window and
//! is owned by the application root, which injects it into the router hook.
//! `authenticated` is derived from the presence of a profile; the persisted
//! `Authenticated` flag is what survives a restart.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::AuthBackend;
use crate::error::AuthError;
use crate::guard::Navigator;

use super::persist::{LocalStore, StoreKey, StoreValue};

/// Opaque record representing the logged-in user's identity data.
///
/// The store never looks inside it; it is set atomically to a full value or
/// cleared, never partially constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Profile(serde_json::Map<String, serde_json::Value>);

impl Profile {
    /// Non-null placeholder applied right after a successful login, before
    /// the first real profile fetch.
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.0.get(field)
    }
}

/// Login payload for the credential exchange.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keep the password out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Session state for one application window.
///
/// Mutating operations take `&mut self`; nothing runs in parallel on one
/// store, and races through the shared `LocalStore` resolve last-write-wins.
pub struct SessionStore<B, N> {
    profile: Option<Profile>,
    access_token: String,
    store: LocalStore,
    backend: B,
    navigator: N,
    login_route: String,
}

impl<B: AuthBackend, N: Navigator> SessionStore<B, N> {
    pub fn new(backend: B, navigator: N, store: LocalStore, login_route: impl Into<String>) -> Self {
        Self {
            profile: None,
            access_token: String::new(),
            store,
            backend,
            navigator,
            login_route: login_route.into(),
        }
    }

    /// Derived: a session is authenticated exactly when a profile is present.
    pub fn authenticated(&self) -> bool {
        self.profile.is_some()
    }

    /// Access token from the last login, empty before one happens.
    pub fn token(&self) -> &str {
        &self.access_token
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    /// Replace the profile wholesale. No other side effects.
    pub fn set_profile(&mut self, profile: Option<Profile>) {
        self.profile = profile;
    }

    /// Write the entries to durable storage. A failed write is logged and
    /// swallowed: in-memory state stays authoritative for this window, and
    /// the next restore simply will not see the flag.
    pub fn persist(&self, entries: &[(StoreKey, Option<StoreValue>)]) {
        if let Err(err) = self.store.persist(entries) {
            warn!(error = %err, "Failed to persist session state");
        }
    }

    /// Exchange credentials for a grant token and then an access token.
    ///
    /// On success the access token and a placeholder profile are set and the
    /// `Authenticated` flag is persisted. On rejection nothing is mutated.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<(), AuthError> {
        let grant_token = match self.backend.login(credentials).await {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "Credential exchange rejected");
                return Err(AuthError::LoginFailure);
            }
        };

        let access_token = match self.backend.exchange_token(&grant_token).await {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "Token exchange rejected");
                return Err(AuthError::LoginFailure);
            }
        };

        self.access_token = access_token;
        self.set_profile(Some(Profile::placeholder()));
        self.persist(&[
            (StoreKey::Authenticated, Some(StoreValue::Flag(true))),
            (
                StoreKey::AccessToken,
                Some(StoreValue::Text(self.access_token.clone())),
            ),
        ]);
        Ok(())
    }

    /// Clear the session and navigate to the login route.
    ///
    /// The remote invalidation is best-effort: its outcome is consumed here
    /// and never blocks local cleanup, so this operation cannot fail. Safe to
    /// call on an already-cleared session; it re-navigates.
    pub async fn logout(&mut self) {
        if let Err(err) = self.backend.logout().await {
            debug!(error = %err, "Remote logout failed, clearing local session anyway");
        }

        self.set_profile(None);
        self.access_token.clear();
        self.persist(&[
            (StoreKey::Authenticated, Some(StoreValue::Flag(false))),
            (StoreKey::AccessToken, None),
        ]);
        self.navigator.navigate_to(&self.login_route);
    }

    /// Rebuild the session from persisted state.
    ///
    /// The persisted `Authenticated` flag decides whether a session was alive
    /// before this load; if so, the profile is re-fetched from the backend.
    /// Any failure clears the session via `logout` and yields `NeedsLogin`.
    /// Idempotent: repeated calls re-fetch and re-set the same profile.
    pub async fn restore_login_state(&mut self) -> Result<(), AuthError> {
        if !self.store.read_flag(StoreKey::Authenticated) {
            self.logout().await;
            return Err(AuthError::NeedsLogin);
        }

        match self.backend.fetch_profile().await {
            Ok(profile) => {
                if let Some(token) = self.store.read_text(StoreKey::AccessToken) {
                    self.access_token = token;
                }
                self.set_profile(Some(profile));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Profile fetch failed during session restore");
                self.logout().await;
                Err(AuthError::NeedsLogin)
            }
        }
    }
}

impl<N: Navigator> SessionStore<crate::api::ApiClient, N> {
    /// Wire a store against the real backend from the application config.
    pub fn from_config(config: &crate::config::Config, navigator: N) -> anyhow::Result<Self> {
        let backend = crate::api::ApiClient::new(config.api_base.clone())?;
        let store = LocalStore::new(crate::config::Config::state_dir()?)?;
        Ok(Self::new(
            backend,
            navigator,
            store,
            config.login_route.clone(),
        ))
    }
}
