//! Client-side session and authentication guard.
//!
//! This crate provides the pieces a host application wires together to keep
//! a user's login state alive across restarts:
//! - `SessionStore`: in-memory session (profile + access token) with login,
//!   logout, and restore actions
//! - `require_session`: pre-navigation guard that restores a persisted
//!   session or redirects to the login route
//! - `LocalStore`: durable key store for the persisted session flag
//!
//! The backend and the router stay outside the crate; the host injects them
//! through the `AuthBackend` and `Navigator` traits.

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod session;

#[cfg(test)]
pub(crate) mod testutil;

pub use api::{ApiClient, ApiError, AuthBackend, StubBackend};
pub use config::Config;
pub use error::AuthError;
pub use guard::{require_session, GuardDecision, Navigator};
pub use session::{Credentials, LocalStore, Profile, SessionStore, StoreKey, StoreValue};
