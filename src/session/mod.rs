//! Session state management.
//!
//! This module provides:
//! - `SessionStore`: the in-memory session (profile + access token) and its
//!   login/logout/restore actions
//! - `LocalStore`: durable key store backing the persisted session flag
//!
//! The persisted `Authenticated` flag survives restarts and is the source of
//! truth for "was this session alive before this load".

pub mod persist;
pub mod store;

pub use persist::{LocalStore, StoreKey, StoreValue};
pub use store::{Credentials, Profile, SessionStore};
