//! Remote authentication calls consumed by the session store.
//!
//! The store talks to the backend through the `AuthBackend` trait so the
//! host can swap the real client for the offline stub (or a test fake).
//! `ApiClient` implements the real contract: cookie-based transport
//! credentials, a grant/access token exchange, and a best-effort logout.

pub mod client;
pub mod error;
pub mod stub;

pub use client::ApiClient;
pub use error::ApiError;
pub use stub::StubBackend;

use std::future::Future;

use crate::session::{Credentials, Profile};

/// Backend seam for the session store.
///
/// All calls are single-shot: the store never retries a rejected call.
pub trait AuthBackend {
    /// Exchange credentials for a session grant token.
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<String, ApiError>> + Send;

    /// Exchange a grant token for an access token.
    fn exchange_token(
        &self,
        grant_token: &str,
    ) -> impl Future<Output = Result<String, ApiError>> + Send;

    /// Invalidate the server-side session. Best-effort: callers may discard
    /// the outcome.
    fn logout(&self) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Fetch the current user's profile using the transport-level session.
    fn fetch_profile(&self) -> impl Future<Output = Result<Profile, ApiError>> + Send;
}
