//! Offline stand-in for the authentication backend.
//!
//! Useful while the real backend contract is still settling: the login call
//! resolves unconditionally after a fixed delay, which keeps the host's
//! pending-login UI exercisable without network access.

use std::time::Duration;

use crate::session::{Credentials, Profile};

use super::{ApiError, AuthBackend};

/// Simulated round-trip time for the stubbed credential exchange.
const STUB_LOGIN_DELAY_MS: u64 = 1000;

/// Backend stand-in that performs no I/O.
#[derive(Debug, Clone)]
pub struct StubBackend {
    succeed: bool,
}

impl StubBackend {
    /// Stub whose calls all succeed.
    pub fn new() -> Self {
        Self { succeed: true }
    }

    /// Stub whose login and profile calls are rejected.
    pub fn failing() -> Self {
        Self { succeed: false }
    }
}

impl Default for StubBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthBackend for StubBackend {
    async fn login(&self, _credentials: &Credentials) -> Result<String, ApiError> {
        tokio::time::sleep(Duration::from_millis(STUB_LOGIN_DELAY_MS)).await;
        if self.succeed {
            Ok("stub-grant-token".to_string())
        } else {
            Err(ApiError::Unauthorized)
        }
    }

    async fn exchange_token(&self, _grant_token: &str) -> Result<String, ApiError> {
        if self.succeed {
            Ok("stub-access-token".to_string())
        } else {
            Err(ApiError::Unauthorized)
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        Ok(())
    }

    async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        if self.succeed {
            Ok(Profile::placeholder())
        } else {
            Err(ApiError::Unauthorized)
        }
    }
}
