//! HTTP client for the authentication backend.
//!
//! Implements the four calls the session store consumes: login (credentials
//! to grant token), token (grant token to access token), logout (best-effort
//! invalidation), and profile. The backend identifies the caller through
//! transport-level credentials, so the client keeps a cookie store; the
//! access token is returned to the host for its own request headers.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::session::{Credentials, Profile};

use super::{ApiError, AuthBackend};

/// HTTP request timeout in seconds.
/// No retry layer sits above this; a slow backend surfaces as a plain error.
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct GrantResponse {
    grant_token: String,
}

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    grant_token: &'a str,
}

/// The token endpoint nests the access token inside an object.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: AccessToken,
}

#[derive(Debug, Deserialize)]
struct AccessToken {
    value: String,
}

/// API client for the authentication backend.
/// Clone is cheap - reqwest::Client uses Arc internally, so clones share the
/// connection pool and the cookie store.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }
}

impl AuthBackend for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let url = format!("{}/login", self.base_url);

        let response = self.client.post(&url).json(credentials).send().await?;
        let response = Self::check_response(response).await?;

        let grant: GrantResponse = response.json().await?;
        debug!("Credential exchange succeeded");
        Ok(grant.grant_token)
    }

    async fn exchange_token(&self, grant_token: &str) -> Result<String, ApiError> {
        let url = format!("{}/token", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&TokenRequest { grant_token })
            .send()
            .await?;
        let response = Self::check_response(response).await?;

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token.value)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let url = format!("{}/logout", self.base_url);

        let response = self.client.post(&url).send().await?;
        Self::check_response(response).await?;
        Ok(())
    }

    async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        let url = format!("{}/profile", self.base_url);

        let response = self.client.get(&url).send().await?;
        let response = Self::check_response(response).await?;

        Ok(response.json().await?)
    }
}
