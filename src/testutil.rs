//! Shared fakes for the store and guard tests.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::api::{ApiError, AuthBackend};
use crate::guard::Navigator;
use crate::session::{Credentials, LocalStore, Profile};

/// Unique state directory under the system temp dir.
pub fn temp_state_dir() -> PathBuf {
    std::env::temp_dir().join(format!("sessionguard-test-{}", uuid::Uuid::new_v4()))
}

pub fn local_store() -> LocalStore {
    LocalStore::new(temp_state_dir()).unwrap()
}

pub fn test_credentials() -> Credentials {
    Credentials::new("user@example.com", "hunter2")
}

pub fn test_profile() -> Profile {
    serde_json::from_value(serde_json::json!({
        "name": "Hasebe",
        "email": "user@example.com",
    }))
    .unwrap()
}

/// Configurable backend fake with call counters.
#[derive(Clone)]
pub struct FakeBackend {
    login_ok: bool,
    profile_ok: bool,
    logout_ok: bool,
    profile_calls: Arc<AtomicUsize>,
    logout_calls: Arc<AtomicUsize>,
}

impl FakeBackend {
    pub fn healthy() -> Self {
        Self {
            login_ok: true,
            profile_ok: true,
            logout_ok: true,
            profile_calls: Arc::new(AtomicUsize::new(0)),
            logout_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_login_rejected(mut self) -> Self {
        self.login_ok = false;
        self
    }

    pub fn with_profile_rejected(mut self) -> Self {
        self.profile_ok = false;
        self
    }

    pub fn with_logout_rejected(mut self) -> Self {
        self.logout_ok = false;
        self
    }

    pub fn profile_calls(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
    }

    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }
}

impl AuthBackend for FakeBackend {
    async fn login(&self, _credentials: &Credentials) -> Result<String, ApiError> {
        if self.login_ok {
            Ok("grant-1".to_string())
        } else {
            Err(ApiError::Unauthorized)
        }
    }

    async fn exchange_token(&self, grant_token: &str) -> Result<String, ApiError> {
        assert_eq!(grant_token, "grant-1");
        if self.login_ok {
            Ok("access-1".to_string())
        } else {
            Err(ApiError::Unauthorized)
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        if self.logout_ok {
            Ok(())
        } else {
            Err(ApiError::ServerError("backend unavailable".to_string()))
        }
    }

    async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        if self.profile_ok {
            Ok(test_profile())
        } else {
            Err(ApiError::Unauthorized)
        }
    }
}

/// Navigator that records every requested path.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    paths: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}
