//! Durable key store for session state.
//!
//! One small JSON file per key under the state directory. Writers race
//! last-write-wins across tabs/processes of the same user; there is no
//! locking. Keys form a closed set (`StoreKey`) with a typed encoding per
//! key rather than arbitrary payloads.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

/// The closed set of persisted keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKey {
    /// Whether a session was alive before this load. JSON boolean.
    Authenticated,
    /// Access token from the last successful login. JSON string.
    AccessToken,
}

impl StoreKey {
    fn file_name(self) -> &'static str {
        match self {
            StoreKey::Authenticated => "authenticated.json",
            StoreKey::AccessToken => "access_token.json",
        }
    }
}

/// A value for a persisted key, typed to match the key's encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreValue {
    Flag(bool),
    Text(String),
}

impl StoreValue {
    /// A false flag clears its key instead of writing it, so a later read of
    /// a missing key and a read of an explicit false are indistinguishable.
    fn clears_key(&self) -> bool {
        matches!(self, StoreValue::Flag(false))
    }

    fn encode(&self) -> Result<String> {
        let encoded = match self {
            StoreValue::Flag(flag) => serde_json::to_string(flag)?,
            StoreValue::Text(text) => serde_json::to_string(text)?,
        };
        Ok(encoded)
    }
}

/// File-backed store for the persisted session keys.
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create state directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// Write or clear each entry. An absent value, or a `Flag(false)`,
    /// removes the key; anything else writes its JSON encoding.
    pub fn persist(&self, entries: &[(StoreKey, Option<StoreValue>)]) -> Result<()> {
        for (key, value) in entries {
            match value {
                Some(value) if !value.clears_key() => {
                    let contents = value.encode()?;
                    std::fs::write(self.key_path(*key), contents)
                        .with_context(|| format!("Failed to persist {key:?}"))?;
                }
                _ => self.remove(*key)?,
            }
        }
        Ok(())
    }

    /// Read a boolean key. Missing, unreadable, or undecodable all count as
    /// false: a corrupt flag must never wedge startup.
    pub fn read_flag(&self, key: StoreKey) -> bool {
        match self.read_raw(key) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|_| {
                debug!(?key, "Unreadable persisted flag, treating as unset");
                false
            }),
            None => false,
        }
    }

    /// Read a text key; `None` on absence or on a non-string encoding.
    pub fn read_text(&self, key: StoreKey) -> Option<String> {
        let raw = self.read_raw(key)?;
        serde_json::from_str(&raw).ok()
    }

    fn remove(&self, key: StoreKey) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove persisted {key:?}"))?;
        }
        Ok(())
    }

    fn read_raw(&self, key: StoreKey) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn key_path(&self, key: StoreKey) -> PathBuf {
        self.dir.join(key.file_name())
    }
}
