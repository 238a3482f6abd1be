//! LocalStore - durable key/value storage
//!
//! File-backed replacement for the browser's localStorage: a flat string
//! map persisted as JSON under the partner's data directory. Holds the
//! bearer tokens, the partner id and the serialized profile.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use shared::models::Partner;
use thiserror::Error;

/// Bearer token for the activity vertical (written at login)
pub const KEY_TOKEN_ACTI: &str = "token_partner_acti";
/// Bearer token for the restaurant vertical (used by the dish panel)
pub const KEY_TOKEN_REST: &str = "token_partner_rest";
/// Authenticated partner id
pub const KEY_PARTNER_ID: &str = "id_partner_acti";
/// JSON-encoded partner profile
pub const KEY_USER: &str = "user";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durable local key/value store
pub struct LocalStore {
    /// Store file path: {data_dir}/local_store.json
    file_path: PathBuf,
    /// In-memory copy, written through on every mutation
    data: BTreeMap<String, String>,
}

impl LocalStore {
    const FILE_NAME: &'static str = "local_store.json";

    /// Create an empty store rooted at the given data directory
    pub fn new(data_dir: &Path) -> Self {
        Self {
            file_path: data_dir.join(Self::FILE_NAME),
            data: BTreeMap::new(),
        }
    }

    /// Load the store from disk; a missing file yields an empty store
    pub fn load(data_dir: &Path) -> Result<Self, StoreError> {
        let file_path = data_dir.join(Self::FILE_NAME);

        let data = if file_path.exists() {
            let content = std::fs::read_to_string(&file_path)?;
            serde_json::from_str(&content)?
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %file_path.display(), entries = data.len(), "Local store loaded");
        Ok(Self { file_path, data })
    }

    /// Persist the store to disk
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!(path = %self.file_path.display(), "Local store saved");
        Ok(())
    }

    /// Read a value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Write a value and persist
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<(), StoreError> {
        self.data.insert(key.into(), value.into());
        self.save()
    }

    /// Remove a value and persist
    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.data.remove(key);
        self.save()
    }

    /// Drop all entries and persist
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.data.clear();
        self.save()
    }

    // ============ Identity helpers ============

    /// Store the partner profile under the `user` key
    pub fn set_user(&mut self, partner: &Partner) -> Result<(), StoreError> {
        let json = serde_json::to_string(partner)?;
        self.set(KEY_USER, json)
    }

    /// Read the stored partner profile
    ///
    /// Malformed JSON is logged and treated as unset rather than an error.
    pub fn user(&self) -> Option<Partner> {
        let raw = self.get(KEY_USER)?;
        match serde_json::from_str(raw) {
            Ok(partner) => Some(partner),
            Err(e) => {
                tracing::warn!(error = %e, "Malformed stored user profile, treating as unset");
                None
            }
        }
    }
}
