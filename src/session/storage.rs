/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::constants::SESSION_TOKEN_KEY;
use crate::error::AppError;
use crate::session::token::SessionToken;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read-only access to wherever the login flow left the session token.
///
/// Operations never consult a source themselves; callers read the token and pass
/// it explicitly to the authenticated writes.
pub trait TokenSource: Send + Sync {
    /// Reads a raw value by key
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Reads the session token, if any
    fn session_token(&self) -> Result<Option<SessionToken>, AppError> {
        Ok(self.get_item(SESSION_TOKEN_KEY)?.map(SessionToken::from))
    }
}

/// Local storage persisted as a flat JSON object of string keys to string values
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    /// Creates a storage reader for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a storage reader for the file named in the configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.storage.local_storage_path)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<HashMap<String, String>, AppError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Local storage {} does not exist", self.path.display());
                Ok(HashMap::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl TokenSource for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.read_entries()?.remove(key))
    }
}

/// In-memory storage, useful when the host application keeps the token itself
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage already holding `token` under the session key
    pub fn with_session_token(token: impl Into<String>) -> Self {
        let mut storage = Self::new();
        storage.set_item(SESSION_TOKEN_KEY, token);
        storage
    }

    /// Stores a value under `key`
    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl TokenSource for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.get(key).cloned())
    }
}
