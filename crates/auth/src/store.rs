//! Durable key/value storage for credential strings
//!
//! `MemoryStore` backs tests and ephemeral sessions. `FileStore` keeps the
//! entries in a JSON file so they survive restarts. Neither offers
//! multi-key atomicity: callers sequence paired writes themselves.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use recruit_common::{Error, Result};

/// Named credential slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKey {
    /// Primary session credential for the dashboard
    Token,
    /// Invitation token captured from a registration link
    TempToken,
    /// Credential extracted from the invitation token's payload
    AuthToken,
}

impl CredentialKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialKey::Token => "token",
            CredentialKey::TempToken => "tempToken",
            CredentialKey::AuthToken => "authToken",
        }
    }
}

impl std::fmt::Display for CredentialKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Key/value storage for credential strings
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-memory store; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.entries).is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.entries).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        lock(&self.entries).insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        lock(&self.entries).remove(key);
    }
}

#[derive(Debug)]
struct FileState {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileState {
    /// Write to a sibling temp file, then rename over the target
    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let staging = self.path.with_extension("tmp");
        fs::write(&staging, serde_json::to_vec_pretty(&self.entries)?)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

/// JSON-file-backed store; clones share the same file handle state
#[derive(Debug, Clone)]
pub struct FileStore {
    state: Arc<Mutex<FileState>>,
}

impl FileStore {
    /// Open the store at `path`, loading any entries written by a previous run
    ///
    /// A missing or empty file is an empty store. A file that is not a JSON
    /// object of strings is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let entries = match fs::read(&path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => BTreeMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                Error::Storage(format!(
                    "session file {} is not a string map: {}",
                    path.display(),
                    e
                ))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(path = %path.display(), entries = entries.len(), "Session store opened");

        Ok(Self {
            state: Arc::new(Mutex::new(FileState { path, entries })),
        })
    }

    pub fn path(&self) -> PathBuf {
        lock(&self.state).path.clone()
    }

    /// Apply a change and write it through, keeping memory and disk in step
    ///
    /// If the file cannot be written the entry is restored to its previous
    /// value, so a later reopen sees what this handle sees.
    fn mutate(&self, key: &str, apply: impl FnOnce(&mut BTreeMap<String, String>) -> bool) {
        let mut state = lock(&self.state);
        let previous = state.entries.get(key).cloned();
        if !apply(&mut state.entries) {
            return;
        }

        if let Err(e) = state.persist() {
            tracing::error!(
                code = e.error_code(),
                error = %e,
                path = %state.path.display(),
                key,
                "Failed to persist session store, change rolled back"
            );
            match previous {
                Some(value) => state.entries.insert(key.to_string(), value),
                None => state.entries.remove(key),
            };
        }
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.state).entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.mutate(key, |entries| {
            entries.insert(key.to_string(), value.to_string()).as_deref() != Some(value)
        });
    }

    fn remove(&self, key: &str) {
        self.mutate(key, |entries| entries.remove(key).is_some());
    }
}
