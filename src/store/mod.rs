//! Store module - Durable preference persistence
//!
//! Preferences are plain key-value pairs (`listmode`, `sortkey`, `sortmode`)
//! scoped to a path prefix. The mechanism behind them is swappable: a cookie
//! jar in a browser host, a TOML file in an embedded host, memory in tests.

pub mod cookie;
pub mod file;

pub use cookie::CookieStore;
pub use file::FileStore;

use std::collections::HashMap;

use crate::error::Result;

/// Durable key-value preference storage scoped to a path prefix
pub trait PreferenceStore {
    /// Read a preference visible to the current page, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Persist a preference for every page under `scope`.
    ///
    /// Failure is tolerated by all callers: the next page load simply falls
    /// back to the server default.
    fn set(&mut self, key: &str, value: &str, scope: &str) -> Result<()>;
}

/// In-memory preference store for tests and embedded hosts
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: Vec<(String, String, String)>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(key, value, scope)` write in order, for inspection
    pub fn writes(&self) -> &[(String, String, String)] {
        &self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str, scope: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes
            .push((key.to_string(), value.to_string(), scope.to_string()));
        Ok(())
    }
}
