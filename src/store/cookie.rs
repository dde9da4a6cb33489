//! Cookie-backed preference store
//!
//! The browser host hands in the cookie header it received and flushes the
//! queued write strings back to `document.cookie`. Writes use the
//! `key=value;path=scope` form the server expects.

use std::collections::HashMap;

use super::PreferenceStore;
use crate::error::Result;

/// Preference store backed by the browser cookie jar
#[derive(Debug, Default)]
pub struct CookieStore {
    jar: HashMap<String, String>,
    pending: Vec<String>,
}

impl CookieStore {
    /// Create an empty store (no cookies sent with the page)
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the ambient cookie header (`k=v; k2=v2`) for reads
    pub fn from_header(header: &str) -> Self {
        let mut jar = HashMap::new();
        for pair in header.split(';') {
            if let Some((key, value)) = pair.split_once('=') {
                jar.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
        Self {
            jar,
            pending: Vec::new(),
        }
    }

    /// Queued cookie write strings, in write order
    pub fn pending_writes(&self) -> &[String] {
        &self.pending
    }

    /// Take the queued writes for the host to apply
    pub fn drain_writes(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }
}

impl PreferenceStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        self.jar.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str, scope: &str) -> Result<()> {
        self.pending.push(format!("{}={};path={}", key, value, scope));
        self.jar.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
