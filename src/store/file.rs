//! File-backed preference store
//!
//! Persists preferences to `~/.config/galleryview/preferences.toml`, one
//! table per scope, for hosts without a cookie jar. A missing or unreadable
//! file reads as empty and the server defaults win.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::PreferenceStore;
use crate::error::{GalleryError, Result};

/// On-disk layout: `[scopes."/gallery"]` tables of key-value pairs
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct PrefFile {
    scopes: HashMap<String, HashMap<String, String>>,
}

/// Preference store backed by a TOML file
pub struct FileStore {
    path: PathBuf,
    page_path: String,
    prefs: PrefFile,
}

impl FileStore {
    /// Open the store at the default config location for a page path
    pub fn open(page_path: impl Into<String>) -> Result<Self> {
        let path = default_path()
            .ok_or_else(|| GalleryError::config("could not determine config directory"))?;
        Ok(Self::open_at(path, page_path))
    }

    /// Open the store at an explicit file path
    pub fn open_at(path: impl Into<PathBuf>, page_path: impl Into<String>) -> Self {
        let path = path.into();
        let prefs = load(&path);
        Self {
            path,
            page_path: page_path.into(),
            prefs,
        }
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = toml::to_string(&self.prefs).map_err(|e| GalleryError::store(e.to_string()))?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("galleryview").join("preferences.toml"))
}

fn load(path: &Path) -> PrefFile {
    fs::read_to_string(path)
        .ok()
        .and_then(|text| toml::from_str(&text).ok())
        .unwrap_or_default()
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        // Cookie-style visibility: every scope that prefixes the page path
        // applies, most specific scope wins.
        let mut best: Option<(&str, &String)> = None;
        for (scope, table) in &self.prefs.scopes {
            if !self.page_path.starts_with(scope.as_str()) {
                continue;
            }
            if let Some(value) = table.get(key) {
                match best {
                    Some((s, _)) if s.len() >= scope.len() => {}
                    _ => best = Some((scope, value)),
                }
            }
        }
        best.map(|(_, v)| v.clone())
    }

    fn set(&mut self, key: &str, value: &str, scope: &str) -> Result<()> {
        self.prefs
            .scopes
            .entry(scope.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self.save()
    }
}
