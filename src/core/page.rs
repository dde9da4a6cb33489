//! Ambient page state
//!
//! The server embeds one JSON blob per page load describing the viewer and
//! the rendered layout. It is parsed once, up front, and never mutated;
//! preference changes take effect on the next page load.

use serde::Deserialize;

use super::{DisplayMode, SortDirection, SortKey, ViewPreference};
use crate::error::{GalleryError, Result};

/// Immutable page state for one page load
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageState {
    /// Whether the viewer is recognized as an editor
    pub is_editor: bool,
    /// Whether the page was rendered in list mode
    pub list_mode: bool,
    /// Sort key the page was rendered with
    pub sort_key: SortKey,
    /// Sort direction the page was rendered with
    pub sort_mode: SortDirection,
    /// Path prefix that scopes preference writes
    pub cookie_path: String,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            is_editor: false,
            list_mode: false,
            sort_key: SortKey::default(),
            sort_mode: SortDirection::default(),
            cookie_path: "/".to_string(),
        }
    }
}

impl PageState {
    /// Parse the server-emitted page state blob
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GalleryError::page(e.to_string()))
    }

    /// Display mode the page was rendered with
    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::from_list_mode(self.list_mode)
    }

    /// The preference triple currently in effect
    pub fn view_preference(&self) -> ViewPreference {
        ViewPreference {
            mode: self.display_mode(),
            sort_key: self.sort_key,
            sort_direction: self.sort_mode,
        }
    }
}
