//! Durable view preference values
//!
//! Each dimension has exactly one active value at a time and a stable wire
//! string shared by the preference store and the server-rendered page.

use serde::Deserialize;

/// Preference key for the display mode
pub const PREF_LIST_MODE: &str = "listmode";
/// Preference key for the sort key
pub const PREF_SORT_KEY: &str = "sortkey";
/// Preference key for the sort direction
pub const PREF_SORT_MODE: &str = "sortmode";

/// Display mode for gallery items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Media grid (default)
    #[default]
    Grid,
    /// Compact list
    List,
}

impl DisplayMode {
    /// Wire value stored under [`PREF_LIST_MODE`]
    pub fn as_pref_value(&self) -> &'static str {
        match self {
            DisplayMode::Grid => "0",
            DisplayMode::List => "1",
        }
    }

    /// Parse a stored wire value
    pub fn from_pref_value(value: &str) -> Option<Self> {
        match value {
            "0" => Some(DisplayMode::Grid),
            "1" => Some(DisplayMode::List),
            _ => None,
        }
    }

    /// Construct from the server-emitted `list_mode` flag
    pub fn from_list_mode(list_mode: bool) -> Self {
        if list_mode {
            DisplayMode::List
        } else {
            DisplayMode::Grid
        }
    }
}

/// Sort key for gallery entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Sort by name
    #[default]
    Name,
    /// Sort by size
    Size,
    /// Sort by modification time
    Mtime,
}

impl SortKey {
    /// Wire value stored under [`PREF_SORT_KEY`]
    pub fn as_pref_value(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Size => "size",
            SortKey::Mtime => "mtime",
        }
    }

    /// Parse a stored wire value
    pub fn from_pref_value(value: &str) -> Option<Self> {
        match value {
            "name" => Some(SortKey::Name),
            "size" => Some(SortKey::Size),
            "mtime" => Some(SortKey::Mtime),
            _ => None,
        }
    }
}

/// Sort direction for gallery entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl SortDirection {
    /// Wire value stored under [`PREF_SORT_MODE`]
    pub fn as_pref_value(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Parse a stored wire value
    pub fn from_pref_value(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// The client-owned durable preference triple
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewPreference {
    pub mode: DisplayMode,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mode_wire_values() {
        assert_eq!(DisplayMode::Grid.as_pref_value(), "0");
        assert_eq!(DisplayMode::List.as_pref_value(), "1");
        assert_eq!(DisplayMode::from_pref_value("1"), Some(DisplayMode::List));
        assert_eq!(DisplayMode::from_pref_value("grid"), None);
    }

    #[test]
    fn test_display_mode_from_list_mode() {
        assert_eq!(DisplayMode::from_list_mode(true), DisplayMode::List);
        assert_eq!(DisplayMode::from_list_mode(false), DisplayMode::Grid);
    }

    #[test]
    fn test_sort_wire_values_round_trip() {
        for key in [SortKey::Name, SortKey::Size, SortKey::Mtime] {
            assert_eq!(SortKey::from_pref_value(key.as_pref_value()), Some(key));
        }
        for dir in [SortDirection::Asc, SortDirection::Desc] {
            assert_eq!(
                SortDirection::from_pref_value(dir.as_pref_value()),
                Some(dir)
            );
        }
        assert_eq!(SortKey::from_pref_value("date"), None);
    }

    #[test]
    fn test_view_preference_default() {
        let pref = ViewPreference::default();
        assert_eq!(pref.mode, DisplayMode::Grid);
        assert_eq!(pref.sort_key, SortKey::Name);
        assert_eq!(pref.sort_direction, SortDirection::Asc);
    }
}
