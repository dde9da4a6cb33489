//! Core module - Page state and preference values

pub mod page;
pub mod prefs;
pub mod state;

pub use page::PageState;
pub use prefs::{
    DisplayMode, SortDirection, SortKey, ViewPreference, PREF_LIST_MODE, PREF_SORT_KEY,
    PREF_SORT_MODE,
};
pub use state::SessionState;
