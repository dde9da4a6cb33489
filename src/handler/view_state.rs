//! Display and sort preference handlers
//!
//! Handles SetDisplayMode, SetSortKey, SetSortDirection. A changed
//! preference is persisted with page-root scope and reported to the host,
//! which reloads so the server-rendered markup matches.

use super::ActionResult;
use crate::core::{
    DisplayMode, SessionState, SortDirection, SortKey, PREF_LIST_MODE, PREF_SORT_KEY,
    PREF_SORT_MODE,
};
use crate::store::PreferenceStore;

/// A durable preference change the host should react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceChanged {
    /// Preference key
    pub key: &'static str,
    /// New wire value
    pub value: String,
    /// Path prefix the preference is scoped to
    pub scope: String,
}

/// Switch the display mode; no-op when already active
pub fn set_display_mode(
    mode: DisplayMode,
    state: &mut SessionState,
    store: &mut dyn PreferenceStore,
) -> ActionResult {
    if mode == state.page.display_mode() {
        return ActionResult::Continue;
    }
    persist(PREF_LIST_MODE, mode.as_pref_value(), state, store)
}

/// Switch the sort key; no-op when already active
pub fn set_sort_key(
    key: SortKey,
    state: &mut SessionState,
    store: &mut dyn PreferenceStore,
) -> ActionResult {
    if key == state.page.sort_key {
        return ActionResult::Continue;
    }
    persist(PREF_SORT_KEY, key.as_pref_value(), state, store)
}

/// Switch the sort direction; no-op when already active
pub fn set_sort_direction(
    direction: SortDirection,
    state: &mut SessionState,
    store: &mut dyn PreferenceStore,
) -> ActionResult {
    if direction == state.page.sort_mode {
        return ActionResult::Continue;
    }
    persist(PREF_SORT_MODE, direction.as_pref_value(), state, store)
}

fn persist(
    key: &'static str,
    value: &str,
    state: &SessionState,
    store: &mut dyn PreferenceStore,
) -> ActionResult {
    // A failed write degrades to a same-state reload: the server falls back
    // to its default, indistinguishable from "preference unchanged".
    let _ = store.set(key, value, &state.page.cookie_path);
    ActionResult::PreferenceChanged(PreferenceChanged {
        key,
        value: value.to_string(),
        scope: state.page.cookie_path.clone(),
    })
}
