//! Handler module - Control dispatch
//!
//! Translates page controls into state changes and side effects. Every
//! handler runs synchronously inside one input event; nothing here blocks
//! or suspends.

pub mod selection;
pub mod view_state;


pub use view_state::PreferenceChanged;

use crate::action::{Clipboard, Delay};
use crate::core::{DisplayMode, SessionState, SortDirection, SortKey};
use crate::store::PreferenceStore;
use crate::view::PageView;

/// A page control, identified by its stable element id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Reveal editor selection controls
    ShowEditor,
    /// Check every enabled item checkbox
    SelectAll,
    /// Uncheck every enabled item checkbox
    SelectNone,
    /// Submit the editor form with a fixed delay
    SubmitDelay(Delay),
    /// Copy the links of checked items to the clipboard
    CopyLinks,
    /// Switch the display mode
    SetDisplayMode(DisplayMode),
    /// Switch the sort key
    SetSortKey(SortKey),
    /// Switch the sort direction
    SetSortDirection(SortDirection),
}

impl Control {
    /// Map a control element id to its control
    pub fn from_element_id(id: &str) -> Option<Self> {
        match id {
            "show_editor" => Some(Control::ShowEditor),
            "select_all" => Some(Control::SelectAll),
            "select_none" => Some(Control::SelectNone),
            "link_submit_x" => Some(Control::SubmitDelay(Delay::Expire)),
            "link_submit_h" => Some(Control::SubmitDelay(Delay::OneHour)),
            "link_submit_d" => Some(Control::SubmitDelay(Delay::OneDay)),
            "link_submit_w" => Some(Control::SubmitDelay(Delay::OneWeek)),
            "copy" => Some(Control::CopyLinks),
            "listmode_enable" => Some(Control::SetDisplayMode(DisplayMode::List)),
            "listmode_disable" => Some(Control::SetDisplayMode(DisplayMode::Grid)),
            "sortkey_name" => Some(Control::SetSortKey(SortKey::Name)),
            "sortkey_size" => Some(Control::SetSortKey(SortKey::Size)),
            "sortkey_mtime" => Some(Control::SetSortKey(SortKey::Mtime)),
            "sortmode_asc" => Some(Control::SetSortDirection(SortDirection::Asc)),
            "sortmode_desc" => Some(Control::SetSortDirection(SortDirection::Desc)),
            _ => None,
        }
    }

    /// Whether the control is only wired for editors
    pub fn requires_editor(&self) -> bool {
        matches!(
            self,
            Control::ShowEditor
                | Control::SelectAll
                | Control::SelectNone
                | Control::SubmitDelay(_)
        )
    }
}

/// Result of control execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Stay on the page; nothing further for the host
    Continue,
    /// A durable preference changed; the host decides whether/how to reload
    PreferenceChanged(PreferenceChanged),
    /// The editor form was submitted; navigation away is underway
    Submitted,
}

/// Handle a Control and update state accordingly
pub fn handle_control(
    control: Control,
    state: &mut SessionState,
    view: &mut dyn PageView,
    store: &mut dyn PreferenceStore,
    clipboard: &mut dyn Clipboard,
) -> ActionResult {
    // Editor controls are never wired for other viewers; invoking one
    // anyway is inert.
    if control.requires_editor() && !state.is_editor() {
        return ActionResult::Continue;
    }

    match control {
        Control::ShowEditor => {
            selection::reveal_editor_controls(state, view);
            ActionResult::Continue
        }
        Control::SelectAll => {
            selection::select_all(state, view);
            ActionResult::Continue
        }
        Control::SelectNone => {
            selection::select_none(state, view);
            ActionResult::Continue
        }
        Control::SubmitDelay(delay) => selection::submit_with_delay(delay, view),
        Control::CopyLinks => {
            selection::copy_selected_links(state, view, clipboard);
            ActionResult::Continue
        }
        Control::SetDisplayMode(mode) => view_state::set_display_mode(mode, state, store),
        Control::SetSortKey(key) => view_state::set_sort_key(key, state, store),
        Control::SetSortDirection(direction) => {
            view_state::set_sort_direction(direction, state, store)
        }
    }
}
