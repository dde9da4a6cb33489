//! Selection and link-export handlers
//!
//! Handles ShowEditor, SelectAll, SelectNone, SubmitDelay, CopyLinks.
//! The page itself is the source of truth for checkbox state; nothing here
//! keeps a selection mirror.

use super::ActionResult;
use crate::action::{Clipboard, Delay};
use crate::core::SessionState;
use crate::view::PageView;

/// Switch the page into selection mode
///
/// List-mode static elements are incompatible with the interactive
/// checkboxes, so they are removed before anything becomes visible.
pub fn reveal_editor_controls(state: &mut SessionState, view: &mut dyn PageView) {
    if state.page.list_mode {
        view.remove_list_only();
    }
    view.reveal_checkboxes();
    state.activate_editor();
}

/// Check every enabled item checkbox
pub fn select_all(state: &mut SessionState, view: &mut dyn PageView) {
    let count = set_enabled_checked(view, true);
    state.set_message(format!("Selected {} item(s)", count));
}

/// Uncheck every enabled item checkbox
pub fn select_none(state: &mut SessionState, view: &mut dyn PageView) {
    set_enabled_checked(view, false);
    state.set_message("Cleared selection");
}

/// Disabled checkboxes mark ineligible items and are left untouched
fn set_enabled_checked(view: &mut dyn PageView, checked: bool) -> usize {
    let mut count = 0;
    for index in 0..view.item_count() {
        if !view.is_disabled(index) {
            view.set_checked(index, checked);
            count += 1;
        }
    }
    count
}

/// Write the delay into the hidden field, then submit the editor form
pub fn submit_with_delay(delay: Delay, view: &mut dyn PageView) -> ActionResult {
    view.set_delay_field(delay.field_value());
    view.submit_form();
    ActionResult::Submitted
}

/// Copy the links of checked items, one URL per line
///
/// With nothing checked this is a silent no-op: no staging, no clipboard
/// interaction, no message. Success is only reported when the clipboard
/// reports it.
pub fn copy_selected_links(
    state: &mut SessionState,
    view: &mut dyn PageView,
    clipboard: &mut dyn Clipboard,
) {
    let mut text = String::new();
    let mut count = 0;
    for index in 0..view.item_count() {
        if !view.is_checked(index) {
            continue;
        }
        if let Some(href) = view.item_href(index) {
            text.push_str(&href);
            text.push('\n');
            count += 1;
        }
    }

    if count == 0 {
        return;
    }

    view.stage_text(&text);
    let copied = clipboard.copy_text(&text);
    view.clear_staged();

    match copied {
        Ok(()) => state.set_message(format!("Copied {} link(s)", count)),
        Err(_) => state.set_message("Failed: copy links"),
    }
}
