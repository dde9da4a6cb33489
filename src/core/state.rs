//! Session state management

use super::PageState;

/// Mutable state for one page session
///
/// Everything here is discarded on navigation or reload; the DOM itself is
/// the source of truth for checkbox state, so no selection mirror is kept.
pub struct SessionState {
    /// Immutable page state from the server
    pub page: PageState,
    /// Whether editor controls have been revealed (one-way)
    pub editor_active: bool,
    /// Status message
    pub message: Option<String>,
}

impl SessionState {
    /// Create session state for a freshly loaded page
    pub fn new(page: PageState) -> Self {
        Self {
            page,
            editor_active: false,
            message: None,
        }
    }

    /// Whether the viewer is recognized as an editor
    pub fn is_editor(&self) -> bool {
        self.page.is_editor
    }

    /// Mark editor controls as revealed. There is no reverse transition;
    /// only navigation resets the page out of selection mode.
    pub fn activate_editor(&mut self) {
        self.editor_active = true;
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_hidden() {
        let state = SessionState::new(PageState::default());
        assert!(!state.editor_active);
        assert!(state.message.is_none());
    }

    #[test]
    fn test_activate_editor_is_one_way() {
        let mut state = SessionState::new(PageState::default());
        state.activate_editor();
        assert!(state.editor_active);
        state.activate_editor();
        assert!(state.editor_active);
    }

    #[test]
    fn test_messages() {
        let mut state = SessionState::new(PageState::default());
        state.set_message("Copied 2 link(s)");
        assert_eq!(state.message.as_deref(), Some("Copied 2 link(s)"));
        state.clear_message();
        assert!(state.message.is_none());
    }
}
