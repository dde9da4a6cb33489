//! Application module
//!
//! Wires a page session together: the immutable page state, the rendered
//! page surface, the preference store, the clipboard, and the host's
//! navigation. The host feeds controls in; this layer routes them and
//! decides when a preference change warrants a reload.

use crate::action::Clipboard;
use crate::core::{DisplayMode, PageState, SessionState};
use crate::handler::{handle_control, ActionResult, Control};
use crate::store::PreferenceStore;
use crate::view::{MediaCapabilities, PageView};

/// Host-side navigation
pub trait Navigator {
    /// Full page reload. `bypass_cache` forces a fresh fetch so the reload
    /// renders the new preference.
    fn reload(&mut self, bypass_cache: bool);
}

/// One wired-up page session
pub struct GalleryApp<V, S, C, N> {
    state: SessionState,
    view: V,
    store: S,
    clipboard: C,
    navigator: N,
}

impl<V, S, C, N> GalleryApp<V, S, C, N>
where
    V: PageView,
    S: PreferenceStore,
    C: Clipboard,
    N: Navigator,
{
    /// Create the session for a loaded page
    pub fn new(page: PageState, view: V, store: S, clipboard: C, navigator: N) -> Self {
        Self {
            state: SessionState::new(page),
            view,
            store,
            clipboard,
            navigator,
        }
    }

    /// Create the session from the server-emitted page state blob
    pub fn from_page_json(
        json: &str,
        view: V,
        store: S,
        clipboard: C,
        navigator: N,
    ) -> anyhow::Result<Self> {
        let page = PageState::from_json(json)?;
        Ok(Self::new(page, view, store, clipboard, navigator))
    }

    /// One-time page setup: media decoration is a grid-mode concern, list
    /// pages render no grid media.
    pub fn init(&mut self, media: &mut dyn MediaCapabilities) {
        if self.state.page.display_mode() == DisplayMode::Grid {
            media.attach_lazy_loading();
            media.attach_lightbox();
        }
    }

    /// Route one control through the handlers
    pub fn dispatch(&mut self, control: Control) -> ActionResult {
        let result = handle_control(
            control,
            &mut self.state,
            &mut self.view,
            &mut self.store,
            &mut self.clipboard,
        );
        if matches!(result, ActionResult::PreferenceChanged(_)) {
            self.navigator.reload(true);
        }
        result
    }

    /// Current status message, if any
    pub fn message(&self) -> Option<&str> {
        self.state.message.as_deref()
    }

    /// Session state, for host rendering
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The page surface, for host inspection
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The preference store, for host inspection
    pub fn store(&self) -> &S {
        &self.store
    }
}
