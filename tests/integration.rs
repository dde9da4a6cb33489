//! Integration tests for GalleryView
//!
//! These tests drive controls through the public dispatch path and verify
//! the observable page, store, clipboard, and navigation effects.

use std::cell::RefCell;
use std::rc::Rc;

use galleryview::action::BufferClipboard;
use galleryview::app::{GalleryApp, Navigator};
use galleryview::core::{DisplayMode, PageState, SortDirection, SortKey};
use galleryview::handler::{ActionResult, Control};
use galleryview::store::{CookieStore, FileStore, MemoryStore, PreferenceStore};
use galleryview::view::{MediaCapabilities, MediaElement, PageModel, PageOp, PageView};
use tempfile::TempDir;

/// Navigator handing its reload log back to the test
#[derive(Debug, Default, Clone)]
struct RecordingNavigator {
    reloads: Rc<RefCell<Vec<bool>>>,
}

impl Navigator for RecordingNavigator {
    fn reload(&mut self, bypass_cache: bool) {
        self.reloads.borrow_mut().push(bypass_cache);
    }
}

fn gallery_page(is_editor: bool, list_mode: bool) -> PageState {
    PageState::from_json(&format!(
        r#"{{
            "is_editor": {},
            "list_mode": {},
            "sort_key": "name",
            "sort_mode": "asc",
            "cookie_path": "/gallery"
        }}"#,
        is_editor, list_mode
    ))
    .unwrap()
}

fn page_with_items() -> PageModel {
    let mut page = PageModel::new();
    page.push_item("f1", "https://example.org/one.jpg");
    page.push_item("f2", "https://example.org/two.jpg");
    page.push_item("f3", "https://example.org/three.jpg");
    page
}

fn create_app(
    page: PageState,
    view: PageModel,
) -> (
    GalleryApp<PageModel, MemoryStore, BufferClipboard, RecordingNavigator>,
    Rc<RefCell<Vec<bool>>>,
) {
    let navigator = RecordingNavigator::default();
    let reloads = navigator.reloads.clone();
    let app = GalleryApp::new(
        page,
        view,
        MemoryStore::new(),
        BufferClipboard::new(),
        navigator,
    );
    (app, reloads)
}

// =============================================================================
// Page State Tests
// =============================================================================

mod page_state_tests {
    use super::*;

    #[test]
    fn test_server_blob_round_trip() {
        let page = gallery_page(true, true);
        assert!(page.is_editor);
        assert_eq!(page.display_mode(), DisplayMode::List);
        assert_eq!(page.sort_key, SortKey::Name);
        assert_eq!(page.sort_mode, SortDirection::Asc);
        assert_eq!(page.cookie_path, "/gallery");
    }

    #[test]
    fn test_empty_blob_uses_server_defaults() {
        let page = PageState::from_json("{}").unwrap();
        assert!(!page.is_editor);
        assert_eq!(page.display_mode(), DisplayMode::Grid);
        assert_eq!(page.cookie_path, "/");
    }

    #[test]
    fn test_malformed_blob_is_an_error() {
        assert!(PageState::from_json("<html>").is_err());
    }
}

// =============================================================================
// View Preference Tests
// =============================================================================

mod preference_tests {
    use super::*;

    #[test]
    fn test_list_mode_toggle_persists_and_reloads() {
        let (mut app, reloads) = create_app(gallery_page(false, false), PageModel::new());

        let control = Control::from_element_id("listmode_enable").unwrap();
        let result = app.dispatch(control);

        assert!(matches!(result, ActionResult::PreferenceChanged(_)));
        assert_eq!(
            app.store().writes(),
            &[(
                "listmode".to_string(),
                "1".to_string(),
                "/gallery".to_string()
            )]
        );
        assert_eq!(*reloads.borrow(), vec![true], "reload must bypass cache");
    }

    #[test]
    fn test_active_mode_is_a_no_op() {
        let (mut app, reloads) = create_app(gallery_page(false, true), PageModel::new());

        let control = Control::from_element_id("listmode_enable").unwrap();
        let result = app.dispatch(control);

        assert_eq!(result, ActionResult::Continue);
        assert!(app.store().writes().is_empty());
        assert!(reloads.borrow().is_empty());
    }

    #[test]
    fn test_sort_controls_persist_under_page_scope() {
        let (mut app, reloads) = create_app(gallery_page(false, false), PageModel::new());

        app.dispatch(Control::from_element_id("sortkey_size").unwrap());
        app.dispatch(Control::from_element_id("sortmode_desc").unwrap());
        // Already active after the page would have reloaded; here the page
        // state is unchanged, so re-picking the rendered values is inert
        app.dispatch(Control::from_element_id("sortkey_name").unwrap());
        app.dispatch(Control::from_element_id("sortmode_asc").unwrap());

        assert_eq!(
            app.store().writes(),
            &[
                (
                    "sortkey".to_string(),
                    "size".to_string(),
                    "/gallery".to_string()
                ),
                (
                    "sortmode".to_string(),
                    "desc".to_string(),
                    "/gallery".to_string()
                ),
            ]
        );
        assert_eq!(reloads.borrow().len(), 2);
    }

    #[test]
    fn test_cookie_store_write_strings() {
        let navigator = RecordingNavigator::default();
        let mut app = GalleryApp::new(
            gallery_page(false, false),
            PageModel::new(),
            CookieStore::new(),
            BufferClipboard::new(),
            navigator,
        );

        app.dispatch(Control::SetDisplayMode(DisplayMode::List));
        app.dispatch(Control::SetSortKey(SortKey::Mtime));

        assert_eq!(
            app.store().pending_writes(),
            &[
                "listmode=1;path=/gallery".to_string(),
                "sortkey=mtime;path=/gallery".to_string(),
            ]
        );
    }
}

// =============================================================================
// Editor Selection Tests
// =============================================================================

mod editor_tests {
    use super::*;

    #[test]
    fn test_editor_controls_are_inert_for_plain_viewers() {
        let (mut app, _) = create_app(gallery_page(false, false), page_with_items());

        app.dispatch(Control::from_element_id("show_editor").unwrap());
        app.dispatch(Control::from_element_id("select_all").unwrap());
        app.dispatch(Control::from_element_id("link_submit_d").unwrap());

        assert!(app.view().ops().is_empty());
        assert!(app.view().submitted().is_none());
        assert!(!app.state().editor_active);
    }

    #[test]
    fn test_reveal_on_list_page_removes_list_only_first() {
        let (mut app, _) = create_app(gallery_page(true, true), page_with_items());

        app.dispatch(Control::from_element_id("show_editor").unwrap());

        assert_eq!(
            app.view().ops(),
            &[PageOp::RemoveListOnly, PageOp::RevealCheckboxes]
        );
        assert!(app.state().editor_active);
    }

    #[test]
    fn test_select_all_then_none_round_trip() {
        let mut view = page_with_items();
        view.push_disabled_item("f4", true);
        let (mut app, _) = create_app(gallery_page(true, false), view);

        app.dispatch(Control::from_element_id("select_all").unwrap());
        for index in 0..3 {
            assert!(app.view().is_checked(index));
        }

        app.dispatch(Control::from_element_id("select_none").unwrap());
        for index in 0..3 {
            assert!(!app.view().is_checked(index));
        }
        assert!(
            app.view().is_checked(3),
            "disabled checkbox keeps its original state"
        );
    }

    #[test]
    fn test_each_delay_button_submits_its_value() {
        for (id, value) in [
            ("link_submit_x", "0"),
            ("link_submit_h", "3600"),
            ("link_submit_d", "86400"),
            ("link_submit_w", "604800"),
        ] {
            let (mut app, _) = create_app(gallery_page(true, false), page_with_items());
            app.dispatch(Control::from_element_id("select_all").unwrap());

            let result = app.dispatch(Control::from_element_id(id).unwrap());

            assert_eq!(result, ActionResult::Submitted);
            let form = app.view().submitted().unwrap();
            assert_eq!(form.delay, value);
            assert_eq!(
                form.ids,
                vec!["f1".to_string(), "f2".to_string(), "f3".to_string()]
            );
        }
    }
}

// =============================================================================
// Link Export Tests
// =============================================================================

mod export_tests {
    use super::*;

    #[test]
    fn test_copy_stages_joins_and_reports() {
        let (mut app, _) = create_app(gallery_page(true, false), page_with_items());
        app.dispatch(Control::from_element_id("select_all").unwrap());

        app.dispatch(Control::from_element_id("copy").unwrap());

        let expected =
            "https://example.org/one.jpg\nhttps://example.org/two.jpg\nhttps://example.org/three.jpg\n";
        assert!(app
            .view()
            .ops()
            .contains(&PageOp::StageText(expected.to_string())));
        assert_eq!(app.view().staged(), None, "staging field is transient");
        assert_eq!(app.message(), Some("Copied 3 link(s)"));
    }

    #[test]
    fn test_copy_with_empty_selection_is_silent() {
        let (mut app, _) = create_app(gallery_page(true, false), page_with_items());

        app.dispatch(Control::from_element_id("copy").unwrap());

        assert!(app.view().ops().is_empty());
        assert_eq!(app.message(), None);
    }

    #[test]
    fn test_copy_failure_is_not_reported_as_success() {
        let navigator = RecordingNavigator::default();
        let mut view = page_with_items();
        view.set_checked(0, true);
        let mut app = GalleryApp::new(
            gallery_page(true, false),
            view,
            MemoryStore::new(),
            BufferClipboard::failing(),
            navigator,
        );

        app.dispatch(Control::from_element_id("copy").unwrap());

        assert_eq!(app.message(), Some("Failed: copy links"));
        assert_eq!(app.view().staged(), None);
    }
}

// =============================================================================
// Store Tests
// =============================================================================

mod store_tests {
    use super::*;

    #[test]
    fn test_file_store_survives_sessions() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("preferences.toml");

        {
            let navigator = RecordingNavigator::default();
            let mut app = GalleryApp::new(
                gallery_page(false, false),
                PageModel::new(),
                FileStore::open_at(&path, "/gallery"),
                BufferClipboard::new(),
                navigator,
            );
            app.dispatch(Control::SetDisplayMode(DisplayMode::List));
        }

        let reopened = FileStore::open_at(&path, "/gallery/2024");
        assert_eq!(reopened.get("listmode"), Some("1".to_string()));
    }

    #[test]
    fn test_cookie_store_reads_the_ambient_header() {
        let store = CookieStore::from_header("listmode=1; sortmode=desc");
        assert_eq!(store.get("listmode"), Some("1".to_string()));
        assert_eq!(store.get("sortmode"), Some("desc".to_string()));
    }
}

// =============================================================================
// Media Tests
// =============================================================================

mod media_tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingMedia {
        attached: Vec<&'static str>,
    }

    impl MediaCapabilities for RecordingMedia {
        fn attach_lazy_loading(&mut self) {
            self.attached.push("lazy");
        }

        fn attach_lightbox(&mut self) {
            self.attached.push("lightbox");
        }
    }

    #[test]
    fn test_grid_page_gets_media_decoration() {
        let (mut app, _) = create_app(gallery_page(false, false), PageModel::new());
        let mut media = RecordingMedia::default();
        app.init(&mut media);
        assert_eq!(media.attached, vec!["lazy", "lightbox"]);
    }

    #[test]
    fn test_list_page_gets_no_media_decoration() {
        let (mut app, _) = create_app(gallery_page(false, true), PageModel::new());
        let mut media = RecordingMedia::default();
        app.init(&mut media);
        assert!(media.attached.is_empty());
    }

    #[test]
    fn test_hover_swaps_animated_sources() {
        let mut media = MediaElement::new("thumb.jpg", "thumb.jpg 1x, thumb@2x.jpg 2x")
            .with_animated("preview.webp", "preview.webp 1x");

        media.begin_hover();
        assert_eq!(media.src, "preview.webp");

        media.end_hover();
        assert_eq!(media.src, "thumb.jpg");
        assert_eq!(media.srcset, "thumb.jpg 1x, thumb@2x.jpg 2x");
    }
}
