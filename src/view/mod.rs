//! View module - Page capability surface
//!
//! Handlers never touch a browser directly; they drive the rendered page
//! through [`PageView`]. Item indices are document order throughout.

pub mod media;
pub mod page_model;

pub use media::{MediaCapabilities, MediaElement};
pub use page_model::{ItemEntry, PageModel, PageOp, SubmittedForm};

/// Capability surface the rendered gallery page exposes to handlers
pub trait PageView {
    /// Number of item checkboxes on the page
    fn item_count(&self) -> usize;

    /// Whether the checkbox at `index` is checked
    fn is_checked(&self, index: usize) -> bool;

    /// Whether the checkbox at `index` is disabled (item ineligible)
    fn is_disabled(&self, index: usize) -> bool;

    /// Set the checked state of the checkbox at `index`
    fn set_checked(&mut self, index: usize, checked: bool);

    /// Href of the link element associated with the item at `index`
    fn item_href(&self, index: usize) -> Option<String>;

    /// Make the per-item checkboxes visible
    fn reveal_checkboxes(&mut self);

    /// Remove every element carrying the list-only marker
    fn remove_list_only(&mut self);

    /// Write the hidden delay field of the editor form
    fn set_delay_field(&mut self, value: &str);

    /// Submit the editor form (navigation away is underway afterwards)
    fn submit_form(&mut self);

    /// Reveal the staging field and fill it with `text`
    fn stage_text(&mut self, text: &str);

    /// Clear and hide the staging field
    fn clear_staged(&mut self);
}
