//! In-memory page model
//!
//! Reference [`PageView`] implementation for tests and hosts without a
//! browser. Records every operation in order, so tests can assert sequencing
//! (e.g. list-only removal happening before checkbox reveal) and not just
//! end state.

use super::PageView;

/// One rendered gallery item: a checkbox plus its associated link
#[derive(Debug, Clone)]
pub struct ItemEntry {
    /// Form value submitted for this item
    pub id: String,
    /// Href of the associated link element
    pub href: Option<String>,
    /// Checked state
    pub checked: bool,
    /// Disabled items are ineligible for batch actions
    pub disabled: bool,
}

/// A recorded page operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOp {
    RemoveListOnly,
    RevealCheckboxes,
    SetChecked(usize, bool),
    SetDelay(String),
    SubmitForm,
    StageText(String),
    ClearStaged,
}

/// Payload captured from a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedForm {
    /// Values of checked, enabled `ids` inputs in document order
    pub ids: Vec<String>,
    /// Value of the hidden delay field at submit time
    pub delay: String,
}

/// In-memory [`PageView`] implementation
#[derive(Debug, Default)]
pub struct PageModel {
    items: Vec<ItemEntry>,
    delay_field: String,
    staged: Option<String>,
    submitted: Option<SubmittedForm>,
    ops: Vec<PageOp>,
}

impl PageModel {
    /// Create an empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an enabled, unchecked item
    pub fn push_item(&mut self, id: impl Into<String>, href: impl Into<String>) {
        self.items.push(ItemEntry {
            id: id.into(),
            href: Some(href.into()),
            checked: false,
            disabled: false,
        });
    }

    /// Append a disabled item (ineligible for batch actions)
    pub fn push_disabled_item(&mut self, id: impl Into<String>, checked: bool) {
        self.items.push(ItemEntry {
            id: id.into(),
            href: None,
            checked,
            disabled: true,
        });
    }

    /// Recorded operations, in order
    pub fn ops(&self) -> &[PageOp] {
        &self.ops
    }

    /// Currently staged clipboard text, if any
    pub fn staged(&self) -> Option<&str> {
        self.staged.as_deref()
    }

    /// Payload of the form submission, if one happened
    pub fn submitted(&self) -> Option<&SubmittedForm> {
        self.submitted.as_ref()
    }
}

impl PageView for PageModel {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn is_checked(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|i| i.checked)
    }

    fn is_disabled(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|i| i.disabled)
    }

    fn set_checked(&mut self, index: usize, checked: bool) {
        if let Some(item) = self.items.get_mut(index) {
            item.checked = checked;
            self.ops.push(PageOp::SetChecked(index, checked));
        }
    }

    fn item_href(&self, index: usize) -> Option<String> {
        self.items.get(index).and_then(|i| i.href.clone())
    }

    fn reveal_checkboxes(&mut self) {
        self.ops.push(PageOp::RevealCheckboxes);
    }

    fn remove_list_only(&mut self) {
        self.ops.push(PageOp::RemoveListOnly);
    }

    fn set_delay_field(&mut self, value: &str) {
        self.delay_field = value.to_string();
        self.ops.push(PageOp::SetDelay(value.to_string()));
    }

    fn submit_form(&mut self) {
        // Disabled inputs are excluded from form submission
        let ids = self
            .items
            .iter()
            .filter(|i| i.checked && !i.disabled)
            .map(|i| i.id.clone())
            .collect();
        self.submitted = Some(SubmittedForm {
            ids,
            delay: self.delay_field.clone(),
        });
        self.ops.push(PageOp::SubmitForm);
    }

    fn stage_text(&mut self, text: &str) {
        self.staged = Some(text.to_string());
        self.ops.push(PageOp::StageText(text.to_string()));
    }

    fn clear_staged(&mut self) {
        self.staged = None;
        self.ops.push(PageOp::ClearStaged);
    }
}
