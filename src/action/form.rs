//! Editor form contract
//!
//! The editor form carries one `ids` input per item (disabled when the item
//! is ineligible) and a hidden `delay` field. The delay is data forwarded to
//! the batch endpoint, never a client-side timer.

/// Id of the editor batch-action form
pub const EDITOR_FORM_ID: &str = "editorform";
/// Name of the per-item checkbox inputs
pub const IDS_FIELD_NAME: &str = "ids";
/// Name of the hidden delay field
pub const DELAY_FIELD_NAME: &str = "delay";

/// Fixed delay attached to a batch submission
///
/// The endpoint applies the value as a seconds offset to each item's
/// expiration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delay {
    /// Apply immediately
    Expire,
    /// One hour
    OneHour,
    /// One day
    OneDay,
    /// One week
    OneWeek,
}

impl Delay {
    /// Wire value written into the hidden delay field
    pub fn field_value(&self) -> &'static str {
        match self {
            Delay::Expire => "0",
            Delay::OneHour => "3600",
            Delay::OneDay => "86400",
            Delay::OneWeek => "604800",
        }
    }
}
