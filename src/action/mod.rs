//! Action module - Clipboard and editor form primitives

pub mod clipboard;
pub mod form;

pub use clipboard::{BufferClipboard, Clipboard, SystemClipboard};
pub use form::{Delay, DELAY_FIELD_NAME, EDITOR_FORM_ID, IDS_FIELD_NAME};
