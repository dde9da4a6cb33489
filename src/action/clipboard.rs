//! Clipboard access for link export

use crate::error::{GalleryError, Result};

/// Writable clipboard
///
/// An `Err` means the copy was attempted and the platform reported failure;
/// callers must not claim success to the user in that case.
pub trait Clipboard {
    /// Copy plain text to the clipboard
    fn copy_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Create a system clipboard handle
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        arboard::Clipboard::new()
            .and_then(|mut cb| cb.set_text(text.to_string()))
            .map_err(|e| GalleryError::clipboard(e.to_string()))
    }
}

/// In-memory clipboard for tests and headless hosts
#[derive(Debug, Default)]
pub struct BufferClipboard {
    contents: Option<String>,
    fail: bool,
}

impl BufferClipboard {
    /// A clipboard that accepts every copy
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every copy
    pub fn failing() -> Self {
        Self {
            contents: None,
            fail: true,
        }
    }

    /// Last copied text, if any
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for BufferClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(GalleryError::clipboard("copy command rejected"));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
