//! Unified error types for GalleryView
//!
//! Provides a consistent error handling approach across all modules.

/// Unified error type for GalleryView operations
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// I/O errors (preference file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Page state errors (malformed server-emitted state)
    #[error("Page error: {0}")]
    Page(String),

    /// Preference store errors
    #[error("Store error: {0}")]
    Store(String),

    /// Clipboard errors (copy attempted, platform reported failure)
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience Result type using GalleryError
pub type Result<T> = std::result::Result<T, GalleryError>;

impl GalleryError {
    /// Create a Page error
    pub fn page(msg: impl Into<String>) -> Self {
        Self::Page(msg.into())
    }

    /// Create a Store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Create a Clipboard error
    pub fn clipboard(msg: impl Into<String>) -> Self {
        Self::Clipboard(msg.into())
    }

    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
