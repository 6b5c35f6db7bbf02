//! Clipboard abstraction for testing
//!
//! Paste goes through a trait so tests can stand in for the system clipboard.

/// Result type for clipboard operations
pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// Clipboard error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClipboardError {
    /// Clipboard initialization failed
    #[error("Clipboard init failed: {0}")]
    InitFailed(String),
    /// Paste operation failed
    #[error("Clipboard operation failed: {0}")]
    OperationFailed(String),
}

/// Trait for clipboard reads (allows mocking in tests)
pub trait ClipboardProvider {
    /// Get text from clipboard
    fn get_text(&mut self) -> ClipboardResult<String>;
}

/// Real clipboard implementation using arboard
pub struct RealClipboard {
    inner: arboard::Clipboard,
}

impl RealClipboard {
    /// Create new real clipboard instance
    pub fn new() -> ClipboardResult<Self> {
        arboard::Clipboard::new()
            .map(|inner| Self { inner })
            .map_err(|e| ClipboardError::InitFailed(e.to_string()))
    }
}

impl ClipboardProvider for RealClipboard {
    fn get_text(&mut self) -> ClipboardResult<String> {
        self.inner
            .get_text()
            .map_err(|e| ClipboardError::OperationFailed(e.to_string()))
    }
}
