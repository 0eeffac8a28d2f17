//! Clipboard access.
//!
//! Copying is fire-and-forget: [`copy_to_clipboard`] logs failures instead of
//! returning them, and only tells the caller whether the text landed.

use crate::error::ClipboardError;

/// A destination for copied text.
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard {
    /// Replaces the clipboard contents with `text`.
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard, accessed through `arboard`.
///
/// A fresh handle is opened for every copy, so a missing display server
/// only fails the copy in progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Copies `text` to `clipboard`, logging instead of returning failures.
///
/// Returns `true` if the text was written.
pub fn copy_to_clipboard(clipboard: &dyn Clipboard, text: &str) -> bool {
    match clipboard.set_text(text) {
        Ok(()) => {
            tracing::debug!("Copied {} bytes to clipboard", text.len());
            true
        }
        Err(e) => {
            tracing::warn!("Failed to copy: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_writes_text() {
        let mut mock = MockClipboard::new();
        mock.expect_set_text()
            .withf(|text| text == "https://short.url/abc123")
            .times(1)
            .returning(|_| Ok(()));

        assert!(copy_to_clipboard(&mock, "https://short.url/abc123"));
    }

    #[test]
    fn test_copy_failure_is_logged_and_reported() {
        let mut mock = MockClipboard::new();
        mock.expect_set_text()
            .times(1)
            .returning(|_| Err(ClipboardError::Unavailable("no display".to_string())));

        assert!(!copy_to_clipboard(&mock, "https://example.com"));
    }

    #[test]
    fn test_copy_arbitrary_text() {
        let mut mock = MockClipboard::new();
        mock.expect_set_text()
            .withf(|text| text.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        assert!(copy_to_clipboard(&mock, ""));
    }
}
