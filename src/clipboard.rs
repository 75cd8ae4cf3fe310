//! Clipboard Module - Paste source for the entry control
//!
//! Internal text buffer used when the host feeds clipboard content into
//! the control (Ctrl+V). Digit filtering is not done here; the digit
//! buffer strips non-digits when the paste is applied.

use std::cell::RefCell;

thread_local! {
    static CLIPBOARD_BUFFER: RefCell<Option<String>> = RefCell::new(None);
}

/// Store text for later paste operations. Empty text is ignored.
pub fn copy(text: &str) {
    if text.is_empty() {
        return;
    }
    CLIPBOARD_BUFFER.with(|buf| {
        *buf.borrow_mut() = Some(text.to_string());
    });
}

/// The most recently copied text, or `None` if the clipboard is empty.
pub fn paste() -> Option<String> {
    CLIPBOARD_BUFFER.with(|buf| buf.borrow().clone())
}

/// Clear the clipboard.
pub fn clear() {
    CLIPBOARD_BUFFER.with(|buf| {
        *buf.borrow_mut() = None;
    });
}

/// Check if the clipboard has content.
pub fn has_content() -> bool {
    CLIPBOARD_BUFFER.with(|buf| buf.borrow().is_some())
}

// =============================================================================
// TESTS
// =============================================================================
