//! Chat intent detection.
//!
//! A chat message such as "save this page" is a command to capture the
//! current page rather than a question for the memory service.

use crate::patterns::SAVE_PAGE_INTENT;

/// What a chat message asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatIntent {
    /// Capture the current page as a memory.
    SavePage,
    /// Ask the memory service a question.
    Ask,
}

/// Classifies a chat message. Leading and trailing whitespace is ignored.
#[must_use]
pub fn classify(message: &str) -> ChatIntent {
    if is_save_request(message.trim()) {
        ChatIntent::SavePage
    } else {
        ChatIntent::Ask
    }
}

/// True when the message asks to save the current page.
///
/// Matching is case-insensitive and may occur anywhere in the message.
#[must_use]
pub fn is_save_request(message: &str) -> bool {
    SAVE_PAGE_INTENT.is_match(message)
}
