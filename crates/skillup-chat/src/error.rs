//! Error types for the chat assistant.

use skillup_core::error::SkillUpError;

/// Errors from the chat assistant.
///
/// Classification never fails; these come from construction and from the
/// message guard in front of the router.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat is disabled")]
    Disabled,
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("pattern error: {0}")]
    PatternError(String),
    #[error("catalog error: {0}")]
    CatalogError(String),
    #[error("history error: {0}")]
    HistoryError(String),
}

impl From<SkillUpError> for ChatError {
    fn from(err: SkillUpError) -> Self {
        ChatError::CatalogError(err.to_string())
    }
}

impl From<regex::Error> for ChatError {
    fn from(err: regex::Error) -> Self {
        ChatError::PatternError(err.to_string())
    }
}
