//! Library-wide error types.

use thiserror::Error;

/// A setting that exists but could not be used.
///
/// Benign absence is never an error: load operations report it as success
/// and leave the caller's slot untouched. `LoadError` always means "the key
/// is configured and its value is unusable", and carries the same text
/// already sent to the diagnostic sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{group}] {key}: {message}")]
pub struct LoadError {
    /// Section the key was looked up in.
    pub group: String,
    /// Key whose value failed conversion.
    pub key: String,
    /// Underlying store or conversion message.
    pub message: String,
}

impl LoadError {
    pub(crate) fn new(group: &str, key: &str, message: impl Into<String>) -> Self {
        Self {
            group: group.to_string(),
            key: key.to_string(),
            message: message.into(),
        }
    }
}
