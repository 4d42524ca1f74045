//! Error types for action descriptors.
//!
//! Structured descriptors arrive as JSON objects; these errors describe the
//! shapes that cannot be turned into an [`Action`](crate::Action).

/// Errors that can occur when building an [`Action`](crate::Action) from JSON.
///
/// # Examples
///
/// ```rust
/// use calltree::{Action, ActionError};
/// use serde_json::json;
///
/// let err = Action::try_from(json!({ "userId": 1 })).unwrap_err();
/// assert!(matches!(err, ActionError::MissingLabel));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The descriptor was a JSON value other than an object.
    #[error("Action descriptor must be a JSON object, found {found}")]
    NotAnObject {
        /// Kind of JSON value that was supplied
        found: &'static str,
    },

    /// The descriptor object has no `label` key.
    #[error("Action descriptor has no `label` field")]
    MissingLabel,
}
