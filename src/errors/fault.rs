// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors raised by traced operations.
//!
//! Operations may fail with any error that converts into [`anyhow::Error`].
//! [`Fault`] is a ready-made error that additionally carries structured cause data,
//! which the tracer prints on its own `cause:` line. [`Panicked`] is what a
//! contained panic turns into.

use std::any::Any;

use serde_json::Value;

/// A failure with an optional structured cause
///
/// # Examples
///
/// ```rust
/// use calltree::Fault;
/// use serde_json::json;
///
/// let fault = Fault::new("User not found").with_cause(json!({ "userId": 999 }));
/// assert_eq!(fault.to_string(), "User not found");
/// assert_eq!(fault.cause(), Some(&json!({ "userId": 999 })));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct Fault {
    message: String,
    cause: Option<Value>,
}

impl Fault {
    /// Create a fault with a message and no cause data
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Attach structured cause data
    pub fn with_cause(mut self, cause: impl Into<Value>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// The fault message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Structured cause data, if any
    pub fn cause(&self) -> Option<&Value> {
        self.cause.as_ref()
    }
}

/// A panic caught at a scope boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("operation panicked: {message}")]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// Builds the error from a panic payload as returned by `catch_unwind`
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self { message }
    }

    /// The panic message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Structured cause data carried anywhere in an error's source chain
pub(crate) fn structured_cause(error: &anyhow::Error) -> Option<&Value> {
    error
        .chain()
        .find_map(|e| e.downcast_ref::<Fault>())
        .and_then(Fault::cause)
}
