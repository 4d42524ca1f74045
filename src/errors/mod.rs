// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the calltree library.
//!
//! Two families live here:
//!
//! - **Operation errors**: whatever a traced operation fails with. Operations
//!   return [`anyhow::Result`], so any error type works. [`Fault`] adds structured
//!   cause data, [`Panicked`] represents a contained panic, and [`Failure`] is what
//!   a scope hands back after containing either.
//! - **Library errors**: [`ActionError`] and [`ConfigError`], unified under
//!   [`CalltreeError`] for callers that don't need to tell them apart.
//!
//! # Examples
//!
//! ```rust
//! use calltree::{Action, CalltreeError, TracerConfig};
//! use serde_json::json;
//!
//! fn load(descriptor: serde_json::Value, config: &str) -> Result<(Action, TracerConfig), CalltreeError> {
//!     let action = Action::try_from(descriptor)?;
//!     let config = TracerConfig::from_json(config)?;
//!     Ok((action, config))
//! }
//!
//! assert!(load(json!({ "label": "x" }), "{}").is_ok());
//! assert!(load(json!("x"), "{}").is_err());
//! ```

mod action;
mod config;
mod failure;
mod fault;

pub use action::ActionError;
pub use config::ConfigError;
pub use failure::Failure;
pub use fault::{Fault, Panicked};

pub(crate) use fault::structured_cause;

/// Unified error type for calltree library operations.
///
/// Operation failures are not part of this enum; they are reported through
/// [`Outcome::Failed`](crate::Outcome::Failed).
#[derive(Debug, thiserror::Error)]
pub enum CalltreeError {
    /// Invalid structured action descriptor.
    #[error("Action error: {0}")]
    Action(#[from] ActionError),

    /// Invalid tracer configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
