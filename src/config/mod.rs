// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for calltree tracers
//!
//! This module provides the knobs that control how a [`Tracer`](crate::Tracer)
//! labels, contains and reports operations.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use calltree::TracerConfig;
//!
//! // "noop" default label, panics contained, failure detail logged
//! let config = TracerConfig::default();
//! assert!(config.catch_panics);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use calltree::TracerConfigBuilder;
//!
//! let config = TracerConfigBuilder::new()
//!     .default_label("step")
//!     .catch_panics(false)
//!     .build();
//! assert_eq!(config.default_label, "step");
//! ```
//!
//! # Example: Loading from JSON
//!
//! ```rust
//! use calltree::TracerConfig;
//!
//! let config = TracerConfig::from_json(r#"{ "failure_detail": false }"#).unwrap();
//! assert!(!config.failure_detail);
//! assert_eq!(config.default_label, "noop"); // missing keys keep defaults
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub mod constants;

/// Configuration for a [`Tracer`](crate::Tracer) and every scope it opens
///
/// Use [`TracerConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracerConfig {
    /// Label for operations traced without a descriptor
    /// Default: "noop"
    pub default_label: String,

    /// Contain panics raised by operations as failures
    /// Default: true. When false, panics unwind through the scope untouched.
    pub catch_panics: bool,

    /// Emit the error-level detail entry (source chain, backtrace, cause) for failures
    /// Default: true. The `✗` completion line is always emitted.
    pub failure_detail: bool,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            default_label: constants::DEFAULT_LABEL.to_string(),
            catch_panics: true,
            failure_detail: true,
        }
    }
}

impl TracerConfig {
    /// Create config that only logs the four line kinds
    ///
    /// Failure detail entries are skipped and panics are left to unwind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calltree::TracerConfig;
    ///
    /// let config = TracerConfig::minimal();
    /// assert!(!config.catch_panics);
    /// assert!(!config.failure_detail);
    /// ```
    pub fn minimal() -> Self {
        Self {
            default_label: constants::DEFAULT_LABEL.to_string(),
            catch_panics: false,
            failure_detail: false,
        }
    }

    /// Parse a JSON document, filling missing keys with defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    /// Check that the configuration is usable
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.default_label.trim().is_empty() {
            return Err(ConfigError::EmptyDefaultLabel);
        }
        Ok(self)
    }
}

/// Builder for [`TracerConfig`]
///
/// # Example
///
/// ```rust
/// use calltree::TracerConfigBuilder;
///
/// let config = TracerConfigBuilder::new()
///     .failure_detail(false)
///     .build();
/// assert!(!config.failure_detail);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TracerConfigBuilder {
    config: TracerConfig,
}

impl TracerConfigBuilder {
    /// Create a new builder starting from [`TracerConfig::default`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label used when no descriptor is given
    pub fn default_label(mut self, label: impl Into<String>) -> Self {
        self.config.default_label = label.into();
        self
    }

    /// Contain or propagate panics raised by operations
    pub fn catch_panics(mut self, enabled: bool) -> Self {
        self.config.catch_panics = enabled;
        self
    }

    /// Emit or skip the error-level failure detail entry
    pub fn failure_detail(mut self, enabled: bool) -> Self {
        self.config.failure_detail = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> TracerConfig {
        self.config
    }
}
