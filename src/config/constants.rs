// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Constants shared by the tracer and its log formatting
//!
//! This module centralizes the defaults and line markers used throughout the
//! calltree crate.

/// Label used when an operation is traced without an action descriptor
pub const DEFAULT_LABEL: &str = "noop";

/// Decimal places used for millisecond durations in completion lines
pub const DURATION_DECIMALS: usize = 2;

/// Line markers
pub mod markers {
    /// Opens a timed scope
    pub const START: &str = ">";

    /// Inline annotation inside a scope
    pub const NESTED: &str = "=";

    /// Closes a timed scope
    pub const END: &str = "<";

    /// Completion status of a successful scope
    pub const SUCCESS: &str = "✓";

    /// Completion status of a failed scope
    pub const FAILURE: &str = "✗";
}
