// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across calltree.
//!
//! This module provides the values a scope is described by:
//! - Scope identifiers and their alphabetic encoding
//! - Identifier chains locating a scope in the call tree
//! - Action descriptors rendered into log lines

pub mod action;
pub mod chain;
pub mod id;

// Note: Public types are re-exported from lib.rs, not here
