// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Scope identifiers
//!
//! Every scope is numbered among its siblings. The number is displayed as a short
//! alphabetic label so that nested chains like `[b-a-c]` stay readable in logs.

use serde::{Deserialize, Serialize};
use std::fmt;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
const RADIX: u64 = ALPHABET.len() as u64;

/// Encodes a sibling number as an alphabetic label
///
/// Digits run from `a` (0) to `z` (25). The leading digit is never `a` unless the
/// number itself is zero, so every number has exactly one label.
///
/// # Examples
///
/// ```
/// use calltree::encode;
///
/// assert_eq!(encode(0), "a");
/// assert_eq!(encode(25), "z");
/// assert_eq!(encode(26), "ba");
/// assert_eq!(encode(676), "baa");
/// ```
pub fn encode(mut n: u64) -> String {
    // u64::MAX needs 14 base-26 digits
    let mut digits = Vec::with_capacity(14);
    loop {
        digits.push(ALPHABET[(n % RADIX) as usize]);
        n /= RADIX;
        if n == 0 {
            break;
        }
    }
    digits.iter().rev().map(|&b| b as char).collect()
}

/// Identifier of a scope among its siblings
///
/// Wraps the raw sibling number; [`Display`](fmt::Display) renders the encoded
/// label.
///
/// # Examples
///
/// ```
/// use calltree::ScopeId;
///
/// let id = ScopeId::new(27);
/// assert_eq!(id.to_string(), "bb");
/// assert_eq!(id.index(), 27);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeId(u64);

impl ScopeId {
    /// The first identifier handed out at any depth
    pub const FIRST: Self = Self(0);

    /// Create an identifier from a raw sibling number
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    /// Raw sibling number
    pub const fn index(&self) -> u64 {
        self.0
    }

    /// Encoded label
    pub fn label(&self) -> String {
        encode(self.0)
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self.0))
    }
}

impl From<u64> for ScopeId {
    fn from(index: u64) -> Self {
        Self(index)
    }
}
