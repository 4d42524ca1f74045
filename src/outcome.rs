// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Results of traced operations
//!
//! A scope never lets an operation's failure escape as a panic or an `Err` the
//! caller has to handle. Instead it settles into an [`Outcome`], which keeps
//! "the operation returned nothing useful" and "the operation failed" apart.

use crate::errors::Failure;

/// How a traced operation settled
///
/// # Examples
///
/// ```rust
/// use calltree::{Outcome, Tracer};
///
/// let tracer = Tracer::new();
///
/// let ok = tracer.measure_sync("parse", |_| anyhow::Ok(Some(3)));
/// assert_eq!(ok.ok(), Some(Some(3)));
///
/// let failed = tracer.measure_sync("parse", |_| -> anyhow::Result<Option<u32>> {
///     anyhow::bail!("bad input")
/// });
/// assert!(failed.is_failed());
/// assert_eq!(failed.failure().unwrap().error().to_string(), "bad input");
/// ```
#[derive(Debug)]
#[must_use = "an Outcome may hold a contained failure"]
pub enum Outcome<T> {
    /// The operation returned a value
    Completed(T),
    /// The operation failed; the failure was logged and contained
    Failed(Failure),
}

impl<T> Outcome<T> {
    /// Whether the operation returned a value
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }

    /// Whether the operation failed
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// The value, discarding any failure
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Completed(value) => Some(value),
            Outcome::Failed(_) => None,
        }
    }

    /// The contained failure, if any
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Outcome::Completed(_) => None,
            Outcome::Failed(failure) => Some(failure),
        }
    }

    /// Transform the value, keeping a failure as is
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Completed(value) => Outcome::Completed(f(value)),
            Outcome::Failed(failure) => Outcome::Failed(failure),
        }
    }

    /// Give up containment: turn a failure back into an `Err`
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Outcome::Completed(value) => Ok(value),
            Outcome::Failed(failure) => Err(failure),
        }
    }
}

impl<T> From<Outcome<T>> for anyhow::Result<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result().map_err(anyhow::Error::new)
    }
}

impl<T> From<Outcome<T>> for Option<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.ok()
    }
}
