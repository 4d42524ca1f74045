// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Contained operation failures.

use std::{error::Error as StdError, fmt, time::Duration};

use serde_json::Value;

use super::fault::structured_cause;
use crate::types::chain::IdChain;

/// A failure caught at a scope boundary
///
/// Holds the operation's error together with where and after how long it
/// happened. `Failure` implements [`std::error::Error`], so a caller that does
/// not want containment can re-raise it with `?`:
///
/// ```rust
/// use calltree::Tracer;
///
/// # async fn example() -> anyhow::Result<()> {
/// let tracer = Tracer::new();
/// let value: u32 = tracer
///     .measure("strict step", |_| async { anyhow::Ok(7) })
///     .await
///     .into_result()?;
/// assert_eq!(value, 7);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Failure {
    chain: IdChain,
    elapsed: Duration,
    error: anyhow::Error,
}

impl Failure {
    pub(crate) fn new(chain: IdChain, elapsed: Duration, error: anyhow::Error) -> Self {
        Self {
            chain,
            elapsed,
            error,
        }
    }

    /// Chain of the scope where the failure was contained
    pub fn chain(&self) -> &IdChain {
        &self.chain
    }

    /// Time between the scope opening and the failure
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The operation's error
    pub fn error(&self) -> &anyhow::Error {
        &self.error
    }

    /// Structured cause data attached with [`Fault::with_cause`](crate::Fault::with_cause)
    pub fn cause(&self) -> Option<&Value> {
        structured_cause(&self.error)
    }

    /// Gives back the operation's error
    pub fn into_error(self) -> anyhow::Error {
        self.error
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.chain, self.error)
    }
}

impl StdError for Failure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        let source: &(dyn StdError + 'static) = self.error.as_ref();
        Some(source)
    }
}
