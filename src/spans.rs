// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for calltree scopes.
//!
//! Telemetry concerns stay out of the scope runner: each scope gets a span from
//! this module, and the runner only enters it.
//!
//! Usage pattern:
//! ```rust,ignore
//! let span = spans::scope(&chain, &action);
//! let result = op(scope).instrument(span).await;
//! ```

use tracing::Span;

use crate::types::{action::Action, chain::IdChain};

/// Create span for one timed scope.
///
/// Trace level, so the plain-text log stays flat unless a subscriber asks for
/// span context explicitly.
///
/// Parent: the enclosing scope's span (or whatever span the caller is in)
/// Children: spans of scopes opened through the bound [`Scope`](crate::Scope)
#[inline]
pub(crate) fn scope(chain: &IdChain, action: &Action) -> Span {
    tracing::trace_span!(
        "calltree.scope",
        chain = %chain,
        label = action.label(),
        depth = chain.depth(),
    )
}
