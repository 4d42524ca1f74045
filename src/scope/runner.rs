// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Scope runner shared by the async and sync entry points.
//!
//! Opening a scope logs its start line and produces the child [`Scope`] handed to
//! the operation. Settling it logs the completion line and turns the operation's
//! result into an [`Outcome`]. The two runners differ only in how they drive the
//! operation in between.

use std::{
    future::Future,
    panic::{self, AssertUnwindSafe},
    sync::{atomic::AtomicU64, Arc},
    time::Instant,
};

use futures::FutureExt;
use tracing::{error, info, Instrument};

use super::Scope;
use crate::{
    config::TracerConfig,
    errors::{Failure, Panicked},
    outcome::Outcome,
    render::{Detail, Line},
    spans,
    types::{action::Action, chain::IdChain},
};

/// A scope that has been opened but not yet settled
#[derive(Debug)]
struct Activation {
    chain: IdChain,
    started: Instant,
    config: Arc<TracerConfig>,
}

impl Activation {
    fn open(config: Arc<TracerConfig>, chain: IdChain, action: &Action) -> (Self, Scope) {
        info!(
            target: "calltree",
            "{}",
            Line::Start {
                chain: &chain,
                action,
            }
        );

        let started = Instant::now();
        let scope = Scope {
            chain: chain.clone(),
            label: action.label().to_string(),
            started,
            children: AtomicU64::new(0),
            config: Arc::clone(&config),
        };

        (
            Self {
                chain,
                started,
                config,
            },
            scope,
        )
    }

    fn settle<T>(self, result: anyhow::Result<T>) -> Outcome<T> {
        let elapsed = self.started.elapsed();
        match result {
            Ok(value) => {
                info!(
                    target: "calltree",
                    "{}",
                    Line::Success {
                        chain: &self.chain,
                        elapsed,
                    }
                );
                Outcome::Completed(value)
            }
            Err(e) => {
                info!(
                    target: "calltree",
                    "{}",
                    Line::Failure {
                        chain: &self.chain,
                        elapsed,
                        error: &e,
                    }
                );
                if self.config.failure_detail {
                    error!(
                        target: "calltree",
                        "{}",
                        Detail::new(&self.chain, &e)
                    );
                }
                Outcome::Failed(Failure::new(self.chain, elapsed, e))
            }
        }
    }
}

/// Opens a scope now and returns the future that runs `op` inside it
///
/// The start line is written before this function returns, so sibling scopes
/// log in the order they were requested even when they run concurrently. Every
/// line of the scope is emitted inside its span.
pub(crate) fn run_scope<T, F, Fut>(
    config: Arc<TracerConfig>,
    chain: IdChain,
    action: Action,
    op: F,
) -> impl Future<Output = Outcome<T>>
where
    F: FnOnce(Scope) -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    let span = spans::scope(&chain, &action);
    let catch_panics = config.catch_panics;
    let (activation, scope) = span.in_scope(|| Activation::open(config, chain, &action));

    async move {
        let run = async move { op(scope).await };
        let result = if catch_panics {
            AssertUnwindSafe(run)
                .catch_unwind()
                .await
                .unwrap_or_else(|payload| Err(Panicked::from_payload(payload).into()))
        } else {
            run.await
        };
        activation.settle(result)
    }
    .instrument(span)
}

/// Opens a scope and runs `op` inside it to completion
pub(crate) fn run_scope_sync<T, F>(
    config: Arc<TracerConfig>,
    chain: IdChain,
    action: Action,
    op: F,
) -> Outcome<T>
where
    F: FnOnce(Scope) -> anyhow::Result<T>,
{
    let span = spans::scope(&chain, &action);
    let catch_panics = config.catch_panics;

    span.in_scope(|| {
        let (activation, scope) = Activation::open(config, chain, &action);
        let result = if catch_panics {
            panic::catch_unwind(AssertUnwindSafe(|| op(scope)))
                .unwrap_or_else(|payload| Err(Panicked::from_payload(payload).into()))
        } else {
            op(scope)
        };
        activation.settle(result)
    })
}
