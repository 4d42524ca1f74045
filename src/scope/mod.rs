// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Scopes: timed, logged activations of a tracer around one operation
//!
//! Every traced operation receives a [`Scope`] bound to its own activation. The
//! scope is the operation's tracer for sub-steps:
//!
//! - [`Scope::run`] / [`Scope::run_sync`] open a nested timed scope
//! - [`Scope::annotate`] writes a single inline line without timing anything
//!
//! [`NoopScope`] is a drop-in replacement that traces nothing, and the [`Measure`]
//! trait lets instrumented code accept either.
//!
//! # Examples
//!
//! ```rust
//! use calltree::{Action, Tracer};
//! use futures::future::join_all;
//!
//! # async fn example() {
//! let tracer = Tracer::new();
//! let names = tracer
//!     .measure("Fetch Multiple Users", |m| async move {
//!         // Children are numbered a, b, c in call order
//!         let fetches = [2, 3, 4].map(|id| {
//!             m.run(Action::new("Fetch User").field("userId", id), move |_| async move {
//!                 anyhow::Ok(format!("User {id}"))
//!             })
//!         });
//!         let names: Vec<String> = join_all(fetches)
//!             .await
//!             .into_iter()
//!             .filter_map(|outcome| outcome.ok())
//!             .collect();
//!         m.annotate(Action::new("fetched").field("count", names.len()));
//!         anyhow::Ok(names)
//!     })
//!     .await;
//! assert_eq!(names.ok().map(|n| n.len()), Some(3));
//! # }
//! ```

use std::{
    future::Future,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

use tracing::info;

use crate::{
    config::TracerConfig,
    outcome::Outcome,
    render::Line,
    types::{action::Action, chain::IdChain, id::ScopeId},
};

mod measure;
mod noop;
pub(crate) mod runner;

pub use measure::Measure;
pub use noop::NoopScope;

use runner::{run_scope, run_scope_sync};

/// Tracer bound to one open scope
///
/// Handed by value to the operation it measures. Child identifiers are taken from
/// this scope's own counter, starting at `a`, at the moment [`Scope::run`] or
/// [`Scope::run_sync`] is called.
#[derive(Debug)]
pub struct Scope {
    chain: IdChain,
    label: String,
    started: Instant,
    children: AtomicU64,
    config: Arc<TracerConfig>,
}

impl Scope {
    /// Chain locating this scope in the call tree
    pub fn chain(&self) -> &IdChain {
        &self.chain
    }

    /// This scope's identifier among its siblings
    pub fn id(&self) -> ScopeId {
        self.chain.id()
    }

    /// Nesting depth, zero for root scopes
    pub fn depth(&self) -> usize {
        self.chain.depth()
    }

    /// Label of the action this scope measures
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Time since this scope opened
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Number of child scopes opened so far
    pub fn children_opened(&self) -> u64 {
        self.children.load(Ordering::Relaxed)
    }

    /// Configuration inherited from the tracer
    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    fn next_child(&self) -> IdChain {
        let id = self.children.fetch_add(1, Ordering::Relaxed);
        self.chain.child(ScopeId::new(id))
    }

    fn default_action(&self) -> Action {
        Action::new(self.config.default_label.as_str())
    }

    /// Open a nested scope around an async operation
    ///
    /// The child identifier is allocated and the start line written immediately;
    /// the returned future runs the operation and writes the completion line. It
    /// does not borrow `self`, so it can be joined with siblings or spawned.
    pub fn run<T, F, Fut>(&self, action: impl Into<Action>, op: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Scope) -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        run_scope(Arc::clone(&self.config), self.next_child(), action.into(), op)
    }

    /// [`Scope::run`] with the configured default label
    pub fn run_unlabeled<T, F, Fut>(&self, op: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Scope) -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        self.run(self.default_action(), op)
    }

    /// Open a nested scope around a synchronous operation
    pub fn run_sync<T, F>(&self, action: impl Into<Action>, op: F) -> Outcome<T>
    where
        F: FnOnce(Scope) -> anyhow::Result<T>,
    {
        run_scope_sync(Arc::clone(&self.config), self.next_child(), action.into(), op)
    }

    /// [`Scope::run_sync`] with the configured default label
    pub fn run_sync_unlabeled<T, F>(&self, op: F) -> Outcome<T>
    where
        F: FnOnce(Scope) -> anyhow::Result<T>,
    {
        self.run_sync(self.default_action(), op)
    }

    /// Write an inline `=` line under this scope's chain
    ///
    /// Nothing is timed and no child identifier is used.
    pub fn annotate(&self, action: impl Into<Action>) {
        let action = action.into();
        info!(
            target: "calltree",
            "{}",
            Line::Nested {
                chain: &self.chain,
                action: &action,
            }
        );
    }
}
