// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Root entry points
//!
//! A [`Tracer`] numbers top-level operations with its [`RootCounter`] and opens a
//! root scope for each. Clones share the counter, so every root scope opened
//! through one tracer (or any of its clones) gets a distinct identifier.

use std::{
    future::Future,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use tracing::info;

use crate::{
    config::TracerConfig,
    outcome::Outcome,
    render::Line,
    scope::{
        runner::{run_scope, run_scope_sync},
        Scope,
    },
    types::{action::Action, chain::IdChain, id::ScopeId},
};

/// Hands out identifiers to root scopes
///
/// Starts at `a` and only ever counts up.
///
/// # Examples
///
/// ```
/// use calltree::RootCounter;
///
/// let counter = RootCounter::new();
/// assert_eq!(counter.next().to_string(), "a");
/// assert_eq!(counter.next().to_string(), "b");
/// assert_eq!(counter.issued(), 2);
/// ```
#[derive(Debug, Default)]
pub struct RootCounter(AtomicU64);

impl RootCounter {
    /// Counter that starts at `a`
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next root identifier
    pub fn next(&self) -> ScopeId {
        ScopeId::new(self.0.fetch_add(1, Ordering::Relaxed))
    }

    /// Number of identifiers handed out so far
    pub fn issued(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Opens root scopes around top-level operations
///
/// # Examples
///
/// ```rust
/// use calltree::{Action, Fault, Tracer};
/// use serde_json::json;
///
/// # async fn example() {
/// let tracer = Tracer::new();
///
/// let user = tracer
///     .measure("Comprehensive Workflow", |m| async move {
///         let user = m
///             .run(Action::new("Fetch User").field("userId", 1), |_| async {
///                 anyhow::Ok("User 1")
///             })
///             .await;
///
///         // Fails, gets logged, and the workflow carries on
///         let missing = m
///             .run(Action::new("Fetch Invalid User").field("userId", 999), |_| async {
///                 Err::<&str, anyhow::Error>(Fault::new("User not found").with_cause(json!({ "userId": 999 })).into())
///             })
///             .await;
///         assert!(missing.is_failed());
///
///         anyhow::Ok(user.ok())
///     })
///     .await;
///
/// assert_eq!(user.ok().flatten(), Some("User 1"));
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tracer {
    roots: Arc<RootCounter>,
    config: Arc<TracerConfig>,
}

impl Tracer {
    /// Tracer with default configuration and a fresh root counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracer with the given configuration and a fresh root counter
    pub fn with_config(config: TracerConfig) -> Self {
        Self {
            roots: Arc::default(),
            config: Arc::new(config),
        }
    }

    /// Share a root counter with other tracers
    ///
    /// Tracers built from one counter never hand out the same root identifier,
    /// even with different configurations.
    pub fn with_root_counter(mut self, roots: Arc<RootCounter>) -> Self {
        self.roots = roots;
        self
    }

    /// Configuration applied to every scope this tracer opens
    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    /// Root counter backing this tracer
    pub fn root_counter(&self) -> &Arc<RootCounter> {
        &self.roots
    }

    fn next_root(&self) -> IdChain {
        IdChain::root(self.roots.next())
    }

    fn default_action(&self) -> Action {
        Action::new(self.config.default_label.as_str())
    }

    /// Measure an async operation as a new root scope
    ///
    /// The root identifier is taken and the start line written immediately. The
    /// returned future never fails: an error or panic in `op` is logged and
    /// comes back as [`Outcome::Failed`].
    pub fn measure<T, F, Fut>(
        &self,
        action: impl Into<Action>,
        op: F,
    ) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Scope) -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        run_scope(Arc::clone(&self.config), self.next_root(), action.into(), op)
    }

    /// [`Tracer::measure`] with the configured default label
    pub fn measure_unlabeled<T, F, Fut>(&self, op: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Scope) -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        self.measure(self.default_action(), op)
    }

    /// Measure a synchronous operation as a new root scope
    pub fn measure_sync<T, F>(&self, action: impl Into<Action>, op: F) -> Outcome<T>
    where
        F: FnOnce(Scope) -> anyhow::Result<T>,
    {
        run_scope_sync(Arc::clone(&self.config), self.next_root(), action.into(), op)
    }

    /// [`Tracer::measure_sync`] with the configured default label
    pub fn measure_sync_unlabeled<T, F>(&self, op: F) -> Outcome<T>
    where
        F: FnOnce(Scope) -> anyhow::Result<T>,
    {
        self.measure_sync(self.default_action(), op)
    }

    /// Write a single start line under the next root identifier
    ///
    /// Nothing is timed and no completion line follows.
    pub fn annotate(&self, action: impl Into<Action>) {
        let chain = self.next_root();
        let action = action.into();
        info!(
            target: "calltree",
            "{}",
            Line::Start {
                chain: &chain,
                action: &action,
            }
        );
    }
}
