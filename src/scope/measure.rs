// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Capability interface shared by real and no-op scopes

use std::future::Future;

use crate::{outcome::Outcome, types::action::Action};

use super::Scope;

/// Something that can measure sub-steps of an operation
///
/// Implemented by [`Scope`] (times, logs and contains failures) and
/// [`NoopScope`](super::NoopScope) (runs operations untouched). Code written against
/// `M: Measure` can be traced or not depending on which one the caller passes in.
///
/// Results come back as [`Measure::Output`], which always converts into
/// [`anyhow::Result`]:
///
/// ```rust
/// use calltree::{Action, Measure, NoopScope, Tracer};
///
/// async fn load_profile<M: Measure>(m: &M, user_id: u64) -> anyhow::Result<String> {
///     m.annotate(Action::new("loading").field("userId", user_id));
///     let name: anyhow::Result<String> = m
///         .run(Action::new("Fetch User").field("userId", user_id), |_| async move {
///             anyhow::Ok(format!("User {user_id}"))
///         })
///         .await
///         .into();
///     name
/// }
///
/// # async fn example() -> anyhow::Result<()> {
/// // Untraced
/// assert_eq!(load_profile(&NoopScope, 1).await?, "User 1");
///
/// // Traced under a root scope
/// let traced = Tracer::new()
///     .measure("profile", |m| async move { load_profile(&m, 2).await })
///     .await;
/// assert_eq!(traced.ok().as_deref(), Some("User 2"));
/// # Ok(())
/// # }
/// ```
pub trait Measure: Sized + Send + Sync {
    /// What a measured operation settles into
    type Output<T>: Into<anyhow::Result<T>>;

    /// Measure an async sub-step
    ///
    /// The operation, its future and its value must be `Send` so the returned
    /// future can be spawned. Use [`Measure::run_local`] for operations that
    /// hold `Rc`, `RefCell` or other thread-bound state.
    fn run<T, F, Fut>(
        &self,
        action: impl Into<Action>,
        op: F,
    ) -> impl Future<Output = Self::Output<T>> + Send
    where
        T: Send,
        F: FnOnce(Self) -> Fut + Send,
        Fut: Future<Output = anyhow::Result<T>> + Send;

    /// Measure an async sub-step that stays on the current thread
    ///
    /// Same as [`Measure::run`] without the `Send` bounds. The returned future is
    /// not `Send` either, so drive it with `.await` or a local task set.
    fn run_local<T, F, Fut>(
        &self,
        action: impl Into<Action>,
        op: F,
    ) -> impl Future<Output = Self::Output<T>>
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = anyhow::Result<T>>;

    /// Measure a synchronous sub-step
    fn run_sync<T, F>(&self, action: impl Into<Action>, op: F) -> Self::Output<T>
    where
        F: FnOnce(Self) -> anyhow::Result<T>;

    /// Record an inline annotation
    fn annotate(&self, action: impl Into<Action>);
}

impl Measure for Scope {
    type Output<T> = Outcome<T>;

    fn run<T, F, Fut>(
        &self,
        action: impl Into<Action>,
        op: F,
    ) -> impl Future<Output = Outcome<T>> + Send
    where
        T: Send,
        F: FnOnce(Self) -> Fut + Send,
        Fut: Future<Output = anyhow::Result<T>> + Send,
    {
        Scope::run(self, action, op)
    }

    fn run_local<T, F, Fut>(
        &self,
        action: impl Into<Action>,
        op: F,
    ) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        Scope::run(self, action, op)
    }

    fn run_sync<T, F>(&self, action: impl Into<Action>, op: F) -> Outcome<T>
    where
        F: FnOnce(Self) -> anyhow::Result<T>,
    {
        Scope::run_sync(self, action, op)
    }

    fn annotate(&self, action: impl Into<Action>) {
        Scope::annotate(self, action)
    }
}
