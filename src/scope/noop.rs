//! No-operation scope that disables tracing entirely

use std::future::Future;

use super::Measure;
use crate::types::action::Action;

/// A scope that traces nothing
///
/// Operations run immediately with a `NoopScope` as their own tracer, so nested
/// sub-steps keep working. Nothing is logged, no identifiers are allocated and
/// errors or panics reach the caller unchanged. Use this when tracing is
/// switched off.
///
/// # Examples
///
/// ```rust
/// use calltree::{Measure, NoopScope};
///
/// let value = NoopScope.run_sync("outer", |inner| inner.run_sync("inner", |_| anyhow::Ok(42)));
/// assert_eq!(value.unwrap(), 42);
///
/// let err = NoopScope.run_sync("fails", |_| -> anyhow::Result<()> { anyhow::bail!("boom") });
/// assert_eq!(err.unwrap_err().to_string(), "boom");
/// ```
///
/// # Performance
///
/// No allocation, clock read or logging call happens per operation; the action
/// descriptor is dropped unconverted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScope;

impl Measure for NoopScope {
    type Output<T> = anyhow::Result<T>;

    fn run<T, F, Fut>(
        &self,
        _action: impl Into<Action>,
        op: F,
    ) -> impl Future<Output = anyhow::Result<T>> + Send
    where
        T: Send,
        F: FnOnce(Self) -> Fut + Send,
        Fut: Future<Output = anyhow::Result<T>> + Send,
    {
        // Called before returning so the operation starts when the caller asks for it
        op(NoopScope)
    }

    fn run_local<T, F, Fut>(
        &self,
        _action: impl Into<Action>,
        op: F,
    ) -> impl Future<Output = anyhow::Result<T>>
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        op(NoopScope)
    }

    fn run_sync<T, F>(&self, _action: impl Into<Action>, op: F) -> anyhow::Result<T>
    where
        F: FnOnce(Self) -> anyhow::Result<T>,
    {
        op(NoopScope)
    }

    fn annotate(&self, _action: impl Into<Action>) {
        // Nothing to record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_returns_value() {
        assert_eq!(NoopScope.run_sync("x", |_| anyhow::Ok("v")).unwrap(), "v");
    }

    #[test]
    fn test_noop_nests() {
        let depth = NoopScope
            .run_sync("a", |a| a.run_sync("b", |b| b.run_sync("c", |_| anyhow::Ok(3))))
            .unwrap();
        assert_eq!(depth, 3);
    }

    #[test]
    fn test_noop_propagates_error_unchanged() {
        #[derive(Debug, thiserror::Error)]
        #[error("custom")]
        struct Custom;

        let err = NoopScope
            .run_sync("x", |_| -> anyhow::Result<()> { Err(Custom.into()) })
            .unwrap_err();
        assert!(err.downcast_ref::<Custom>().is_some());
    }

    #[test]
    fn test_noop_propagates_panics() {
        let caught = std::panic::catch_unwind(|| {
            let _ = NoopScope.run_sync("x", |_| -> anyhow::Result<()> { panic!("boom") });
        });
        assert!(caught.is_err());
    }

    #[test]
    fn test_noop_annotate_is_silent() {
        NoopScope.annotate("ignored");
    }

    #[tokio::test]
    async fn test_noop_async_returns_value() {
        let value = NoopScope
            .run("outer", |inner| async move {
                inner.run("inner", |_| async { anyhow::Ok(7) }).await
            })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }
}
