//! Error types for tracer configuration.

/// Errors that can occur while loading a [`TracerConfig`](crate::TracerConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON or has wrongly typed fields.
    #[error("Failed to parse tracer configuration")]
    Parse(#[from] serde_json::Error),

    /// The default label is empty.
    ///
    /// Empty labels produce start lines with nothing after the chain, which makes
    /// the log unreadable.
    #[error("Default label must not be empty")]
    EmptyDefaultLabel,
}
