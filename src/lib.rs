// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Call-tree instrumentation for async and sync Rust code.
//!
//! `calltree` wraps operations in *scopes*. Each scope times its operation, logs a
//! start and an end line tagged with a hierarchical identifier, and contains
//! failures: an operation that errors or panics is logged and settles into
//! [`Outcome::Failed`] instead of unwinding into its caller.
//!
//! ```text
//! > [a] Comprehensive Workflow
//! > [a-a] Fetch User (userId=1)
//! < [a-a] ✓ 100.31ms
//! > [a-b] Fetch Invalid User (userId=999)
//! < [a-b] ✗ 100.52ms (User not found)
//! < [a] ✓ 201.40ms
//! ```
//!
//! # Entry points
//!
//! - [`Tracer`] opens root scopes: [`Tracer::measure`], [`Tracer::measure_sync`]
//!   and the fire-and-forget [`Tracer::annotate`].
//! - [`Scope`] is handed to every traced operation and opens nested scopes:
//!   [`Scope::run`], [`Scope::run_sync`] and [`Scope::annotate`].
//! - [`NoopScope`] stands in for a [`Scope`] when tracing is off; both implement
//!   [`Measure`].
//!
//! # Output
//!
//! Lines are emitted as `tracing` events: start, inline, and completion lines at
//! INFO, failure details (error chain, backtrace, structured cause) at ERROR.
//! Any subscriber works; with the `subscriber` feature, [`logging::init`]
//! installs one that prints INFO to stdout and ERROR to stderr.
//!
//! # Example
//!
//! ```rust
//! use calltree::{Action, Tracer};
//!
//! # async fn example() {
//! let tracer = Tracer::new();
//! let posts = tracer
//!     .measure("Enrich Posts with Comments", |m| async move {
//!         let posts = m
//!             .run(Action::new("Fetch Posts").field("userId", 1), |_| async {
//!                 anyhow::Ok(vec![1, 2])
//!             })
//!             .await
//!             .ok()
//!             .unwrap_or_default();
//!
//!         for post in &posts {
//!             let _ = m
//!                 .run(Action::new("Fetch Comments").field("postId", *post), |_| async {
//!                     anyhow::Ok(())
//!                 })
//!                 .await;
//!         }
//!         anyhow::Ok(posts)
//!     })
//!     .await;
//! assert_eq!(posts.ok(), Some(vec![1, 2]));
//! # }
//! ```

mod config;
mod errors;
mod outcome;
mod render;
mod scope;
mod spans;
mod tracer;
mod types;

#[cfg(feature = "subscriber")]
pub mod logging;

pub use config::{constants, TracerConfig, TracerConfigBuilder};
pub use errors::{ActionError, CalltreeError, ConfigError, Failure, Fault, Panicked};
pub use outcome::Outcome;
pub use scope::{Measure, NoopScope, Scope};
pub use tracer::{RootCounter, Tracer};
pub use types::{
    action::{Action, LABEL_KEY},
    chain::IdChain,
    id::{encode, ScopeId},
};
