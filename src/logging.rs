// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Plain-text subscriber for calltree output.
//!
//! Informational lines (`>`, `=`, `<`) go to stdout and failure detail entries go
//! to stderr, one line per event with no timestamp or target prefix. Filtering
//! follows `RUST_LOG` and defaults to `info`.

use tracing::Level;
use tracing_subscriber::{fmt::writer::MakeWriterExt, EnvFilter};

/// Install the calltree subscriber as the global default.
///
/// Safe to call multiple times; subsequent calls are no-ops. Returns `false` if a
/// global subscriber was already installed.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let writer = std::io::stderr
        .with_max_level(Level::WARN)
        .or_else(std::io::stdout);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .without_time()
        .with_level(false)
        .with_target(false)
        .try_init()
        .is_ok()
}
