// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Log line rendering.
//!
//! Every line the tracer writes is built here. Lines are [`Display`](fmt::Display)
//! values so the logging macros format them lazily, only when the event is enabled.
//!
//! ```text
//! > [a] Comprehensive Workflow
//! > [a-a] Fetch User (userId=1)
//! < [a-a] ✓ 100.42ms
//! = [a] checkpoint (step=2)
//! < [a-b] ✗ 101.07ms (User not found)
//! < [a] ✓ 431.88ms
//! ```

use std::{
    backtrace::{Backtrace, BacktraceStatus},
    fmt,
    time::Duration,
};

use crate::{
    config::constants::{markers, DURATION_DECIMALS},
    errors::structured_cause,
    types::{action::Action, chain::IdChain},
};

/// One line of the informational stream
#[derive(Debug)]
pub(crate) enum Line<'a> {
    /// `> <chain> <action>`
    Start {
        chain: &'a IdChain,
        action: &'a Action,
    },
    /// `= <chain> <action>`
    Nested {
        chain: &'a IdChain,
        action: &'a Action,
    },
    /// `< <chain> ✓ <ms>ms`
    Success { chain: &'a IdChain, elapsed: Duration },
    /// `< <chain> ✗ <ms>ms (<message>)`
    Failure {
        chain: &'a IdChain,
        elapsed: Duration,
        error: &'a anyhow::Error,
    },
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Start { chain, action } => write!(f, "{} {chain} {action}", markers::START),
            Line::Nested { chain, action } => write!(f, "{} {chain} {action}", markers::NESTED),
            Line::Success { chain, elapsed } => write!(
                f,
                "{} {chain} {} {}ms",
                markers::END,
                markers::SUCCESS,
                Millis(*elapsed)
            ),
            Line::Failure {
                chain,
                elapsed,
                error,
            } => write!(
                f,
                "{} {chain} {} {}ms ({error})",
                markers::END,
                markers::FAILURE,
                Millis(*elapsed)
            ),
        }
    }
}

/// Error-stream entry for a failed scope
///
/// The chain and message, one `Caused by:` line per source, a `cause:` line if
/// the error carries structured cause data, and last the backtrace when one was
/// captured.
#[derive(Debug)]
pub(crate) struct Detail<'a> {
    chain: &'a IdChain,
    error: &'a anyhow::Error,
    backtrace: Option<&'a Backtrace>,
}

impl<'a> Detail<'a> {
    pub(crate) fn new(chain: &'a IdChain, error: &'a anyhow::Error) -> Self {
        let backtrace = Some(error.backtrace())
            .filter(|bt| bt.status() == BacktraceStatus::Captured);
        Self {
            chain,
            error,
            backtrace,
        }
    }
}

impl fmt::Display for Detail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.chain, self.error)?;
        for source in self.error.chain().skip(1) {
            write!(f, "\nCaused by: {source}")?;
        }
        if let Some(cause) = structured_cause(self.error) {
            write!(f, "\ncause: {cause}")?;
        }
        if let Some(backtrace) = self.backtrace {
            write!(f, "\nbacktrace:\n{backtrace}")?;
        }
        Ok(())
    }
}

/// Milliseconds with fixed decimals
struct Millis(Duration);

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.*}",
            DURATION_DECIMALS,
            self.0.as_secs_f64() * 1000.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::Fault, types::id::ScopeId};
    use serde_json::json;

    fn chain() -> IdChain {
        IdChain::root(ScopeId::new(0)).child(ScopeId::new(2))
    }

    #[test]
    fn test_start_line() {
        let chain = chain();
        let action = Action::new("Fetch User").field("userId", 1);
        let line = Line::Start {
            chain: &chain,
            action: &action,
        };
        assert_eq!(line.to_string(), "> [a-c] Fetch User (userId=1)");
    }

    #[test]
    fn test_nested_line() {
        let chain = IdChain::root(ScopeId::new(0));
        let action = Action::new("x").field("n", 1);
        let line = Line::Nested {
            chain: &chain,
            action: &action,
        };
        assert_eq!(line.to_string(), "= [a] x (n=1)");
    }

    #[test]
    fn test_success_line_has_two_decimals() {
        let chain = chain();
        let line = Line::Success {
            chain: &chain,
            elapsed: Duration::from_micros(12_346),
        };
        assert_eq!(line.to_string(), "< [a-c] ✓ 12.35ms");
    }

    #[test]
    fn test_failure_line_includes_message() {
        let chain = chain();
        let error = anyhow::anyhow!("boom");
        let line = Line::Failure {
            chain: &chain,
            elapsed: Duration::from_millis(3),
            error: &error,
        };
        assert_eq!(line.to_string(), "< [a-c] ✗ 3.00ms (boom)");
    }

    fn detail_lines(detail: &Detail<'_>) -> Vec<String> {
        detail.to_string().lines().map(str::to_string).collect()
    }

    #[test]
    fn test_detail_includes_source_chain_and_cause() {
        let chain = chain();
        let error = anyhow::Error::new(Fault::new("User not found").with_cause(json!({ "userId": 999 })))
            .context("Fetch Invalid User");
        let detail = Detail {
            chain: &chain,
            error: &error,
            backtrace: None,
        };

        assert_eq!(
            detail_lines(&detail),
            [
                "[a-c] Fetch Invalid User",
                "Caused by: User not found",
                r#"cause: {"userId":999}"#,
            ]
        );
    }

    #[test]
    fn test_detail_without_cause() {
        let chain = chain();
        let error = anyhow::anyhow!("boom");
        let detail = Detail {
            chain: &chain,
            error: &error,
            backtrace: None,
        };
        assert_eq!(detail_lines(&detail), ["[a-c] boom"]);
    }

    #[test]
    fn test_detail_backtrace_comes_after_cause() {
        let chain = chain();
        let error = anyhow::Error::new(Fault::new("boom").with_cause(json!({ "id": 1 })));
        let backtrace = Backtrace::force_capture();
        let detail = Detail {
            chain: &chain,
            error: &error,
            backtrace: Some(&backtrace),
        };

        let lines = detail_lines(&detail);
        assert_eq!(lines[0], "[a-c] boom");
        assert_eq!(lines[1], r#"cause: {"id":1}"#);
        assert_eq!(lines[2], "backtrace:");
        if backtrace.status() == BacktraceStatus::Captured {
            assert!(lines.len() > 3);
        }
        let cause_lines = lines.iter().filter(|l| l.starts_with("cause: ")).count();
        assert_eq!(cause_lines, 1);
    }

    #[test]
    fn test_detail_new_keeps_only_captured_backtrace() {
        let chain = chain();
        let error = anyhow::anyhow!("boom");
        let detail = Detail::new(&chain, &error);
        let captured = error.backtrace().status() == BacktraceStatus::Captured;
        assert_eq!(detail.backtrace.is_some(), captured);
        assert_eq!(detail.to_string().contains("\nbacktrace:\n"), captured);
    }
}
