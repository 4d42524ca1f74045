// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for calltree integration tests
//!
//! Provides a recording subscriber so tests can assert on the exact lines a
//! tracer writes without parsing formatted output.

#![allow(dead_code)]

use std::{
    fmt,
    sync::{Arc, Mutex},
};

use tracing::{
    field::{Field, Visit},
    span::{Attributes, Id},
    subscriber::DefaultGuard,
    Event, Level, Subscriber,
};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    registry::LookupSpan,
    Layer,
};

/// One recorded log event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub level: Level,
    pub message: String,
    /// `chain` field of the innermost scope span the event was emitted in
    pub scope: Option<String>,
}

/// Layer that keeps every event's level and message
///
/// # Example
///
/// ```rust,ignore
/// let (logs, _guard) = LogCapture::install();
/// tracer.measure_sync("op", |_| anyhow::Ok(42));
/// assert_eq!(logs.info()[0], "> [a] op");
/// ```
#[derive(Clone, Default)]
pub struct LogCapture {
    records: Arc<Mutex<Vec<Record>>>,
}

impl LogCapture {
    /// Install a recording subscriber for the current thread
    ///
    /// Events are recorded until the returned guard is dropped. Use with
    /// single-threaded runtimes (`#[tokio::test]` defaults to one).
    pub fn install() -> (Self, DefaultGuard) {
        let capture = Self::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    /// All records in emission order
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }

    /// Messages of INFO records
    pub fn info(&self) -> Vec<String> {
        self.at(Level::INFO)
    }

    /// Messages of ERROR records
    pub fn errors(&self) -> Vec<String> {
        self.at(Level::ERROR)
    }

    /// INFO messages starting with `prefix`
    pub fn info_starting_with(&self, prefix: &str) -> Vec<String> {
        self.info()
            .into_iter()
            .filter(|m| m.starts_with(prefix))
            .collect()
    }

    /// `(scope, message)` for every record, in emission order
    pub fn scoped(&self) -> Vec<(Option<String>, String)> {
        self.records()
            .into_iter()
            .map(|r| (r.scope, r.message))
            .collect()
    }

    fn at(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.level == level)
            .map(|r| r.message)
            .collect()
    }
}

/// Chain recorded on a scope span
struct ScopeChain(String);

impl<S> Layer<S> for LogCapture
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::new("chain");
        attrs.record(&mut visitor);
        if let (Some(chain), Some(span)) = (visitor.value, ctx.span(id)) {
            span.extensions_mut().insert(ScopeChain(chain));
        }
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::new("message");
        event.record(&mut visitor);
        let scope = ctx.event_span(event).and_then(|span| {
            span.extensions()
                .get::<ScopeChain>()
                .map(|chain| chain.0.clone())
        });
        self.records.lock().unwrap().push(Record {
            level: *event.metadata().level(),
            message: visitor.value.unwrap_or_default(),
            scope,
        });
    }
}

/// Captures one named field as text
struct FieldVisitor {
    name: &'static str,
    value: Option<String>,
}

impl FieldVisitor {
    fn new(name: &'static str) -> Self {
        Self { name, value: None }
    }
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == self.name {
            self.value = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == self.name {
            self.value = Some(format!("{value:?}"));
        }
    }
}

/// Splits a completion line into its chain, status mark and rest
///
/// `"< [a-b] ✓ 1.23ms"` becomes `("[a-b]", "✓", "1.23ms")`.
pub fn parse_end_line(line: &str) -> (String, String, String) {
    let rest = line.strip_prefix("< ").expect("not a completion line");
    let (chain, rest) = rest.split_once(' ').expect("missing status");
    let (status, rest) = rest.split_once(' ').expect("missing duration");
    (chain.to_string(), status.to_string(), rest.to_string())
}

/// Checks the `<digits>.<two digits>ms` duration format
pub fn is_duration(text: &str) -> bool {
    let Some(number) = text.strip_suffix("ms") else {
        return false;
    };
    let Some((whole, frac)) = number.split_once('.') else {
        return false;
    };
    !whole.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && frac.len() == 2
        && frac.bytes().all(|b| b.is_ascii_digit())
}
