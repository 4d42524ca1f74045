// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Action descriptors
//!
//! An [`Action`] says what a scope is doing. It is only ever rendered into log
//! lines: a label, optionally followed by auxiliary `key=value` pairs whose values
//! are printed as compact JSON.

use serde_json::Value;
use std::fmt;

use crate::errors::ActionError;

/// Key reserved for the label in structured descriptors
pub const LABEL_KEY: &str = "label";

/// Label plus auxiliary display fields describing a traced operation
///
/// Fields keep their insertion order. Setting a key twice replaces the earlier
/// value in place.
///
/// # Examples
///
/// ```
/// use calltree::Action;
///
/// let action = Action::new("Fetch User").field("userId", 1).field("cached", false);
/// assert_eq!(action.to_string(), "Fetch User (userId=1 cached=false)");
///
/// let plain: Action = "Enrich Posts".into();
/// assert_eq!(plain.to_string(), "Enrich Posts");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    label: String,
    fields: Vec<(String, Value)>,
}

impl Action {
    /// Descriptor with a label and no auxiliary fields
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fields: Vec::new(),
        }
    }

    /// Adds or replaces an auxiliary display field
    ///
    /// A field named `label` is kept but never rendered; use [`Action::new`] to
    /// set the label.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
        self
    }

    /// The label shown in log lines
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Value of an auxiliary field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Auxiliary fields that are rendered, in insertion order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .filter(|(k, _)| k != LABEL_KEY)
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Whether any auxiliary field would be rendered
    pub fn has_fields(&self) -> bool {
        self.fields().next().is_some()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)?;
        if !self.has_fields() {
            return Ok(());
        }
        f.write_str(" (")?;
        for (i, (key, value)) in self.fields().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str(")")
    }
}

impl From<&str> for Action {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Action {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

impl From<&String> for Action {
    fn from(label: &String) -> Self {
        Self::new(label.as_str())
    }
}

impl From<&Action> for Action {
    fn from(action: &Action) -> Self {
        action.clone()
    }
}

/// Builds a descriptor from a JSON object with a `label` key
///
/// A string label is used verbatim, any other JSON value is rendered as JSON.
/// The remaining keys become auxiliary fields, in object order.
///
/// ```
/// use calltree::Action;
/// use serde_json::json;
///
/// let action = Action::try_from(json!({ "label": "Fetch Posts", "userId": 7 })).unwrap();
/// assert_eq!(action.to_string(), "Fetch Posts (userId=7)");
/// ```
impl TryFrom<Value> for Action {
    type Error = ActionError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(map) = value else {
            return Err(ActionError::NotAnObject {
                found: json_kind(&value),
            });
        };

        let label = match map.get(LABEL_KEY) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => return Err(ActionError::MissingLabel),
        };

        let fields = map
            .into_iter()
            .filter(|(k, _)| k != LABEL_KEY)
            .collect();

        Ok(Self { label, fields })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
