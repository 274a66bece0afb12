//! Validation error maps
//!
//! An `ErrorMap` is what a model's validation step reports: field name to the
//! ordered list of messages raised for that field. An empty map means the
//! record is fully valid.
//!
//! Comparison is exact. Two maps are equal only when they carry the same keys
//! and, per key, the same messages in the same order. `diff` lists every
//! difference so a failed assertion can be read without re-running it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Field name to ordered validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMap {
    errors: BTreeMap<String, Vec<String>>,
}

impl ErrorMap {
    /// Create an empty (fully valid) error map
    pub fn new() -> Self {
        Self::default()
    }

    /// A map holding exactly one message on one field
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut map = Self::new();
        map.push(field, message);
        map
    }

    /// Builder-style `push`
    pub fn with(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.push(field, message);
        self
    }

    /// Append a message to a field's list
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Messages raised for a field
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(|v| v.as_slice())
    }

    /// Whether any message was raised for the field
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Whether the map is empty (record valid)
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one message
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate `(field, messages)` in field order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Compare `expected` against `actual`
    ///
    /// Returns one mismatch per field whose message list differs, including
    /// fields missing from either side. Empty when the maps are equal.
    pub fn diff(expected: &ErrorMap, actual: &ErrorMap) -> Vec<ErrorMismatch> {
        let mut mismatches = Vec::new();

        for (field, expected_messages) in &expected.errors {
            match actual.errors.get(field) {
                Some(actual_messages) if actual_messages == expected_messages => {}
                other => mismatches.push(ErrorMismatch {
                    field: field.clone(),
                    expected: Some(expected_messages.clone()),
                    actual: other.cloned(),
                }),
            }
        }

        for (field, actual_messages) in &actual.errors {
            if !expected.errors.contains_key(field) {
                mismatches.push(ErrorMismatch {
                    field: field.clone(),
                    expected: None,
                    actual: Some(actual_messages.clone()),
                });
            }
        }

        mismatches
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (field, messages)) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {:?}", field, messages)?;
        }
        write!(f, "}}")
    }
}

impl<K: Into<String>, M: Into<String>> FromIterator<(K, M)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (K, M)>>(iter: I) -> Self {
        let mut map = ErrorMap::new();
        for (field, message) in iter {
            map.push(field, message);
        }
        map
    }
}

/// One field whose messages differ between expected and actual
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMismatch {
    /// Field name
    pub field: String,
    /// Expected messages, `None` if the field was not expected to fail
    pub expected: Option<Vec<String>>,
    /// Actual messages, `None` if the field did not fail
    pub actual: Option<Vec<String>>,
}

impl fmt::Display for ErrorMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn side(messages: &Option<Vec<String>>) -> String {
            match messages {
                Some(m) => format!("{:?}", m),
                None => "no errors".to_string(),
            }
        }
        write!(
            f,
            "{}: expected {}, got {}",
            self.field,
            side(&self.expected),
            side(&self.actual)
        )
    }
}
