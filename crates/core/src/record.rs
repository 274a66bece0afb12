//! Records submitted to a model under test
//!
//! A `Record` is the flat field map a model's `create` step loads. Fields are
//! kept in name order so diagnostics render identically across runs.

use crate::error::{Error, Result};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name to value mapping for one candidate record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record holding a single field
    pub fn single(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new().with(field, value)
    }

    /// Builder-style insert
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Set a field, returning the previous value if any
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Get a field's value
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Whether the field is present (a present `Null` counts)
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge `other` over `self`; on a shared field the value from `other` wins
    pub fn merged(&self, other: &Record) -> Record {
        let mut fields = self.fields.clone();
        for (k, v) in &other.fields {
            fields.insert(k.clone(), v.clone());
        }
        Record { fields }
    }

    /// Render as a literal for failure diagnostics, e.g. `{is_active: 1, title: 'abc'}`
    pub fn literal(&self) -> String {
        let body: Vec<String> = self
            .fields
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v.literal()))
            .collect();
        format!("{{{}}}", body.join(", "))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

impl TryFrom<serde_json::Value> for Record {
    type Error = Error;

    fn try_from(v: serde_json::Value) -> Result<Self> {
        match v {
            serde_json::Value::Object(obj) => {
                Ok(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
            other => Err(Error::NotAnObject(other.to_string())),
        }
    }
}
