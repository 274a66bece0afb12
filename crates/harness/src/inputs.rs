//! Candidate input sets and caller overrides

use fieldcheck_core::{Record, Value};

/// One side (valid or invalid) of a candidate input set
#[derive(Debug, Clone, PartialEq)]
pub enum InputSet {
    /// Do not test this side at all
    Skip,
    /// Test exactly these inputs, in order; empty means no cases apply
    Values(Vec<Value>),
}

impl InputSet {
    /// An explicitly empty set
    pub fn empty() -> Self {
        InputSet::Values(Vec::new())
    }

    /// Build from anything convertible to values
    pub fn of<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        InputSet::Values(values.into_iter().map(Into::into).collect())
    }

    /// Whether this side is disabled
    pub fn is_skip(&self) -> bool {
        matches!(self, InputSet::Skip)
    }

    /// Whether `value` is a member (never true for `Skip`)
    pub fn contains(&self, value: &Value) -> bool {
        match self {
            InputSet::Skip => false,
            InputSet::Values(values) => values.contains(value),
        }
    }

    /// The inputs to run; `Skip` runs none
    pub fn values(&self) -> &[Value] {
        match self {
            InputSet::Skip => &[],
            InputSet::Values(values) => values,
        }
    }
}

impl Default for InputSet {
    fn default() -> Self {
        InputSet::empty()
    }
}

/// Caller override for a rule's valid inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputOverride {
    /// Use the catalog's derivation
    #[default]
    Default,
    /// Do not test valid inputs
    Skip,
    /// Use these instead of the catalog's derivation
    Values(Vec<Value>),
}

impl InputOverride {
    /// Override with the given values
    pub fn of<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        InputOverride::Values(values.into_iter().map(Into::into).collect())
    }

    /// Resolve against the catalog's default
    pub fn resolve(self, default: impl FnOnce() -> Vec<Value>) -> InputSet {
        match self {
            InputOverride::Default => InputSet::Values(default()),
            InputOverride::Skip => InputSet::Skip,
            InputOverride::Values(values) => InputSet::Values(values),
        }
    }
}

/// Per-check options shared by every rule entry point
///
/// # Example
///
/// ```
/// use fieldcheck_harness::{CheckOptions, InputOverride};
/// use fieldcheck_core::Record;
///
/// let options = CheckOptions::default()
///     .with_valid(InputOverride::of([1, 2, 3]))
///     .with_extra(Record::new().with("title", "abcd"));
/// assert!(options.invalid.values().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Valid-side override
    pub valid: InputOverride,
    /// Invalid inputs appended to the catalog's set (the whole set for
    /// `range`); `Skip` disables the invalid side, canonical inputs included
    pub invalid: InputSet,
    /// Fields merged into every invalid-side record, e.g. other mandatory fields
    pub extra: Record,
}

impl CheckOptions {
    /// Set the valid-side override
    pub fn with_valid(mut self, valid: InputOverride) -> Self {
        self.valid = valid;
        self
    }

    /// Disable valid-side testing
    pub fn skip_valid(self) -> Self {
        self.with_valid(InputOverride::Skip)
    }

    /// Set additional invalid inputs
    ///
    /// Has no effect once the invalid side is skipped.
    pub fn with_invalid<I, V>(mut self, invalid: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        if !self.invalid.is_skip() {
            self.invalid = InputSet::of(invalid);
        }
        self
    }

    /// Disable invalid-side testing
    pub fn skip_invalid(mut self) -> Self {
        self.invalid = InputSet::Skip;
        self
    }

    /// Set fields merged into invalid-side records
    pub fn with_extra(mut self, extra: Record) -> Self {
        self.extra = extra;
        self
    }
}
