//! Assertion recording
//!
//! The harness never panics on a mismatch. It hands every comparison to a
//! `TestRecorder`, which decides how failures surface. `CollectingRecorder`
//! keeps going after a failure and reports everything at the end of the test.

use fieldcheck_core::{ErrorMap, ErrorMismatch};
use std::fmt;

/// Receives every expected/actual comparison the harness makes
pub trait TestRecorder {
    /// Record whether `actual` equals `expected`
    ///
    /// Implementations must not stop sibling assertions from running.
    fn assert_equal(&mut self, expected: &ErrorMap, actual: &ErrorMap, diagnostic: &str);
}

/// A failed comparison
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionFailure {
    /// Diagnostic message supplied by the harness
    pub diagnostic: String,
    /// Expected error map
    pub expected: ErrorMap,
    /// Error map the model produced
    pub actual: ErrorMap,
    /// Per-field differences
    pub mismatches: Vec<ErrorMismatch>,
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.diagnostic)?;
        writeln!(f, "  expected: {}", self.expected)?;
        write!(f, "  actual:   {}", self.actual)?;
        for mismatch in &self.mismatches {
            write!(f, "\n  - {}", mismatch)?;
        }
        Ok(())
    }
}

/// Recorder that collects failures and reports them together
///
/// # Example
///
/// ```ignore
/// let mut recorder = CollectingRecorder::new();
/// {
///     let mut harness = ValidationHarness::new(&mut model, &mut recorder);
///     harness.test_boolean("is_active", "Is Active must be a boolean.", CheckOptions::default())?;
/// }
/// recorder.assert_clean();
/// ```
#[derive(Debug, Default)]
pub struct CollectingRecorder {
    passed: usize,
    failures: Vec<AssertionFailure>,
}

impl CollectingRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of passing comparisons
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Failed comparisons in the order they happened
    pub fn failures(&self) -> &[AssertionFailure] {
        &self.failures
    }

    /// Total comparisons recorded
    pub fn total(&self) -> usize {
        self.passed + self.failures.len()
    }

    /// Whether nothing failed
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Ok when nothing failed, otherwise every failure
    pub fn into_result(self) -> Result<usize, Vec<AssertionFailure>> {
        if self.failures.is_empty() {
            Ok(self.passed)
        } else {
            Err(self.failures)
        }
    }

    /// Panic with a report of every failure, if any
    pub fn assert_clean(&self) {
        if !self.is_clean() {
            panic!("{}", self.report());
        }
    }

    /// Human-readable summary of all failures
    pub fn report(&self) -> String {
        let mut out = format!(
            "{} of {} validation assertions failed",
            self.failures.len(),
            self.total()
        );
        for (i, failure) in self.failures.iter().enumerate() {
            out.push_str(&format!("\n\n#{}: {}", i + 1, failure));
        }
        out
    }
}

impl TestRecorder for CollectingRecorder {
    fn assert_equal(&mut self, expected: &ErrorMap, actual: &ErrorMap, diagnostic: &str) {
        if expected == actual {
            self.passed += 1;
            return;
        }
        self.failures.push(AssertionFailure {
            diagnostic: diagnostic.to_string(),
            expected: expected.clone(),
            actual: actual.clone(),
            mismatches: ErrorMap::diff(expected, actual),
        });
    }
}
