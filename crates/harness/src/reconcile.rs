//! Valid/invalid input reconciliation
//!
//! A value cannot be asserted both valid and invalid in the same check. When a
//! caller's valid set overlaps the catalog's invalid set, the valid side wins
//! and the value is dropped from the invalid side before anything runs.
//! Membership uses `Value` equality, so `"0"`, `0` and `0.0` stay distinct.

use crate::inputs::InputSet;
use fieldcheck_core::Value;

/// Drop every invalid input that is also a valid input
///
/// Surviving invalid inputs keep their original order.
pub fn reconcile(valid: &InputSet, invalid: Vec<Value>) -> Vec<Value> {
    invalid
        .into_iter()
        .filter(|value| !valid.contains(value))
        .collect()
}

/// Valid and invalid inputs for one field under one rule
///
/// Construction reconciles the two sides, so no value is ever a member of both.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateInputSet {
    valid: InputSet,
    invalid: InputSet,
}

impl CandidateInputSet {
    /// Reconcile and build
    pub fn new(valid: InputSet, invalid: InputSet) -> Self {
        let invalid = match invalid {
            InputSet::Skip => InputSet::Skip,
            InputSet::Values(values) => InputSet::Values(reconcile(&valid, values)),
        };
        CandidateInputSet { valid, invalid }
    }

    /// Valid side
    pub fn valid(&self) -> &InputSet {
        &self.valid
    }

    /// Invalid side
    pub fn invalid(&self) -> &InputSet {
        &self.invalid
    }
}
