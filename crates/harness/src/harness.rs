//! Per-field rule checks
//!
//! `ValidationHarness` drives one rule check at a time through a borrowed
//! `Model` and reports every comparison to a borrowed `TestRecorder`.
//!
//! # Protocol
//!
//! For a field `f` with expected message `m`:
//!
//! 1. Candidate inputs are built (catalog defaults plus caller overrides) and
//!    reconciled so no value is both valid and invalid.
//! 2. Each invalid input `x`, in order, is merged over the extra fields as
//!    `{f: x}` and must yield exactly `{f: [m]}`.
//! 3. Each valid input `x`, in order, is submitted alone as `{f: x}` and must
//!    yield an empty map. Extra fields are not merged on this side, so the
//!    field's own rule must stay quiet while other mandatory fields are absent.
//!
//! A mismatch is recorded and checking moves on to the next input. Setup
//! mistakes (bad parameters) return `HarnessError::Precondition` before the
//! model sees anything.

use crate::catalog::RuleInputCatalog;
use crate::error::{HarnessError, HarnessResult};
use crate::inputs::{CheckOptions, InputSet};
use crate::model::{submit, Model};
use crate::reconcile::CandidateInputSet;
use crate::recorder::TestRecorder;
use crate::rule::RuleSpec;
use fieldcheck_core::{validate_field_name, ErrorMap, ErrorMismatch, Record, Value};
use std::fmt;
use tracing::{debug, info, warn};

/// Which side of a check an input belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Expected to be rejected
    Invalid,
    /// Expected to be accepted
    Valid,
}

impl Side {
    fn label(&self) -> &'static str {
        match self {
            Side::Invalid => "INVALID",
            Side::Valid => "VALID",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of feeding one candidate input through the model
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCheckOutcome {
    /// The input submitted
    pub input: Value,
    /// Which side it was tested on
    pub side: Side,
    /// Error map expected
    pub expected: ErrorMap,
    /// Error map produced
    pub actual: ErrorMap,
    /// Differences, empty on success
    pub mismatches: Vec<ErrorMismatch>,
}

impl FieldCheckOutcome {
    /// Whether actual matched expected
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Summary of one harness call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Rule (or test) name
    pub rule: String,
    /// Field under test, empty for whole-record checks
    pub field: String,
    /// Invalid inputs submitted
    pub invalid_checked: usize,
    /// Valid inputs submitted
    pub valid_checked: usize,
    /// Comparisons that did not match
    pub failed: usize,
    /// Invalid side was disabled rather than empty
    pub invalid_skipped: bool,
    /// Valid side was disabled rather than empty
    pub valid_skipped: bool,
}

impl CheckReport {
    fn new(rule: &str, field: &str) -> Self {
        CheckReport {
            rule: rule.to_string(),
            field: field.to_string(),
            ..Default::default()
        }
    }

    /// Total inputs submitted
    pub fn total(&self) -> usize {
        self.invalid_checked + self.valid_checked
    }

    /// Whether every comparison matched
    pub fn passed(&self) -> bool {
        self.failed == 0
    }
}

/// Runs rule checks for single fields of a model
pub struct ValidationHarness<'a, M: Model + ?Sized, R: TestRecorder + ?Sized> {
    model: &'a mut M,
    recorder: &'a mut R,
    catalog: RuleInputCatalog,
}

impl<'a, M: Model + ?Sized, R: TestRecorder + ?Sized> ValidationHarness<'a, M, R> {
    /// Create a harness using the default catalog
    pub fn new(model: &'a mut M, recorder: &'a mut R) -> Self {
        Self::with_catalog(model, recorder, RuleInputCatalog::default())
    }

    /// Create a harness using a tuned catalog
    pub fn with_catalog(model: &'a mut M, recorder: &'a mut R, catalog: RuleInputCatalog) -> Self {
        ValidationHarness {
            model,
            recorder,
            catalog,
        }
    }

    /// The catalog in use
    pub fn catalog(&self) -> &RuleInputCatalog {
        &self.catalog
    }

    /// Submit an empty record and compare against `expected`
    ///
    /// Proves which fields are mandatory.
    pub fn test_required_fields(&mut self, expected: &ErrorMap) -> CheckReport {
        let mut report = CheckReport::new("required", "");
        let actual = submit(&mut *self.model, Record::new());
        let diagnostic = format!(
            "The required fields check failed on model \"{}\".",
            self.model.name()
        );
        if expected != &actual {
            warn!(
                target: "fieldcheck::harness",
                model = self.model.name(),
                expected = %expected,
                actual = %actual,
                "Required fields mismatch"
            );
            report.failed += 1;
        }
        self.recorder.assert_equal(expected, &actual, &diagnostic);
        report
    }

    /// Check a `notempty` rule
    pub fn test_not_empty(
        &mut self,
        field: &str,
        message: &str,
        valid_length: i64,
        options: CheckOptions,
    ) -> HarnessResult<CheckReport> {
        self.test_rule(&RuleSpec::NotEmpty { valid_length }, field, message, options)
    }

    /// Check a `minlength` rule; `min_length` must be at least 1
    pub fn test_min_length(
        &mut self,
        field: &str,
        message: &str,
        min_length: i64,
        options: CheckOptions,
    ) -> HarnessResult<CheckReport> {
        self.test_rule(&RuleSpec::MinLength { min: min_length }, field, message, options)
    }

    /// Check a `maxlength` rule
    pub fn test_max_length(
        &mut self,
        field: &str,
        message: &str,
        max_length: i64,
        options: CheckOptions,
    ) -> HarnessResult<CheckReport> {
        self.test_rule(&RuleSpec::MaxLength { max: max_length }, field, message, options)
    }

    /// Check a `boolean` rule
    pub fn test_boolean(
        &mut self,
        field: &str,
        message: &str,
        options: CheckOptions,
    ) -> HarnessResult<CheckReport> {
        self.test_rule(&RuleSpec::Boolean, field, message, options)
    }

    /// Check a `numeric` rule
    pub fn test_numeric(
        &mut self,
        field: &str,
        message: &str,
        options: CheckOptions,
    ) -> HarnessResult<CheckReport> {
        self.test_rule(&RuleSpec::Numeric, field, message, options)
    }

    /// Check a `naturalnumber` rule
    pub fn test_natural_number(
        &mut self,
        field: &str,
        message: &str,
        options: CheckOptions,
    ) -> HarnessResult<CheckReport> {
        self.test_rule(&RuleSpec::NaturalNumber, field, message, options)
    }

    /// Check a `range` rule
    ///
    /// `min` and `max` are asserted valid. Out-of-range values depend on the
    /// domain, so `invalid` must name at least one unless the options skip
    /// the invalid side.
    pub fn test_range<I, V>(
        &mut self,
        field: &str,
        message: &str,
        min: i64,
        max: i64,
        invalid: I,
        options: CheckOptions,
    ) -> HarnessResult<CheckReport>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let options = options.with_invalid(invalid);
        self.test_rule(&RuleSpec::Range { min, max }, field, message, options)
    }

    /// Check a `datetime` rule
    pub fn test_datetime(
        &mut self,
        field: &str,
        message: &str,
        options: CheckOptions,
    ) -> HarnessResult<CheckReport> {
        self.test_rule(&RuleSpec::DateTime, field, message, options)
    }

    /// Check an `ip` rule
    pub fn test_ip(
        &mut self,
        field: &str,
        message: &str,
        options: CheckOptions,
    ) -> HarnessResult<CheckReport> {
        self.test_rule(&RuleSpec::IpAddress, field, message, options)
    }

    /// Check a `validForeignKey` rule
    ///
    /// Existing keys depend on fixtures; pass them as the valid override.
    pub fn test_valid_foreign_key(
        &mut self,
        field: &str,
        message: &str,
        options: CheckOptions,
    ) -> HarnessResult<CheckReport> {
        self.test_rule(&RuleSpec::ForeignKeyExists, field, message, options)
    }

    /// Check any catalog rule described by `spec`
    pub fn test_rule(
        &mut self,
        spec: &RuleSpec,
        field: &str,
        message: &str,
        options: CheckOptions,
    ) -> HarnessResult<CheckReport> {
        let CheckOptions {
            valid,
            invalid,
            extra,
        } = options;
        let candidates = self.catalog.candidates(spec, valid, invalid)?;
        self.run(spec.name(), field, message, &candidates, &extra)
    }

    /// Check a field against explicit valid and invalid inputs
    ///
    /// Every per-rule entry point ends up here. `rule` only labels
    /// diagnostics, so custom rules can be checked with hand-picked inputs.
    pub fn test_data_validation(
        &mut self,
        rule: &str,
        field: &str,
        message: &str,
        valid: InputSet,
        invalid: InputSet,
        extra: &Record,
    ) -> HarnessResult<CheckReport> {
        let candidates = CandidateInputSet::new(valid, invalid);
        self.run(rule, field, message, &candidates, extra)
    }

    fn run(
        &mut self,
        rule: &str,
        field: &str,
        message: &str,
        candidates: &CandidateInputSet,
        extra: &Record,
    ) -> HarnessResult<CheckReport> {
        validate_field_name(field).map_err(|e| HarnessError::precondition(rule, e.to_string()))?;

        let mut report = CheckReport::new(rule, field);
        report.invalid_skipped = candidates.invalid().is_skip();
        report.valid_skipped = candidates.valid().is_skip();
        let rejected = ErrorMap::single(field, message);
        let accepted = ErrorMap::new();

        if report.invalid_skipped {
            debug!(target: "fieldcheck::harness", rule, field, "Invalid inputs skipped");
        }
        for input in candidates.invalid().values() {
            let record = extra.merged(&Record::single(field, input.clone()));
            self.check_one(rule, field, input, Side::Invalid, record, &rejected, &mut report);
            report.invalid_checked += 1;
        }

        if report.valid_skipped {
            debug!(target: "fieldcheck::harness", rule, field, "Valid inputs skipped");
        }
        for input in candidates.valid().values() {
            let record = Record::single(field, input.clone());
            self.check_one(rule, field, input, Side::Valid, record, &accepted, &mut report);
            report.valid_checked += 1;
        }

        info!(
            target: "fieldcheck::harness",
            rule,
            field,
            model = self.model.name(),
            invalid = report.invalid_checked,
            valid = report.valid_checked,
            failed = report.failed,
            "Rule check finished"
        );
        Ok(report)
    }

    #[allow(clippy::too_many_arguments)]
    fn check_one(
        &mut self,
        rule: &str,
        field: &str,
        input: &Value,
        side: Side,
        record: Record,
        expected: &ErrorMap,
        report: &mut CheckReport,
    ) {
        debug!(
            target: "fieldcheck::harness",
            rule,
            field,
            side = side.label(),
            input = %input,
            "Submitting input"
        );
        let actual = submit(&mut *self.model, record);
        let outcome = FieldCheckOutcome {
            input: input.clone(),
            side,
            expected: expected.clone(),
            mismatches: ErrorMap::diff(expected, &actual),
            actual,
        };

        let diagnostic = input_diagnostic(rule, self.model.name(), field, &outcome);
        if !outcome.passed() {
            report.failed += 1;
            warn!(
                target: "fieldcheck::harness",
                rule,
                field,
                side = side.label(),
                input = %input,
                actual = %outcome.actual,
                "Validation assertion failed"
            );
        }
        self.recorder
            .assert_equal(&outcome.expected, &outcome.actual, &diagnostic);
    }
}

/// Diagnostic for one failed input, naming the rule, the literal input with
/// its type and the model/field pair
pub fn input_diagnostic(rule: &str, model: &str, field: &str, outcome: &FieldCheckOutcome) -> String {
    format!(
        "The \"{}\" check failed to test the seemingly {} input\n{} ({})\non field \"{}.{}\".",
        rule,
        outcome.side,
        outcome.input.literal(),
        outcome.input.type_name(),
        model,
        field
    )
}
