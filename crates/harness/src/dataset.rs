//! Whole-record checks
//!
//! For cross-field rules and rule combinations the per-rule catalog cannot
//! express. A record goes in as-is and the full error map is compared.

use crate::error::{HarnessError, HarnessResult};
use crate::harness::CheckReport;
use crate::model::{submit, Model};
use crate::recorder::TestRecorder;
use fieldcheck_core::{ErrorMap, Record};
use tracing::{debug, warn};

/// Runs whole-record checks against a model
pub struct DataSetHarness<'a, M: Model + ?Sized, R: TestRecorder + ?Sized> {
    model: &'a mut M,
    recorder: &'a mut R,
}

impl<'a, M: Model + ?Sized, R: TestRecorder + ?Sized> DataSetHarness<'a, M, R> {
    /// Create a data-set harness
    pub fn new(model: &'a mut M, recorder: &'a mut R) -> Self {
        DataSetHarness { model, recorder }
    }

    /// Submit `record` unchanged and compare the full error map to `expected`
    ///
    /// # Errors
    ///
    /// `HarnessError::Precondition` if `test_name` is empty.
    pub fn check_data_set(
        &mut self,
        test_name: &str,
        record: Record,
        expected: &ErrorMap,
    ) -> HarnessResult<CheckReport> {
        if test_name.is_empty() {
            return Err(HarnessError::precondition(
                "dataset",
                "test name must not be empty",
            ));
        }

        let diagnostic = format!(
            "The \"{}\" check failed to test the data set\n{}\non model \"{}\".",
            test_name,
            record.literal(),
            self.model.name()
        );
        debug!(
            target: "fieldcheck::dataset",
            test = test_name,
            record = %record.literal(),
            "Submitting data set"
        );

        let actual = submit(&mut *self.model, record);
        let mut report = CheckReport {
            rule: test_name.to_string(),
            invalid_checked: usize::from(!expected.is_empty()),
            valid_checked: usize::from(expected.is_empty()),
            ..CheckReport::default()
        };
        if expected != &actual {
            report.failed = 1;
            warn!(
                target: "fieldcheck::dataset",
                test = test_name,
                model = self.model.name(),
                expected = %expected,
                actual = %actual,
                "Data set assertion failed"
            );
        }
        self.recorder.assert_equal(expected, &actual, &diagnostic);
        Ok(report)
    }

    /// Like [`check_data_set`](Self::check_data_set) with the record given as a JSON object
    pub fn check_json_data_set(
        &mut self,
        test_name: &str,
        record: serde_json::Value,
        expected: &ErrorMap,
    ) -> HarnessResult<CheckReport> {
        let record = Record::try_from(record)?;
        self.check_data_set(test_name, record, expected)
    }
}
