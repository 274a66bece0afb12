//! Failure Reporting Tests
//!
//! Misconfigured models must be caught with a diagnostic that pins down the
//! rule, the literal input and the field. Broken test setups must fail before
//! the model sees anything.

use crate::common::*;

#[test]
fn off_by_one_min_length_is_caught_on_the_valid_side() {
    init_tracing();
    // Model demands 5 characters where 4 were intended
    let mut model = blog_post_with_title_bounds(5, 255);
    let mut recorder = CollectingRecorder::new();

    let report = ValidationHarness::new(&mut model, &mut recorder)
        .test_min_length("title", TITLE_MIN, 4, CheckOptions::default())
        .unwrap();

    assert_eq!(report.failed, 1);
    assert_eq!(recorder.passed(), 1);

    let failure = &recorder.failures()[0];
    assert_eq!(
        failure.diagnostic,
        "The \"minlength\" check failed to test the seemingly VALID input\n'0123' (String)\non field \"BlogPost.title\"."
    );
    assert!(failure.expected.is_empty());
    assert_eq!(failure.actual, ErrorMap::single("title", TITLE_MIN));
    assert_eq!(failure.mismatches.len(), 1);
    assert_eq!(failure.mismatches[0].field, "title");
    assert_eq!(failure.mismatches[0].expected, None);
}

#[test]
fn off_by_one_max_length_is_caught_on_the_invalid_side() {
    init_tracing();
    let mut model = blog_post_with_title_bounds(4, 256);
    let mut recorder = CollectingRecorder::new();

    let report = ValidationHarness::new(&mut model, &mut recorder)
        .test_max_length("title", TITLE_MAX, 255, CheckOptions::default())
        .unwrap();

    assert_eq!(report.failed, 1);
    let failure = &recorder.failures()[0];
    assert!(failure
        .diagnostic
        .starts_with("The \"maxlength\" check failed to test the seemingly INVALID input\n'"));
    assert!(failure.diagnostic.ends_with("' (String)\non field \"BlogPost.title\"."));
    assert!(failure.actual.is_empty());
}

#[test]
fn wrong_message_is_a_failure() {
    init_tracing();
    let mut model = blog_post();
    let mut recorder = CollectingRecorder::new();

    let report = ValidationHarness::new(&mut model, &mut recorder)
        .test_boolean("is_active", "Is Active must be true or false.", CheckOptions::default())
        .unwrap();

    // Every invalid input fails, every valid input still passes
    assert_eq!(report.failed, 4);
    assert_eq!(recorder.passed(), 4);
    assert!(recorder
        .failures()
        .iter()
        .all(|f| f.actual == ErrorMap::single("is_active", IS_ACTIVE_BOOLEAN)));
}

#[test]
fn failures_keep_input_order_and_types() {
    init_tracing();
    let mut model = access_log();
    let mut recorder = CollectingRecorder::new();

    // Declared valid but rejected by the model
    ValidationHarness::new(&mut model, &mut recorder)
        .test_natural_number(
            "retries",
            RETRIES_NATURAL,
            CheckOptions::default().with_valid(InputOverride::of([Value::Float(1.0), Value::from("x")])),
        )
        .unwrap();

    let diagnostics: Vec<&str> = recorder
        .failures()
        .iter()
        .map(|f| f.diagnostic.as_str())
        .collect();
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics[0].contains("VALID input\n1.0 (Float)\n"));
    assert!(diagnostics[1].contains("VALID input\n'x' (String)\n"));
}

#[test]
fn report_lists_every_failure() {
    init_tracing();
    let mut model = blog_post_with_title_bounds(5, 255);
    let mut recorder = CollectingRecorder::new();
    {
        let mut harness = ValidationHarness::new(&mut model, &mut recorder);
        harness
            .test_min_length("title", TITLE_MIN, 4, CheckOptions::default())
            .unwrap();
        harness
            .test_not_empty("title", TITLE_NOT_EMPTY, 4, CheckOptions::default())
            .unwrap();
    }

    let report = recorder.report();
    assert!(report.starts_with("2 of 4 validation assertions failed"));
    assert!(report.contains("#1: "));
    assert!(report.contains("#2: "));
    assert!(recorder.into_result().is_err());
}

#[test]
#[should_panic(expected = "1 of 2 validation assertions failed")]
fn assert_clean_panics_with_the_report() {
    let mut model = blog_post_with_title_bounds(5, 255);
    let mut recorder = CollectingRecorder::new();
    ValidationHarness::new(&mut model, &mut recorder)
        .test_min_length("title", TITLE_MIN, 4, CheckOptions::default())
        .unwrap();

    recorder.assert_clean();
}

#[test]
fn preconditions_submit_nothing() {
    init_tracing();
    let mut model = blog_post();
    let mut recorder = CollectingRecorder::new();
    let errors = {
        let mut harness = ValidationHarness::new(&mut model, &mut recorder);
        vec![
            harness
                .test_min_length("title", TITLE_MIN, 0, CheckOptions::default())
                .unwrap_err(),
            harness
                .test_not_empty("title", TITLE_NOT_EMPTY, 0, CheckOptions::default())
                .unwrap_err(),
            harness
                .test_max_length("title", TITLE_MAX, -1, CheckOptions::default())
                .unwrap_err(),
            harness
                .test_range("title", "x", 5, 1, [0], CheckOptions::default())
                .unwrap_err(),
            harness
                .test_range("title", "x", 1, 5, Vec::<i64>::new(), CheckOptions::default())
                .unwrap_err(),
            harness
                .test_boolean("", IS_ACTIVE_BOOLEAN, CheckOptions::default())
                .unwrap_err(),
        ]
    };

    assert!(errors.iter().all(HarnessError::is_precondition));
    assert_eq!(model.submissions, 0);
    assert_eq!(recorder.total(), 0);
}

#[test]
fn precondition_names_the_rule() {
    let mut model = blog_post();
    let mut recorder = CollectingRecorder::new();
    let err = ValidationHarness::new(&mut model, &mut recorder)
        .test_min_length("title", TITLE_MIN, 0, CheckOptions::default())
        .unwrap_err();

    assert!(err.to_string().contains("minlength"));
}
