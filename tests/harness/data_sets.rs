//! Data Set Tests
//!
//! Whole-record checks for cross-field rules and rule combinations.

use crate::common::*;

#[test]
fn retries_exceeding_hits_is_reported_on_retries() {
    init_tracing();
    let mut model = access_log();
    let mut recorder = CollectingRecorder::new();

    let report = DataSetHarness::new(&mut model, &mut recorder)
        .check_data_set(
            "retries exceed hits",
            Record::new().with("hits", 1).with("retries", 3),
            &ErrorMap::single("retries", RETRIES_EXCEED_HITS),
        )
        .unwrap();

    assert!(report.passed());
    recorder.assert_clean();
}

#[test]
fn retries_equal_to_hits_is_valid() {
    init_tracing();
    let mut model = access_log();
    let mut recorder = CollectingRecorder::new();

    DataSetHarness::new(&mut model, &mut recorder)
        .check_data_set(
            "retries equal hits",
            Record::new().with("hits", 3).with("retries", 3),
            &ErrorMap::new(),
        )
        .unwrap();

    recorder.assert_clean();
}

#[test]
fn field_and_cross_field_errors_accumulate() {
    init_tracing();
    let mut model = access_log();
    let mut recorder = CollectingRecorder::new();

    let record = Record::new()
        .with("hits", 2)
        .with("retries", 5)
        .with("priority", 9)
        .with("client_ip", "10.0.0.256");
    let expected = ErrorMap::new()
        .with("retries", RETRIES_EXCEED_HITS)
        .with("priority", PRIORITY_RANGE)
        .with("client_ip", CLIENT_IP_V4);

    DataSetHarness::new(&mut model, &mut recorder)
        .check_data_set("several failures", record, &expected)
        .unwrap();

    recorder.assert_clean();
}

#[test]
fn complete_blog_post_is_valid() {
    init_tracing();
    let mut model = blog_post();
    let mut recorder = CollectingRecorder::new();

    DataSetHarness::new(&mut model, &mut recorder)
        .check_data_set("complete post", valid_blog_post(), &ErrorMap::new())
        .unwrap();

    recorder.assert_clean();
}

#[test]
fn json_data_set() {
    init_tracing();
    let mut model = blog_post();
    let mut recorder = CollectingRecorder::new();

    DataSetHarness::new(&mut model, &mut recorder)
        .check_json_data_set(
            "unknown author",
            serde_json::json!({"title": "Hello world", "is_active": 0, "user_id": 42}),
            &ErrorMap::single("user_id", USER_ID_EXISTS),
        )
        .unwrap();

    recorder.assert_clean();
}

#[test]
fn data_set_mismatch_names_the_record() {
    init_tracing();
    let mut model = blog_post();
    let mut recorder = CollectingRecorder::new();

    let report = DataSetHarness::new(&mut model, &mut recorder)
        .check_data_set(
            "short title",
            Record::new().with("title", "abc").with("is_active", 1),
            &ErrorMap::new(),
        )
        .unwrap();

    assert_eq!(report.failed, 1);
    let failure = &recorder.failures()[0];
    assert_eq!(
        failure.diagnostic,
        "The \"short title\" check failed to test the data set\n{is_active: 1, title: 'abc'}\non model \"BlogPost\"."
    );
    assert_eq!(failure.actual, ErrorMap::single("title", TITLE_MIN));
}

#[test]
fn data_set_is_submitted_unchanged() {
    init_tracing();
    let mut model = blog_post();
    let mut recorder = CollectingRecorder::new();

    // An empty record takes the mandatory-field path, no inputs are derived
    DataSetHarness::new(&mut model, &mut recorder)
        .check_data_set(
            "blank",
            Record::new(),
            &ErrorMap::new()
                .with("title", TITLE_REQUIRED)
                .with("is_active", IS_ACTIVE_REQUIRED)
                .with("user_id", USER_ID_REQUIRED),
        )
        .unwrap();

    assert_eq!(model.submissions, 1);
    recorder.assert_clean();
}
