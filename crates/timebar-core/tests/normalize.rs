// File: crates/timebar-core/tests/normalize.rs
// Purpose: Validate raw feed decoding and normalization into records.

use chrono::NaiveDate;
use timebar_core::{normalize, ChartError, RawDataset};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn normalizes_in_source_order() {
    let records = normalize([("1947-04-01", 246.3), ("1947-01-01", 243.1)]).expect("valid feed");
    assert_eq!(records.len(), 2);
    // No re-sorting.
    assert_eq!(records[0].instant, date(1947, 4, 1));
    assert_eq!(records[1].instant, date(1947, 1, 1));
    assert_eq!(records[1].magnitude, 243.1);
}

#[test]
fn malformed_date_is_fatal() {
    let err = normalize([("1947-01-01", 1.0), ("not-a-date", 5.0)]).unwrap_err();
    match err {
        ChartError::MalformedRecord { index, label, .. } => {
            assert_eq!(index, 1);
            assert_eq!(label, "not-a-date");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn impossible_calendar_date_is_rejected() {
    let err = normalize([("1947-02-30", 1.0)]).unwrap_err();
    assert!(matches!(err, ChartError::MalformedRecord { index: 0, .. }));
}

#[test]
fn non_finite_and_negative_values_are_rejected() {
    assert!(matches!(
        normalize([("1947-01-01", f64::NAN)]),
        Err(ChartError::MalformedRecord { .. })
    ));
    assert!(matches!(
        normalize([("1947-01-01", f64::INFINITY)]),
        Err(ChartError::MalformedRecord { .. })
    ));
    assert!(matches!(
        normalize([("1947-01-01", -1.0)]),
        Err(ChartError::MalformedRecord { .. })
    ));
}

#[test]
fn decodes_feed_document_and_ignores_extra_fields() {
    let json = r#"{
        "name": "Gross Domestic Product",
        "data": [["1947-01-01", 243.1], ["1947-04-01", 246.3], ["1947-07-01", 250.1]]
    }"#;
    let raw = RawDataset::from_json(json).expect("decode");
    assert_eq!(raw.data.len(), 3);
    let records = raw.normalize().expect("normalize");
    assert_eq!(records[2].instant, date(1947, 7, 1));
    assert_eq!(records[2].magnitude, 250.1);
}

#[test]
fn wrong_document_shape_is_a_decode_error() {
    let err = RawDataset::from_json(r#"{ "data": [["1947-01-01", "243.1"]] }"#).unwrap_err();
    assert!(matches!(err, ChartError::Decode(_)));
    let err = RawDataset::from_json(r#"[1, 2, 3]"#).unwrap_err();
    assert!(matches!(err, ChartError::Decode(_)));
}
