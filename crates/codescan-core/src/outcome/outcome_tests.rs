#![allow(non_snake_case)]

use super::*;

#[test]
fn ScanOutcome___completed___has_no_raw_bytes() {
    let outcome = ScanOutcome::completed("12345", "EAN13");
    match outcome {
        ScanOutcome::Completed {
            contents,
            format_name,
            raw_bytes,
        } => {
            assert_eq!(contents, "12345");
            assert_eq!(format_name, "EAN13");
            assert!(raw_bytes.is_none());
        }
        other => panic!("expected Completed, got {other:?}"),
    }
}

#[test]
fn ScanOutcome___predicates___match_variants() {
    assert!(ScanOutcome::completed("x", "QR").is_completed());
    assert!(ScanOutcome::Canceled.is_canceled());
    assert!(
        !ScanOutcome::Error {
            code: 0,
            message: "boom".to_string()
        }
        .is_completed()
    );
}

#[test]
fn ScanOutcome___serde___roundtrips_completed() {
    let outcome = ScanOutcome::completed("hello", "QR");
    let json = serde_json::to_string(&outcome).unwrap();
    let back: ScanOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(back, outcome);
}

#[test]
fn RecognizedCode___into_outcome___maps_fields() {
    let code = RecognizedCode::new("data", "QR");
    assert_eq!(code.into_outcome(), ScanOutcome::completed("data", "QR"));
}
