//! Tests for the run report writers.

use std::fs;

use insta::assert_snapshot;
use tempfile::tempdir;

use enroll_model::{Defect, FieldName, MalformedRecord, REASON_MISSING, RunReport, RowId};
use enroll_report::{render_text_report, write_accepted_csv, write_json_report};

fn cells(values: &[Option<&str>]) -> Vec<Option<String>> {
    values.iter().map(|value| value.map(String::from)).collect()
}

fn sample_report() -> RunReport {
    RunReport {
        accepted: vec![cells(&[
            Some("Antonio"),
            Some("Brown"),
            Some("1966-02-02"),
            Some("890887"),
            Some("2019-09-30"),
            Some("2000-09-30"),
            Some("+13033339987"),
        ])],
        malformed: vec![MalformedRecord {
            row: RowId::new(2),
            cells: cells(&[
                Some("Jason"),
                Some("Bateman"),
                None,
                Some("AB 0000"),
                None,
                None,
                None,
            ]),
            defects: vec![
                Defect::new(FieldName::Dob, REASON_MISSING),
                Defect::new(FieldName::EffectiveDate, REASON_MISSING),
                Defect::new(FieldName::PhoneNumber, REASON_MISSING),
            ],
        }],
        total_rows: 2,
    }
}

#[test]
fn text_report_lists_malformed_rows_then_counts() {
    assert_snapshot!(render_text_report(&sample_report()), @r"
    Jason, Bateman, , AB 0000, , ,  -- dob is missing; effective_date is missing; phone_number is missing
    accepted: 1
    rejected: 1
    ");
}

#[test]
fn accepted_csv_uses_fixed_header_order() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("accepted.csv");
    write_accepted_csv(&path, &sample_report()).expect("write accepted");
    let contents = fs::read_to_string(&path).expect("read accepted");
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some("first_name,last_name,dob,member_id,effective_date,expiry_date,phone_number")
    );
    assert_eq!(
        lines.next(),
        Some("Antonio,Brown,1966-02-02,890887,2019-09-30,2000-09-30,+13033339987")
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn json_report_round_trips() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("report.json");
    write_json_report(&path, &sample_report()).expect("write json");
    let contents = fs::read_to_string(&path).expect("read json");
    let round: RunReport = serde_json::from_str(&contents).expect("parse json");
    assert_eq!(round.accepted_count(), 1);
    assert_eq!(round.rejected_count(), 1);
    assert_eq!(round.total_rows, 2);
    assert_eq!(round.malformed[0].row, RowId::new(2));
    assert_eq!(round.malformed[0].defects.len(), 3);
}
