//! Integration tests for row validation.

use enroll_model::{
    FieldName, HeaderIndex, REASON_DATE_MALFORMED, REASON_MISSING, REASON_PHONE_TOO_SHORT,
    RosterRow, RowId,
};
use enroll_validate::validate_row;

const FULL_HEADER: [&str; 7] = [
    "first_name",
    "last_name",
    "dob",
    "member_id",
    "effective_date",
    "expiry_date",
    "phone_number",
];

fn index_for(names: &[&str]) -> HeaderIndex {
    let headers: Vec<String> = names.iter().map(ToString::to_string).collect();
    HeaderIndex::resolve(&headers).expect("resolve header")
}

fn row_of(id: u64, values: &[Option<&str>]) -> RosterRow {
    RosterRow::new(
        RowId::new(id),
        values.iter().map(|value| value.map(String::from)).collect(),
    )
}

#[test]
fn clean_row_normalizes_every_field() {
    let index = index_for(&FULL_HEADER);
    let mut row = row_of(
        1,
        &[
            Some("Antonio"),
            Some("Brown"),
            Some("02-02-1966"),
            Some("890887"),
            Some("09-30-2019"),
            Some("09-30-2000"),
            Some("303-333-9987"),
        ],
    );
    let defects = validate_row(&index, &mut row);
    assert!(defects.is_empty());
    assert_eq!(
        row.to_output(&index),
        vec![
            Some("Antonio".to_string()),
            Some("Brown".to_string()),
            Some("1966-02-02".to_string()),
            Some("890887".to_string()),
            Some("2019-09-30".to_string()),
            Some("2000-09-30".to_string()),
            Some("+13033339987".to_string()),
        ]
    );
}

#[test]
fn absent_mandatory_cells_yield_only_missing_defects() {
    // Empty dob and phone must not also trip the normalizers.
    let index = index_for(&FULL_HEADER);
    let mut row = row_of(
        1,
        &[
            Some("Jason"),
            Some("Bateman"),
            None,
            Some("AB 0000"),
            Some("09-30-2019"),
            Some("09-30-2050"),
            None,
        ],
    );
    let defects = validate_row(&index, &mut row);
    assert_eq!(defects.len(), 2);
    assert_eq!(defects[0].field, FieldName::Dob);
    assert_eq!(defects[0].reason, REASON_MISSING);
    assert_eq!(defects[1].field, FieldName::PhoneNumber);
    assert_eq!(defects[1].reason, REASON_MISSING);
}

#[test]
fn whitespace_only_cells_count_as_missing() {
    let index = index_for(&FULL_HEADER);
    let mut row = row_of(
        1,
        &[
            Some("Jason"),
            Some("   "),
            Some("02-02-1966"),
            Some("890887"),
            Some("09-30-2019"),
            None,
            Some("303-333-9987"),
        ],
    );
    let defects = validate_row(&index, &mut row);
    assert_eq!(defects.len(), 1);
    assert_eq!(defects[0].field, FieldName::LastName);
    assert_eq!(defects[0].reason, REASON_MISSING);
}

#[test]
fn independent_defects_accumulate_on_one_row() {
    let index = index_for(&FULL_HEADER);
    let mut row = row_of(
        1,
        &[
            None,
            Some("Short"),
            Some("1/1/19888"),
            Some("349101"),
            Some("09-30-2019"),
            None,
            Some("44425"),
        ],
    );
    let defects = validate_row(&index, &mut row);
    assert_eq!(defects.len(), 3);
    assert_eq!(defects[0].field, FieldName::FirstName);
    assert_eq!(defects[0].reason, REASON_MISSING);
    assert_eq!(defects[1].field, FieldName::PhoneNumber);
    assert_eq!(defects[1].reason, REASON_PHONE_TOO_SHORT);
    assert_eq!(defects[2].field, FieldName::Dob);
    assert_eq!(defects[2].reason, REASON_DATE_MALFORMED);
}

#[test]
fn defective_values_stay_on_the_row() {
    let index = index_for(&FULL_HEADER);
    let mut row = row_of(
        1,
        &[
            Some("Brent"),
            Some("Wilson"),
            Some("1/1/19888"),
            Some("349090"),
            Some("09-30-2019"),
            Some("09-30-2000"),
            Some("303 887 3456"),
        ],
    );
    let defects = validate_row(&index, &mut row);
    assert_eq!(defects.len(), 1);
    // Malformed date is left untouched; the rest still normalize.
    assert_eq!(row.get(&index, FieldName::Dob), Some("1/1/19888"));
    assert_eq!(row.get(&index, FieldName::EffectiveDate), Some("2019-09-30"));
    assert_eq!(row.get(&index, FieldName::PhoneNumber), Some("+13038873456"));
}

#[test]
fn expiry_date_is_normalized_but_not_required() {
    let index = index_for(&FULL_HEADER);
    let mut row = row_of(
        1,
        &[
            Some("Jason"),
            Some("Statham"),
            Some("02-12-1988"),
            Some("349099"),
            Some("09-30-2019"),
            None,
            Some("606-555-9886"),
        ],
    );
    let defects = validate_row(&index, &mut row);
    assert!(defects.is_empty());
    assert_eq!(row.get(&index, FieldName::ExpiryDate), None);
}

#[test]
fn fields_absent_from_the_header_are_skipped() {
    // No expiry_date column at all: nothing to normalize, no defect.
    let index = index_for(&[
        "first_name",
        "last_name",
        "dob",
        "member_id",
        "effective_date",
        "phone_number",
    ]);
    let mut row = row_of(
        1,
        &[
            Some("Lenny"),
            Some("Bruce"),
            Some("1/11/88"),
            Some("349100"),
            Some("09-30-2019"),
            Some("202-555-9882"),
        ],
    );
    let defects = validate_row(&index, &mut row);
    assert!(defects.is_empty());
    assert_eq!(row.get(&index, FieldName::Dob), Some("2088-01-11"));
}

#[test]
fn cells_are_trimmed_before_checks() {
    let index = index_for(&FULL_HEADER);
    let mut row = row_of(
        1,
        &[
            Some("  Mary "),
            Some("Poppins"),
            Some(" 1/7/1988 "),
            Some("uu 90990"),
            Some("09-30-2019"),
            Some("12/16/50"),
            Some(" 444-555-9878 "),
        ],
    );
    let defects = validate_row(&index, &mut row);
    assert!(defects.is_empty());
    assert_eq!(row.get(&index, FieldName::FirstName), Some("Mary"));
    assert_eq!(row.get(&index, FieldName::Dob), Some("1988-01-07"));
    assert_eq!(row.get(&index, FieldName::ExpiryDate), Some("2050-12-16"));
}
