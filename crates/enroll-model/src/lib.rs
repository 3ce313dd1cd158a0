pub mod defect;
pub mod error;
pub mod fields;
pub mod header;
pub mod ids;
pub mod report;
pub mod row;

pub use defect::{
    Defect, DefectLedger, REASON_DATE_MALFORMED, REASON_MISSING, REASON_PHONE_TOO_SHORT,
};
pub use error::{ModelError, Result};
pub use fields::{DATE_FIELDS, FieldName, MANDATORY_FIELDS, OUTPUT_FIELDS, PHONE_FIELD};
pub use header::HeaderIndex;
pub use ids::RowId;
pub use report::{MalformedRecord, RunReport};
pub use row::RosterRow;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_name_round_trips_through_str() {
        for field in OUTPUT_FIELDS {
            assert_eq!(FieldName::parse(field.as_str()), Some(field));
        }
        assert_eq!(FieldName::parse("PHONE_NUMBER"), Some(PHONE_FIELD));
        assert_eq!(FieldName::parse("ssn"), None);
    }

    #[test]
    fn defect_serializes_with_snake_case_field() {
        let defect = Defect::new(FieldName::Dob, REASON_DATE_MALFORMED);
        let json = serde_json::to_string(&defect).expect("serialize defect");
        assert_eq!(json, r#"{"field":"dob","reason":"is malformed."}"#);
        let round: Defect = serde_json::from_str(&json).expect("deserialize defect");
        assert_eq!(round, defect);
    }

    #[test]
    fn ledger_counts_clean_and_malformed_rows() {
        let mut ledger = DefectLedger::new();
        ledger.record(RowId::new(1));
        ledger
            .record(RowId::new(2))
            .push(Defect::new(FieldName::Dob, REASON_MISSING));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.malformed_count(), 1);
        assert!(ledger.is_clean(RowId::new(1)));
        assert!(!ledger.is_clean(RowId::new(2)));
        assert!(!ledger.is_clean(RowId::new(3)));
    }
}
