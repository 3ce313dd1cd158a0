//! Phone number canonicalization.
//!
//! Produces an E.164-like value: a leading `+` followed by digits.
//! Ten-digit inputs are assumed to be North American and get a `+1`
//! prefix; longer inputs are assumed to already carry a country code.

use enroll_model::REASON_PHONE_TOO_SHORT;

/// Canonicalize a raw phone value.
///
/// Strips every non-digit character, then:
/// - fewer than 10 digits: defect, value is the stripped digits
/// - exactly 10 digits: `+1` prefix
/// - more than 10 digits: bare `+` prefix
///
/// No upper bound on digit count is enforced; implausibly long
/// numbers still pass with a bare `+` prefix.
pub fn normalize_phone(raw: &str) -> (String, Option<&'static str>) {
    let digits: String = raw.chars().filter(|ch| ch.is_ascii_digit()).collect();
    match digits.len() {
        0..=9 => (digits, Some(REASON_PHONE_TOO_SHORT)),
        10 => (format!("+1{digits}"), None),
        _ => (format!("+{digits}"), None),
    }
}
