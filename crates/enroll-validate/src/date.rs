//! Date canonicalization.
//!
//! A structural, not calendar-aware, canonicalizer: it arranges
//! numeric tokens into year-first order without checking month or day
//! ranges. `13/40/2019` parses to `2019-13-40` without defect; that
//! permissiveness is intentional and must not be tightened.

use enroll_model::REASON_DATE_MALFORMED;

/// Canonicalize a raw date value toward `YYYY-MM-DD`.
///
/// The raw string is split into runs of ASCII digits; any non-digit
/// run is a separator. Exactly three tokens are required:
/// - first token is 4 chars: already year-first, tokens joined with
///   `-` verbatim (this branch does not zero-pad)
/// - last token is 4 chars: month, day, 4-digit year
/// - last token is 2 chars: month, day, year prefixed with `20`
///
/// Anything else is a defect and the value is left unchanged.
pub fn normalize_date(raw: &str) -> (String, Option<&'static str>) {
    let tokens = digit_runs(raw);
    let [first, middle, last] = tokens.as_slice() else {
        return (raw.to_string(), Some(REASON_DATE_MALFORMED));
    };
    if first.len() == 4 {
        return (format!("{first}-{middle}-{last}"), None);
    }
    let year = if last.len() == 4 {
        last.clone()
    } else if last.len() == 2 {
        format!("20{last}")
    } else {
        return (raw.to_string(), Some(REASON_DATE_MALFORMED));
    };
    // Ambiguous two-part ordering is preserved as month-then-day.
    (format!("{year}-{first:0>2}-{middle:0>2}"), None)
}

fn digit_runs(raw: &str) -> Vec<String> {
    raw.split(|ch: char| !ch.is_ascii_digit())
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}
