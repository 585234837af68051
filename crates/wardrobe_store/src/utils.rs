//! Date parsing helpers shared by the store and its consumers.

use chrono::NaiveDate;

use crate::WardrobeError;

/// Parse a wear date to a `NaiveDate`.
///
/// Accepts:
/// - YYYY-MM-DD
/// - RFC3339 datetime (date part taken)
/// - Naive datetime YYYY-MM-DDTHH:MM:SS (date part taken)
pub fn parse_wear_date(s: &str) -> Result<NaiveDate, WardrobeError> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    if let Ok(ndt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(ndt.date());
    }
    Err(WardrobeError::InvalidDate {
        value: s.to_string(),
    })
}
