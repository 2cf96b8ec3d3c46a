//! Display formatting for stored timestamps.

use chrono::{DateTime, NaiveDate};

/// What an unparseable input renders as. Accepted as-is; never an error.
const INVALID_DATE: &str = "Invalid Date";

/// Format a stored timestamp for display.
///
/// Absent (or empty) input renders as the empty string. Parseable input is
/// rendered day-first (`DD/MM/YYYY`); field order follows the en-AU default
/// since locale resolution belongs to the UI collaborator.
pub fn format_display_date(date: Option<&str>) -> String {
    let Some(raw) = date.filter(|d| !d.is_empty()) else {
        return String::new();
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%d/%m/%Y").to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.format("%d/%m/%Y").to_string();
    }

    INVALID_DATE.to_string()
}
