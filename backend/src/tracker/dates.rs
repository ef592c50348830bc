//! Calendar date helpers
//!
//! Exercise dates are stored as zero-padded `YYYY-MM-DD` strings so that
//! range filters can compare them lexically. Responses render them in the
//! `Www Mmm DD YYYY` form (e.g. `Mon Jan 01 2024`).

use chrono::{DateTime, NaiveDate, Utc};

/// Storage format for exercise dates
pub const STORAGE_FORMAT: &str = "%Y-%m-%d";

/// Display format used in API responses
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y";

/// Rendered in place of a stored date that no longer parses
pub const INVALID_DATE: &str = "Invalid Date";

/// Parse a caller-supplied date
pub fn parse_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input.trim(), STORAGE_FORMAT)
}

/// Current date in UTC
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// 1970-01-01, the default lower bound of a log query
pub fn epoch() -> NaiveDate {
    DateTime::<Utc>::UNIX_EPOCH.date_naive()
}

/// Format a date for storage
pub fn to_storage(date: NaiveDate) -> String {
    date.format(STORAGE_FORMAT).to_string()
}

/// Format a date for API responses
pub fn to_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Render a stored date string for API responses
pub fn display_stored(stored: &str) -> String {
    match parse_date(stored) {
        Ok(date) => to_display(date),
        Err(_) => INVALID_DATE.to_string(),
    }
}
