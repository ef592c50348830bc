//! API utility functions
//!
//! Field validation and normalization shared by the request handlers.

use crate::error::AppError;
use crate::tracker::dates;
use crate::tracker::LogFilter;
use chrono::NaiveDate;
use serde::Deserialize;

/// A duration as it arrives on the wire: a JSON number or a string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawDuration {
    /// Integral JSON number
    Int(i64),
    /// Non-integral JSON number
    Float(f64),
    /// Text, from forms or quoted JSON values
    Text(String),
}

/// Validate that a required field is present
pub fn require<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("{} is required", field)))
}

/// Validate an exercise description: present and not blank
pub fn validate_description(description: Option<String>) -> Result<String, AppError> {
    let description = require(description, "description")?;
    if description.trim().is_empty() {
        return Err(AppError::Validation(
            "description cannot be empty".to_string(),
        ));
    }
    Ok(description)
}

/// Validate an exercise duration
///
/// Accepts integers, integral floats, and strings holding an integer.
/// Negative values and anything non-numeric are rejected.
pub fn parse_duration(raw: Option<RawDuration>) -> Result<i64, AppError> {
    let invalid = || AppError::Validation("duration must be a non-negative integer".to_string());

    let duration = match require(raw, "duration")? {
        RawDuration::Int(n) => n,
        RawDuration::Float(f) if f.is_finite() && f.fract() == 0.0 => {
            if f < i64::MIN as f64 || f > i64::MAX as f64 {
                return Err(invalid());
            }
            f as i64
        }
        RawDuration::Float(_) => return Err(invalid()),
        RawDuration::Text(text) => text.trim().parse::<i64>().map_err(|_| invalid())?,
    };

    if duration < 0 {
        return Err(invalid());
    }
    Ok(duration)
}

/// Parse an optional date field, treating blank input as absent
pub fn parse_optional_date(input: Option<&str>, field: &str) -> Result<Option<NaiveDate>, AppError> {
    match input.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => dates::parse_date(value).map(Some).map_err(|_| {
            AppError::Validation(format!(
                "{} must be a valid date in YYYY-MM-DD form, got '{}'",
                field, value
            ))
        }),
    }
}

/// Parse a log limit; absent, blank and `0` all mean unbounded
pub fn parse_limit(input: Option<&str>) -> Result<Option<u32>, AppError> {
    match input.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => {
            let limit: u32 = value.parse().map_err(|_| {
                AppError::Validation(format!(
                    "limit must be a non-negative integer, got '{}'",
                    value
                ))
            })?;
            Ok(Some(limit).filter(|n| *n > 0))
        }
    }
}

/// Build a log filter from raw query parameters
///
/// `from` defaults to 1970-01-01 and `to` to today's UTC date.
pub fn build_log_filter(
    from: Option<&str>,
    to: Option<&str>,
    limit: Option<&str>,
) -> Result<LogFilter, AppError> {
    let from = parse_optional_date(from, "from")?.unwrap_or_else(dates::epoch);
    let to = parse_optional_date(to, "to")?.unwrap_or_else(dates::today_utc);

    Ok(LogFilter {
        from: dates::to_storage(from),
        to: dates::to_storage(to),
        limit: parse_limit(limit)?,
    })
}
