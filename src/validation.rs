//! Parsing helpers for raw command fields.
//!
//! Commands arrive as the text the user typed. These helpers turn that text
//! into typed values or a [`ValidationError`] before any state is touched.

use chrono::NaiveDateTime;

use crate::error::ValidationError;

/// Format accepted for a pickup date and time, joined by a single space.
pub const PICKUP_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a recycled quantity in kilograms.
///
/// Must be a finite, non-negative real number.
pub fn parse_quantity(raw: &str) -> Result<f64, ValidationError> {
    let quantity = parse_finite(raw)
        .ok_or_else(|| ValidationError::InvalidQuantity(raw.trim().to_string()))?;
    if quantity < 0.0 {
        return Err(ValidationError::NegativeQuantity(quantity));
    }
    Ok(quantity)
}

/// Parse a latitude or longitude in degrees.
///
/// Only numeric parseability is checked; out-of-range values are accepted.
pub fn parse_coordinate(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    parse_finite(raw).ok_or_else(|| ValidationError::InvalidCoordinate {
        field,
        value: raw.trim().to_string(),
    })
}

/// Parse a search radius in kilometres.
pub fn parse_radius(raw: &str) -> Result<f64, ValidationError> {
    match parse_finite(raw) {
        Some(radius) if radius >= 0.0 => Ok(radius),
        _ => Err(ValidationError::InvalidRadius(raw.trim().to_string())),
    }
}

/// Parse a pickup date (`YYYY-MM-DD`) and time (`HH:MM`).
pub fn parse_pickup_datetime(date: &str, time: &str) -> Result<NaiveDateTime, ValidationError> {
    let joined = format!("{} {}", date.trim(), time.trim());
    NaiveDateTime::parse_from_str(&joined, PICKUP_DATETIME_FORMAT)
        .map_err(|_| ValidationError::InvalidDateTime(joined))
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
