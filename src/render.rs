//! Formatting of forecast values for display.

use chrono::{DateTime, Local};

/// Placeholder shown when a temperature bound is missing from the payload.
pub const MISSING_TEMPERATURE: &str = "--";

/// Formats a temperature in °C, substituting `"--"` for an absent value.
///
/// ```
/// use mitiempo::format_temperature;
///
/// assert_eq!(format_temperature(Some(20)), "20°C");
/// assert_eq!(format_temperature(None), "--°C");
/// ```
pub fn format_temperature(value: Option<i32>) -> String {
    match value {
        Some(degrees) => format!("{degrees}°C"),
        None => format!("{MISSING_TEMPERATURE}°C"),
    }
}

/// Formats the "last updated" timestamp as `dd/mm/yyyy HH:MM`.
pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format("%d/%m/%Y %H:%M").to_string()
}
