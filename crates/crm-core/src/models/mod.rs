//! Domain Models
//!
//! Wire types matching the REST API. All tenant-scoped resources carry an
//! opaque string id; tenant scoping itself is enforced by the server.

mod activity;
mod auth;
mod contact;
mod dashboard;
mod deal;
mod form;
mod website;

pub use activity::*;
pub use auth::*;
pub use contact::*;
pub use dashboard::*;
pub use deal::*;
pub use form::*;
pub use website::*;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Anything that lives in a list keyed by id
pub trait Entity: Clone {
    fn id(&self) -> &str;
}

/// Accept ids as either JSON strings or numbers
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
    })
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    // Server-side timestamps are naive UTC, with or without fractional seconds
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// `2024-03-05T10:04:00` -> `2024-03-05`; unparseable input is returned as-is
pub fn display_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `2024-03-05T10:04:00` -> `2024-03-05 10:04`
pub fn display_datetime(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Whole-dollar amount with thousands separators, e.g. `$12,500`
pub fn format_money(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-03-05T10:04:00.123456"), "2024-03-05");
        assert_eq!(display_date("2024-03-05T10:04:00Z"), "2024-03-05");
        assert_eq!(display_datetime("2024-03-05T10:04:59"), "2024-03-05 10:04");
        assert_eq!(display_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(999.0), "$999");
        assert_eq!(format_money(1000.0), "$1,000");
        assert_eq!(format_money(1234567.4), "$1,234,567");
        assert_eq!(format_money(-2500.0), "-$2,500");
    }
}
