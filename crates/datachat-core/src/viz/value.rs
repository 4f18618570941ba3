use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

/// Cell classification, decided once per column from the first row.
/// Role inference and chart selection only ever look at this tag, never at
/// the raw JSON value again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    Number,
    Text,
    DateLike,
    Null,
}

impl CellType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Number(_) => CellType::Number,
            Value::Null => CellType::Null,
            Value::String(s) if parse_date_like(s).is_some() => CellType::DateLike,
            _ => CellType::Text,
        }
    }

    /// Numeric cells are measures; text, date-like and null cells are all
    /// grouping dimensions.
    pub fn is_measure(self) -> bool {
        matches!(self, CellType::Number)
    }
}

/// Full-string parse of the common calendar shapes a SQL result carries:
/// RFC 3339, `YYYY-MM-DD[ T]HH:MM:SS`, plain dates, and month buckets like
/// `2025-01` (anchored to the first of the month).
pub fn parse_date_like(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_time(NaiveTime::MIN));
    }

    if s.len() == 7 {
        if let Ok(d) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }

    None
}
