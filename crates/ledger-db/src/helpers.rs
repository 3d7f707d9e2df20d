//! Row-to-entity parsing helpers.
//!
//! Every repo needs to convert `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing logic and handle the dual datetime
//! format issue (`SQLite`'s `datetime('now')` vs Rust's `to_rfc3339()`).

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Decode` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Decode {
            kind: "datetime",
            value: s.to_string(),
            reason: e.to_string(),
        })
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all ledger-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::Decode` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Decode {
            kind: "enum",
            value: s.to_string(),
            reason: e.to_string(),
        })
}

/// Read a nullable TEXT column as a `String`, mapping SQL NULL to `""`.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_string_or_empty(row: &libsql::Row, idx: i32) -> Result<String, DatabaseError> {
    Ok(row.get::<Option<String>>(idx)?.unwrap_or_default())
}

/// Build a `LIKE` pattern matching `query` anywhere in a column.
///
/// `%`, `_` and `\` in the query are escaped; statements using the pattern must
/// declare `ESCAPE '\'`.
#[must_use]
pub fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Row offset for a 1-based page number. Page 0 is treated as page 1.
#[must_use]
pub const fn page_offset(page: u32, per_page: u32) -> u64 {
    let page = if page == 0 { 1 } else { page };
    (page as u64 - 1) * per_page as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_core::enums::InvoiceStatus;

    #[test]
    fn parses_both_datetime_formats() {
        let rfc = parse_datetime("2026-02-09T14:30:00+00:00").unwrap();
        let sqlite = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(rfc, sqlite);
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(DatabaseError::Decode { kind: "datetime", .. })
        ));
    }

    #[test]
    fn parses_status_enum() {
        let status: InvoiceStatus = parse_enum("paid").unwrap();
        assert_eq!(status, InvoiceStatus::Paid);
        assert!(matches!(
            parse_enum::<InvoiceStatus>("unpaid"),
            Err(DatabaseError::Decode { kind: "enum", value, .. }) if value == "unpaid"
        ));
    }

    #[test]
    fn contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("lee"), "%lee%");
        assert_eq!(contains_pattern("50%"), "%50\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn page_offset_is_one_based() {
        assert_eq!(page_offset(0, 6), 0);
        assert_eq!(page_offset(1, 6), 0);
        assert_eq!(page_offset(3, 6), 12);
    }
}
