//! Dollar/cent conversion.
//!
//! Amounts are stored as integer cents. Form input arrives in dollars.

/// Convert a dollar amount to cents as `round(dollars * 100)`.
///
/// Returns `None` for NaN, infinities, and values whose cent count does not
/// fit in an `i64`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn dollars_to_cents(dollars: f64) -> Option<i64> {
    if !dollars.is_finite() {
        return None;
    }
    let cents = (dollars * 100.0).round();
    if cents.is_finite() && cents >= i64::MIN as f64 && cents < i64::MAX as f64 {
        Some(cents as i64)
    } else {
        None
    }
}

/// Render cents as `$1,234.56` for log lines.
#[must_use]
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = (abs / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{:02}", abs % 100)
}
