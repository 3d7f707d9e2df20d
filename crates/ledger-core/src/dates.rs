//! Calendar helpers.

use chrono::Utc;

/// Storage format for invoice dates.
pub const ISO_DATE: &str = "%Y-%m-%d";

/// Current UTC day as `YYYY-MM-DD`.
#[must_use]
pub fn today_iso() -> String {
    Utc::now().date_naive().format(ISO_DATE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn today_is_ten_chars_and_parses_back() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert_eq!(
            NaiveDate::parse_from_str(&today, ISO_DATE).ok(),
            Some(Utc::now().date_naive())
        );
    }
}
