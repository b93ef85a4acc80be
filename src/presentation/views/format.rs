use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Long US-style date ("January 15, 2024") for a CMS date string.
///
/// Accepts RFC 3339 timestamps, naive date-times and plain `YYYY-MM-DD` dates. Timestamps keep
/// the calendar day of their own offset. Unparseable input yields `None`.
pub fn formatted_date(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let parsed = DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"));

    match parsed {
        Ok(date) => Some(date.format("%B %-d, %Y").to_string()),
        Err(_) => {
            tracing::warn!(date = %raw, "invalid date string provided");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_dates() {
        assert_eq!(formatted_date("2024-01-15").as_deref(), Some("January 15, 2024"));
        assert_eq!(formatted_date("2023-12-01").as_deref(), Some("December 1, 2023"));
    }

    #[test]
    fn formats_contentful_timestamps() {
        assert_eq!(
            formatted_date("2024-01-15T00:00:00.000Z").as_deref(),
            Some("January 15, 2024")
        );
        assert_eq!(
            formatted_date("2024-03-09T23:30:00.000-05:00").as_deref(),
            Some("March 9, 2024")
        );
        assert_eq!(formatted_date("2024-07-04T10:00").as_deref(), Some("July 4, 2024"));
    }

    #[test]
    fn malformed_dates_are_absent() {
        assert_eq!(formatted_date("not-a-date"), None);
        assert_eq!(formatted_date(""), None);
        assert_eq!(formatted_date("2024-02-30"), None);
    }
}
