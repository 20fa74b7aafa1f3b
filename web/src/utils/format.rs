use chrono::{DateTime, NaiveDate};

fn parse_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    DateTime::parse_from_rfc3339(date)
        .map(|timestamp| timestamp.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(date, "%Y-%m-%d"))
        .ok()
}

/// `2024-01-01` or an RFC 3339 timestamp as `January 1, 2024`.
/// Unparseable input is shown as-is.
pub fn format_date(date: &str) -> String {
    parse_date(date)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| date.to_string())
}

/// Same as [`format_date`] with the weekday in front.
pub fn format_date_with_weekday(date: &str) -> String {
    parse_date(date)
        .map(|date| date.format("%A, %B %-d, %Y").to_string())
        .unwrap_or_else(|| date.to_string())
}

pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
