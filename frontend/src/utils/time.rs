use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

pub fn now_in(tz: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&tz)
}

pub fn today_in(tz: Tz) -> NaiveDate {
    now_in(tz).date_naive()
}

/// "Friday, October 16, 2026"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "Fri, Oct 16, 2026"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// Renders an API timestamp in the app time zone. Naive timestamps are taken
/// as UTC; anything unparsable is shown as-is.
pub fn format_timestamp(raw: &str, tz: Tz) -> String {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.and_utc())
        });
    match parsed {
        Ok(dt) => dt.with_timezone(&tz).format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Value of an `<input type="date">`; blank means no date.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn format_date_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
