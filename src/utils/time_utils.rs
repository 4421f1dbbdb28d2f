use chrono::{DateTime, Duration as ChronoDuration, Local, NaiveDate, NaiveDateTime, Utc};

/// Monotonic clock that also works in the browser.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_DATE_FORMAT: &'static str = "%Y-%m-%d";
    pub const STANDARD_TIMESTAMP_FORMAT: &'static str = "%Y-%m-%dT%H:%M:%S";
    pub const DISPLAY_TIMESTAMP_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";
}

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Calendar date `days` after `from`. Negative durations go backwards.
pub fn date_after_days(from: NaiveDate, days: i64) -> NaiveDate {
    ChronoDuration::try_days(days)
        .and_then(|delta| from.checked_add_signed(delta))
        .unwrap_or(from)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(TimeUtils::STANDARD_DATE_FORMAT).to_string()
}

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TimeUtils::DISPLAY_TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_after_days_crosses_month_boundary() {
        let from = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        assert_eq!(
            date_after_days(from, 30),
            NaiveDate::from_ymd_opt(2024, 2, 19).unwrap()
        );
    }

    #[test]
    fn date_after_negative_days_goes_back() {
        let from = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(
            date_after_days(from, -1),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn formats_use_iso_layout() {
        let ts = NaiveDate::from_ymd_opt(2024, 10, 20)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(format_date(ts.date()), "2024-10-20");
        assert_eq!(format_timestamp(ts), "2024-10-20 10:30:00");
    }

    #[test]
    fn out_of_range_duration_keeps_the_start_date() {
        let from = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(date_after_days(from, i64::MAX), from);
    }
}
