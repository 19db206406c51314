//! Time/Locale Normalizer: resolves instants to India Standard Time calendar parts.
//!
//! IST is a fixed UTC+05:30 offset with no DST, so no timezone database is needed.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use crate::content::locale::Lang;

/// UTC offset of India Standard Time in seconds.
pub const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Calendar parts of an instant in IST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalParts {
    pub date: NaiveDate,
    /// `YYYY-MM-DD`
    pub date_key: String,
    /// `HH:MM`
    pub time_key: String,
    /// Sunday = 0 … Saturday = 6.
    pub weekday_index: u8,
}

impl LocalParts {
    /// `YYYY-MM`, the month salt for seeding.
    pub fn year_month(&self) -> &str {
        &self.date_key[..7]
    }

    /// `MM-DD`, the key for fixed-date observances and birthday matching.
    pub fn month_day(&self) -> &str {
        &self.date_key[5..]
    }

    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }
}

/// Converts an instant to IST calendar parts.
pub fn to_local_parts(instant: DateTime<Utc>) -> LocalParts {
    let local = match FixedOffset::east_opt(IST_OFFSET_SECS) {
        Some(offset) => instant.with_timezone(&offset).naive_local(),
        None => offset_fallback(instant),
    };
    from_naive(local)
}

/// Pure arithmetic fallback: UTC wall clock plus 5h30m.
fn offset_fallback(instant: DateTime<Utc>) -> NaiveDateTime {
    instant.naive_utc() + Duration::seconds(i64::from(IST_OFFSET_SECS))
}

fn from_naive(local: NaiveDateTime) -> LocalParts {
    let date = local.date();
    LocalParts {
        date,
        date_key: date.format("%Y-%m-%d").to_string(),
        time_key: local.format("%H:%M").to_string(),
        weekday_index: weekday_index(date),
    }
}

/// Calendar parts for a date with the clock at midnight.
pub fn parts_from_date(date: NaiveDate) -> LocalParts {
    LocalParts {
        date,
        date_key: date.format("%Y-%m-%d").to_string(),
        time_key: "00:00".to_string(),
        weekday_index: weekday_index(date),
    }
}

/// Earliest and latest year accepted as a date override.
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// Parses a `YYYY-MM-DD` key within `MIN_YEAR..=MAX_YEAR`. Returns `None` for
/// anything else.
pub fn parts_for_date(date_key: &str) -> Option<LocalParts> {
    NaiveDate::parse_from_str(date_key.trim(), "%Y-%m-%d")
        .ok()
        .filter(|d| (MIN_YEAR..=MAX_YEAR).contains(&d.year()))
        .map(parts_from_date)
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: &LocalParts, to: &LocalParts) -> i64 {
    (to.date - from.date).num_days()
}

/// "Today" in IST.
pub fn today() -> LocalParts {
    to_local_parts(Utc::now())
}

pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Human-readable date for body text.
///
/// en: `4th Jul 2025`; hi: `4 जुलाई 2025`.
pub fn display_date(date: NaiveDate, lang: Lang) -> String {
    let res = lang.resources();
    let month = date.month0() as usize;
    match lang {
        Lang::En => format!(
            "{}{} {} {}",
            date.day(),
            ordinal_suffix(date.day()),
            res.month_abbrev[month],
            date.year()
        ),
        Lang::Hi => format!("{} {} {}", date.day(), res.month_names[month], date.year()),
    }
}

/// Uppercased full date with weekday, used as the record header.
pub fn header_date(date: NaiveDate, lang: Lang) -> String {
    let res = lang.resources();
    format!(
        "{}, {} {} {}",
        res.weekday_names[weekday_index(date) as usize],
        date.day(),
        res.month_names[date.month0() as usize],
        date.year()
    )
    .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_ist_rolls_date_forward_late_utc_evening() {
        // 2025-07-03 19:00 UTC is 2025-07-04 00:30 IST.
        let instant = Utc.with_ymd_and_hms(2025, 7, 3, 19, 0, 0).unwrap();
        let parts = to_local_parts(instant);
        assert_eq!(parts.date_key, "2025-07-04");
        assert_eq!(parts.time_key, "00:30");
        assert_eq!(parts.weekday_index, 5); // Friday
    }

    #[test]
    fn test_offset_fallback_matches_fixed_offset() {
        let instant = Utc.with_ymd_and_hms(2024, 12, 31, 20, 45, 0).unwrap();
        let via_offset = to_local_parts(instant);
        let via_fallback = from_naive(offset_fallback(instant));
        assert_eq!(via_offset, via_fallback);
        assert_eq!(via_fallback.date_key, "2025-01-01");
        assert_eq!(via_fallback.time_key, "02:15");
    }

    #[test]
    fn test_weekday_index_sunday_is_zero() {
        let sunday = NaiveDate::from_ymd_opt(2025, 7, 6).unwrap();
        let saturday = NaiveDate::from_ymd_opt(2025, 7, 5).unwrap();
        assert_eq!(weekday_index(sunday), 0);
        assert_eq!(weekday_index(saturday), 6);
    }

    #[test]
    fn test_parts_for_date_rejects_garbage() {
        assert!(parts_for_date("2025-13-01").is_none());
        assert!(parts_for_date("yesterday").is_none());
        let parts = parts_for_date("2025-01-26").unwrap();
        assert_eq!(parts.year_month(), "2025-01");
        assert_eq!(parts.month_day(), "01-26");
        assert_eq!(parts.day_of_month(), 26);
    }

    #[test]
    fn test_parts_for_date_rejects_out_of_range_years() {
        assert!(parts_for_date("+262142-12-31").is_none());
        assert!(parts_for_date("1899-12-31").is_none());
        assert!(parts_for_date("2101-01-01").is_none());
        assert!(parts_for_date("1900-01-01").is_some());
        assert!(parts_for_date("2100-12-31").is_some());
    }

    #[test]
    fn test_days_between_is_signed() {
        let a = parts_for_date("2025-07-01").unwrap();
        let b = parts_for_date("2025-07-04").unwrap();
        assert_eq!(days_between(&a, &b), 3);
        assert_eq!(days_between(&b, &a), -3);
    }

    #[test]
    fn test_display_date_english_ordinals() {
        let d = |day| NaiveDate::from_ymd_opt(2025, 7, day).unwrap();
        assert_eq!(display_date(d(1), Lang::En), "1st Jul 2025");
        assert_eq!(display_date(d(2), Lang::En), "2nd Jul 2025");
        assert_eq!(display_date(d(3), Lang::En), "3rd Jul 2025");
        assert_eq!(display_date(d(4), Lang::En), "4th Jul 2025");
        assert_eq!(display_date(d(11), Lang::En), "11th Jul 2025");
        assert_eq!(display_date(d(12), Lang::En), "12th Jul 2025");
        assert_eq!(display_date(d(22), Lang::En), "22nd Jul 2025");
    }

    #[test]
    fn test_display_date_hindi_long_month() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        assert_eq!(display_date(date, Lang::Hi), "4 जुलाई 2025");
    }

    #[test]
    fn test_header_date_is_uppercased() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        assert_eq!(header_date(date, Lang::En), "FRIDAY, 4 JULY 2025");
        assert_eq!(header_date(date, Lang::Hi), "शुक्रवार, 4 जुलाई 2025");
    }
}
