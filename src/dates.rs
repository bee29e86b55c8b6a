use chrono::{Datelike, Duration, Months, NaiveDate};

/// Canonical `YYYY-MM-DD` form. This string is the only representation that
/// is persisted or compared.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// The Sunday on or before `date`. Weeks run Sunday to Saturday.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let start = month_start(date);
    // Day 1 plus 32 days always lands inside the following month.
    let next = month_start(start + Duration::days(32));
    (next - start).num_days() as u32
}

/// Steps by whole months, clamping to the last day when the target month is
/// shorter (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let stepped = if delta >= 0 {
        date.checked_add_months(Months::new(delta as u32))
    } else {
        date.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    stepped.unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_key_round_trips() {
        let day = date(2024, 6, 9);
        assert_eq!(day_key(day), "2024-06-09");
        assert_eq!(parse_day_key("2024-06-09"), Some(day));
    }

    #[test]
    fn parse_rejects_malformed_keys() {
        assert_eq!(parse_day_key("not a date"), None);
        assert_eq!(parse_day_key("2024-13-40"), None);
    }

    #[test]
    fn week_start_is_the_enclosing_sunday() {
        // 2024-03-13 is a Wednesday.
        assert_eq!(week_start(date(2024, 3, 13)), date(2024, 3, 10));
        // A Sunday is its own week start.
        assert_eq!(week_start(date(2024, 3, 10)), date(2024, 3, 10));
    }

    #[test]
    fn month_lengths_cover_leap_years() {
        assert_eq!(days_in_month(date(2024, 2, 15)), 29);
        assert_eq!(days_in_month(date(2023, 2, 15)), 28);
        assert_eq!(days_in_month(date(2024, 3, 1)), 31);
        assert_eq!(days_in_month(date(2024, 4, 30)), 30);
    }

    #[test]
    fn month_step_clamps_to_shorter_months() {
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_months(date(2024, 3, 31), -1), date(2024, 2, 29));
    }

    #[test]
    fn month_step_rolls_over_years() {
        assert_eq!(add_months(date(2024, 12, 15), 1), date(2025, 1, 15));
        assert_eq!(add_months(date(2024, 1, 15), -1), date(2023, 12, 15));
    }
}
