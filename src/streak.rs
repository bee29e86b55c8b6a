use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

use crate::dates::day_key;

/// Length of the unbroken run of completed days ending at `today` or
/// yesterday. A run whose most recent day is older than yesterday is broken
/// and counts as 0; completing yesterday but not (yet) today keeps the run
/// alive for one grace day.
pub fn current_streak(today: NaiveDate, completed: &BTreeSet<String>) -> u32 {
    let yesterday = today - Duration::days(1);
    let anchor = if completed.contains(&day_key(today)) {
        today
    } else if completed.contains(&day_key(yesterday)) {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 0;
    let mut cursor = anchor;
    while completed.contains(&day_key(cursor)) {
        streak += 1;
        cursor = cursor - Duration::days(1);
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn completed(keys: &[&str]) -> BTreeSet<String> {
        keys.iter().map(|key| key.to_string()).collect()
    }

    #[test]
    fn empty_history_has_no_streak() {
        assert_eq!(current_streak(date(2024, 6, 10), &BTreeSet::new()), 0);
    }

    #[test]
    fn run_ending_today_counts_every_day() {
        let days = completed(&["2024-06-09", "2024-06-10"]);
        assert_eq!(current_streak(date(2024, 6, 10), &days), 2);
    }

    #[test]
    fn yesterday_keeps_the_streak_alive() {
        let days = completed(&["2024-06-07", "2024-06-08", "2024-06-09"]);
        assert_eq!(current_streak(date(2024, 6, 10), &days), 3);
    }

    #[test]
    fn two_day_gap_breaks_the_streak() {
        let days = completed(&["2024-06-08"]);
        assert_eq!(current_streak(date(2024, 6, 10), &days), 0);
    }

    #[test]
    fn earlier_history_does_not_extend_the_run() {
        let days = completed(&["2024-06-01", "2024-06-02", "2024-06-09", "2024-06-10"]);
        assert_eq!(current_streak(date(2024, 6, 10), &days), 2);
    }

    #[test]
    fn run_crosses_month_boundaries() {
        let days = completed(&["2024-02-28", "2024-02-29", "2024-03-01"]);
        assert_eq!(current_streak(date(2024, 3, 1), &days), 3);
    }

    #[test]
    fn streak_never_exceeds_distinct_days() {
        let days = completed(&["2024-06-10"]);
        assert_eq!(current_streak(date(2024, 6, 10), &days), 1);
    }
}
