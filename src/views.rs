use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::dates::{add_months, day_key, days_in_month, month_start, week_start};
use crate::models::{CalendarView, Habit};

/// Serializable projection of one calendar layout, tagged by view so the
/// page can dispatch on the `view` field.
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewModel {
    Monthly { title: String, cells: Vec<MonthCell> },
    Weekly { title: String, days: Vec<WeekDay> },
    Daily { title: String, date: String, habits: Vec<HabitMark> },
}

/// One slot in the 7-column month grid. Leading slots before the 1st carry
/// no day at all; real days carry an aggregated completion flag (any habit
/// completed that day).
#[derive(Debug, Serialize)]
pub struct MonthCell {
    pub day: Option<u32>,
    pub date: Option<String>,
    pub completed: bool,
    pub is_today: bool,
}

#[derive(Debug, Serialize)]
pub struct WeekDay {
    pub date: String,
    pub weekday: String,
    pub day: u32,
    pub is_today: bool,
    pub habits: Vec<HabitMark>,
}

#[derive(Debug, Serialize)]
pub struct HabitMark {
    pub habit_id: u64,
    pub name: String,
    pub completed: bool,
}

pub fn project(
    view: CalendarView,
    reference: NaiveDate,
    today: NaiveDate,
    habits: &[Habit],
) -> ViewModel {
    match view {
        CalendarView::Monthly => project_month(reference, today, habits),
        CalendarView::Weekly => project_week(reference, today, habits),
        CalendarView::Daily => project_day(reference, habits),
    }
}

/// Shifts the reference date one window in `direction` for the active view:
/// a month, a week, or a day.
pub fn step(view: CalendarView, reference: NaiveDate, direction: i32) -> NaiveDate {
    match view {
        CalendarView::Monthly => add_months(reference, direction),
        CalendarView::Weekly => reference + Duration::days(7 * i64::from(direction)),
        CalendarView::Daily => reference + Duration::days(i64::from(direction)),
    }
}

fn project_month(reference: NaiveDate, today: NaiveDate, habits: &[Habit]) -> ViewModel {
    let start = month_start(reference);
    let offset = start.weekday().num_days_from_sunday();
    let length = days_in_month(reference);

    let mut cells = Vec::with_capacity((offset + length) as usize);
    for _ in 0..offset {
        cells.push(MonthCell {
            day: None,
            date: None,
            completed: false,
            is_today: false,
        });
    }
    for day_offset in 0..length {
        let date = start + Duration::days(i64::from(day_offset));
        let key = day_key(date);
        cells.push(MonthCell {
            day: Some(date.day()),
            completed: habits
                .iter()
                .any(|habit| habit.completed_dates.contains(&key)),
            is_today: date == today,
            date: Some(key),
        });
    }

    ViewModel::Monthly {
        title: reference.format("%B %Y").to_string(),
        cells,
    }
}

fn project_week(reference: NaiveDate, today: NaiveDate, habits: &[Habit]) -> ViewModel {
    let start = week_start(reference);
    let days = (0..7)
        .map(|day_offset| {
            let date = start + Duration::days(day_offset);
            let key = day_key(date);
            WeekDay {
                weekday: date.format("%A").to_string(),
                day: date.day(),
                is_today: date == today,
                habits: habit_marks(&key, habits),
                date: key,
            }
        })
        .collect();

    ViewModel::Weekly {
        title: format!("Week of {}", reference.format("%B %-d, %Y")),
        days,
    }
}

fn project_day(reference: NaiveDate, habits: &[Habit]) -> ViewModel {
    let key = day_key(reference);
    ViewModel::Daily {
        title: reference.format("%A, %B %-d, %Y").to_string(),
        habits: habit_marks(&key, habits),
        date: key,
    }
}

fn habit_marks(key: &str, habits: &[Habit]) -> Vec<HabitMark> {
    habits
        .iter()
        .map(|habit| HabitMark {
            habit_id: habit.id,
            name: habit.name.clone(),
            completed: habit.completed_dates.contains(key),
        })
        .collect()
}
