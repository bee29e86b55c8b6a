use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    #[default]
    Monthly,
    Weekly,
    Daily,
}

impl CalendarView {
    pub fn as_str(self) -> &'static str {
        match self {
            CalendarView::Monthly => "monthly",
            CalendarView::Weekly => "weekly",
            CalendarView::Daily => "daily",
        }
    }
}

/// One tracked habit. `completed_dates` holds canonical `YYYY-MM-DD` keys,
/// so presence per day is boolean and iteration order is chronological.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: u64,
    pub name: String,
    pub completed_dates: BTreeSet<String>,
}

/// The persisted application state. `current_date` is written out but reset
/// to today on every load.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AppData {
    pub habits: Vec<Habit>,
    pub current_view: CalendarView,
    pub current_date: String,
}

impl AppData {
    /// Appends a habit with a fresh id and no completions, returning the id.
    pub fn add_habit(&mut self, name: String) -> u64 {
        let id = self.habits.iter().map(|habit| habit.id).max().unwrap_or(0) + 1;
        self.habits.push(Habit {
            id,
            name,
            completed_dates: BTreeSet::new(),
        });
        id
    }

    /// Flips the completion mark for one day. Returns false when no habit
    /// has the given id.
    pub fn toggle_completion(&mut self, habit_id: u64, key: &str) -> bool {
        let Some(habit) = self.habits.iter_mut().find(|habit| habit.id == habit_id) else {
            return false;
        };
        if !habit.completed_dates.remove(key) {
            habit.completed_dates.insert(key.to_string());
        }
        true
    }
}

#[derive(Debug, Deserialize)]
pub struct AddHabitRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub habit_id: u64,
    /// Day key to flip; the server's current day when omitted.
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ViewRequest {
    pub view: CalendarView,
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub direction: i32,
}

#[derive(Debug, Serialize)]
pub struct HabitSummary {
    pub id: u64,
    pub name: String,
    pub streak: u32,
    pub completed_today: bool,
}

#[derive(Debug, Serialize)]
pub struct HabitListResponse {
    pub today: String,
    pub habits: Vec<HabitSummary>,
}
