use crate::dates::{day_key, parse_day_key};
use crate::errors::AppError;
use crate::models::{
    AddHabitRequest, AppData, HabitListResponse, HabitSummary, NavigateRequest, ToggleRequest,
    ViewRequest,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::streak::current_streak;
use crate::ui::render_index;
use crate::views::{ViewModel, project, step};
use axum::{
    Json,
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};
use chrono::{Local, NaiveDate};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = local_today();
    let data = state.data.lock().await;
    Html(render_index(&day_key(today), data.current_view))
}

pub async fn list_habits(
    State(state): State<AppState>,
) -> Result<Json<HabitListResponse>, AppError> {
    let today = local_today();
    let data = state.data.lock().await;
    Ok(Json(habit_list(&data, today)))
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(payload): Json<AddHabitRequest>,
) -> Result<Json<HabitListResponse>, AppError> {
    let today = local_today();
    let name = payload.name.trim();
    let mut data = state.data.lock().await;

    // Blank submissions are dropped silently, not rejected.
    if !name.is_empty() {
        data.add_habit(name.to_string());
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(habit_list(&data, today)))
}

pub async fn toggle_completion(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<HabitListResponse>, AppError> {
    let today = local_today();
    let date = match payload.date {
        Some(raw) => {
            parse_day_key(&raw).ok_or_else(|| AppError::bad_request("date must be YYYY-MM-DD"))?
        }
        None => today,
    };

    let mut data = state.data.lock().await;
    if !data.toggle_completion(payload.habit_id, &day_key(date)) {
        return Err(AppError::not_found("unknown habit id"));
    }
    persist_data(&state.data_path, &data).await?;

    Ok(Json(habit_list(&data, today)))
}

pub async fn get_calendar(State(state): State<AppState>) -> Result<Json<ViewModel>, AppError> {
    let today = local_today();
    let data = state.data.lock().await;
    Ok(Json(projection(&data, today)))
}

pub async fn change_view(
    State(state): State<AppState>,
    Json(payload): Json<ViewRequest>,
) -> Result<Json<ViewModel>, AppError> {
    let today = local_today();
    let mut data = state.data.lock().await;
    data.current_view = payload.view;
    // Switching layouts always reopens the window at today.
    data.current_date = day_key(today);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(projection(&data, today)))
}

pub async fn navigate(
    State(state): State<AppState>,
    Json(payload): Json<NavigateRequest>,
) -> Result<Json<ViewModel>, AppError> {
    if payload.direction != -1 && payload.direction != 1 {
        return Err(AppError::bad_request("direction must be -1 or 1"));
    }

    let today = local_today();
    let mut data = state.data.lock().await;
    let reference = parse_day_key(&data.current_date).unwrap_or(today);
    data.current_date = day_key(step(data.current_view, reference, payload.direction));
    persist_data(&state.data_path, &data).await?;

    Ok(Json(projection(&data, today)))
}

pub async fn export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let data = state.data.lock().await;
    let payload = serde_json::to_vec_pretty(&*data).map_err(AppError::internal)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"habitforge_data.json\"",
            ),
        ],
        payload,
    ))
}

fn projection(data: &AppData, today: NaiveDate) -> ViewModel {
    let reference = parse_day_key(&data.current_date).unwrap_or(today);
    project(data.current_view, reference, today, &data.habits)
}

fn habit_list(data: &AppData, today: NaiveDate) -> HabitListResponse {
    let today_key = day_key(today);
    let habits = data
        .habits
        .iter()
        .map(|habit| HabitSummary {
            id: habit.id,
            name: habit.name.clone(),
            streak: current_streak(today, &habit.completed_dates),
            completed_today: habit.completed_dates.contains(&today_key),
        })
        .collect();

    HabitListResponse {
        today: today_key,
        habits,
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
