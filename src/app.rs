use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/habits", get(handlers::list_habits).post(handlers::add_habit))
        .route("/api/toggle", post(handlers::toggle_completion))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/view", post(handlers::change_view))
        .route("/api/navigate", post(handlers::navigate))
        .route("/api/export", get(handlers::export))
        .with_state(state)
}
