use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/moods", get(handlers::get_moods))
        .route("/api/tags", get(handlers::get_tags))
        .route("/api/tags/custom", post(handlers::add_custom_tag))
        .route("/api/tags/custom/:id", delete(handlers::remove_custom_tag))
        .route("/api/day/:date", get(handlers::get_day))
        .route("/api/day/:date/mood", post(handlers::set_mood))
        .route("/api/day/:date/journal", post(handlers::set_journal))
        .route("/api/day/:date/tags", post(handlers::set_tags))
        .route("/api/day/:date/photo", post(handlers::set_photo))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/series", get(handlers::get_series))
        .route("/api/pixels", get(handlers::get_pixels))
        .route("/api/history", get(handlers::get_history))
        .with_state(state)
}
