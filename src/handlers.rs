use crate::calendar::month_grid;
use crate::dates::{date_key, parse_date_key, today_key};
use crate::errors::AppError;
use crate::history::history_feed;
use crate::models::{
    CustomTagRequest, DayCell, EntryPatch, EntryResponse, FeedItem, JournalRequest,
    JOURNAL_MAX_CHARS, MAX_INTENSITY, MIN_INTENSITY, MonthSeries, MoodInfo, MoodRequest,
    PhotoRequest, TagListResponse, TagsRequest, YearGrid,
};
use crate::moods::MOODS;
use crate::pixels::year_grid;
use crate::series::month_series;
use crate::state::AppState;
use crate::storage;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = today_key();
    let store = state.store.lock().await;
    let logged_today = store.entry(&date).is_some();
    Html(render_index(&date, logged_today))
}

pub async fn get_moods() -> Json<Vec<MoodInfo>> {
    let catalog = MOODS
        .iter()
        .map(|row| MoodInfo {
            mood: row.mood,
            emoji: row.emoji,
            label: row.label,
            color: row.color,
            score: row.mood.score(),
        })
        .collect();
    Json(catalog)
}

pub async fn get_tags(State(state): State<AppState>) -> Json<TagListResponse> {
    let store = state.store.lock().await;
    Json(TagListResponse {
        tags: store.available_tags(),
    })
}

pub async fn add_custom_tag(
    State(state): State<AppState>,
    Json(payload): Json<CustomTagRequest>,
) -> Result<Json<TagListResponse>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::bad_request("tag name must not be empty"));
    }
    let mut store = state.store.lock().await;
    // A colliding slug is a silent no-op; the current set comes back
    // either way.
    if store.add_custom_tag(&payload.name).is_some() {
        storage::save_custom_tags(&state.paths.custom_tags, store.custom_tags()).await;
    }
    Ok(Json(TagListResponse {
        tags: store.available_tags(),
    }))
}

pub async fn remove_custom_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<TagListResponse> {
    let mut store = state.store.lock().await;
    if store.remove_custom_tag(&id) {
        storage::save_custom_tags(&state.paths.custom_tags, store.custom_tags()).await;
        // Stripping the id may have touched any number of entries.
        storage::save_entries(&state.paths.entries, store.entries()).await;
    }
    Json(TagListResponse {
        tags: store.available_tags(),
    })
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<EntryResponse>, AppError> {
    let date = canonical_date(&date)?;
    let store = state.store.lock().await;
    Ok(Json(EntryResponse {
        entry: store.entry(&date).cloned(),
        date,
    }))
}

pub async fn set_mood(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(payload): Json<MoodRequest>,
) -> Result<Json<EntryResponse>, AppError> {
    let date = canonical_date(&date)?;
    if let Some(intensity) = payload.intensity {
        if !(MIN_INTENSITY..=MAX_INTENSITY).contains(&intensity) {
            return Err(AppError::bad_request(format!(
                "intensity must be between {MIN_INTENSITY} and {MAX_INTENSITY}"
            )));
        }
    }
    let patch = EntryPatch {
        mood: Some(payload.mood),
        intensity: payload.intensity,
        ..EntryPatch::default()
    };
    apply_patch(&state, date, patch).await
}

pub async fn set_journal(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(payload): Json<JournalRequest>,
) -> Result<Json<EntryResponse>, AppError> {
    let date = canonical_date(&date)?;
    if payload.journal.chars().count() > JOURNAL_MAX_CHARS {
        return Err(AppError::bad_request(format!(
            "journal must be {JOURNAL_MAX_CHARS} characters or fewer"
        )));
    }
    let patch = EntryPatch {
        journal: Some(payload.journal),
        ..EntryPatch::default()
    };
    apply_patch(&state, date, patch).await
}

pub async fn set_tags(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(payload): Json<TagsRequest>,
) -> Result<Json<EntryResponse>, AppError> {
    let date = canonical_date(&date)?;
    let mut store = state.store.lock().await;
    let Some(entry) = store.set_tags(&date, payload.tags) else {
        return Err(moodless_rejection());
    };
    let patch = EntryPatch {
        tags: Some(entry.tags.clone()),
        ..EntryPatch::default()
    };
    storage::upsert_entry(&state.paths.entries, &date, &patch).await;
    Ok(Json(EntryResponse {
        date,
        entry: Some(entry),
    }))
}

pub async fn set_photo(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(payload): Json<PhotoRequest>,
) -> Result<Json<EntryResponse>, AppError> {
    let date = canonical_date(&date)?;
    if payload.photo_url.trim().is_empty() {
        return Err(AppError::bad_request("photo_url must not be empty"));
    }
    let patch = EntryPatch {
        photo_url: Some(payload.photo_url),
        ..EntryPatch::default()
    };
    apply_patch(&state, date, patch).await
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month0: u32,
}

#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: i32,
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<DayCell>>, AppError> {
    validate_month(&query)?;
    let store = state.store.lock().await;
    Ok(Json(month_grid(query.year, query.month0, store.entries())))
}

pub async fn get_series(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthSeries>, AppError> {
    validate_month(&query)?;
    let store = state.store.lock().await;
    Ok(Json(month_series(query.year, query.month0, store.entries())))
}

pub async fn get_pixels(
    State(state): State<AppState>,
    Query(query): Query<YearQuery>,
) -> Result<Json<YearGrid>, AppError> {
    validate_year(query.year)?;
    let store = state.store.lock().await;
    Ok(Json(year_grid(query.year, store.entries())))
}

pub async fn get_history(State(state): State<AppState>) -> Json<Vec<FeedItem>> {
    let store = state.store.lock().await;
    Json(history_feed(store.entries()))
}

/// Merge in memory first, then write the same fields through the gateway.
/// Gateway failures are logged inside the gateway; the session state
/// already reflects the update.
async fn apply_patch(
    state: &AppState,
    date: String,
    patch: EntryPatch,
) -> Result<Json<EntryResponse>, AppError> {
    let mut store = state.store.lock().await;
    let Some(entry) = store.apply(&date, &patch) else {
        return Err(moodless_rejection());
    };
    storage::upsert_entry(&state.paths.entries, &date, &patch).await;
    Ok(Json(EntryResponse {
        date,
        entry: Some(entry),
    }))
}

fn moodless_rejection() -> AppError {
    AppError::bad_request("select a mood for this date first")
}

fn canonical_date(raw: &str) -> Result<String, AppError> {
    parse_date_key(raw)
        .map(date_key)
        .ok_or_else(|| AppError::bad_request("date must be YYYY-MM-DD"))
}

fn validate_month(query: &MonthQuery) -> Result<(), AppError> {
    validate_year(query.year)?;
    if query.month0 > 11 {
        return Err(AppError::bad_request("month0 must be 0..=11"));
    }
    Ok(())
}

fn validate_year(year: i32) -> Result<(), AppError> {
    if !(1..=9999).contains(&year) {
        return Err(AppError::bad_request("year must be 1..=9999"));
    }
    Ok(())
}
