use axum::Json;
use axum::extract::State;
use menowell_shared::diary::DiaryEntry;
use menowell_store::{EntityKind, create_as, fields, filter_as};
use serde_json::json;
use validator::Validate;

use super::{AppState, CurrentUser};
use crate::error::AppError;

/// The user's diary, newest day first.
pub async fn get_diary(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<DiaryEntry>>, AppError> {
    let mut entries: Vec<DiaryEntry> = filter_as(
        state.store.as_ref(),
        EntityKind::DiaryEntry,
        &fields(&[("user_id", json!(user_id))]),
    )
    .await?;
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(Json(entries))
}

pub async fn post_diary(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(mut entry): Json<DiaryEntry>,
) -> Result<Json<DiaryEntry>, AppError> {
    entry
        .validate()
        .map_err(|errors| AppError::Validation(errors.to_string()))?;
    entry.id = String::new();
    entry.user_id = user_id;

    let created: DiaryEntry =
        create_as(state.store.as_ref(), EntityKind::DiaryEntry, &entry).await?;
    Ok(Json(created))
}
