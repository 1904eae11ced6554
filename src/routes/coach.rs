use axum::Json;
use axum::extract::State;
use menowell_generation::coach_reply;
use menowell_shared::diary::DiaryEntry;
use menowell_store::{EntityKind, fields, filter_as};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::questionnaire::load_questionnaire;
use super::{AppState, CurrentUser};
use crate::error::AppError;

/// Diary days fed into the coach context.
const COACH_DIARY_DAYS: usize = 7;

#[derive(Debug, Deserialize)]
pub struct CoachRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CoachResponse {
    pub reply: String,
}

pub async fn post_coach(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<CoachRequest>,
) -> Result<Json<CoachResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message must not be empty".to_owned()));
    }

    let store = state.store.as_ref();
    let questionnaire = load_questionnaire(store, &user_id).await?;

    let mut entries: Vec<DiaryEntry> = filter_as(
        store,
        EntityKind::DiaryEntry,
        &fields(&[("user_id", json!(user_id))]),
    )
    .await?;
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries.truncate(COACH_DIARY_DAYS);

    let reply = coach_reply(
        state.text.as_ref(),
        &request.message,
        questionnaire.as_ref(),
        &entries,
    )
    .await
    .map_err(AppError::from)?;

    Ok(Json(CoachResponse { reply }))
}
