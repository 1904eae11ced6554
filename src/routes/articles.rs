use axum::Json;
use axum::extract::State;
use menowell_shared::article::Article;
use menowell_store::{EntityKind, list_as};

use super::AppState;
use crate::error::AppError;

/// Knowledge-base articles, newest first. Public content, but still behind
/// the gateway like every other route.
pub async fn get_articles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Article>>, AppError> {
    let articles: Vec<Article> = list_as(
        state.store.as_ref(),
        EntityKind::Article,
        Some("-created_date"),
    )
    .await?;
    Ok(Json(articles))
}
