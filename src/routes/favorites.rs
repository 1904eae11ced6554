use axum::Json;
use axum::extract::{Path, State};
use menowell_recipe::{FavoriteToggle, RecipeService, ValidatedFavorite};

use super::questionnaire::load_questionnaire;
use super::{AppState, CurrentUser};
use crate::error::AppError;

/// Favorites with their profile-match flags for the mismatch warnings.
pub async fn get_favorites(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<ValidatedFavorite>>, AppError> {
    let store = state.store.as_ref();
    let questionnaire = load_questionnaire(store, &user_id).await?;
    let profile = questionnaire
        .as_ref()
        .and_then(|questionnaire| questionnaire.nutrition_profile());

    let service = RecipeService::new(store);
    Ok(Json(service.validated_favorites(&user_id, profile).await?))
}

pub async fn post_toggle_favorite(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(recipe_id): Path<String>,
) -> Result<Json<FavoriteToggle>, AppError> {
    let service = RecipeService::new(state.store.as_ref());
    let pool = service.combined_pool(&user_id).await?;
    let Some(recipe) = pool.into_iter().find(|recipe| recipe.id == recipe_id) else {
        return Err(AppError::NotFound(format!("recipe {recipe_id}")));
    };
    Ok(Json(service.toggle_favorite(&user_id, &recipe).await?))
}
