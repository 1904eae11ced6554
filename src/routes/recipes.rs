use axum::Json;
use axum::extract::{Path, Query, State};
use menowell_generation::RecipeGenerator;
use menowell_nutrition::{ProfileMatcher, ScoredRecipe};
use menowell_recipe::{RecipeEdits, RecipeService};
use menowell_shared::recipe::{MealCategory, Recipe};
use serde::Deserialize;

use super::questionnaire::load_questionnaire;
use super::{AppState, CurrentUser};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub meal_type: Option<MealCategory>,
    pub limit: Option<usize>,
}

/// Ranked personalized recipe listing for the browser and dashboard.
pub async fn get_recipes(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ScoredRecipe>>, AppError> {
    let store = state.store.as_ref();
    let questionnaire = load_questionnaire(store, &user_id).await?;
    let profile = questionnaire
        .as_ref()
        .and_then(|questionnaire| questionnaire.nutrition_profile());

    let service = RecipeService::new(store);
    let ranked = service
        .personalized(&user_id, profile, query.meal_type, query.limit)
        .await?;
    Ok(Json(ranked))
}

pub async fn post_customize_recipe(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(recipe_id): Path<String>,
    Json(edits): Json<RecipeEdits>,
) -> Result<Json<Recipe>, AppError> {
    let service = RecipeService::new(state.store.as_ref());
    let copy = service.customize(&user_id, &recipe_id, edits).await?;
    Ok(Json(copy))
}

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    pub meal_type: MealCategory,
    #[serde(default = "default_suggestion_count")]
    pub count: usize,
}

fn default_suggestion_count() -> usize {
    5
}

/// Meal suggestions for one category, topped up with freshly generated
/// recipes when the pool alone cannot fill the requested count.
pub async fn get_recipe_suggestions(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<SuggestionQuery>,
) -> Result<Json<Vec<ScoredRecipe>>, AppError> {
    let store = state.store.as_ref();
    let questionnaire = load_questionnaire(store, &user_id).await?;
    let profile = questionnaire
        .as_ref()
        .and_then(|questionnaire| questionnaire.nutrition_profile());

    let service = RecipeService::new(store);
    let mut suggestions = service
        .personalized(&user_id, profile, Some(query.meal_type), None)
        .await?;

    // Without a profile there is nothing to generate against; serve what the
    // pool has.
    if suggestions.len() < query.count {
        if let Some(profile) = profile {
            let needed = query.count - suggestions.len();
            let generator =
                RecipeGenerator::new(state.text.as_ref(), state.image.as_ref(), store);
            let extras = generator.top_up(query.meal_type, needed, profile).await?;
            suggestions.extend(
                extras
                    .iter()
                    .map(|recipe| ProfileMatcher::score(recipe, profile)),
            );
        }
    }

    suggestions.truncate(query.count);
    Ok(Json(suggestions))
}
