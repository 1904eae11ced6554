use axum::Json;
use axum::extract::{Query, State};
use menowell_mealplan::PlanService;
use menowell_recipe::RecipeService;
use menowell_shared::plan::Plan;
use menowell_shopping::{ShoppingList, aggregate};
use serde::Deserialize;

use super::questionnaire::load_questionnaire;
use super::{AppState, CurrentUser};
use crate::error::AppError;

pub async fn get_current_plan(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Option<Plan>>, AppError> {
    let service = PlanService::new(state.store.as_ref());
    Ok(Json(service.current_week(&user_id).await?))
}

/// Generate (or replace) this week's plan from the personalized pool.
pub async fn post_generate_plan(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Plan>, AppError> {
    let store = state.store.as_ref();
    let Some(questionnaire) = load_questionnaire(store, &user_id).await? else {
        return Err(AppError::User(
            "fill in the questionnaire before generating a plan".to_owned(),
        ));
    };
    let Some(profile) = questionnaire.nutrition_profile() else {
        return Err(AppError::User(
            "the questionnaire has no nutrition section yet".to_owned(),
        ));
    };

    let pool = RecipeService::new(store).combined_pool(&user_id).await?;
    let plan = PlanService::new(store)
        .generate(&user_id, profile, &pool)
        .await?;
    Ok(Json(plan))
}

#[derive(Debug, Deserialize)]
pub struct ShoppingListQuery {
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_lang() -> String {
    "de".to_owned()
}

pub async fn get_shopping_list(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<ShoppingListQuery>,
) -> Result<Json<ShoppingList>, AppError> {
    let service = PlanService::new(state.store.as_ref());
    let Some(plan) = service.current_week(&user_id).await? else {
        return Err(AppError::NotFound("weekly plan".to_owned()));
    };
    Ok(Json(aggregate(&plan, &query.lang)))
}
