use axum::Json;
use axum::extract::State;
use menowell_generation::RecipeGenerator;
use menowell_questionnaire::{CalorieInput, CalorieTargets, Questionnaire, daily_calorie_target};
use menowell_shared::nutrition::NutritionProfile;
use menowell_store::{DocumentStore, EntityKind, fields, filter_one_as};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{AppState, CurrentUser};
use crate::error::AppError;

pub(crate) async fn load_questionnaire(
    store: &dyn DocumentStore,
    user_id: &str,
) -> Result<Option<Questionnaire>, AppError> {
    Ok(filter_one_as(
        store,
        EntityKind::Questionnaire,
        &fields(&[("user_id", json!(user_id))]),
    )
    .await?)
}

pub async fn get_questionnaire(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Option<Questionnaire>>, AppError> {
    Ok(Json(load_questionnaire(state.store.as_ref(), &user_id).await?))
}

/// Daily calorie target for the nutrition step's calculator.
pub async fn post_calorie_target(
    CurrentUser(_user_id): CurrentUser,
    Json(input): Json<CalorieInput>,
) -> Result<Json<CalorieTargets>, AppError> {
    Ok(Json(daily_calorie_target(&input)?))
}

#[derive(Debug, Deserialize)]
pub struct QuestionnaireInput {
    pub nutrition: Option<NutritionProfile>,
    #[serde(default)]
    pub movement: Option<Value>,
    #[serde(default)]
    pub recovery_goals: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct QuestionnaireSaved {
    pub questionnaire: Questionnaire,
    /// Size of the freshly generated recipe pool, when the nutrition step
    /// was part of the submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_recipes: Option<usize>,
}

/// Save the questionnaire and rebuild the personal recipe pool.
///
/// The regeneration is awaited deliberately: the dashboard is only useful
/// once the pool exists, and a failed generation must reach the user as an
/// error, not happen silently in the background.
pub async fn put_questionnaire(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(input): Json<QuestionnaireInput>,
) -> Result<Json<QuestionnaireSaved>, AppError> {
    let store = state.store.as_ref();

    let existing = load_questionnaire(store, &user_id).await?;
    let patch = json!({
        "user_id": user_id,
        "nutrition": input.nutrition,
        "movement": input.movement,
        "recovery_goals": input.recovery_goals,
        "completed": true,
    });

    let saved: Questionnaire = match existing {
        Some(questionnaire) => serde_json::from_value(
            store
                .update(EntityKind::Questionnaire, &questionnaire.id, patch)
                .await?,
        )
        .map_err(|error| AppError::Internal(error.to_string()))?,
        None => serde_json::from_value(store.create(EntityKind::Questionnaire, patch).await?)
            .map_err(|error| AppError::Internal(error.to_string()))?,
    };

    let generated_recipes = match saved.nutrition_profile() {
        Some(profile) => {
            let generator =
                RecipeGenerator::new(state.text.as_ref(), state.image.as_ref(), store);
            Some(generator.regenerate_pool(&user_id, profile).await?)
        }
        None => None,
    };

    Ok(Json(QuestionnaireSaved {
        questionnaire: saved,
        generated_recipes,
    }))
}
