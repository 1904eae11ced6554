mod articles;
mod coach;
mod diary;
mod favorites;
mod health;
mod plans;
mod questionnaire;
mod recipes;

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use menowell_generation::{ImageGenerator, TextGenerator};
use menowell_store::DocumentStore;

pub use articles::get_articles;
pub use coach::post_coach;
pub use diary::{get_diary, post_diary};
pub use favorites::{get_favorites, post_toggle_favorite};
pub use health::{health, ready};
pub use plans::{get_current_plan, get_shopping_list, post_generate_plan};
pub use questionnaire::{get_questionnaire, post_calorie_target, put_questionnaire};
pub use recipes::{get_recipe_suggestions, get_recipes, post_customize_recipe};

use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub text: Arc<dyn TextGenerator>,
    pub image: Arc<dyn ImageGenerator>,
}

/// The authenticated user, as resolved by the hosted platform's gateway.
/// Authentication itself is the platform's concern; the API only consumes
/// the forwarded identity.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub String);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get("x-user-id")
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(|value| CurrentUser(value.to_owned()))
            .ok_or(AppError::Unauthorized)
    }
}
