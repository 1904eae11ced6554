pub mod config;
pub mod error;
pub mod observability;
pub mod routes;

pub use routes::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Build the app router.
///
/// Takes the fully wired state so tests can swap the hosted store and
/// generators for in-memory stand-ins.
pub fn create_app(state: AppState) -> Router {
    use routes::{
        get_articles, get_current_plan, get_diary, get_favorites, get_questionnaire,
        get_recipe_suggestions, get_recipes, get_shopping_list, health, post_calorie_target,
        post_coach, post_customize_recipe, post_diary, post_generate_plan, post_toggle_favorite,
        put_questionnaire, ready,
    };

    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route(
            "/questionnaire",
            get(get_questionnaire).put(put_questionnaire),
        )
        .route("/questionnaire/calorie-target", post(post_calorie_target))
        .route("/recipes", get(get_recipes))
        .route("/recipes/suggestions", get(get_recipe_suggestions))
        .route("/recipes/{id}/customize", post(post_customize_recipe))
        .route("/favorites", get(get_favorites))
        .route("/favorites/{recipe_id}", post(post_toggle_favorite))
        .route("/plans/current", get(get_current_plan))
        .route("/plans/generate", post(post_generate_plan))
        .route("/plans/current/shopping-list", get(get_shopping_list))
        .route("/diary", get(get_diary).post(post_diary))
        .route("/articles", get(get_articles))
        .route("/coach", post(post_coach))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
