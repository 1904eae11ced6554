use menowell_nutrition::{ScoredRecipe, rank};
use menowell_shared::nutrition::NutritionProfile;
use menowell_shared::recipe::{Ingredient, LocalizedText, MacrosPerPortion, MealCategory, Recipe};
use menowell_store::{EntityKind, create_as, fields, filter_as, list_as};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::RecipeService;

/// Edits a user applies when turning a catalog recipe into their own copy.
/// Absent fields keep the source recipe's values.
#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct RecipeEdits {
    pub title: Option<LocalizedText>,
    #[validate(length(min = 1, max = 50))]
    pub ingredients: Option<Vec<Ingredient>>,
    pub macros_per_portion: Option<MacrosPerPortion>,
    pub instructions: Option<std::collections::BTreeMap<String, Vec<String>>>,
    pub hormone_friendly: Option<bool>,
}

impl<'a> RecipeService<'a> {
    /// The user's whole recipe world: the global catalog (newest first)
    /// followed by their own library.
    pub async fn combined_pool(&self, user_id: &str) -> menowell_shared::Result<Vec<Recipe>> {
        let catalog: Vec<Recipe> =
            list_as(self.store(), EntityKind::Recipe, Some("-created_date")).await?;
        let own: Vec<Recipe> = filter_as(
            self.store(),
            EntityKind::UserRecipe,
            &fields(&[("user_id", json!(user_id))]),
        )
        .await?;

        tracing::debug!(
            user_id,
            catalog = catalog.len(),
            own = own.len(),
            "recipe pool loaded"
        );

        Ok(catalog.into_iter().chain(own).collect())
    }

    /// Ranked personalized listing over the combined pool.
    pub async fn personalized(
        &self,
        user_id: &str,
        profile: Option<&NutritionProfile>,
        meal_type: Option<MealCategory>,
        limit: Option<usize>,
    ) -> menowell_shared::Result<Vec<ScoredRecipe>> {
        let pool = self.combined_pool(user_id).await?;
        let mut ranked = rank(&pool, profile, meal_type);
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        Ok(ranked)
    }

    /// Derive a custom copy of a recipe into the user's library. The source
    /// recipe is left untouched; the copy gets its own identity and points
    /// back via `original_recipe_id`.
    pub async fn customize(
        &self,
        user_id: &str,
        recipe_id: &str,
        edits: RecipeEdits,
    ) -> menowell_shared::Result<Recipe> {
        edits.validate()?;

        let pool = self.combined_pool(user_id).await?;
        let Some(source) = pool.into_iter().find(|recipe| recipe.id == recipe_id) else {
            return Err(menowell_shared::Error::NotFound(format!(
                "recipe {recipe_id}"
            )));
        };

        let mut copy = source.clone();
        copy.id = String::new(); // assigned by the store
        copy.is_custom = true;
        copy.is_ai_generated = false;
        copy.original_recipe_id = Some(source.id);
        copy.user_id = Some(user_id.to_owned());

        if let Some(title) = edits.title {
            copy.title = title;
        }
        if let Some(ingredients) = edits.ingredients {
            copy.ingredients = ingredients;
        }
        if let Some(macros) = edits.macros_per_portion {
            copy.macros_per_portion = macros;
        }
        if let Some(instructions) = edits.instructions {
            copy.instructions = instructions;
        }
        if let Some(hormone_friendly) = edits.hormone_friendly {
            copy.hormone_friendly = hormone_friendly;
        }

        let created: Recipe = create_as(self.store(), EntityKind::UserRecipe, &copy).await?;
        tracing::info!(user_id, recipe_id, copy_id = %created.id, "custom recipe created");
        Ok(created)
    }
}
