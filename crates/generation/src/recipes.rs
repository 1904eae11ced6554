use std::collections::BTreeMap;

use futures::future::join_all;
use menowell_shared::nutrition::NutritionProfile;
use menowell_shared::recipe::{
    Ingredient, LocalizedText, MacrosPerPortion, MealCategory, Recipe,
};
use menowell_store::{DocumentStore, EntityKind, fields, filter_as};
use serde::Deserialize;
use serde_json::{Value, json};
use ulid::Ulid;

use crate::GenerationError;
use crate::providers::{ImageGenerator, TextGenerator};

/// Recipes requested per meal category when rebuilding a user's pool.
pub const RECIPE_DISTRIBUTION: [(MealCategory, usize); 5] = [
    (MealCategory::Breakfast, 22),
    (MealCategory::Lunch, 25),
    (MealCategory::Dinner, 25),
    (MealCategory::Snack, 12),
    (MealCategory::Dessert, 12),
];

/// Recipes per LLM call; larger payloads degrade response quality and run
/// into provider limits.
pub const LLM_BATCH_SIZE: usize = 4;

/// Documents per bulk-save request, a payload limit of the hosted store.
pub const SAVE_CHUNK_SIZE: usize = 10;

/// A regeneration that produces this many recipes or fewer is discarded as a
/// failed batch.
pub const MIN_GENERATED_RECIPES: usize = 20;

#[derive(Debug, Deserialize)]
struct RecipeBatch {
    #[serde(default)]
    recipes: Vec<RecipeDraft>,
}

/// The shape the LLM is asked to produce. Lenient on purpose: anything the
/// model leaves out falls back to a neutral default instead of failing the
/// whole batch.
#[derive(Debug, Deserialize)]
struct RecipeDraft {
    #[serde(default)]
    title: LocalizedText,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    prep_time: u32,
    #[serde(default)]
    cook_time: u32,
    #[serde(default)]
    macros_per_portion: MacrosPerPortion,
    #[serde(default)]
    ingredients: Vec<Ingredient>,
    #[serde(default)]
    instructions: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    hormone_benefits: LocalizedText,
    #[serde(default)]
    hormone_friendly: bool,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl RecipeDraft {
    fn into_recipe(self, fallback_category: MealCategory) -> Recipe {
        let category = self
            .category
            .as_deref()
            .map(|raw| MealCategory::parse_or(raw, fallback_category))
            .unwrap_or(fallback_category);
        Recipe {
            id: format!("generated_{}", Ulid::new()),
            title: self.title,
            category,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            default_portions: 1.0,
            macros_per_portion: self.macros_per_portion,
            ingredients: self.ingredients,
            instructions: self.instructions,
            hormone_benefits: self.hormone_benefits,
            hormone_friendly: self.hormone_friendly,
            difficulty: self.difficulty,
            tags: self.tags,
            image_url: None,
            is_custom: false,
            is_ai_generated: true,
            original_recipe_id: None,
            user_id: None,
        }
    }
}

/// Rebuilds and tops up personal recipe pools through the generative
/// providers.
pub struct RecipeGenerator<'a> {
    text: &'a dyn TextGenerator,
    image: &'a dyn ImageGenerator,
    store: &'a dyn DocumentStore,
}

impl<'a> RecipeGenerator<'a> {
    pub fn new(
        text: &'a dyn TextGenerator,
        image: &'a dyn ImageGenerator,
        store: &'a dyn DocumentStore,
    ) -> Self {
        Self { text, image, store }
    }

    /// Replace the user's AI-generated library with a freshly generated one
    /// tuned to the profile. Returns the number of recipes saved.
    ///
    /// Fails hard with [`GenerationError::TooFewRecipes`] when the providers
    /// deliver 20 recipes or fewer; the caller surfaces that to the user
    /// instead of retrying.
    pub async fn regenerate_pool(
        &self,
        user_id: &str,
        profile: &NutritionProfile,
    ) -> Result<usize, GenerationError> {
        let old: Vec<Recipe> = filter_as(
            self.store,
            EntityKind::UserRecipe,
            &fields(&[
                ("user_id", json!(user_id)),
                ("is_ai_generated", json!(true)),
            ]),
        )
        .await?;
        let deletions = join_all(
            old.iter()
                .map(|recipe| self.store.delete(EntityKind::UserRecipe, &recipe.id)),
        )
        .await;
        for result in deletions {
            result?;
        }
        tracing::info!(user_id, deleted = old.len(), "stale AI recipes removed");

        let preferred_summary = preferred_ingredient_summary(profile);
        let mut generated: Vec<Recipe> = Vec::new();

        for (meal_type, total) in RECIPE_DISTRIBUTION {
            let mut remaining = total;
            while remaining > 0 {
                let count = remaining.min(LLM_BATCH_SIZE);
                let prompt = batch_prompt(meal_type, count, &preferred_summary, &generated);
                let response = self.text.invoke(&prompt, Some(recipe_batch_schema())).await?;
                let batch: RecipeBatch = serde_json::from_value(response)
                    .map_err(|error| GenerationError::InvalidResponse(error.to_string()))?;
                generated.extend(
                    batch
                        .recipes
                        .into_iter()
                        .map(|draft| draft.into_recipe(meal_type)),
                );
                remaining -= count;
            }
        }

        if generated.len() <= MIN_GENERATED_RECIPES {
            return Err(GenerationError::TooFewRecipes {
                produced: generated.len(),
                minimum: MIN_GENERATED_RECIPES,
            });
        }

        let generated = self.attach_images(generated).await;

        let documents: Vec<Value> = generated
            .iter()
            .map(|recipe| {
                let mut recipe = recipe.clone();
                recipe.id = String::new(); // assigned by the store
                recipe.user_id = Some(user_id.to_owned());
                serde_json::to_value(recipe)
            })
            .collect::<Result<_, _>>()
            .map_err(|error| GenerationError::InvalidResponse(error.to_string()))?;

        let mut saved = 0;
        for chunk in documents.chunks(SAVE_CHUNK_SIZE) {
            let created = self
                .store
                .bulk_create(EntityKind::UserRecipe, chunk.to_vec())
                .await?;
            saved += created.len();
        }
        tracing::info!(user_id, saved, "recipe pool regenerated");
        Ok(saved)
    }

    /// Generate `count` extra recipes of one category on the fly, for pools
    /// whose ranked listing came up short. Results are ephemeral; callers
    /// decide whether to persist them.
    pub async fn top_up(
        &self,
        meal_type: MealCategory,
        count: usize,
        profile: &NutritionProfile,
    ) -> Result<Vec<Recipe>, GenerationError> {
        let prompt = top_up_prompt(meal_type, count, profile);
        let response = self.text.invoke(&prompt, Some(recipe_batch_schema())).await?;
        let batch: RecipeBatch = serde_json::from_value(response)
            .map_err(|error| GenerationError::InvalidResponse(error.to_string()))?;
        let drafts: Vec<Recipe> = batch
            .recipes
            .into_iter()
            .map(|draft| draft.into_recipe(meal_type))
            .collect();
        Ok(self.attach_images(drafts).await)
    }

    /// Fetch one image per recipe. An image failure only costs the image,
    /// never the recipe.
    async fn attach_images(&self, recipes: Vec<Recipe>) -> Vec<Recipe> {
        let prompts: Vec<String> = recipes.iter().map(image_prompt).collect();
        let images = join_all(
            prompts
                .iter()
                .map(|prompt| self.image.generate_image(prompt)),
        )
        .await;

        recipes
            .into_iter()
            .zip(images)
            .map(|(mut recipe, image)| {
                match image {
                    Ok(image) => recipe.image_url = Some(image.url),
                    Err(error) => {
                        tracing::warn!(
                            recipe = recipe.title.primary(),
                            %error,
                            "image generation failed, continuing without"
                        );
                        recipe.image_url = None;
                    }
                }
                recipe
            })
            .collect()
    }
}

fn preferred_ingredient_summary(profile: &NutritionProfile) -> String {
    let foods: Vec<&str> = profile
        .preferred_foods
        .values()
        .flatten()
        .map(String::as_str)
        .filter(|food| !food.is_empty())
        .take(5)
        .collect();
    if foods.is_empty() {
        "healthy, hormone-friendly ingredients".to_owned()
    } else {
        format!("ingredients such as {}", foods.join(", "))
    }
}

fn batch_prompt(
    meal_type: MealCategory,
    count: usize,
    preferred_summary: &str,
    already_generated: &[Recipe],
) -> String {
    let existing_titles = already_generated
        .iter()
        .map(|recipe| recipe.title.primary())
        .filter(|title| !title.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    let existing_titles = if existing_titles.is_empty() {
        "none".to_owned()
    } else {
        existing_titles
    };

    format!(
        "Create {count} unique, creative, hormone-friendly {meal_type} recipes for women 40+. \
         IMPORTANT: no duplicates, and do NOT repeat: {existing_titles}. \
         Inspired by: {preferred_summary}. \
         German recipe names and instructions, each for 1 person."
    )
}

fn top_up_prompt(meal_type: MealCategory, count: usize, profile: &NutritionProfile) -> String {
    let max_carbs = profile.carb_target.targets().max;
    let calories_per_meal = profile.calories_per_meal().round();
    let preferred_summary = preferred_ingredient_summary(profile);

    format!(
        "Generate {count} healthy, hormone-friendly {meal_type} recipes for women 40+.\n\
         Requirements:\n\
         - Target calories per serving: {calories_per_meal}\n\
         - Max carbs per serving: {max_carbs}g\n\
         - Preferred: {preferred_summary}\n\
         - German recipe names and instructions\n\
         - Include prep time, macros, and 3-5 ingredients each\n\
         \n\
         Make recipes simple, nutritious, and appealing."
    )
}

fn image_prompt(recipe: &Recipe) -> String {
    let title = match recipe.title.primary() {
        "" => "Untitled Recipe",
        title => title,
    };
    let main_ingredients = recipe
        .ingredients
        .iter()
        .take(3)
        .map(|ingredient| ingredient.name.primary())
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Photorealistic food photography of \"{title}\", a healthy {}. \
         Key ingredients: {main_ingredients}. Served in a modern bowl, viewed \
         from a 45-degree angle, with soft natural light creating a warm and \
         inviting atmosphere. High-quality, professional food styling.",
        recipe.category
    )
}

fn recipe_batch_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "recipes": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": {
                            "type": "object",
                            "properties": { "de": { "type": "string" } }
                        },
                        "category": { "type": "string" },
                        "prep_time": { "type": "number" },
                        "cook_time": { "type": "number" },
                        "macros_per_portion": {
                            "type": "object",
                            "properties": {
                                "calories": { "type": "number" },
                                "protein": { "type": "number" },
                                "fat": { "type": "number" },
                                "carbs": { "type": "number" },
                                "fiber": { "type": "number" }
                            },
                            "required": ["calories", "protein", "fat", "carbs"]
                        },
                        "ingredients": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "name": {
                                        "type": "object",
                                        "properties": { "de": { "type": "string" } }
                                    },
                                    "amount": { "type": "number" },
                                    "unit": { "type": "string" }
                                },
                                "required": ["name", "amount", "unit"]
                            }
                        },
                        "instructions": {
                            "type": "object",
                            "properties": {
                                "de": { "type": "array", "items": { "type": "string" } }
                            },
                            "required": ["de"]
                        },
                        "hormone_benefits": {
                            "type": "object",
                            "properties": { "de": { "type": "string" } }
                        },
                        "hormone_friendly": { "type": "boolean" },
                        "difficulty": { "type": "string" },
                        "tags": { "type": "array", "items": { "type": "string" } }
                    },
                    "required": ["title", "category", "macros_per_portion", "ingredients", "instructions"]
                }
            }
        },
        "required": ["recipes"]
    })
}
