use menowell_nutrition::{ScoredRecipe, rank};
use menowell_shared::nutrition::NutritionProfile;
use menowell_shared::plan::{Plan, PlanMeal, WEEKLY_PLAN_TYPE, Weekday};
use menowell_shared::recipe::{MealCategory, Recipe};
use menowell_store::{EntityKind, create_as};
use rand::seq::IndexedRandom;
use strum::VariantArray;
use ulid::Ulid;

use crate::week::current_week_start;
use crate::PlanService;

/// A plan is only generated once the personal AI recipe library is big
/// enough to offer real variety.
pub const MIN_AI_RECIPES: usize = 20;

/// Default slot targets when the calorie distribution has no entry.
const DEFAULT_MEAL_CALORIES: f64 = 500.0;
const DEFAULT_SNACK_CALORIES: f64 = 200.0;

/// Stand-in base when a recipe has no calorie data to scale from.
const FALLBACK_BASE_CALORIES: f64 = 400.0;

/// A scored recipe with its macros scaled towards a slot's calorie target.
#[derive(Clone, Debug)]
pub struct ScaledRecipe {
    pub scored: ScoredRecipe,
    pub calories: f64,
    pub portions: f64,
}

/// Scale a recipe's portion count so its calories approximate the target.
/// Portions are rounded to a tenth, calories to whole kcal.
pub fn scale_to_target(scored: ScoredRecipe, target_calories: f64) -> ScaledRecipe {
    let base = match scored.recipe.macros_per_portion.calories {
        calories if calories > 0.0 => calories,
        _ => FALLBACK_BASE_CALORIES,
    };
    let factor = target_calories / base;
    ScaledRecipe {
        calories: (scored.recipe.macros_per_portion.calories * factor).round(),
        portions: (factor * 10.0).round() / 10.0,
        scored,
    }
}

fn candidates(
    pool: &[Recipe],
    profile: &NutritionProfile,
    meal_type: MealCategory,
    target_calories: f64,
) -> Vec<ScaledRecipe> {
    rank(pool, Some(profile), Some(meal_type))
        .into_iter()
        .map(|scored| scale_to_target(scored, target_calories))
        .collect()
}

fn meal_type_for_slot(slot: u32) -> MealCategory {
    match slot {
        1 => MealCategory::Breakfast,
        2 => MealCategory::Lunch,
        _ => MealCategory::Dinner,
    }
}

/// Build one week of meals, drawing a random candidate for each slot.
/// Kept synchronous so the non-`Send` `ThreadRng` never crosses an await.
fn build_meals(pool: &[Recipe], profile: &NutritionProfile) -> Vec<PlanMeal> {
    let mut rng = rand::rng();
    let mut meals: Vec<PlanMeal> = Vec::new();

    for day in Weekday::VARIANTS {
        for slot in 1..=profile.meal_structure.meals_per_day {
            let meal_type = meal_type_for_slot(slot);
            let target = profile
                .calorie_distribution
                .get(&format!("meal{slot}"))
                .copied()
                .unwrap_or(DEFAULT_MEAL_CALORIES);
            let options = candidates(pool, profile, meal_type, target);
            if let Some(pick) = options.choose(&mut rng) {
                meals.push(plan_meal(*day, meal_type, pick));
            }
        }
        for slot in 1..=profile.meal_structure.snacks_per_day {
            let target = profile
                .calorie_distribution
                .get(&format!("snack{slot}"))
                .copied()
                .unwrap_or(DEFAULT_SNACK_CALORIES);
            let options = candidates(pool, profile, MealCategory::Snack, target);
            if let Some(pick) = options.choose(&mut rng) {
                meals.push(plan_meal(*day, MealCategory::Snack, pick));
            }
        }
    }

    meals
}

fn plan_meal(day: Weekday, meal_type: MealCategory, pick: &ScaledRecipe) -> PlanMeal {
    PlanMeal {
        id: Ulid::new().to_string(),
        day_of_week: day,
        meal_type,
        recipe_id: pick.scored.recipe.id.clone(),
        name: pick.scored.recipe.title.primary().to_owned(),
        calories: pick.calories,
        portions: pick.portions,
        recipe: pick.scored.recipe.clone(),
    }
}

impl<'a> PlanService<'a> {
    /// Generate (or replace) the user's plan for the current week.
    ///
    /// Every weekday gets `meals_per_day` main slots and `snacks_per_day`
    /// snack slots; each slot draws a random recipe from the ranked,
    /// calorie-scaled candidates of its category. A slot whose category has
    /// no candidates at all is simply left out.
    pub async fn generate(
        &self,
        user_id: &str,
        profile: &NutritionProfile,
        pool: &[Recipe],
    ) -> menowell_shared::Result<Plan> {
        let ai_count = pool.iter().filter(|recipe| recipe.is_ai_generated).count();
        if ai_count < MIN_AI_RECIPES {
            menowell_shared::user!(
                "personal recipe library holds {} AI recipes, {} are needed before planning",
                ai_count,
                MIN_AI_RECIPES
            );
        }

        let meals = build_meals(pool, profile);

        let week = current_week_start();
        if let Some(existing) = self.for_week(user_id, &week).await? {
            self.store()
                .delete(EntityKind::Plan, &existing.id)
                .await?;
        }

        let plan = Plan {
            id: String::new(),
            user_id: user_id.to_owned(),
            plan_type: WEEKLY_PLAN_TYPE.to_owned(),
            date: week,
            meals,
        };
        let created: Plan = create_as(self.store(), EntityKind::Plan, &plan).await?;
        tracing::info!(
            user_id,
            week = %created.date,
            meals = created.meals.len(),
            "weekly plan generated"
        );
        Ok(created)
    }
}
