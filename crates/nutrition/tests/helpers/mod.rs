use std::collections::BTreeMap;

use menowell_shared::nutrition::{CarbTier, MealStructure, NutritionProfile};
use menowell_shared::recipe::{Ingredient, LocalizedText, MacrosPerPortion, MealCategory, Recipe};

pub fn recipe(id: &str, category: MealCategory, calories: f64, carbs: f64) -> Recipe {
    Recipe {
        id: id.to_owned(),
        title: LocalizedText::new("de", format!("Rezept {id}")),
        category,
        macros_per_portion: MacrosPerPortion {
            calories,
            carbs,
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn hormone_friendly(mut recipe: Recipe) -> Recipe {
    recipe.hormone_friendly = true;
    recipe
}

pub fn with_ingredients(mut recipe: Recipe, names: &[&str]) -> Recipe {
    recipe.ingredients = names
        .iter()
        .map(|name| Ingredient {
            name: LocalizedText::new("de", *name),
            amount: 100.0,
            unit: "g".to_owned(),
            optional: false,
        })
        .collect();
    recipe
}

pub fn profile(daily_calories: f64, carb_target: CarbTier, meals_per_day: u32) -> NutritionProfile {
    NutritionProfile {
        daily_calories,
        carb_target,
        meal_structure: MealStructure {
            meals_per_day,
            snacks_per_day: 0,
        },
        ..Default::default()
    }
}

pub fn with_preferred(mut profile: NutritionProfile, category: &str, foods: &[&str]) -> NutritionProfile {
    profile.preferred_foods.insert(
        category.to_owned(),
        foods.iter().map(|food| (*food).to_owned()).collect(),
    );
    profile
}

pub fn with_excluded(mut profile: NutritionProfile, foods: &[&str]) -> NutritionProfile {
    profile.excluded_foods = foods.iter().map(|food| (*food).to_owned()).collect();
    profile
}

/// Scores as `partial` under `profile(2000, Moderate, 3)`: carbs in range
/// (+10) but calories far off (-8) leaves the total at 2.
pub fn partial_recipe(id: &str, category: MealCategory) -> Recipe {
    recipe(id, category, 1200.0, 50.0)
}

/// Scores as `perfect` under `profile(2000, Moderate, 3)`: hormone friendly
/// (+15), carbs under preferred (+10), calories on target (+10).
pub fn perfect_recipe(id: &str, category: MealCategory) -> Recipe {
    hormone_friendly(recipe(id, category, 660.0, 50.0))
}

/// Scores as `poor` under `profile(2000, Moderate, 3)`: carbs far above the
/// tier maximum (-15) and calories far off (-8).
pub fn poor_recipe(id: &str, category: MealCategory) -> Recipe {
    recipe(id, category, 1500.0, 220.0)
}

pub fn default_profile() -> NutritionProfile {
    let mut base = BTreeMap::new();
    base.insert("meal1".to_owned(), 500.0);
    let mut profile = profile(2000.0, CarbTier::Moderate, 3);
    profile.calorie_distribution = base;
    profile
}
