use menowell_shared::nutrition::NutritionProfile;
use menowell_shared::recipe::Recipe;
use serde::Serialize;

/// Calorie slack for validating already-saved recipes. Deliberately more
/// lenient than the matcher's scoring buckets: a favorite should only be
/// flagged when it is clearly off, not when it merely scores low.
const CALORIE_TOLERANCE: f64 = 200.0;

#[derive(Clone, Debug, Serialize)]
pub struct ProfileValidation {
    pub is_valid: bool,
    pub reasons: Vec<String>,
}

impl ProfileValidation {
    fn valid() -> Self {
        Self {
            is_valid: true,
            reasons: Vec::new(),
        }
    }
}

/// Check a single recipe against an updated profile.
///
/// Used to flag favorites and planned meals that no longer fit. Emits one
/// reason per violated rule type; multiple matched exclusions are enumerated
/// together in a single reason.
pub fn validate(recipe: &Recipe, profile: Option<&NutritionProfile>) -> ProfileValidation {
    let Some(profile) = profile else {
        return ProfileValidation::valid();
    };

    let mut reasons: Vec<String> = Vec::new();

    let targets = profile.carb_target.targets();
    let carbs = recipe.macros_per_portion.carbs;
    if carbs > targets.max {
        reasons.push(format!(
            "too many carbs for your {} target ({} g > {} g)",
            profile.carb_target.label(),
            carbs.round(),
            targets.max
        ));
    }

    let calories_per_meal = profile.calories_per_meal();
    let calories = recipe.macros_per_portion.calories;
    if (calories - calories_per_meal).abs() > CALORIE_TOLERANCE {
        let direction = if calories > calories_per_meal {
            "high"
        } else {
            "low"
        };
        reasons.push(format!(
            "calories too {} for your meal structure ({} kcal vs ~{} kcal target)",
            direction,
            calories.round(),
            calories_per_meal.round()
        ));
    }

    if !profile.excluded_foods.is_empty() {
        let ingredient_names: Vec<String> = recipe
            .ingredients
            .iter()
            .map(|ingredient| ingredient.name.primary().to_lowercase())
            .collect();
        let matched: Vec<&str> = profile
            .excluded_foods
            .iter()
            .filter(|excluded| {
                let needle = excluded.to_lowercase();
                ingredient_names.iter().any(|name| name.contains(&needle))
            })
            .map(String::as_str)
            .collect();
        if !matched.is_empty() {
            reasons.push(format!(
                "contains excluded ingredients: {}",
                matched.join(", ")
            ));
        }
    }

    ProfileValidation {
        is_valid: reasons.is_empty(),
        reasons,
    }
}
