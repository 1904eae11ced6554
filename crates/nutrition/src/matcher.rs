use menowell_shared::nutrition::NutritionProfile;
use menowell_shared::recipe::Recipe;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Coarse classification of how well a recipe fits a profile.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MatchLevel {
    Perfect,
    Good,
    Partial,
    Poor,
}

impl MatchLevel {
    /// Level for a cumulative score. This is the only classification the
    /// matcher ever exposes.
    pub fn from_score(score: i32) -> Self {
        if score >= 25 {
            MatchLevel::Perfect
        } else if score >= 10 {
            MatchLevel::Good
        } else if score >= -5 {
            MatchLevel::Partial
        } else {
            MatchLevel::Poor
        }
    }

    pub fn is_strong(&self) -> bool {
        matches!(self, MatchLevel::Perfect | MatchLevel::Good)
    }
}

/// A recipe annotated with personalization results. The underlying recipe is
/// an owned copy; the source pool is left untouched.
#[derive(Clone, Debug, Serialize)]
pub struct ScoredRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub personalized_score: i32,
    /// `None` when no profile was available to score against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_level: Option<MatchLevel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub profile_issues: Vec<String>,
    pub preferred_ingredient_matches: u32,
}

/// Stateless scoring service.
///
/// Weights and thresholds are fixed business rules; changing any of them
/// changes what every user sees on the dashboard and in the recipe browser.
pub struct ProfileMatcher;

impl ProfileMatcher {
    pub fn score(recipe: &Recipe, profile: &NutritionProfile) -> ScoredRecipe {
        Self::score_with_meals(recipe, profile, None)
    }

    /// Score with an explicit meals-per-day override, e.g. when previewing a
    /// recipe for a meal structure the user has not saved yet.
    pub fn score_with_meals(
        recipe: &Recipe,
        profile: &NutritionProfile,
        meals_per_day: Option<u32>,
    ) -> ScoredRecipe {
        let mut score: i32 = 0;
        let mut issues: Vec<String> = Vec::new();

        if recipe.hormone_friendly {
            score += 15;
        }

        let targets = profile.carb_target.targets();
        let carbs = recipe.macros_per_portion.carbs;
        if carbs <= targets.preferred {
            score += 10;
        } else if carbs <= targets.max {
            score += 5;
        } else if carbs <= targets.max * 1.5 {
            score -= 5;
            issues.push(format!(
                "carbs somewhat above target ({} g vs {} g target)",
                carbs.round(),
                targets.max
            ));
        } else {
            score -= 15;
            issues.push(format!(
                "carbs well above target ({} g vs {} g target)",
                carbs.round(),
                targets.max
            ));
        }

        let meals = meals_per_day
            .unwrap_or(profile.meal_structure.meals_per_day)
            .max(1);
        let calories_per_meal = profile.daily_calories / f64::from(meals);
        let calories = recipe.macros_per_portion.calories;
        let diff = (calories - calories_per_meal).abs();
        if diff <= 100.0 {
            score += 10;
        } else if diff <= 200.0 {
            score += 5;
        } else if diff <= 350.0 {
            // Tolerated deviation: penalized, but not worth flagging.
            score -= 2;
        } else {
            score -= 8;
            let direction = if calories > calories_per_meal {
                "higher"
            } else {
                "lower"
            };
            issues.push(format!(
                "calories {} than optimal ({} kcal deviation)",
                direction,
                diff.round()
            ));
        }

        let ingredient_names: Vec<String> = recipe
            .ingredients
            .iter()
            .map(|ingredient| ingredient.name.primary().to_lowercase())
            .collect();

        let mut matches: u32 = 0;
        for foods in profile.preferred_foods.values() {
            for preferred in foods {
                let needle = preferred.to_lowercase();
                if ingredient_names.iter().any(|name| name.contains(&needle)) {
                    score += 8;
                    matches += 1;
                }
            }
        }
        // Count bonus on top of the per-match points; both layers apply.
        if matches >= 3 {
            score += 10;
        } else if matches >= 1 {
            score += 5;
        }

        ScoredRecipe {
            recipe: recipe.clone(),
            personalized_score: score,
            match_level: Some(MatchLevel::from_score(score)),
            profile_issues: issues,
            preferred_ingredient_matches: matches,
        }
    }

    /// Pass-through annotation for callers that have no profile yet.
    pub fn unscored(recipe: &Recipe) -> ScoredRecipe {
        ScoredRecipe {
            recipe: recipe.clone(),
            personalized_score: 0,
            match_level: None,
            profile_issues: Vec::new(),
            preferred_ingredient_matches: 0,
        }
    }
}
