use menowell_shared::nutrition::NutritionProfile;
use menowell_shared::recipe::{MealCategory, Recipe};

use crate::matcher::{MatchLevel, ProfileMatcher, ScoredRecipe};

/// With this many perfect/good matches the strong pool alone is served.
const STRONG_POOL_MIN: usize = 8;
/// Cap on a strong-only result, for variety without flooding the UI.
const STRONG_POOL_CAP: usize = 20;
/// Partial matches fill up towards this size...
const PARTIAL_FILL_TARGET: usize = 15;
/// ...but at least this many partials are admitted.
const PARTIAL_FILL_MIN: usize = 5;
/// Poor matches backfill until the result reaches this size.
const POOR_FILL_TARGET: usize = 10;
/// Below this result size the tier boundaries are abandoned entirely.
const RESULT_FLOOR: usize = 5;
/// Size of the floor fallback, taken straight off the sorted list.
const FLOOR_FALLBACK_CAP: usize = 10;

/// Rank a recipe pool for a profile.
///
/// Without a profile this degrades to the meal-type filter alone: recipes
/// pass through unscored, in their original relative order. With a profile,
/// every remaining recipe is scored, sorted by descending score (ties keep
/// their input order), and run through the tiered fallback selection that
/// guarantees a usable result set even for restrictive profiles.
pub fn rank(
    recipes: &[Recipe],
    profile: Option<&NutritionProfile>,
    meal_type: Option<MealCategory>,
) -> Vec<ScoredRecipe> {
    let base: Vec<&Recipe> = recipes
        .iter()
        .filter(|recipe| meal_type.is_none_or(|meal| recipe.category == meal))
        .collect();

    let Some(profile) = profile else {
        return base.into_iter().map(ProfileMatcher::unscored).collect();
    };

    let mut scored: Vec<ScoredRecipe> = base
        .into_iter()
        .map(|recipe| ProfileMatcher::score(recipe, profile))
        .collect();
    // Vec::sort_by is stable: equal scores keep their pool order, which keeps
    // repeated calls reproducible.
    scored.sort_by(|a, b| b.personalized_score.cmp(&a.personalized_score));

    select_with_fallback(scored)
}

/// Tiered fallback over a score-sorted list. Only membership changes here;
/// the relative order established by the sort is preserved throughout.
fn select_with_fallback(sorted: Vec<ScoredRecipe>) -> Vec<ScoredRecipe> {
    let strong: Vec<ScoredRecipe> = sorted
        .iter()
        .filter(|recipe| recipe.match_level.is_some_and(|level| level.is_strong()))
        .cloned()
        .collect();

    let mut selected = if strong.len() >= STRONG_POOL_MIN {
        strong.into_iter().take(STRONG_POOL_CAP).collect()
    } else {
        let partial_take = PARTIAL_FILL_TARGET
            .saturating_sub(strong.len())
            .max(PARTIAL_FILL_MIN);
        let mut picked = strong;
        picked.extend(
            sorted
                .iter()
                .filter(|recipe| recipe.match_level == Some(MatchLevel::Partial))
                .take(partial_take)
                .cloned(),
        );
        if picked.len() < POOR_FILL_TARGET {
            let missing = POOR_FILL_TARGET - picked.len();
            picked.extend(
                sorted
                    .iter()
                    .filter(|recipe| recipe.match_level == Some(MatchLevel::Poor))
                    .take(missing)
                    .cloned(),
            );
        }
        picked
    };

    // Safety net: never leave the UI with fewer than five choices when the
    // pool itself had at least five, whatever the tiers looked like.
    if selected.len() < RESULT_FLOOR && sorted.len() >= RESULT_FLOOR {
        selected = sorted.into_iter().take(FLOOR_FALLBACK_CAP).collect();
    }

    selected
}
