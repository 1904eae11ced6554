mod helpers;

use helpers::{profile, recipe, with_excluded, with_ingredients};
use menowell_nutrition::validate;
use menowell_shared::nutrition::CarbTier;
use menowell_shared::recipe::MealCategory;

#[test]
fn carbs_over_tier_max_invalidate_with_both_numbers() {
    let profile = profile(1800.0, CarbTier::LowCarb, 3);
    let dish = recipe("r", MealCategory::Dinner, 600.0, 80.0);

    let result = validate(&dish, Some(&profile));

    assert!(!result.is_valid);
    assert_eq!(result.reasons.len(), 1);
    assert!(result.reasons[0].contains("80"));
    assert!(result.reasons[0].contains("75"));
    assert!(result.reasons[0].contains("low-carb"));
}

#[test]
fn calorie_tolerance_is_two_hundred_either_way() {
    // 1800 / 3 meals -> 600 kcal per meal.
    let profile = profile(1800.0, CarbTier::Moderate, 3);

    let within = recipe("a", MealCategory::Lunch, 790.0, 50.0);
    assert!(validate(&within, Some(&profile)).is_valid);

    let above = recipe("b", MealCategory::Lunch, 810.0, 50.0);
    let result = validate(&above, Some(&profile));
    assert!(!result.is_valid);
    assert!(result.reasons[0].contains("too high"));

    let below = recipe("c", MealCategory::Lunch, 390.0, 50.0);
    let result = validate(&below, Some(&profile));
    assert!(!result.is_valid);
    assert!(result.reasons[0].contains("too low"));
}

#[test]
fn matched_exclusions_are_enumerated_in_one_reason() {
    let profile = with_excluded(
        profile(1800.0, CarbTier::Moderate, 3),
        &["zucker", "weizen", "soja"],
    );
    let dish = with_ingredients(
        recipe("r", MealCategory::Dessert, 600.0, 50.0),
        &["Rohrzucker", "Weizenmehl", "Butter"],
    );

    let result = validate(&dish, Some(&profile));

    let exclusion_reasons: Vec<&String> = result
        .reasons
        .iter()
        .filter(|reason| reason.contains("excluded"))
        .collect();
    assert_eq!(exclusion_reasons.len(), 1);
    assert!(exclusion_reasons[0].contains("zucker"));
    assert!(exclusion_reasons[0].contains("weizen"));
    assert!(!exclusion_reasons[0].contains("soja"));
}

#[test]
fn missing_profile_validates_everything() {
    let dish = recipe("r", MealCategory::Dinner, 5000.0, 500.0);
    let result = validate(&dish, None);
    assert!(result.is_valid);
    assert!(result.reasons.is_empty());
}

#[test]
fn multiple_rule_types_each_emit_one_reason() {
    let profile = with_excluded(profile(1800.0, CarbTier::Keto, 3), &["reis"]);
    let dish = with_ingredients(
        recipe("r", MealCategory::Dinner, 1200.0, 90.0),
        &["Reisnudeln"],
    );

    let result = validate(&dish, Some(&profile));

    // Carbs over max, calories off by 600, and one exclusion match.
    assert_eq!(result.reasons.len(), 3);
}

#[test]
fn fitting_recipe_stays_valid() {
    let profile = profile(1800.0, CarbTier::Moderate, 3);
    let dish = recipe("r", MealCategory::Lunch, 620.0, 70.0);
    assert!(validate(&dish, Some(&profile)).is_valid);
}
