use menowell_mealplan::{MIN_AI_RECIPES, PlanService, scale_to_target};
use menowell_nutrition::ProfileMatcher;
use menowell_shared::nutrition::{CarbTier, MealStructure, NutritionProfile};
use menowell_shared::recipe::{LocalizedText, MacrosPerPortion, MealCategory, Recipe};
use menowell_store::MemoryStore;

fn recipe(id: &str, category: MealCategory, calories: f64) -> Recipe {
    Recipe {
        id: id.to_owned(),
        title: LocalizedText::new("de", format!("Gericht {id}")),
        category,
        macros_per_portion: MacrosPerPortion {
            calories,
            carbs: 40.0,
            ..Default::default()
        },
        hormone_friendly: true,
        is_ai_generated: true,
        ..Default::default()
    }
}

fn profile() -> NutritionProfile {
    let mut profile = NutritionProfile {
        daily_calories: 1800.0,
        carb_target: CarbTier::Moderate,
        meal_structure: MealStructure {
            meals_per_day: 3,
            snacks_per_day: 1,
        },
        ..Default::default()
    };
    profile
        .calorie_distribution
        .insert("meal1".to_owned(), 400.0);
    profile
        .calorie_distribution
        .insert("meal2".to_owned(), 600.0);
    profile
        .calorie_distribution
        .insert("meal3".to_owned(), 600.0);
    profile
        .calorie_distribution
        .insert("snack1".to_owned(), 200.0);
    profile
}

fn pool() -> Vec<Recipe> {
    let mut pool = Vec::new();
    for i in 0..8 {
        pool.push(recipe(&format!("b{i}"), MealCategory::Breakfast, 400.0));
        pool.push(recipe(&format!("l{i}"), MealCategory::Lunch, 600.0));
        pool.push(recipe(&format!("d{i}"), MealCategory::Dinner, 600.0));
        pool.push(recipe(&format!("s{i}"), MealCategory::Snack, 200.0));
    }
    pool
}

#[tokio::test]
async fn generates_a_full_week_of_slots() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    let service = PlanService::new(&store);
    let profile = profile();

    let plan = service.generate("u1", &profile, &pool()).await?;

    // 7 days x (3 meals + 1 snack).
    assert_eq!(plan.meals.len(), 28);
    assert_eq!(plan.plan_type, "weekly");
    assert!(!plan.id.is_empty());

    let breakfasts = plan
        .meals
        .iter()
        .filter(|meal| meal.meal_type == MealCategory::Breakfast)
        .count();
    assert_eq!(breakfasts, 7);
    let snacks = plan
        .meals
        .iter()
        .filter(|meal| meal.meal_type == MealCategory::Snack)
        .count();
    assert_eq!(snacks, 7);

    // Every slot carries a recipe snapshot of the matching category.
    assert!(plan
        .meals
        .iter()
        .all(|meal| meal.recipe.category == meal.meal_type));
    Ok(())
}

#[tokio::test]
async fn refuses_to_plan_with_a_small_ai_library() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    let service = PlanService::new(&store);
    let profile = profile();

    let mut small = pool();
    small.truncate(MIN_AI_RECIPES - 1);

    let result = service.generate("u1", &profile, &small).await;
    assert!(matches!(result, Err(menowell_shared::Error::User(_))));
    Ok(())
}

#[tokio::test]
async fn regenerating_replaces_the_current_week() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    let service = PlanService::new(&store);
    let profile = profile();
    let pool = pool();

    let first = service.generate("u1", &profile, &pool).await?;
    let second = service.generate("u1", &profile, &pool).await?;
    assert_ne!(first.id, second.id);

    let current = service.current_week("u1").await?.expect("plan exists");
    assert_eq!(current.id, second.id);
    Ok(())
}

#[tokio::test]
async fn plans_are_scoped_per_user() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    let service = PlanService::new(&store);
    let profile = profile();
    let pool = pool();

    service.generate("u1", &profile, &pool).await?;
    assert!(service.current_week("u2").await?.is_none());
    Ok(())
}

#[test]
fn scaling_adjusts_portions_towards_the_target() {
    let scored = ProfileMatcher::unscored(&recipe("r", MealCategory::Lunch, 500.0));
    let scaled = scale_to_target(scored, 600.0);
    assert_eq!(scaled.portions, 1.2);
    assert_eq!(scaled.calories, 600.0);
}

#[test]
fn scaling_a_recipe_without_calories_uses_the_fallback_base() {
    let scored = ProfileMatcher::unscored(&recipe("r", MealCategory::Snack, 0.0));
    let scaled = scale_to_target(scored, 200.0);
    // factor = 200 / 400 fallback base; no calories to scale.
    assert_eq!(scaled.portions, 0.5);
    assert_eq!(scaled.calories, 0.0);
}
