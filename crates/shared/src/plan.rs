use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::recipe::{MealCategory, Recipe};

#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// One planned eating occasion. Carries a snapshot of the recipe so that the
/// plan (and its shopping list) stays stable even if the pool is regenerated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanMeal {
    pub id: String,
    pub day_of_week: Weekday,
    pub meal_type: MealCategory,
    pub recipe_id: String,
    pub name: String,
    /// Calories after portion scaling.
    pub calories: f64,
    /// Portions of the recipe, scaled to the slot's calorie target.
    pub portions: f64,
    pub recipe: Recipe,
}

pub const WEEKLY_PLAN_TYPE: &str = "weekly";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub plan_type: String,
    /// Week start date, `YYYY-MM-DD`, always a Monday.
    pub date: String,
    #[serde(default)]
    pub meals: Vec<PlanMeal>,
}

impl Plan {
    /// Meals of one weekday in display order (breakfast first).
    pub fn meals_for(&self, day: Weekday) -> Vec<&PlanMeal> {
        let mut meals: Vec<&PlanMeal> = self
            .meals
            .iter()
            .filter(|meal| meal.day_of_week == day)
            .collect();
        meals.sort_by_key(|meal| meal.meal_type.day_order());
        meals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;

    fn meal(day: Weekday, meal_type: MealCategory) -> PlanMeal {
        PlanMeal {
            id: format!("{day}-{meal_type}"),
            day_of_week: day,
            meal_type,
            recipe_id: "r".to_owned(),
            name: "Gericht".to_owned(),
            calories: 500.0,
            portions: 1.0,
            recipe: Recipe::default(),
        }
    }

    #[test]
    fn meals_for_orders_a_day_breakfast_first() {
        let plan = Plan {
            id: "p".to_owned(),
            user_id: "u1".to_owned(),
            plan_type: WEEKLY_PLAN_TYPE.to_owned(),
            date: "2026-08-03".to_owned(),
            meals: vec![
                meal(Weekday::Monday, MealCategory::Snack),
                meal(Weekday::Monday, MealCategory::Breakfast),
                meal(Weekday::Tuesday, MealCategory::Lunch),
                meal(Weekday::Monday, MealCategory::Dinner),
            ],
        };

        let monday = plan.meals_for(Weekday::Monday);
        let order: Vec<MealCategory> = monday.iter().map(|meal| meal.meal_type).collect();
        assert_eq!(
            order,
            vec![
                MealCategory::Breakfast,
                MealCategory::Dinner,
                MealCategory::Snack
            ]
        );
        assert_eq!(plan.meals_for(Weekday::Wednesday).len(), 0);
    }
}
