//! Shopping-list aggregation over a weekly plan.

mod categorization;

pub use categorization::{CategorizationService, ShoppingCategory};

use std::collections::BTreeMap;

use menowell_shared::plan::Plan;
use serde::Serialize;

/// One line of the shopping list: total amount of an ingredient across the
/// whole week, portion multipliers applied.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShoppingItem {
    pub name: String,
    pub unit: String,
    pub total_amount: f64,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ShoppingList(pub BTreeMap<ShoppingCategory, Vec<ShoppingItem>>);

impl ShoppingList {
    pub fn items(&self, category: ShoppingCategory) -> &[ShoppingItem] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Aggregate a plan's ingredients into a categorized shopping list.
///
/// Ingredients are keyed by lowercased name plus unit, amounts summed with
/// each meal's portion factor, then grouped by store category and sorted
/// alphabetically inside each group. Names resolve in `lang` with the usual
/// primary-language fallback.
pub fn aggregate(plan: &Plan, lang: &str) -> ShoppingList {
    let mut totals: BTreeMap<String, ShoppingItem> = BTreeMap::new();

    for meal in &plan.meals {
        for ingredient in &meal.recipe.ingredients {
            let name = ingredient.name.resolve(lang);
            if name.is_empty() {
                continue;
            }
            let key = format!("{}-{}", name.to_lowercase(), ingredient.unit);
            let amount = ingredient.amount * meal.portions;
            totals
                .entry(key)
                .and_modify(|item| item.total_amount += amount)
                .or_insert_with(|| ShoppingItem {
                    name: name.to_owned(),
                    unit: ingredient.unit.clone(),
                    total_amount: amount,
                });
        }
    }

    let mut grouped: BTreeMap<ShoppingCategory, Vec<ShoppingItem>> = BTreeMap::new();
    for item in totals.into_values() {
        grouped
            .entry(CategorizationService::categorize(&item.name))
            .or_default()
            .push(item);
    }
    for items in grouped.values_mut() {
        items.sort_by(|a, b| a.name.cmp(&b.name));
    }

    ShoppingList(grouped)
}

#[cfg(test)]
mod tests {
    use menowell_shared::plan::{PlanMeal, Weekday};
    use menowell_shared::recipe::{
        Ingredient, LocalizedText, MealCategory, Recipe,
    };

    use super::*;

    fn ingredient(name: &str, amount: f64, unit: &str) -> Ingredient {
        Ingredient {
            name: LocalizedText::new("de", name),
            amount,
            unit: unit.to_owned(),
            optional: false,
        }
    }

    fn meal(day: Weekday, portions: f64, ingredients: Vec<Ingredient>) -> PlanMeal {
        let recipe = Recipe {
            id: "r".to_owned(),
            ingredients,
            ..Default::default()
        };
        PlanMeal {
            id: format!("{day}-meal"),
            day_of_week: day,
            meal_type: MealCategory::Dinner,
            recipe_id: recipe.id.clone(),
            name: "Gericht".to_owned(),
            calories: 500.0,
            portions,
            recipe,
        }
    }

    fn plan(meals: Vec<PlanMeal>) -> Plan {
        Plan {
            id: "p".to_owned(),
            user_id: "u1".to_owned(),
            plan_type: "weekly".to_owned(),
            date: "2026-08-03".to_owned(),
            meals,
        }
    }

    #[test]
    fn sums_duplicate_ingredients_with_portion_factors() {
        let plan = plan(vec![
            meal(
                Weekday::Monday,
                1.0,
                vec![ingredient("Spinat", 100.0, "g")],
            ),
            meal(
                Weekday::Tuesday,
                1.5,
                vec![ingredient("Spinat", 200.0, "g")],
            ),
        ]);

        let list = aggregate(&plan, "de");
        let produce = list.items(ShoppingCategory::Vegetables);
        assert_eq!(produce.len(), 1);
        assert_eq!(produce[0].total_amount, 400.0);
        assert_eq!(produce[0].unit, "g");
    }

    #[test]
    fn same_name_different_unit_stays_separate() {
        let plan = plan(vec![meal(
            Weekday::Monday,
            1.0,
            vec![
                ingredient("Gemüsebrühe", 200.0, "ml"),
                ingredient("Gemüsebrühe", 1.0, "Würfel"),
            ],
        )]);

        let list = aggregate(&plan, "de");
        assert_eq!(list.items(ShoppingCategory::Pantry).len(), 2);
    }

    #[test]
    fn groups_by_category_and_sorts_alphabetically() {
        let plan = plan(vec![meal(
            Weekday::Monday,
            1.0,
            vec![
                ingredient("Zucchini", 1.0, "Stk"),
                ingredient("Brokkoli", 300.0, "g"),
                ingredient("Lachs", 200.0, "g"),
                ingredient("Joghurt", 150.0, "g"),
            ],
        )]);

        let list = aggregate(&plan, "de");
        let produce = list.items(ShoppingCategory::Vegetables);
        assert_eq!(produce.len(), 2);
        assert_eq!(produce[0].name, "Brokkoli");
        assert_eq!(produce[1].name, "Zucchini");
        assert_eq!(list.items(ShoppingCategory::Protein).len(), 1);
        assert_eq!(list.items(ShoppingCategory::Dairy).len(), 1);
    }

    #[test]
    fn unknown_ingredients_land_in_other() {
        let plan = plan(vec![meal(
            Weekday::Friday,
            1.0,
            vec![ingredient("Geheimzutat", 1.0, "Stk")],
        )]);
        let list = aggregate(&plan, "de");
        assert_eq!(list.items(ShoppingCategory::Other).len(), 1);
    }

    #[test]
    fn nameless_ingredients_are_skipped() {
        let plan = plan(vec![meal(
            Weekday::Friday,
            1.0,
            vec![Ingredient::default()],
        )]);
        assert!(aggregate(&plan, "de").is_empty());
    }
}
