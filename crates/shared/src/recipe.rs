use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Snack,
    Dessert,
}

impl MealCategory {
    /// Unknown category names resolve to the given fallback.
    pub fn parse_or(value: &str, fallback: MealCategory) -> Self {
        value.parse().unwrap_or(fallback)
    }

    /// Display order of meal slots within a day.
    pub fn day_order(&self) -> u8 {
        match self {
            MealCategory::Breakfast => 1,
            MealCategory::Lunch => 2,
            MealCategory::Dinner => 3,
            MealCategory::Snack => 4,
            MealCategory::Dessert => 5,
        }
    }
}

/// A language-keyed text value, e.g. `{"de": "Haferflocken"}`.
///
/// The product copy is German-first; [`LocalizedText::primary`] resolves
/// German when present, otherwise the first available translation, otherwise
/// the empty string (which by design never matches any ingredient search).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(pub BTreeMap<String, String>);

pub const PRIMARY_LANG: &str = "de";

impl LocalizedText {
    pub fn new(lang: impl Into<String>, text: impl Into<String>) -> Self {
        Self(BTreeMap::from([(lang.into(), text.into())]))
    }

    pub fn get(&self, lang: &str) -> &str {
        self.0.get(lang).map(String::as_str).unwrap_or("")
    }

    pub fn primary(&self) -> &str {
        match self.0.get(PRIMARY_LANG) {
            Some(text) => text,
            None => self
                .0
                .values()
                .next()
                .map(String::as_str)
                .unwrap_or_default(),
        }
    }

    /// Translation for `lang`, falling back to the primary one.
    pub fn resolve(&self, lang: &str) -> &str {
        match self.0.get(lang) {
            Some(text) => text,
            None => self.primary(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|text| text.is_empty())
    }
}

/// Macros of a single portion. Missing numeric fields are zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacrosPerPortion {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub name: LocalizedText,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
}

/// A recipe document, either from the global catalog (`Recipe` entity) or a
/// user's own library (`UserRecipe` entity).
///
/// Recipes are never mutated by the personalization core; scoring always
/// yields a new annotated value.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub category: MealCategory,
    #[serde(default)]
    pub prep_time: u32,
    #[serde(default)]
    pub cook_time: u32,
    #[serde(default = "default_portions")]
    pub default_portions: f64,
    #[serde(default)]
    pub macros_per_portion: MacrosPerPortion,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Step list per language.
    #[serde(default)]
    pub instructions: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub hormone_benefits: LocalizedText,
    #[serde(default)]
    pub hormone_friendly: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_custom: bool,
    #[serde(default)]
    pub is_ai_generated: bool,
    /// Set on custom copies: the catalog recipe this one was derived from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_recipe_id: Option<String>,
    /// Owner, for `UserRecipe` documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

fn default_portions() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_text_prefers_german() {
        let mut text = LocalizedText::new("en", "oats");
        text.0.insert("de".to_owned(), "Haferflocken".to_owned());
        assert_eq!(text.primary(), "Haferflocken");
        assert_eq!(text.resolve("en"), "oats");
        assert_eq!(text.resolve("fr"), "Haferflocken");
    }

    #[test]
    fn missing_translation_is_empty_and_never_matches() {
        let text = LocalizedText::default();
        assert_eq!(text.primary(), "");
        assert_eq!(text.get("de"), "");
    }

    #[test]
    fn recipe_tolerates_sparse_documents() {
        let recipe: Recipe = serde_json::from_value(serde_json::json!({
            "id": "r1",
            "category": "breakfast",
            "macros_per_portion": { "carbs": 12.5 }
        }))
        .unwrap();
        assert_eq!(recipe.category, MealCategory::Breakfast);
        assert_eq!(recipe.macros_per_portion.carbs, 12.5);
        assert_eq!(recipe.macros_per_portion.calories, 0.0);
        assert_eq!(recipe.default_portions, 1.0);
        assert!(!recipe.hormone_friendly);
    }
}
