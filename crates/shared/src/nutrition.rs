use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Daily carbohydrate tier a user committed to in the questionnaire.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    Default,
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
pub enum CarbTier {
    Keto,
    LowCarb,
    #[default]
    Moderate,
    HighCarb,
}

/// Per-portion carbohydrate thresholds for a tier, in grams.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarbTargets {
    pub max: f64,
    pub preferred: f64,
}

impl CarbTier {
    pub const fn targets(&self) -> CarbTargets {
        match self {
            CarbTier::Keto => CarbTargets {
                max: 30.0,
                preferred: 20.0,
            },
            CarbTier::LowCarb => CarbTargets {
                max: 75.0,
                preferred: 50.0,
            },
            CarbTier::Moderate => CarbTargets {
                max: 125.0,
                preferred: 100.0,
            },
            CarbTier::HighCarb => CarbTargets {
                max: 200.0,
                preferred: 150.0,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CarbTier::Keto => "keto",
            CarbTier::LowCarb => "low-carb",
            CarbTier::Moderate => "balanced",
            CarbTier::HighCarb => "higher-carb",
        }
    }

    /// Unknown or missing tier names resolve to [`CarbTier::Moderate`].
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

fn carb_tier_lenient<'de, D>(deserializer: D) -> Result<CarbTier, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .map(CarbTier::parse_lenient)
        .unwrap_or_default())
}

/// How the user spreads eating across a day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealStructure {
    #[serde(default = "default_meals_per_day")]
    pub meals_per_day: u32,
    #[serde(default)]
    pub snacks_per_day: u32,
}

impl Default for MealStructure {
    fn default() -> Self {
        Self {
            meals_per_day: default_meals_per_day(),
            snacks_per_day: 0,
        }
    }
}

fn default_meals_per_day() -> u32 {
    3
}

fn default_daily_calories() -> f64 {
    2000.0
}

/// Nutrition preferences derived from a user's questionnaire.
///
/// Every field has a documented default so that partially filled
/// questionnaires still produce a usable profile.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NutritionProfile {
    #[serde(default = "default_daily_calories")]
    pub daily_calories: f64,
    #[serde(default, deserialize_with = "carb_tier_lenient")]
    pub carb_target: CarbTier,
    /// Free-text preferred ingredients, grouped by an open-ended category
    /// name. Order inside each category is the order the user entered them.
    #[serde(default)]
    pub preferred_foods: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub excluded_foods: Vec<String>,
    #[serde(default)]
    pub meal_structure: MealStructure,
    /// Target calories per plan slot, keyed `meal1`, `meal2`, `snack1`, ...
    #[serde(default)]
    pub calorie_distribution: BTreeMap<String, f64>,
}

impl Default for NutritionProfile {
    fn default() -> Self {
        Self {
            daily_calories: default_daily_calories(),
            carb_target: CarbTier::default(),
            preferred_foods: BTreeMap::new(),
            excluded_foods: Vec::new(),
            meal_structure: MealStructure::default(),
            calorie_distribution: BTreeMap::new(),
        }
    }
}

impl NutritionProfile {
    /// Calorie budget for a single main meal. A `meals_per_day` of zero is
    /// treated as one so the division can never blow up.
    pub fn calories_per_meal(&self) -> f64 {
        self.daily_calories / f64::from(self.meal_structure.meals_per_day.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_carb_tier_falls_back_to_moderate() {
        assert_eq!(CarbTier::parse_lenient("paleo"), CarbTier::Moderate);
        assert_eq!(CarbTier::parse_lenient("low_carb"), CarbTier::LowCarb);
    }

    #[test]
    fn profile_defaults_match_questionnaire_contract() {
        let profile: NutritionProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile.daily_calories, 2000.0);
        assert_eq!(profile.carb_target, CarbTier::Moderate);
        assert_eq!(profile.meal_structure.meals_per_day, 3);
    }

    #[test]
    fn malformed_carb_target_values_never_fail_deserialization() {
        let profile: NutritionProfile =
            serde_json::from_value(serde_json::json!({ "carb_target": 42 })).unwrap();
        assert_eq!(profile.carb_target, CarbTier::Moderate);

        let profile: NutritionProfile =
            serde_json::from_value(serde_json::json!({ "carb_target": "keto" })).unwrap();
        assert_eq!(profile.carb_target, CarbTier::Keto);
    }

    #[test]
    fn zero_meals_per_day_never_divides_by_zero() {
        let profile = NutritionProfile {
            daily_calories: 1800.0,
            meal_structure: MealStructure {
                meals_per_day: 0,
                snacks_per_day: 0,
            },
            ..Default::default()
        };
        assert_eq!(profile.calories_per_meal(), 1800.0);
    }
}
