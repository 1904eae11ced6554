//! Questionnaire documents and the calorie-target calculator backing the
//! nutrition step.

mod calculator;

use menowell_shared::nutrition::NutritionProfile;
use serde::{Deserialize, Serialize};

pub use calculator::{
    ActivityLevel, CalorieBreakdown, CalorieInput, CalorieTargets, Goal, GoalPace,
    daily_calorie_target,
};

/// A user's questionnaire document. Only the nutrition section is typed; the
/// other steps are free-form and carried through untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Questionnaire {
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub nutrition: Option<NutritionProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_goals: Option<serde_json::Value>,
    #[serde(default)]
    pub completed: bool,
}

impl Questionnaire {
    /// The nutrition profile, when the nutrition step has been filled in.
    /// Callers degrade to unpersonalized behavior on `None`.
    pub fn nutrition_profile(&self) -> Option<&NutritionProfile> {
        self.nutrition.as_ref()
    }
}
