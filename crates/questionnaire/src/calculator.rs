use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use validator::Validate;

/// Calorie floor for weight-loss targets. Going lower is not something the
/// product ever recommends.
const MIN_DAILY_CALORIES: f64 = 1200.0;

#[derive(
    EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
}

impl ActivityLevel {
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
        }
    }
}

#[derive(
    EnumString, Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    #[default]
    Maintain,
    GainWeight,
}

#[derive(
    EnumString, Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GoalPace {
    Slow,
    #[default]
    Moderate,
    Fast,
}

impl GoalPace {
    /// Daily deficit for weight loss, kcal (~0.25/0.5/0.75 kg per week).
    fn deficit(&self) -> f64 {
        match self {
            GoalPace::Slow => 275.0,
            GoalPace::Moderate => 550.0,
            GoalPace::Fast => 825.0,
        }
    }

    /// Daily surplus for weight gain, kcal (~0.25/0.4/0.6 kg per week).
    fn surplus(&self) -> f64 {
        match self {
            GoalPace::Slow => 200.0,
            GoalPace::Moderate => 350.0,
            GoalPace::Fast => 500.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct CalorieInput {
    #[validate(range(min = 18.0, max = 100.0))]
    pub age: f64,
    #[validate(range(min = 120.0, max = 220.0))]
    pub height_cm: f64,
    #[validate(range(min = 35.0, max = 250.0))]
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal: Goal,
    #[serde(default)]
    pub pace: GoalPace,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CalorieBreakdown {
    pub bmr: f64,
    pub activity_adjustment: f64,
    pub hormonal_adjustment: f64,
    pub goal_adjustment: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CalorieTargets {
    pub bmr: f64,
    pub tdee: f64,
    pub daily_calories: f64,
    pub breakdown: CalorieBreakdown,
}

/// Daily calorie target for the questionnaire's nutrition step.
///
/// Mifflin-St Jeor for women, an activity multiplier, a -5% adjustment for
/// the slowed metabolism at 40+, and the goal adjustment on top.
pub fn daily_calorie_target(input: &CalorieInput) -> menowell_shared::Result<CalorieTargets> {
    input.validate()?;

    let bmr = (10.0 * input.weight_kg + 6.25 * input.height_cm - 5.0 * input.age - 161.0).round();
    let tdee = (bmr * input.activity_level.multiplier()).round();

    let hormonal_adjustment = if input.age >= 40.0 {
        (tdee * -0.05).round()
    } else {
        0.0
    };
    let adjusted_tdee = tdee + hormonal_adjustment;

    let goal_adjustment = match input.goal {
        Goal::LoseWeight => -input.pace.deficit(),
        Goal::GainWeight => input.pace.surplus(),
        Goal::Maintain => 0.0,
    };

    let daily_calories = match input.goal {
        Goal::LoseWeight => (adjusted_tdee + goal_adjustment).max(MIN_DAILY_CALORIES),
        _ => adjusted_tdee + goal_adjustment,
    };

    Ok(CalorieTargets {
        bmr,
        tdee,
        daily_calories,
        breakdown: CalorieBreakdown {
            bmr,
            activity_adjustment: tdee - bmr,
            hormonal_adjustment,
            goal_adjustment,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(age: f64, activity: ActivityLevel, goal: Goal, pace: GoalPace) -> CalorieInput {
        CalorieInput {
            age,
            height_cm: 168.0,
            weight_kg: 70.0,
            activity_level: activity,
            goal,
            pace,
        }
    }

    #[test]
    fn bmr_follows_mifflin_st_jeor_for_women() {
        let targets = daily_calorie_target(&input(
            35.0,
            ActivityLevel::Sedentary,
            Goal::Maintain,
            GoalPace::Moderate,
        ))
        .unwrap();
        // 10*70 + 6.25*168 - 5*35 - 161 = 1414
        assert_eq!(targets.bmr, 1414.0);
        assert_eq!(targets.tdee, (1414.0_f64 * 1.2).round());
        assert_eq!(targets.breakdown.hormonal_adjustment, 0.0);
    }

    #[test]
    fn hormonal_adjustment_kicks_in_at_forty() {
        let targets = daily_calorie_target(&input(
            45.0,
            ActivityLevel::ModeratelyActive,
            Goal::Maintain,
            GoalPace::Moderate,
        ))
        .unwrap();
        // bmr = 1364, tdee = round(1364 * 1.55) = 2114, -5% = -106
        assert_eq!(targets.bmr, 1364.0);
        assert_eq!(targets.tdee, 2114.0);
        assert_eq!(targets.breakdown.hormonal_adjustment, -106.0);
        assert_eq!(targets.daily_calories, 2008.0);
    }

    #[test]
    fn weight_loss_applies_pace_deficit() {
        let maintain = daily_calorie_target(&input(
            45.0,
            ActivityLevel::ModeratelyActive,
            Goal::Maintain,
            GoalPace::Moderate,
        ))
        .unwrap();
        let lose = daily_calorie_target(&input(
            45.0,
            ActivityLevel::ModeratelyActive,
            Goal::LoseWeight,
            GoalPace::Moderate,
        ))
        .unwrap();
        assert_eq!(maintain.daily_calories - lose.daily_calories, 550.0);
    }

    #[test]
    fn weight_loss_never_goes_below_twelve_hundred() {
        let targets = daily_calorie_target(&CalorieInput {
            age: 60.0,
            height_cm: 150.0,
            weight_kg: 45.0,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::LoseWeight,
            pace: GoalPace::Fast,
        })
        .unwrap();
        assert_eq!(targets.daily_calories, 1200.0);
    }

    #[test]
    fn weight_gain_adds_pace_surplus() {
        let maintain = daily_calorie_target(&input(
            38.0,
            ActivityLevel::LightlyActive,
            Goal::Maintain,
            GoalPace::Moderate,
        ))
        .unwrap();
        let gain = daily_calorie_target(&input(
            38.0,
            ActivityLevel::LightlyActive,
            Goal::GainWeight,
            GoalPace::Slow,
        ))
        .unwrap();
        assert_eq!(gain.daily_calories - maintain.daily_calories, 200.0);
    }

    #[test]
    fn out_of_range_input_is_rejected() {
        let result = daily_calorie_target(&CalorieInput {
            age: 12.0,
            height_cm: 168.0,
            weight_kg: 70.0,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::Maintain,
            pace: GoalPace::Moderate,
        });
        assert!(result.is_err());
    }
}
