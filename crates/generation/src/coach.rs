use menowell_questionnaire::Questionnaire;
use menowell_shared::diary::DiaryEntry;

use crate::GenerationError;
use crate::providers::TextGenerator;

/// Conversational coaching reply grounded in the user's profile and recent
/// diary. Plain text in, plain text out; no schema.
pub async fn coach_reply(
    text: &dyn TextGenerator,
    message: &str,
    questionnaire: Option<&Questionnaire>,
    recent_entries: &[DiaryEntry],
) -> Result<String, GenerationError> {
    let prompt = coach_prompt(message, questionnaire, recent_entries);
    let response = text.invoke(&prompt, None).await?;
    response
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| GenerationError::InvalidResponse("coach reply is not a string".to_owned()))
}

pub fn coach_prompt(
    message: &str,
    questionnaire: Option<&Questionnaire>,
    recent_entries: &[DiaryEntry],
) -> String {
    let mut context = String::new();

    if let Some(profile) = questionnaire.and_then(Questionnaire::nutrition_profile) {
        context.push_str(&format!(
            "Profile: {} kcal daily, {} carb target, {} meals per day.\n",
            profile.daily_calories,
            profile.carb_target.label(),
            profile.meal_structure.meals_per_day
        ));
    }

    if !recent_entries.is_empty() {
        context.push_str("Recent diary days:\n");
        for entry in recent_entries {
            context.push_str(&format!(
                "- {}: mood {}, energy {}, sleep {}h, symptoms: {}\n",
                entry.date,
                entry.mood.map_or("-".to_owned(), |v| v.to_string()),
                entry.energy.map_or("-".to_owned(), |v| v.to_string()),
                entry
                    .sleep_hours
                    .map_or("-".to_owned(), |v| v.to_string()),
                if entry.symptoms.is_empty() {
                    "none".to_owned()
                } else {
                    entry.symptoms.join(", ")
                }
            ));
        }
    }

    format!(
        "You are a supportive menopause wellness coach for women 40+. \
         Answer in German, warmly and concretely, in at most 5 sentences. \
         Do not give medical diagnoses; recommend seeing a doctor for medical \
         concerns.\n\n{context}\nQuestion: {message}"
    )
}
