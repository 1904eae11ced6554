use serde::{Deserialize, Serialize};
use validator::Validate;

/// One diary day. Symptom names are free text from the tracker UI.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct DiaryEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    /// `YYYY-MM-DD`.
    #[validate(length(min = 10, max = 10))]
    pub date: String,
    /// 1 (low) to 5 (high).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 5))]
    pub mood: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 5))]
    pub energy: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 24.0))]
    pub sleep_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}
