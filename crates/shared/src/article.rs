use serde::{Deserialize, Serialize};

use crate::recipe::LocalizedText;

/// A knowledge-base article shown on the Knowledge screen.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub id: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub content: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
