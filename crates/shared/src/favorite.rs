use serde::{Deserialize, Serialize};

use crate::recipe::Recipe;

pub const FAVORITE_ITEM_TYPE: &str = "recipe";

/// A saved favorite, holding a snapshot of the recipe at save time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Favorite {
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    pub item_id: String,
    pub item_type: String,
    pub item_data: Recipe,
}
