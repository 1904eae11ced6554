use menowell_nutrition::validate;
use menowell_shared::favorite::{FAVORITE_ITEM_TYPE, Favorite};
use menowell_shared::nutrition::NutritionProfile;
use menowell_shared::recipe::Recipe;
use menowell_store::{EntityKind, create_as, fields, filter_as};
use serde::Serialize;
use serde_json::json;

use crate::RecipeService;

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FavoriteToggle {
    Added { favorite: Favorite },
    Removed { favorite_id: String },
}

/// A favorite enriched with whether its snapshot still fits the profile.
#[derive(Clone, Debug, Serialize)]
pub struct ValidatedFavorite {
    #[serde(flatten)]
    pub favorite: Favorite,
    pub is_profile_match: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub profile_mismatch_reasons: Vec<String>,
}

impl<'a> RecipeService<'a> {
    pub async fn favorites(&self, user_id: &str) -> menowell_shared::Result<Vec<Favorite>> {
        Ok(filter_as(
            self.store(),
            EntityKind::Favorite,
            &fields(&[
                ("user_id", json!(user_id)),
                ("item_type", json!(FAVORITE_ITEM_TYPE)),
            ]),
        )
        .await?)
    }

    /// Save the recipe as a favorite, or remove the existing favorite again.
    pub async fn toggle_favorite(
        &self,
        user_id: &str,
        recipe: &Recipe,
    ) -> menowell_shared::Result<FavoriteToggle> {
        let existing = self.favorites(user_id).await?;
        if let Some(favorite) = existing
            .into_iter()
            .find(|favorite| favorite.item_id == recipe.id)
        {
            self.store()
                .delete(EntityKind::Favorite, &favorite.id)
                .await?;
            tracing::info!(user_id, recipe_id = %recipe.id, "favorite removed");
            return Ok(FavoriteToggle::Removed {
                favorite_id: favorite.id,
            });
        }

        let favorite: Favorite = create_as(
            self.store(),
            EntityKind::Favorite,
            &Favorite {
                id: String::new(),
                user_id: user_id.to_owned(),
                item_id: recipe.id.clone(),
                item_type: FAVORITE_ITEM_TYPE.to_owned(),
                item_data: recipe.clone(),
            },
        )
        .await?;
        tracing::info!(user_id, recipe_id = %recipe.id, "favorite added");
        Ok(FavoriteToggle::Added { favorite })
    }

    /// Favorites annotated against the current profile, for the mismatch
    /// warnings on the favorites screen.
    pub async fn validated_favorites(
        &self,
        user_id: &str,
        profile: Option<&NutritionProfile>,
    ) -> menowell_shared::Result<Vec<ValidatedFavorite>> {
        let favorites = self.favorites(user_id).await?;
        Ok(favorites
            .into_iter()
            .map(|favorite| {
                let validation = validate(&favorite.item_data, profile);
                ValidatedFavorite {
                    favorite,
                    is_profile_match: validation.is_valid,
                    profile_mismatch_reasons: validation.reasons,
                }
            })
            .collect())
    }
}
