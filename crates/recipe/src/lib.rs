//! Recipe pool access, custom copies and favorites.

mod favorites;
mod pool;

pub use favorites::{FavoriteToggle, ValidatedFavorite};
pub use pool::RecipeEdits;

use menowell_store::DocumentStore;

/// Commands and queries over the user's recipe world. Holds no state beyond
/// the store handle; the pool and profile always arrive as parameters or are
/// fetched per call.
pub struct RecipeService<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> RecipeService<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    pub(crate) fn store(&self) -> &'a dyn DocumentStore {
        self.store
    }
}
