//! Integration with the hosted generative providers: recipe batches, ad-hoc
//! recipe top-ups, and the coach.
//!
//! Providers are modeled as two small traits so that services and tests can
//! swap the hosted HTTP clients for stubs. No retry policy lives here; a
//! provider failure surfaces as [`GenerationError`] and the caller decides.

mod coach;
mod error;
mod hosted;
mod providers;
mod recipes;

pub use coach::{coach_prompt, coach_reply};
pub use error::GenerationError;
pub use hosted::{HostedImageGenerator, HostedTextGenerator};
pub use providers::{GeneratedImage, ImageGenerator, TextGenerator};
pub use recipes::{
    LLM_BATCH_SIZE, MIN_GENERATED_RECIPES, RECIPE_DISTRIBUTION, RecipeGenerator, SAVE_CHUNK_SIZE,
};
