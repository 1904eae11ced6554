//! Recipe personalization core: profile-aware scoring, ranking with tiered
//! fallback, and profile validation of already-saved recipes.
//!
//! Everything in this crate is pure and synchronous. All inputs arrive as
//! explicit parameters and scoring never mutates the recipes it is given, so
//! the same pool can be scored concurrently for any number of profiles.

mod matcher;
mod ranker;
mod validator;

pub use matcher::{MatchLevel, ProfileMatcher, ScoredRecipe};
pub use ranker::rank;
pub use validator::{ProfileValidation, validate};
