mod error;

pub mod article;
pub mod diary;
pub mod favorite;
pub mod nutrition;
pub mod plan;
pub mod recipe;

pub use error::*;
