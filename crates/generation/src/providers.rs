use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::GenerationError;

/// Text/JSON generation. With a schema the provider returns a JSON document
/// conforming to it; without one, a plain string value.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn invoke(&self, prompt: &str, json_schema: Option<Value>)
    -> Result<Value, GenerationError>;
}

#[derive(Clone, Debug, Deserialize)]
pub struct GeneratedImage {
    pub url: String,
}

#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, GenerationError>;
}
