use async_trait::async_trait;
use serde_json::{Value, json};

use crate::providers::{GeneratedImage, ImageGenerator, TextGenerator};
use crate::GenerationError;

/// Hosted LLM integration endpoint.
#[derive(Clone)]
pub struct HostedTextGenerator {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HostedTextGenerator {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

async fn decode(response: reqwest::Response) -> Result<Value, GenerationError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(GenerationError::Provider(format!("{status}: {message}")));
    }
    Ok(response.json().await?)
}

#[async_trait]
impl TextGenerator for HostedTextGenerator {
    async fn invoke(
        &self,
        prompt: &str,
        json_schema: Option<Value>,
    ) -> Result<Value, GenerationError> {
        let mut body = json!({ "prompt": prompt });
        if let Some(schema) = json_schema {
            body["response_json_schema"] = schema;
        }
        let response = self
            .http
            .post(format!("{}/integrations/invoke-llm", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        decode(response).await
    }
}

/// Hosted image generation endpoint.
#[derive(Clone)]
pub struct HostedImageGenerator {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HostedImageGenerator {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ImageGenerator for HostedImageGenerator {
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, GenerationError> {
        let response = self
            .http
            .post(format!("{}/integrations/generate-image", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&json!({ "prompt": prompt }))
            .send()
            .await?;
        let value = decode(response).await?;
        serde_json::from_value(value)
            .map_err(|error| GenerationError::InvalidResponse(error.to_string()))
    }
}
