use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use menowell::AppState;
use menowell_generation::{GeneratedImage, GenerationError, ImageGenerator, TextGenerator};
use menowell_store::{DocumentStore, EntityKind, MemoryStore};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Schema calls produce a batch of four distinct recipes; plain calls
/// produce a short coach reply.
pub struct StubText {
    produced: AtomicUsize,
}

impl StubText {
    fn new() -> Self {
        Self {
            produced: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl TextGenerator for StubText {
    async fn invoke(
        &self,
        _prompt: &str,
        json_schema: Option<Value>,
    ) -> Result<Value, GenerationError> {
        if json_schema.is_none() {
            return Ok(Value::String("Alles klar, das schaffen wir!".to_owned()));
        }
        let recipes: Vec<Value> = (0..4)
            .map(|_| {
                let n = self.produced.fetch_add(1, Ordering::SeqCst);
                json!({
                    "title": { "de": format!("Stub-Gericht {n}") },
                    "macros_per_portion": { "calories": 600, "protein": 35, "fat": 20, "carbs": 45 },
                    "ingredients": [
                        { "name": { "de": "Spinat" }, "amount": 100, "unit": "g" }
                    ],
                    "instructions": { "de": ["Zubereiten."] },
                    "hormone_friendly": true
                })
            })
            .collect();
        Ok(json!({ "recipes": recipes }))
    }
}

pub struct StubImage;

#[async_trait]
impl ImageGenerator for StubImage {
    async fn generate_image(&self, _prompt: &str) -> Result<GeneratedImage, GenerationError> {
        Ok(GeneratedImage {
            url: "https://img.example/stub.webp".to_owned(),
        })
    }
}

pub fn test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState {
        store: store.clone(),
        text: Arc::new(StubText::new()),
        image: Arc::new(StubImage),
    };
    (menowell::create_app(state), store)
}

pub async fn seed_recipe(store: &MemoryStore, category: &str, calories: f64, carbs: f64) {
    store
        .create(
            EntityKind::Recipe,
            json!({
                "title": { "de": format!("Gericht {category} {calories}") },
                "category": category,
                "macros_per_portion": { "calories": calories, "protein": 30, "fat": 15, "carbs": carbs },
                "ingredients": [
                    { "name": { "de": "Spinat" }, "amount": 100, "unit": "g" }
                ],
                "hormone_friendly": true
            }),
        )
        .await
        .expect("seed recipe");
}

pub async fn seed_questionnaire(store: &MemoryStore, user_id: &str) {
    store
        .create(
            EntityKind::Questionnaire,
            json!({
                "user_id": user_id,
                "completed": true,
                "nutrition": {
                    "daily_calories": 1800,
                    "carb_target": "moderate",
                    "meal_structure": { "meals_per_day": 3, "snacks_per_day": 1 }
                }
            }),
        )
        .await
        .expect("seed questionnaire");
}

pub async fn request(
    app: &Router,
    method: &str,
    path: &str,
    user: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(user) = user {
        builder = builder.header("x-user-id", user);
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}
