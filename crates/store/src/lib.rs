//! Access to the hosted document store.
//!
//! The platform persists every entity as a JSON document with a
//! server-assigned `id` and supports listing, exact-match filtering and CRUD
//! per entity collection. This crate exposes that contract as the
//! [`DocumentStore`] trait with a production HTTP client ([`HostedStore`])
//! and an in-memory implementation ([`MemoryStore`]) for tests.

mod error;
mod hosted;
mod memory;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString};

pub use error::{Result, StoreError};
pub use hosted::HostedStore;
pub use memory::MemoryStore;

/// Entity collections of the hosted backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
pub enum EntityKind {
    Questionnaire,
    DiaryEntry,
    Plan,
    Article,
    Favorite,
    Recipe,
    UserRecipe,
}

/// Exact-match predicate over top-level document fields.
pub type Fields = serde_json::Map<String, Value>;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents of a collection. `sort` is a field name, prefixed with
    /// `-` for descending order (e.g. `-created_date`).
    async fn list(&self, kind: EntityKind, sort: Option<&str>) -> Result<Vec<Value>>;

    async fn filter(&self, kind: EntityKind, fields: &Fields) -> Result<Vec<Value>>;

    async fn create(&self, kind: EntityKind, data: Value) -> Result<Value>;

    async fn bulk_create(&self, kind: EntityKind, data: Vec<Value>) -> Result<Vec<Value>>;

    async fn update(&self, kind: EntityKind, id: &str, data: Value) -> Result<Value>;

    async fn delete(&self, kind: EntityKind, id: &str) -> Result<()>;
}

/// Build a [`Fields`] predicate from key/value pairs.
pub fn fields(pairs: &[(&str, Value)]) -> Fields {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), value.clone()))
        .collect()
}

pub async fn list_as<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    kind: EntityKind,
    sort: Option<&str>,
) -> Result<Vec<T>> {
    decode_all(store.list(kind, sort).await?)
}

pub async fn filter_as<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    kind: EntityKind,
    predicate: &Fields,
) -> Result<Vec<T>> {
    decode_all(store.filter(kind, predicate).await?)
}

/// First document matching the predicate, if any.
pub async fn filter_one_as<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    kind: EntityKind,
    predicate: &Fields,
) -> Result<Option<T>> {
    let mut documents = store.filter(kind, predicate).await?;
    if documents.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(documents.swap_remove(0))?))
}

pub async fn create_as<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    kind: EntityKind,
    data: impl Serialize,
) -> Result<T> {
    let created = store.create(kind, serde_json::to_value(data)?).await?;
    Ok(serde_json::from_value(created)?)
}

fn decode_all<T: DeserializeOwned>(documents: Vec<Value>) -> Result<Vec<T>> {
    documents
        .into_iter()
        .map(|document| Ok(serde_json::from_value(document)?))
        .collect()
}
