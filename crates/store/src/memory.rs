use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::sync::RwLock;
use ulid::Ulid;

use crate::{DocumentStore, EntityKind, Fields, Result, StoreError};

/// In-memory [`DocumentStore`] with the same observable contract as the
/// hosted backend: assigned ids, `created_date` stamps, exact-match filters.
/// Documents keep insertion order, which an equal-key sort preserves.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<EntityKind, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn stamp(mut document: Value) -> Value {
        if let Some(object) = document.as_object_mut() {
            let id = object
                .get("id")
                .and_then(Value::as_str)
                .filter(|id| !id.is_empty())
                .map(str::to_owned)
                .unwrap_or_else(|| Ulid::new().to_string());
            object.insert("id".to_owned(), Value::String(id));
            if !object.contains_key("created_date") {
                let now = OffsetDateTime::now_utc()
                    .format(&Rfc3339)
                    .unwrap_or_default();
                object.insert("created_date".to_owned(), Value::String(now));
            }
        }
        document
    }

    fn matches(document: &Value, predicate: &Fields) -> bool {
        predicate
            .iter()
            .all(|(key, expected)| document.get(key) == Some(expected))
    }

    fn compare_field(a: &Value, b: &Value, field: &str) -> Ordering {
        let left = a.get(field);
        let right = b.get(field);
        match (left, right) {
            (Some(Value::Number(l)), Some(Value::Number(r))) => l
                .as_f64()
                .partial_cmp(&r.as_f64())
                .unwrap_or(Ordering::Equal),
            (Some(Value::String(l)), Some(Value::String(r))) => l.cmp(r),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            _ => Ordering::Equal,
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list(&self, kind: EntityKind, sort: Option<&str>) -> Result<Vec<Value>> {
        let collections = self.collections.read().await;
        let mut documents = collections.get(&kind).cloned().unwrap_or_default();
        if let Some(sort) = sort {
            let (field, descending) = match sort.strip_prefix('-') {
                Some(field) => (field, true),
                None => (sort, false),
            };
            documents.sort_by(|a, b| {
                let ordering = Self::compare_field(a, b, field);
                if descending { ordering.reverse() } else { ordering }
            });
        }
        Ok(documents)
    }

    async fn filter(&self, kind: EntityKind, predicate: &Fields) -> Result<Vec<Value>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&kind)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| Self::matches(document, predicate))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn create(&self, kind: EntityKind, data: Value) -> Result<Value> {
        let document = Self::stamp(data);
        let mut collections = self.collections.write().await;
        collections
            .entry(kind)
            .or_default()
            .push(document.clone());
        Ok(document)
    }

    async fn bulk_create(&self, kind: EntityKind, data: Vec<Value>) -> Result<Vec<Value>> {
        let documents: Vec<Value> = data.into_iter().map(Self::stamp).collect();
        let mut collections = self.collections.write().await;
        collections
            .entry(kind)
            .or_default()
            .extend(documents.clone());
        Ok(documents)
    }

    async fn update(&self, kind: EntityKind, id: &str, data: Value) -> Result<Value> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(kind).or_default();
        let existing = documents
            .iter_mut()
            .find(|document| document.get("id").and_then(Value::as_str) == Some(id))
            .ok_or_else(|| StoreError::NotFound {
                kind,
                id: id.to_owned(),
            })?;
        if let (Some(target), Some(patch)) = (existing.as_object_mut(), data.as_object()) {
            for (key, value) in patch {
                if key == "id" {
                    continue;
                }
                target.insert(key.clone(), value.clone());
            }
        }
        Ok(existing.clone())
    }

    async fn delete(&self, kind: EntityKind, id: &str) -> Result<()> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(kind).or_default();
        let before = documents.len();
        documents.retain(|document| document.get("id").and_then(Value::as_str) != Some(id));
        if documents.len() == before {
            return Err(StoreError::NotFound {
                kind,
                id: id.to_owned(),
            });
        }
        Ok(())
    }
}
