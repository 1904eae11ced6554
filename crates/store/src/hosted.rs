use async_trait::async_trait;
use serde_json::Value;

use crate::{DocumentStore, EntityKind, Fields, Result, StoreError};

/// HTTP client for the hosted document store.
///
/// Collections live under `{base_url}/entities/{kind}`; requests carry the
/// app's API key as a bearer token. The backend assigns `id` and
/// `created_date` on create.
#[derive(Clone)]
pub struct HostedStore {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HostedStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn collection_url(&self, kind: EntityKind) -> String {
        format!("{}/entities/{}", self.base_url, kind)
    }

    fn document_url(&self, kind: EntityKind, id: &str) -> String {
        format!("{}/entities/{}/{}", self.base_url, kind, id)
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Backend {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl DocumentStore for HostedStore {
    async fn list(&self, kind: EntityKind, sort: Option<&str>) -> Result<Vec<Value>> {
        let mut request = self
            .http
            .get(self.collection_url(kind))
            .bearer_auth(&self.api_key);
        if let Some(sort) = sort {
            request = request.query(&[("sort", sort)]);
        }
        self.decode(request.send().await?).await
    }

    async fn filter(&self, kind: EntityKind, predicate: &Fields) -> Result<Vec<Value>> {
        let query = serde_json::to_string(predicate)?;
        let response = self
            .http
            .get(self.collection_url(kind))
            .bearer_auth(&self.api_key)
            .query(&[("q", query.as_str())])
            .send()
            .await?;
        self.decode(response).await
    }

    async fn create(&self, kind: EntityKind, data: Value) -> Result<Value> {
        let response = self
            .http
            .post(self.collection_url(kind))
            .bearer_auth(&self.api_key)
            .json(&data)
            .send()
            .await?;
        self.decode(response).await
    }

    async fn bulk_create(&self, kind: EntityKind, data: Vec<Value>) -> Result<Vec<Value>> {
        let response = self
            .http
            .post(format!("{}/bulk", self.collection_url(kind)))
            .bearer_auth(&self.api_key)
            .json(&data)
            .send()
            .await?;
        self.decode(response).await
    }

    async fn update(&self, kind: EntityKind, id: &str, data: Value) -> Result<Value> {
        let response = self
            .http
            .patch(self.document_url(kind, id))
            .bearer_auth(&self.api_key)
            .json(&data)
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound {
                kind,
                id: id.to_owned(),
            });
        }
        self.decode(response).await
    }

    async fn delete(&self, kind: EntityKind, id: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.document_url(kind, id))
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound {
                kind,
                id: id.to_owned(),
            });
        }
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Backend {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}
