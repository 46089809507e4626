//! # HTTP collection client
//!
//! [`HttpCollection`] is the [`RemoteCollection`] used by the running front
//! end. It speaks JSON to the collection URL from [`store::config::ApiConfig`]
//! through `reqwest`, which uses the browser's `fetch` on WASM and hyper on
//! native targets.
//!
//! Every method maps failures onto [`ApiError`]:
//!
//! | Failure | Variant |
//! |---------|---------|
//! | no response at all | [`ApiError::Transport`] |
//! | non-2xx status | [`ApiError::Status`] |
//! | body is not the expected JSON | [`ApiError::Decode`] |
//!
//! The response body of a `DELETE` is ignored.

use std::marker::PhantomData;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use store::config::ApiConfig;
use store::{Record, RecordId};

use crate::collection::RemoteCollection;
use crate::error::{ApiError, Operation};

/// JSON-over-HTTP access to one collection.
#[derive(Clone, Debug)]
pub struct HttpCollection<R> {
    client: Client,
    url: String,
    _record: PhantomData<fn() -> R>,
}

impl<R> HttpCollection<R> {
    /// Client for the collection at `url` (e.g. `https://host/users`).
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into().trim_end_matches('/').to_string(),
            _record: PhantomData,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.collection_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn item_url(&self, id: &RecordId) -> String {
        format!("{}/{}", self.url, id)
    }
}

fn check(op: Operation, result: Result<Response, reqwest::Error>) -> Result<Response, ApiError> {
    let response = result.map_err(|e| ApiError::transport(op, e))?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            op,
            status: status.as_u16(),
        });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(op: Operation, response: Response) -> Result<T, ApiError> {
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::transport(op, e))?;
    serde_json::from_str(&body).map_err(|source| ApiError::Decode { op, source })
}

impl<R: Record> RemoteCollection<R> for HttpCollection<R> {
    async fn list(&self) -> Result<Vec<R>, ApiError> {
        let op = Operation::List;
        tracing::debug!(url = %self.url, "GET collection");
        let response = check(op, self.client.get(&self.url).send().await)?;
        decode(op, response).await
    }

    async fn create(&self, record: &R) -> Result<R, ApiError> {
        let op = Operation::Create;
        tracing::debug!(url = %self.url, "POST collection");
        let response = check(op, self.client.post(&self.url).json(record).send().await)?;
        decode(op, response).await
    }

    async fn update(&self, id: &RecordId, record: &R) -> Result<R, ApiError> {
        let op = Operation::Update;
        let url = self.item_url(id);
        tracing::debug!(%url, "PUT record");
        let response = check(op, self.client.put(&url).json(record).send().await)?;
        decode(op, response).await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), ApiError> {
        let op = Operation::Delete;
        let url = self.item_url(id);
        tracing::debug!(%url, "DELETE record");
        check(op, self.client.delete(&url).send().await)?;
        Ok(())
    }
}
