use store::{Record, RecordId};

use crate::error::ApiError;

/// Async access to a REST-shaped resource collection.
///
/// `list` is `GET /<collection>`, `create` is `POST /<collection>`, `update`
/// is `PUT /<collection>/{id}` and `delete` is `DELETE /<collection>/{id}`.
/// Each call is a single request with a single outcome: no retries, no
/// timeouts, no caching.
pub trait RemoteCollection<R: Record> {
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<R>, ApiError>>;
    fn create(
        &self,
        record: &R,
    ) -> impl std::future::Future<Output = Result<R, ApiError>>;
    fn update(
        &self,
        id: &RecordId,
        record: &R,
    ) -> impl std::future::Future<Output = Result<R, ApiError>>;
    fn delete(
        &self,
        id: &RecordId,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
}
