//! # Screen flows
//!
//! One async function per user action. Each wraps exactly one call on a
//! [`RemoteCollection`] (or none, when the input is rejected locally) and
//! hands back the value the screen patches into its [`store::LocalList`].
//!
//! | Flow | Request | Local patch on `Ok` |
//! |------|---------|---------------------|
//! | [`fetch_users`] | `GET` | `LocalList::from_fetch` |
//! | [`submit_create`] | `POST`, only if the draft validates | `LocalList::append_created` |
//! | [`submit_update`] | `PUT /{id}` | `LocalList::replace_updated` |
//! | [`submit_delete`] | `DELETE /{id}` | `LocalList::remove_by_id` |
//!
//! Failures are terminal for the action: nothing is retried.

use store::{FieldErrors, RecordId, RuleSet, User, UserDraft};
use thiserror::Error;

use crate::collection::RemoteCollection;
use crate::error::{ApiError, Operation};

#[derive(Debug, Error)]
pub enum CreateError {
    /// The draft failed validation; no request was sent.
    #[error("{} field(s) need attention", .0.len())]
    Invalid(FieldErrors),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl CreateError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CreateError::Invalid(errors) => Some(errors),
            CreateError::Api(_) => None,
        }
    }
}

pub async fn fetch_users<C>(client: &C) -> Result<Vec<User>, ApiError>
where
    C: RemoteCollection<User>,
{
    match client.list().await {
        Ok(users) => {
            tracing::info!(count = users.len(), "Fetched users");
            Ok(users)
        }
        Err(e) => {
            tracing::error!("Fetch failed: {e}");
            Err(e)
        }
    }
}

/// Validate `draft` against `rules` and, if it passes, create it.
pub async fn submit_create<C>(
    client: &C,
    draft: &UserDraft,
    rules: &RuleSet,
) -> Result<User, CreateError>
where
    C: RemoteCollection<User>,
{
    let errors = rules.validate(draft);
    if !errors.is_empty() {
        tracing::debug!(fields = errors.len(), "Create rejected by validation");
        return Err(CreateError::Invalid(errors));
    }

    let created = client.create(&draft.to_user()).await.map_err(|e| {
        tracing::error!("Create failed: {e}");
        e
    })?;
    tracing::info!(id = %created.id_label(), username = %created.username, "Created user");
    Ok(created)
}

/// Send the edit dialog's working copy back under its own id.
pub async fn submit_update<C>(client: &C, user: &User) -> Result<User, ApiError>
where
    C: RemoteCollection<User>,
{
    let Some(id) = user.id.as_ref() else {
        return Err(ApiError::MissingId {
            op: Operation::Update,
        });
    };

    let updated = client.update(id, user).await.map_err(|e| {
        tracing::error!(%id, "Update failed: {e}");
        e
    })?;
    if updated.id.as_ref() != Some(id) {
        // The local replace matches on the response id, so this edit will not show.
        tracing::warn!(%id, response_id = %updated.id_label(), "Update response id differs");
    }
    tracing::info!(%id, "Updated user");
    Ok(updated)
}

pub async fn submit_delete<C>(client: &C, id: &RecordId) -> Result<(), ApiError>
where
    C: RemoteCollection<User>,
{
    client.delete(id).await.map_err(|e| {
        tracing::error!(%id, "Delete failed: {e}");
        e
    })?;
    tracing::info!(%id, "Deleted user");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryCollection;
    use store::Field;

    fn valid_draft() -> UserDraft {
        let mut draft = UserDraft::default();
        draft.set_name("Bob");
        draft.set(Field::Email, "bob@x.com".to_string());
        draft.set(Field::Phone, "5551234567".to_string());
        draft.set(Field::Street, "Main".to_string());
        draft.set(Field::City, "Town".to_string());
        draft
    }

    #[tokio::test]
    async fn test_invalid_draft_sends_nothing() {
        let client = MemoryCollection::<User>::new();
        let mut draft = valid_draft();
        draft.set_name("Bo");

        let err = submit_create(&client, &draft, &RuleSet::creator())
            .await
            .unwrap_err();

        let errors = err.field_errors().unwrap();
        assert!(errors.contains_key(&Field::Name));
        assert_eq!(errors.len(), 1);
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_create_api_failure() {
        let client = MemoryCollection::<User>::new();
        client.set_failing(Some(500));

        let err = submit_create(&client, &valid_draft(), &RuleSet::creator())
            .await
            .unwrap_err();

        assert!(err.field_errors().is_none());
        assert_eq!(err.to_string(), "Failed to create user (HTTP 500)");
    }

    #[tokio::test]
    async fn test_update_without_id_is_rejected_locally() {
        let client = MemoryCollection::<User>::new();
        let err = submit_update(&client, &User::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingId { .. }));
        assert_eq!(client.calls(), 0);
    }
}
