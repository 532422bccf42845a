use crate::api::{ApiClient, ApiError, OrgEntity};
use leptos::use_context;
use std::{marker::PhantomData, rc::Rc};

/// Result of deleting several records one request at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BulkDeleteOutcome {
    pub deleted: Vec<i64>,
    pub failed: Vec<(i64, ApiError)>,
}

impl BulkDeleteOutcome {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn success_message(&self) -> Option<String> {
        match self.deleted.len() {
            0 => None,
            1 => Some("1 élément supprimé.".to_string()),
            n => Some(format!("{} éléments supprimés.", n)),
        }
    }

    pub fn failure_message(&self) -> Option<String> {
        if self.failed.is_empty() {
            return None;
        }
        let details = self
            .failed
            .iter()
            .map(|(id, err)| format!("#{} ({})", id, err))
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!("Échec de la suppression pour : {}", details))
    }
}

pub struct CrudRepository<E> {
    client: Rc<ApiClient>,
    _entity: PhantomData<E>,
}

impl<E> Clone for CrudRepository<E> {
    fn clone(&self) -> Self {
        Self {
            client: Rc::clone(&self.client),
            _entity: PhantomData,
        }
    }
}

impl<E: OrgEntity> CrudRepository<E> {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }

    pub fn from_context() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::new_with_client(Rc::new(api))
    }

    pub async fn list(&self) -> Result<Vec<E>, ApiError> {
        self.client.list_entities::<E>().await
    }

    pub async fn get(&self, id: i64) -> Result<E, ApiError> {
        self.client.get_entity::<E>(id).await
    }

    pub async fn create(&self, payload: E::Payload) -> Result<E, ApiError> {
        self.client.create_entity::<E>(&payload).await
    }

    pub async fn update(&self, id: i64, payload: E::Payload) -> Result<E, ApiError> {
        self.client.update_entity::<E>(id, &payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_entity::<E>(id).await
    }

    /// Deletes each id in turn. A failure is recorded and the loop goes on.
    pub async fn bulk_delete(&self, ids: &[i64]) -> BulkDeleteOutcome {
        let mut outcome = BulkDeleteOutcome::default();
        for &id in ids {
            match self.delete(id).await {
                Ok(()) => outcome.deleted.push(id),
                Err(err) => {
                    log::warn!("Bulk delete of {} #{} failed: {}", E::COLLECTION, id, err);
                    outcome.failed.push((id, err));
                }
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_reflect_partial_results() {
        let outcome = BulkDeleteOutcome {
            deleted: vec![1, 3],
            failed: vec![(2, ApiError::validation("Département utilisé par des postes."))],
        };
        assert!(!outcome.is_complete());
        assert_eq!(outcome.success_message().as_deref(), Some("2 éléments supprimés."));
        assert_eq!(
            outcome.failure_message().as_deref(),
            Some("Échec de la suppression pour : #2 (Département utilisé par des postes.)")
        );
        assert!(BulkDeleteOutcome::default().success_message().is_none());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Department;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn bulk_delete_reports_failures_and_keeps_going() {
        let server = MockServer::start_async().await;
        let first = server.mock(|when, then| {
            when.method(DELETE).path("/api/users/departements/1/");
            then.status(204);
        });
        let second = server.mock(|when, then| {
            when.method(DELETE).path("/api/users/departements/2/");
            then.status(400)
                .json_body(json!({ "error": "Département utilisé par des postes." }));
        });
        let third = server.mock(|when, then| {
            when.method(DELETE).path("/api/users/departements/3/");
            then.status(204);
        });

        let repo = CrudRepository::<Department>::new_with_client(Rc::new(
            ApiClient::new_with_base_url(server.url("/api")),
        ));
        let outcome = repo.bulk_delete(&[1, 2, 3]).await;

        first.assert();
        second.assert();
        third.assert();
        assert_eq!(outcome.deleted, vec![1, 3]);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].0, 2);
        assert_eq!(
            outcome.failed[0].1.to_string(),
            "Département utilisé par des postes."
        );
    }
}
