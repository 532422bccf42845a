use super::utils::OrgCounts;
use crate::api::{ApiClient, ApiError, Department, EmployeeProfile, Poste};
use leptos::use_context;
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn from_context() -> Self {
        Self::new_with_client(Rc::new(
            use_context::<ApiClient>().unwrap_or_else(ApiClient::new),
        ))
    }

    pub fn client(&self) -> Rc<ApiClient> {
        Rc::clone(&self.client)
    }

    /// One list call per collection; the first failure aborts.
    pub async fn org_counts(&self) -> Result<OrgCounts, ApiError> {
        let departements = self.client.list_entities::<Department>().await?.len();
        let postes = self.client.list_entities::<Poste>().await?.len();
        let employes = self.client.list_entities::<EmployeeProfile>().await?.len();
        Ok(OrgCounts {
            departements,
            postes,
            employes,
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn counts_each_collection() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/users/departements/");
            then.status(200)
                .json_body(json!([{ "id": 1, "nom": "RH" }, { "id": 2, "nom": "IT" }]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/users/postes/");
            then.status(200).json_body(json!({
                "count": 1,
                "results": [{ "id": 1, "titre": "Dev", "salaire_de_base": "3000.00" }]
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/users/employe-profiles/");
            then.status(200).json_body(json!([]));
        });
        let repo = DashboardRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        let counts = repo.org_counts().await.unwrap();

        assert_eq!(
            counts,
            OrgCounts {
                departements: 2,
                postes: 1,
                employes: 0
            }
        );
    }
}
