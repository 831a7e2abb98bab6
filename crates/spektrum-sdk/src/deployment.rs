//! Deployment lookup and AI development operations.

use serde::{Deserialize, Serialize};
use spektrum_core::{AppEntryPoint, Task};

use crate::client::{ApiRequest, SpektrumClient};
use crate::error::Result;

/// Environment whose entry point `get_app_url` reports.
const DEV_ENVIRONMENT: &str = "DEV";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublicAppUrl {
    public_app_url: String,
}

#[derive(Debug, Serialize)]
struct CodeAndDeployRequest<'a> {
    task: &'a Task,
}

fn entry_point_path(project_id: &str) -> String {
    format!("/deployment/projects/{project_id}/environments/{DEV_ENVIRONMENT}/entry-point")
}

impl SpektrumClient {
    /// Public URL of the project's DEV deployment.
    ///
    /// Only `publicAppUrl` is read from the entry-point response; the other
    /// fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SpektrumError`](crate::SpektrumError) if the request fails,
    /// the API returns a non-success status, or the body has no
    /// `publicAppUrl` string.
    pub async fn get_app_url(&self, project_id: &str) -> Result<String> {
        let entry: PublicAppUrl = self
            .execute_as(ApiRequest::get(entry_point_path(project_id)))
            .await?;
        Ok(entry.public_app_url)
    }

    /// Full entry-point record of the project's DEV deployment.
    ///
    /// # Errors
    ///
    /// Returns [`SpektrumError`](crate::SpektrumError) if the request fails,
    /// the API returns a non-success status, or the body is not an entry
    /// point.
    pub async fn get_app_entry_point(&self, project_id: &str) -> Result<AppEntryPoint> {
        self.execute_as(ApiRequest::get(entry_point_path(project_id)))
            .await
    }

    /// Hand a task to the AI module to implement and deploy.
    ///
    /// The response body is read and discarded; only the status is checked.
    ///
    /// # Errors
    ///
    /// Returns [`SpektrumError`](crate::SpektrumError) if the request fails or
    /// the API returns a non-success status.
    pub async fn code_and_deploy(&self, task: &Task) -> Result<()> {
        let request = ApiRequest::post("/ai/module/development").json(&CodeAndDeployRequest { task })?;
        self.execute(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_point_path_targets_dev() {
        assert_eq!(
            entry_point_path("p1"),
            "/deployment/projects/p1/environments/DEV/entry-point"
        );
    }

    #[test]
    fn public_app_url_ignores_other_fields() {
        let entry: PublicAppUrl = serde_json::from_value(serde_json::json!({
            "moduleId": "m1",
            "assetBaseUrl": "b",
            "publicAppUrl": "https://app.example.com"
        }))
        .unwrap();
        assert_eq!(entry.public_app_url, "https://app.example.com");
    }
}
