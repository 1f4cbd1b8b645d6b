pub mod auth_gateway;
pub mod mappers;
pub mod repositories;

use serde::{Serialize, de::DeserializeOwned};
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

pub use auth_gateway::SupabaseAuthGateway;
pub use repositories::{SupabaseClassificationRepository, SupabaseRecipeRepository};

/// Thin PostgREST client scoped to one Supabase project.
///
/// Holds the project URL and the service API key; every call authenticates
/// with the key both as `apikey` and bearer token, the way the Supabase REST
/// surface expects.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl SupabaseClient {
    pub fn new(url: String, api_key: String) -> Self {
        Self {
            base_url: url.trim_end_matches('/').to_string(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// Reads rows from `table`, equality-filtered by the given column/value
    /// pairs.
    pub(crate) async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[(&str, &str)],
    ) -> Result<Vec<T>, CoreError> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let query: Vec<(String, String)> = std::iter::once(("select".to_string(), "*".to_string()))
            .chain(
                filters
                    .iter()
                    .map(|(column, value)| (column.to_string(), format!("eq.{}", value))),
            )
            .collect();

        let response = self
            .client
            .get(&url)
            .query(&query)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| {
                error!("Supabase request to {} failed: {}", table, e);
                CoreError::ExternalServiceError(format!("store request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Supabase error on {}: {} - {}", table, status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "store returned error: {} - {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            error!("Failed to parse Supabase response from {}: {}", table, e);
            CoreError::ExternalServiceError(format!("failed to parse store response: {}", e))
        })
    }

    /// Inserts one row into `table`. The response body is not requested.
    pub(crate) async fn insert<T: Serialize>(&self, table: &str, row: &T) -> Result<(), CoreError> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await
            .map_err(|e| {
                error!("Supabase insert into {} failed: {}", table, e);
                CoreError::ExternalServiceError(format!("store request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!(
                "Supabase insert error on {}: {} - {}",
                table, status, error_text
            );
            return Err(CoreError::ExternalServiceError(format!(
                "store returned error: {} - {}",
                status, error_text
            )));
        }

        Ok(())
    }
}
