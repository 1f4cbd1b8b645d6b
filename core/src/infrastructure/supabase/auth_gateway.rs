use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    domain::{
        auth::{
            entities::{AuthSession, AuthUser},
            ports::AuthGateway,
            value_objects::Credentials,
        },
        common::entities::app_errors::CoreError,
    },
    infrastructure::supabase::SupabaseClient,
};

/// Supabase GoTrue adapter. Credentials are forwarded as-is and never
/// persisted locally.
#[derive(Debug, Clone)]
pub struct SupabaseAuthGateway {
    client: SupabaseClient,
}

#[derive(Debug, Serialize)]
struct CredentialsBody {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct GoTrueUser {
    id: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct SignUpResponse {
    id: Option<String>,
    email: Option<String>,
    user: Option<GoTrueUser>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: GoTrueUser,
}

impl SupabaseAuthGateway {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    async fn post_auth<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        credentials: Credentials,
    ) -> Result<T, CoreError> {
        let url = format!("{}{}", self.client.base_url(), path);
        let body = CredentialsBody {
            email: credentials.email,
            password: credentials.password,
        };

        let response = self
            .client
            .http()
            .post(&url)
            .header("apikey", self.client.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("GoTrue request to {} failed: {}", path, e);
                CoreError::ExternalServiceError(format!("auth request failed: {}", e))
            })?;

        let status = response.status();
        if status.is_client_error() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(CoreError::AuthRejected(error_text));
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("GoTrue error on {}: {} - {}", path, status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "auth service returned error: {} - {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            error!("Failed to parse GoTrue response from {}: {}", path, e);
            CoreError::ExternalServiceError(format!("failed to parse auth response: {}", e))
        })
    }
}

impl AuthGateway for SupabaseAuthGateway {
    async fn sign_up(&self, credentials: Credentials) -> Result<AuthUser, CoreError> {
        let response: SignUpResponse = self.post_auth("/auth/v1/signup", credentials).await?;

        // GoTrue answers with the user at the top level or nested under
        // "user" depending on whether email confirmation is enabled.
        if let Some(user) = response.user {
            return Ok(AuthUser {
                id: user.id,
                email: user.email,
            });
        }
        match (response.id, response.email) {
            (Some(id), Some(email)) => Ok(AuthUser { id, email }),
            _ => Err(CoreError::ExternalServiceError(
                "auth service returned no user".to_string(),
            )),
        }
    }

    async fn sign_in(&self, credentials: Credentials) -> Result<AuthSession, CoreError> {
        let response: TokenResponse = self
            .post_auth("/auth/v1/token?grant_type=password", credentials)
            .await?;

        Ok(AuthSession {
            user: AuthUser {
                id: response.user.id,
                email: response.user.email,
            },
            access_token: response.access_token,
        })
    }
}
