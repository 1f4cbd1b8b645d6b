use axum::extract::State;

use crate::application::http::{
    auth::validators::CredentialsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use kidney_compass_core::domain::auth::{
    entities::AuthSession, ports::AuthService, value_objects::Credentials,
};

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    summary = "Log in with email and password",
    description = "Exchanges credentials for an access token at the identity provider",
    responses(
        (status = 200, body = AuthSession)
    ),
    request_body = CredentialsRequest
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CredentialsRequest>,
) -> Result<Response<AuthSession>, ApiError> {
    let session = state
        .service
        .sign_in(Credentials {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(session))
}
