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
    entities::AuthUser, ports::AuthService, value_objects::Credentials,
};

#[utoipa::path(
    post,
    path = "/signup",
    tag = "auth",
    summary = "Register a new account",
    description = "Forwards the registration to the identity provider",
    responses(
        (status = 201, body = AuthUser)
    ),
    request_body = CredentialsRequest
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CredentialsRequest>,
) -> Result<Response<AuthUser>, ApiError> {
    let user = state
        .service
        .sign_up(Credentials {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(user))
}
