use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use kidney_compass_core::domain::health::{entities::HealthStatus, ports::HealthService};

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Report which upstream capabilities are configured",
    responses(
        (status = 200, body = HealthStatus)
    )
)]
pub async fn get_health(State(state): State<AppState>) -> Result<Response<HealthStatus>, ApiError> {
    Ok(Response::OK(state.service.health()))
}
