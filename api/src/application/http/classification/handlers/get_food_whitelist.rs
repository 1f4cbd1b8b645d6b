use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use kidney_compass_core::domain::classification::{
    entities::ClassificationRecord, ports::ClassificationService,
};

#[utoipa::path(
    get,
    path = "/food-whitelist",
    tag = "classification",
    summary = "List green-rated foods",
    responses(
        (status = 200, body = Vec<ClassificationRecord>)
    )
)]
pub async fn get_food_whitelist(
    State(state): State<AppState>,
) -> Result<Response<Vec<ClassificationRecord>>, ApiError> {
    Ok(Response::OK(state.service.whitelist().await))
}
