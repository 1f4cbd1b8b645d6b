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
    path = "/food-blacklist",
    tag = "classification",
    summary = "List red-rated foods",
    responses(
        (status = 200, body = Vec<ClassificationRecord>)
    )
)]
pub async fn get_food_blacklist(
    State(state): State<AppState>,
) -> Result<Response<Vec<ClassificationRecord>>, ApiError> {
    Ok(Response::OK(state.service.blacklist().await))
}
