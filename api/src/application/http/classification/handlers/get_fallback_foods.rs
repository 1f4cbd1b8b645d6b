use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};
use kidney_compass_core::domain::{classification::entities::ClassificationRecord, knowledge_base};

#[utoipa::path(
    get,
    path = "/fallback/foods",
    tag = "classification",
    summary = "Dump the curated food table",
    responses(
        (status = 200, body = Vec<ClassificationRecord>)
    )
)]
pub async fn get_fallback_foods() -> Result<Response<Vec<ClassificationRecord>>, ApiError> {
    Ok(Response::OK(knowledge_base::fallback_foods().to_vec()))
}
