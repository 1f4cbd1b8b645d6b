use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};
use kidney_compass_core::domain::{classification::entities::RecipeRecord, knowledge_base};

#[utoipa::path(
    get,
    path = "/fallback/recipes",
    tag = "classification",
    summary = "Dump the curated recipe table",
    responses(
        (status = 200, body = Vec<RecipeRecord>)
    )
)]
pub async fn get_fallback_recipes() -> Result<Response<Vec<RecipeRecord>>, ApiError> {
    Ok(Response::OK(knowledge_base::fallback_recipes().to_vec()))
}
