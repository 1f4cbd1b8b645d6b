use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use kidney_compass_core::domain::classification::{
    entities::RecipeRecord, ports::RecipeService,
};

#[utoipa::path(
    post,
    path = "/recipe",
    tag = "classification",
    summary = "Generate a kidney-friendly recipe",
    description = "Samples a stored recipe, asks the LLM for a new one, or falls back to the curated set",
    responses(
        (status = 200, body = RecipeRecord)
    )
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
) -> Result<Response<RecipeRecord>, ApiError> {
    let recipe = state.service.generate_recipe().await;
    Ok(Response::OK(recipe))
}
