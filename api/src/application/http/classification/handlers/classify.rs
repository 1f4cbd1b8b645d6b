use axum::extract::State;

use crate::application::http::{
    classification::validators::ClassifyRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use kidney_compass_core::domain::classification::{
    entities::ClassificationRecord, ports::ClassificationService, value_objects::ClassifyInput,
};

#[utoipa::path(
    post,
    path = "/classify",
    tag = "classification",
    summary = "Classify a food, activity or medicine for CKD patients",
    description = "Resolves the query through the store, the LLM and the curated dataset, in that order",
    responses(
        (status = 200, body = ClassificationRecord)
    ),
    request_body = ClassifyRequest
)]
pub async fn classify(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ClassifyRequest>,
) -> Result<Response<ClassificationRecord>, ApiError> {
    let record = state
        .service
        .classify(ClassifyInput {
            query: payload.query,
            kind: payload.kind,
        })
        .await;

    Ok(Response::OK(record))
}
