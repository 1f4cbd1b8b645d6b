use kidney_compass_core::domain::classification::entities::ItemKind;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ClassifyRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "query must be between 1 and 200 characters"
    ))]
    pub query: String,

    #[serde(rename = "type", default)]
    pub kind: ItemKind,
}
