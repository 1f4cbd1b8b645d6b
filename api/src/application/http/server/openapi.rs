use crate::application::http::{
    auth::router::AuthApiDoc, classification::router::ClassificationApiDoc,
    health::router::HealthApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kidney Compass API"
    ),
    nest(
        (path = "/api", api = ClassificationApiDoc),
        (path = "/api", api = HealthApiDoc),
        (path = "/auth", api = AuthApiDoc),
    )
)]
pub struct ApiDoc;
