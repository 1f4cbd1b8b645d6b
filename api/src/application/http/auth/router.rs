use super::handlers::{
    login::{__path_login, login},
    signup::{__path_signup, signup},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(signup, login))]
pub struct AuthApiDoc;

pub fn auth_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    Router::new()
        .route(&format!("{root_path}/auth/signup"), post(signup))
        .route(&format!("{root_path}/auth/login"), post(login))
}
