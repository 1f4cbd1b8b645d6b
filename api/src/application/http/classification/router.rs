use super::handlers::{
    classify::{__path_classify, classify},
    generate_recipe::{__path_generate_recipe, generate_recipe},
    get_fallback_foods::{__path_get_fallback_foods, get_fallback_foods},
    get_fallback_recipes::{__path_get_fallback_recipes, get_fallback_recipes},
    get_food_blacklist::{__path_get_food_blacklist, get_food_blacklist},
    get_food_whitelist::{__path_get_food_whitelist, get_food_whitelist},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    classify,
    generate_recipe,
    get_food_whitelist,
    get_food_blacklist,
    get_fallback_foods,
    get_fallback_recipes
))]
pub struct ClassificationApiDoc;

pub fn classification_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    Router::new()
        .route(&format!("{root_path}/api/classify"), post(classify))
        .route(&format!("{root_path}/api/recipe"), post(generate_recipe))
        .route(
            &format!("{root_path}/api/food-whitelist"),
            get(get_food_whitelist),
        )
        .route(
            &format!("{root_path}/api/food-blacklist"),
            get(get_food_blacklist),
        )
        .route(
            &format!("{root_path}/api/fallback/foods"),
            get(get_fallback_foods),
        )
        .route(
            &format!("{root_path}/api/fallback/recipes"),
            get(get_fallback_recipes),
        )
}
