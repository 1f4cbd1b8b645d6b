pub mod classify;
pub mod generate_recipe;
pub mod get_fallback_foods;
pub mod get_fallback_recipes;
pub mod get_food_blacklist;
pub mod get_food_whitelist;
