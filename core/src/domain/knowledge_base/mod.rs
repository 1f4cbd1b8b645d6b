//! Bundled curated dataset: the lowest-priority, always-available resolution
//! source. Read-only, safe for unbounded concurrent readers.

mod foods;
mod recipes;

use std::sync::LazyLock;

use crate::domain::classification::entities::{ClassificationRecord, Level, RecipeRecord};

static FOOD_ITEMS: LazyLock<Vec<ClassificationRecord>> = LazyLock::new(foods::curated_foods);
static RECIPES: LazyLock<Vec<RecipeRecord>> = LazyLock::new(recipes::curated_recipes);

pub fn fallback_foods() -> &'static [ClassificationRecord] {
    &FOOD_ITEMS
}

pub fn fallback_recipes() -> &'static [RecipeRecord] {
    &RECIPES
}

/// Exact-name lookup in the curated table.
pub fn find(name: &str) -> Option<&'static ClassificationRecord> {
    FOOD_ITEMS.iter().find(|item| item.name == name)
}

pub fn by_level(level: Level) -> Vec<ClassificationRecord> {
    FOOD_ITEMS
        .iter()
        .filter(|item| item.level == level)
        .cloned()
        .collect()
}

pub fn whitelist() -> Vec<ClassificationRecord> {
    by_level(Level::Green)
}

pub fn blacklist() -> Vec<ClassificationRecord> {
    by_level(Level::Red)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn whitelist_and_blacklist_are_disjoint() {
        let green: HashSet<_> = whitelist().into_iter().map(|i| i.name).collect();
        let red: HashSet<_> = blacklist().into_iter().map(|i| i.name).collect();
        assert!(green.is_disjoint(&red));
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = fallback_foods().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names.len(), fallback_foods().len());
    }

    #[test]
    fn apple_is_green() {
        let apple = find("苹果").expect("curated table must contain 苹果");
        assert_eq!(apple.level, Level::Green);
    }

    #[test]
    fn hotpot_preset_is_yellow() {
        let hotpot = find("火锅").expect("curated table must contain 火锅");
        assert_eq!(hotpot.level, Level::Yellow);
        assert!(hotpot.reason.starts_with("火锅通常含有较高的盐分和嘌呤"));
    }

    #[test]
    fn recipes_are_complete() {
        assert!(!fallback_recipes().is_empty());
        for recipe in fallback_recipes() {
            assert!(!recipe.dish_name.is_empty());
            assert!(!recipe.ingredients.is_empty());
            assert!(!recipe.steps.is_empty());
            assert!(!recipe.nutrition_benefit.is_empty());
        }
    }
}
