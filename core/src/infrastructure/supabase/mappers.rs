use serde::{Deserialize, Serialize};

use crate::domain::classification::entities::{
    ClassificationRecord, ItemKind, Level, RecipeRecord,
};

/// Row shape of the `food_classifications` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodClassificationRow {
    pub name: String,
    pub level: Level,
    pub reason: String,
    pub advice: String,
    #[serde(rename = "type", default)]
    pub kind: ItemKind,
}

impl From<FoodClassificationRow> for ClassificationRecord {
    fn from(row: FoodClassificationRow) -> Self {
        Self {
            name: row.name,
            level: row.level,
            reason: row.reason,
            advice: row.advice,
            kind: row.kind,
        }
    }
}

impl From<ClassificationRecord> for FoodClassificationRow {
    fn from(record: ClassificationRecord) -> Self {
        Self {
            name: record.name,
            level: record.level,
            reason: record.reason,
            advice: record.advice,
            kind: record.kind,
        }
    }
}

/// Row shape of the `recipes` table. List-valued fields are persisted as
/// comma-joined text columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRow {
    pub dish_name: String,
    pub tags: String,
    pub ingredients: String,
    pub steps: String,
    pub nutrition_benefit: String,
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

impl From<RecipeRow> for RecipeRecord {
    fn from(row: RecipeRow) -> Self {
        Self {
            dish_name: row.dish_name,
            tags: split_list(&row.tags),
            ingredients: split_list(&row.ingredients),
            steps: split_list(&row.steps),
            nutrition_benefit: row.nutrition_benefit,
        }
    }
}

impl From<RecipeRecord> for RecipeRow {
    fn from(record: RecipeRecord) -> Self {
        Self {
            dish_name: record.dish_name,
            tags: record.tags.join(","),
            ingredients: record.ingredients.join(","),
            steps: record.steps.join(","),
            nutrition_benefit: record.nutrition_benefit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_row_lists_survive_the_round_trip() {
        let record = RecipeRecord {
            dish_name: "清蒸鲈鱼".to_string(),
            tags: vec!["低钠".to_string(), "优质蛋白".to_string()],
            ingredients: vec!["鲈鱼 300克".to_string(), "姜丝 适量".to_string()],
            steps: vec!["处理鱼".to_string(), "蒸8分钟".to_string()],
            nutrition_benefit: "优质蛋白易吸收".to_string(),
        };

        let row = RecipeRow::from(record.clone());
        assert_eq!(row.tags, "低钠,优质蛋白");
        assert_eq!(RecipeRecord::from(row), record);
    }

    #[test]
    fn empty_list_columns_map_to_empty_vectors() {
        let row = RecipeRow {
            dish_name: "白粥".to_string(),
            tags: String::new(),
            ingredients: "大米 50克".to_string(),
            steps: "煮30分钟".to_string(),
            nutrition_benefit: "温和易消化".to_string(),
        };

        let record = RecipeRecord::from(row);
        assert!(record.tags.is_empty());
        assert_eq!(record.ingredients, vec!["大米 50克"]);
    }
}
