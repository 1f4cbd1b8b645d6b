use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Three-way dietary-safety rating for CKD patients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Safe for all CKD patients, recommended.
    Green,
    /// Limit under medical or dietitian guidance.
    Yellow,
    /// Avoid for most CKD patients.
    Red,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Green => "green",
            Level::Yellow => "yellow",
            Level::Red => "red",
        }
    }
}

/// Domain a classification query belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Food,
    Activity,
    Medicine,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Food => "food",
            ItemKind::Activity => "activity",
            ItemKind::Medicine => "medicine",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClassificationRecord {
    pub name: String,
    pub level: Level,
    pub reason: String,
    pub advice: String,
    #[serde(rename = "type", default)]
    pub kind: ItemKind,
}

impl ClassificationRecord {
    /// Synthetic record returned when no source resolves a query.
    /// This is the terminal step of the pipeline and cannot fail.
    pub fn unresolved(name: String, kind: ItemKind) -> Self {
        Self {
            name,
            level: Level::Yellow,
            reason: "暂时无法完成自动分析，无法确认该项目对肾脏健康的影响。".to_string(),
            advice: "建议咨询医生或营养师后再做决定。".to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    pub dish_name: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub nutrition_benefit: String,
}

/// Outcome of consulting a single resolution source.
///
/// Every variant causes the pipeline to fall through to the next source in
/// precedence; none of them ever reaches the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("source has no entry for the query")]
    Miss,
    #[error("source unavailable: {0}")]
    Unavailable(String),
    #[error("source returned malformed output: {0}")]
    Malformed(String),
}
