use std::future::Future;

use crate::domain::{
    classification::{
        entities::{ClassificationRecord, ItemKind, Level, RecipeRecord},
        value_objects::ClassifyInput,
    },
    common::entities::app_errors::CoreError,
};

/// Repository trait for persisted classification rows.
///
/// Only equality-filtered reads and single-row inserts; the store's own
/// concurrency control is trusted, nothing is grouped transactionally.
#[cfg_attr(test, mockall::automock)]
pub trait ClassificationRepository: Send + Sync {
    fn find_by_name(
        &self,
        name: String,
        kind: ItemKind,
    ) -> impl Future<Output = Result<Option<ClassificationRecord>, CoreError>> + Send;

    fn find_by_level(
        &self,
        level: Level,
    ) -> impl Future<Output = Result<Vec<ClassificationRecord>, CoreError>> + Send;

    fn insert(
        &self,
        record: ClassificationRecord,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Repository trait for persisted recipe rows.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<RecipeRecord>, CoreError>> + Send;

    fn insert(&self, record: RecipeRecord) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// LLM client trait for structured generation.
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Uniform index selection over a non-empty slice, injectable so fallback
/// sampling is deterministic under test.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// `len` must be non-zero.
    fn pick_index(&self, len: usize) -> usize;
}

/// Service trait for the classification resolution pipeline.
#[cfg_attr(test, mockall::automock)]
pub trait ClassificationService: Send + Sync {
    /// Resolves a query against store, LLM and static knowledge base in that
    /// order. Infallible: the synthetic default terminates the pipeline.
    fn classify(
        &self,
        input: ClassifyInput,
    ) -> impl Future<Output = ClassificationRecord> + Send;

    fn whitelist(&self) -> impl Future<Output = Vec<ClassificationRecord>> + Send;

    fn blacklist(&self) -> impl Future<Output = Vec<ClassificationRecord>> + Send;
}

/// Service trait for kidney-friendly recipe generation.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    /// Same precedence as classification; the static recipe table guarantees
    /// a result.
    fn generate_recipe(&self) -> impl Future<Output = RecipeRecord> + Send;
}
