use crate::{
    domain::{
        classification::{
            entities::{ClassificationRecord, ItemKind, Level, RecipeRecord},
            ports::{ClassificationRepository, RecipeRepository},
        },
        common::entities::app_errors::CoreError,
    },
    infrastructure::supabase::{
        SupabaseClient,
        mappers::{FoodClassificationRow, RecipeRow},
    },
};

const CLASSIFICATIONS_TABLE: &str = "food_classifications";
const RECIPES_TABLE: &str = "recipes";

#[derive(Debug, Clone)]
pub struct SupabaseClassificationRepository {
    client: SupabaseClient,
}

impl SupabaseClassificationRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

impl ClassificationRepository for SupabaseClassificationRepository {
    async fn find_by_name(
        &self,
        name: String,
        kind: ItemKind,
    ) -> Result<Option<ClassificationRecord>, CoreError> {
        let rows: Vec<FoodClassificationRow> = self
            .client
            .select(
                CLASSIFICATIONS_TABLE,
                &[("name", &name), ("type", kind.as_str())],
            )
            .await?;

        Ok(rows.into_iter().next().map(ClassificationRecord::from))
    }

    async fn find_by_level(&self, level: Level) -> Result<Vec<ClassificationRecord>, CoreError> {
        let rows: Vec<FoodClassificationRow> = self
            .client
            .select(CLASSIFICATIONS_TABLE, &[("level", level.as_str())])
            .await?;

        Ok(rows.into_iter().map(ClassificationRecord::from).collect())
    }

    async fn insert(&self, record: ClassificationRecord) -> Result<(), CoreError> {
        self.client
            .insert(CLASSIFICATIONS_TABLE, &FoodClassificationRow::from(record))
            .await
    }
}

#[derive(Debug, Clone)]
pub struct SupabaseRecipeRepository {
    client: SupabaseClient,
}

impl SupabaseRecipeRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

impl RecipeRepository for SupabaseRecipeRepository {
    async fn list(&self) -> Result<Vec<RecipeRecord>, CoreError> {
        let rows: Vec<RecipeRow> = self.client.select(RECIPES_TABLE, &[]).await?;

        Ok(rows.into_iter().map(RecipeRecord::from).collect())
    }

    async fn insert(&self, record: RecipeRecord) -> Result<(), CoreError> {
        self.client
            .insert(RECIPES_TABLE, &RecipeRow::from(record))
            .await
    }
}
