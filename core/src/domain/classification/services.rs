use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{
    auth::ports::AuthGateway,
    classification::{
        entities::{ClassificationRecord, Level, RecipeRecord, SourceError},
        ports::{
            ClassificationRepository, ClassificationService, LlmClient, RandomSource,
            RecipeRepository, RecipeService,
        },
        prompts, schema,
        value_objects::ClassifyInput,
    },
    common::services::Service,
    knowledge_base,
};

/// Shape the LLM is constrained to by
/// [`schema::classification_response_schema`]. Decoding through [`Level`]
/// rejects any out-of-range classification.
#[derive(Debug, Deserialize)]
struct LlmClassification {
    level: Level,
    reason: String,
    advice: String,
}

impl<CR, RR, L, A, RS> Service<CR, RR, L, A, RS>
where
    CR: ClassificationRepository,
    RR: RecipeRepository,
    L: LlmClient,
    A: AuthGateway,
    RS: RandomSource,
{
    async fn classify_from_store(
        &self,
        input: &ClassifyInput,
    ) -> Result<ClassificationRecord, SourceError> {
        let repository = self
            .classification_repository
            .as_ref()
            .ok_or_else(|| SourceError::Unavailable("store is not configured".to_string()))?;

        repository
            .find_by_name(input.query.clone(), input.kind)
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?
            .ok_or(SourceError::Miss)
    }

    async fn classify_from_llm(
        &self,
        input: &ClassifyInput,
    ) -> Result<ClassificationRecord, SourceError> {
        let llm = self
            .llm_client
            .as_ref()
            .ok_or_else(|| SourceError::Unavailable("LLM client is not configured".to_string()))?;

        let prompt = prompts::classification_prompt(&input.query, input.kind);
        let raw = llm
            .generate_with_text(prompt, schema::classification_response_schema())
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        let parsed: LlmClassification =
            serde_json::from_str(&raw).map_err(|e| SourceError::Malformed(e.to_string()))?;

        Ok(ClassificationRecord {
            name: input.query.clone(),
            level: parsed.level,
            reason: parsed.reason,
            advice: parsed.advice,
            kind: input.kind,
        })
    }

    fn classify_from_knowledge_base(
        &self,
        input: &ClassifyInput,
    ) -> Result<ClassificationRecord, SourceError> {
        knowledge_base::find(&input.query)
            .cloned()
            .ok_or(SourceError::Miss)
    }

    /// Best-effort insert so future identical queries hit the store path.
    /// Duplicate inserts from concurrent misses are accepted.
    async fn persist_classification(&self, record: &ClassificationRecord) {
        let Some(repository) = self.classification_repository.as_ref() else {
            return;
        };
        if let Err(e) = repository.insert(record.clone()).await {
            warn!(name = %record.name, "failed to persist AI classification: {}", e);
        }
    }

    async fn recipe_from_store(&self) -> Result<RecipeRecord, SourceError> {
        let repository = self
            .recipe_repository
            .as_ref()
            .ok_or_else(|| SourceError::Unavailable("store is not configured".to_string()))?;

        let mut rows = repository
            .list()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;
        if rows.is_empty() {
            return Err(SourceError::Miss);
        }

        let index = self.random_source.pick_index(rows.len());
        Ok(rows.swap_remove(index))
    }

    async fn recipe_from_llm(&self) -> Result<RecipeRecord, SourceError> {
        let llm = self
            .llm_client
            .as_ref()
            .ok_or_else(|| SourceError::Unavailable("LLM client is not configured".to_string()))?;

        let raw = llm
            .generate_with_text(prompts::recipe_prompt(), schema::recipe_response_schema())
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        serde_json::from_str(&raw).map_err(|e| SourceError::Malformed(e.to_string()))
    }

    async fn persist_recipe(&self, recipe: &RecipeRecord) {
        let Some(repository) = self.recipe_repository.as_ref() else {
            return;
        };
        if let Err(e) = repository.insert(recipe.clone()).await {
            warn!(dish = %recipe.dish_name, "failed to persist AI recipe: {}", e);
        }
    }

    /// Level filter backing the whitelist and blacklist views. Store errors
    /// and empty store results fall back to the curated table.
    async fn records_by_level(&self, level: Level) -> Vec<ClassificationRecord> {
        if let Some(repository) = self.classification_repository.as_ref() {
            match repository.find_by_level(level).await {
                Ok(rows) if !rows.is_empty() => return rows,
                Ok(_) => {}
                Err(e) => warn!("store level filter failed, using curated table: {}", e),
            }
        }
        knowledge_base::by_level(level)
    }
}

impl<CR, RR, L, A, RS> ClassificationService for Service<CR, RR, L, A, RS>
where
    CR: ClassificationRepository,
    RR: RecipeRepository,
    L: LlmClient,
    A: AuthGateway,
    RS: RandomSource,
{
    async fn classify(&self, input: ClassifyInput) -> ClassificationRecord {
        // Strict precedence: store, LLM, curated table, synthetic default.
        // Every source failure is absorbed here; the caller always gets a
        // well-formed record.
        match self.classify_from_store(&input).await {
            Ok(record) => return record,
            Err(e) => debug!(query = %input.query, "store lookup fell through: {}", e),
        }

        match self.classify_from_llm(&input).await {
            Ok(record) => {
                self.persist_classification(&record).await;
                return record;
            }
            Err(e) => debug!(query = %input.query, "LLM classification fell through: {}", e),
        }

        match self.classify_from_knowledge_base(&input) {
            Ok(record) => return record,
            Err(e) => debug!(query = %input.query, "curated lookup fell through: {}", e),
        }

        ClassificationRecord::unresolved(input.query, input.kind)
    }

    async fn whitelist(&self) -> Vec<ClassificationRecord> {
        self.records_by_level(Level::Green).await
    }

    async fn blacklist(&self) -> Vec<ClassificationRecord> {
        self.records_by_level(Level::Red).await
    }
}

impl<CR, RR, L, A, RS> RecipeService for Service<CR, RR, L, A, RS>
where
    CR: ClassificationRepository,
    RR: RecipeRepository,
    L: LlmClient,
    A: AuthGateway,
    RS: RandomSource,
{
    async fn generate_recipe(&self) -> RecipeRecord {
        match self.recipe_from_store().await {
            Ok(recipe) => return recipe,
            Err(e) => debug!("store recipe sampling fell through: {}", e),
        }

        match self.recipe_from_llm().await {
            Ok(recipe) => {
                self.persist_recipe(&recipe).await;
                return recipe;
            }
            Err(e) => debug!("LLM recipe generation fell through: {}", e),
        }

        let recipes = knowledge_base::fallback_recipes();
        recipes[self.random_source.pick_index(recipes.len())].clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::{
        auth::{
            entities::{AuthSession, AuthUser},
            value_objects::Credentials,
        },
        classification::entities::ItemKind,
        common::entities::app_errors::CoreError,
    };

    #[derive(Default)]
    struct FakeStore {
        rows: Vec<ClassificationRecord>,
        fail_reads: bool,
        fail_inserts: bool,
        inserts: Mutex<Vec<ClassificationRecord>>,
    }

    impl ClassificationRepository for FakeStore {
        async fn find_by_name(
            &self,
            name: String,
            kind: ItemKind,
        ) -> Result<Option<ClassificationRecord>, CoreError> {
            if self.fail_reads {
                return Err(CoreError::ExternalServiceError("store offline".to_string()));
            }
            Ok(self
                .rows
                .iter()
                .find(|r| r.name == name && r.kind == kind)
                .cloned())
        }

        async fn find_by_level(
            &self,
            level: Level,
        ) -> Result<Vec<ClassificationRecord>, CoreError> {
            if self.fail_reads {
                return Err(CoreError::ExternalServiceError("store offline".to_string()));
            }
            Ok(self
                .rows
                .iter()
                .filter(|r| r.level == level)
                .cloned()
                .collect())
        }

        async fn insert(&self, record: ClassificationRecord) -> Result<(), CoreError> {
            if self.fail_inserts {
                return Err(CoreError::ExternalServiceError("insert refused".to_string()));
            }
            self.inserts.lock().unwrap().push(record);
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeRecipeStore {
        rows: Vec<RecipeRecord>,
        fail_reads: bool,
        inserts: Mutex<Vec<RecipeRecord>>,
    }

    impl RecipeRepository for FakeRecipeStore {
        async fn list(&self) -> Result<Vec<RecipeRecord>, CoreError> {
            if self.fail_reads {
                return Err(CoreError::ExternalServiceError("store offline".to_string()));
            }
            Ok(self.rows.clone())
        }

        async fn insert(&self, record: RecipeRecord) -> Result<(), CoreError> {
            self.inserts.lock().unwrap().push(record);
            Ok(())
        }
    }

    struct FakeLlm {
        response: Result<String, CoreError>,
        calls: Mutex<usize>,
    }

    impl FakeLlm {
        fn replying(json: &str) -> Self {
            Self {
                response: Ok(json.to_string()),
                calls: Mutex::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(CoreError::ExternalServiceError("quota exceeded".to_string())),
                calls: Mutex::new(0),
            }
        }

        fn call_count(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    impl LlmClient for FakeLlm {
        async fn generate_with_text(
            &self,
            _prompt: String,
            _response_schema: serde_json::Value,
        ) -> Result<String, CoreError> {
            *self.calls.lock().unwrap() += 1;
            self.response.clone()
        }
    }

    struct NoAuth;

    impl AuthGateway for NoAuth {
        async fn sign_up(&self, _credentials: Credentials) -> Result<AuthUser, CoreError> {
            unreachable!("auth is not exercised by pipeline tests")
        }

        async fn sign_in(&self, _credentials: Credentials) -> Result<AuthSession, CoreError> {
            unreachable!("auth is not exercised by pipeline tests")
        }
    }

    struct FixedIndex(usize);

    impl RandomSource for FixedIndex {
        fn pick_index(&self, len: usize) -> usize {
            self.0 % len
        }
    }

    type TestService = Service<FakeStore, FakeRecipeStore, FakeLlm, NoAuth, FixedIndex>;

    fn bare_service() -> TestService {
        Service::new(None, None, None, None, FixedIndex(0))
    }

    fn food_query(query: &str) -> ClassifyInput {
        ClassifyInput {
            query: query.to_string(),
            kind: ItemKind::Food,
        }
    }

    fn stored(name: &str, level: Level) -> ClassificationRecord {
        ClassificationRecord {
            name: name.to_string(),
            level,
            reason: "stored reason".to_string(),
            advice: "stored advice".to_string(),
            kind: ItemKind::Food,
        }
    }

    #[tokio::test]
    async fn store_row_wins_over_llm_and_curated_table() {
        let mut service = bare_service();
        service.classification_repository = Some(FakeStore {
            rows: vec![stored("苹果", Level::Red)],
            ..FakeStore::default()
        });
        service.llm_client = Some(FakeLlm::replying(
            r#"{"level":"green","reason":"r","advice":"a"}"#,
        ));

        let record = service.classify(food_query("苹果")).await;

        assert_eq!(record.level, Level::Red);
        assert_eq!(record.reason, "stored reason");
        assert_eq!(service.llm_client.as_ref().unwrap().call_count(), 0);
    }

    #[tokio::test]
    async fn llm_result_is_returned_and_persisted_on_store_miss() {
        let mut service = bare_service();
        service.classification_repository = Some(FakeStore::default());
        service.llm_client = Some(FakeLlm::replying(
            r#"{"level":"yellow","reason":"钠含量较高","advice":"限量食用"}"#,
        ));

        let record = service.classify(food_query("某种新食物")).await;

        assert_eq!(record.name, "某种新食物");
        assert_eq!(record.level, Level::Yellow);
        assert_eq!(record.kind, ItemKind::Food);

        let inserts = service
            .classification_repository
            .as_ref()
            .unwrap()
            .inserts
            .lock()
            .unwrap()
            .clone();
        assert_eq!(inserts, vec![record]);
    }

    #[tokio::test]
    async fn failed_persist_does_not_affect_llm_result() {
        let mut service = bare_service();
        service.classification_repository = Some(FakeStore {
            fail_inserts: true,
            ..FakeStore::default()
        });
        service.llm_client = Some(FakeLlm::replying(
            r#"{"level":"green","reason":"r","advice":"a"}"#,
        ));

        let record = service.classify(food_query("某种新食物")).await;
        assert_eq!(record.level, Level::Green);
    }

    #[tokio::test]
    async fn llm_failure_falls_back_to_curated_table() {
        let mut service = bare_service();
        service.classification_repository = Some(FakeStore {
            fail_reads: true,
            ..FakeStore::default()
        });
        service.llm_client = Some(FakeLlm::failing());

        let record = service.classify(food_query("火锅")).await;

        assert_eq!(record.level, Level::Yellow);
        assert!(record.reason.starts_with("火锅通常含有较高的盐分和嘌呤"));
    }

    #[tokio::test]
    async fn malformed_llm_output_is_treated_as_a_miss() {
        let mut service = bare_service();
        service.llm_client = Some(FakeLlm::replying(
            r#"{"level":"purple","reason":"r","advice":"a"}"#,
        ));

        let record = service.classify(food_query("未知项从不存在")).await;

        assert_eq!(record.level, Level::Yellow);
        assert_eq!(
            record,
            ClassificationRecord::unresolved("未知项从不存在".to_string(), ItemKind::Food)
        );
    }

    #[tokio::test]
    async fn curated_hit_matches_the_table_exactly() {
        let record = bare_service().classify(food_query("苹果")).await;
        assert_eq!(&record, knowledge_base::find("苹果").unwrap());
        assert_eq!(record.level, Level::Green);
    }

    #[tokio::test]
    async fn unresolved_query_is_idempotent() {
        let service = bare_service();
        let first = service.classify(food_query("未知项从不存在")).await;
        let second = service.classify(food_query("未知项从不存在")).await;

        assert_eq!(first, second);
        assert_eq!(first.level, Level::Yellow);
    }

    #[tokio::test]
    async fn recipe_is_sampled_from_store_rows() {
        let rows = vec![
            RecipeRecord {
                dish_name: "菜A".to_string(),
                tags: vec!["低钠".to_string()],
                ingredients: vec!["食材".to_string()],
                steps: vec!["步骤".to_string()],
                nutrition_benefit: "益处".to_string(),
            },
            RecipeRecord {
                dish_name: "菜B".to_string(),
                tags: vec!["低磷".to_string()],
                ingredients: vec!["食材".to_string()],
                steps: vec!["步骤".to_string()],
                nutrition_benefit: "益处".to_string(),
            },
        ];
        let mut service = bare_service();
        service.recipe_repository = Some(FakeRecipeStore {
            rows: rows.clone(),
            ..FakeRecipeStore::default()
        });
        service.random_source = FixedIndex(1);

        let recipe = service.generate_recipe().await;
        assert_eq!(recipe, rows[1]);
    }

    #[tokio::test]
    async fn recipe_from_llm_is_persisted() {
        let mut service = bare_service();
        service.recipe_repository = Some(FakeRecipeStore::default());
        service.llm_client = Some(FakeLlm::replying(
            r#"{"dishName":"清蒸冬瓜","tags":["低钠"],"ingredients":["冬瓜 200克"],"steps":["蒸10分钟"],"nutritionBenefit":"低钠低钾"}"#,
        ));

        let recipe = service.generate_recipe().await;

        assert_eq!(recipe.dish_name, "清蒸冬瓜");
        let inserts = service
            .recipe_repository
            .as_ref()
            .unwrap()
            .inserts
            .lock()
            .unwrap()
            .clone();
        assert_eq!(inserts, vec![recipe]);
    }

    #[tokio::test]
    async fn recipe_falls_back_to_curated_sampling() {
        let mut service = bare_service();
        service.random_source = FixedIndex(2);

        let recipe = service.generate_recipe().await;

        assert_eq!(&recipe, &knowledge_base::fallback_recipes()[2]);
        assert!(!recipe.ingredients.is_empty());
        assert!(!recipe.steps.is_empty());
    }

    #[tokio::test]
    async fn whitelist_falls_back_to_curated_table_on_store_error() {
        let mut service = bare_service();
        service.classification_repository = Some(FakeStore {
            fail_reads: true,
            ..FakeStore::default()
        });

        let whitelist = service.whitelist().await;
        assert_eq!(whitelist, knowledge_base::whitelist());
    }

    #[tokio::test]
    async fn blacklist_prefers_store_rows() {
        let mut service = bare_service();
        service.classification_repository = Some(FakeStore {
            rows: vec![stored("奶酪", Level::Red)],
            ..FakeStore::default()
        });

        let blacklist = service.blacklist().await;
        assert_eq!(blacklist, vec![stored("奶酪", Level::Red)]);
    }
}
