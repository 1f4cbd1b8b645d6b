use crate::domain::{
    auth::ports::AuthGateway,
    classification::ports::{
        ClassificationRepository, LlmClient, RandomSource, RecipeRepository,
    },
    common::services::Service,
    health::{
        entities::{HealthStatus, ServiceAvailability},
        ports::HealthService,
    },
};

impl<CR, RR, L, A, RS> HealthService for Service<CR, RR, L, A, RS>
where
    CR: ClassificationRepository,
    RR: RecipeRepository,
    L: LlmClient,
    A: AuthGateway,
    RS: RandomSource,
{
    fn health(&self) -> HealthStatus {
        let database = self.classification_repository.is_some();
        let ai = self.llm_client.is_some();

        // The curated dataset keeps the service answering even with every
        // adapter absent, so a degraded stack is "partial", never an error.
        let status = if database || ai { "ok" } else { "partial" };

        HealthStatus {
            status: status.to_string(),
            message: "Kidney Compass Backend is running!".to_string(),
            services: ServiceAvailability {
                database: if database { "connected" } else { "disconnected" }.to_string(),
                ai: if ai { "available" } else { "unavailable" }.to_string(),
            },
        }
    }
}
