//! Wires concrete adapters into the domain service from configuration.

use tracing::info;

use crate::{
    domain::common::{CompassConfig, services::Service},
    infrastructure::{
        llm::GeminiLlmClient,
        random::ThreadRngSource,
        supabase::{
            SupabaseAuthGateway, SupabaseClassificationRepository, SupabaseClient,
            SupabaseRecipeRepository,
        },
    },
};

pub type CompassService = Service<
    SupabaseClassificationRepository,
    SupabaseRecipeRepository,
    GeminiLlmClient,
    SupabaseAuthGateway,
    ThreadRngSource,
>;

/// Assembles the service with whatever adapters the configuration enables.
/// Missing credentials disable the matching adapter rather than failing
/// startup; the curated dataset keeps every operation answerable.
pub fn create_service(config: CompassConfig) -> CompassService {
    let supabase = config
        .supabase
        .map(|c| SupabaseClient::new(c.url, c.api_key));

    match &supabase {
        Some(_) => info!("Supabase store configured"),
        None => info!("Supabase store not configured, store lookups disabled"),
    }

    let llm_client = config.llm.map(|c| {
        info!(model = %c.gemini_model, "Gemini client configured");
        GeminiLlmClient::new(c.gemini_api_key, c.gemini_model)
    });
    if llm_client.is_none() {
        info!("Gemini client not configured, AI generation disabled");
    }

    Service::new(
        supabase
            .clone()
            .map(SupabaseClassificationRepository::new),
        supabase.clone().map(SupabaseRecipeRepository::new),
        llm_client,
        supabase.map(SupabaseAuthGateway::new),
        ThreadRngSource,
    )
}
