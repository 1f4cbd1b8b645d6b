pub mod entities;
pub mod services;

#[derive(Clone, Debug, Default)]
pub struct CompassConfig {
    pub supabase: Option<SupabaseConfig>,
    pub llm: Option<LlmConfig>,
}

#[derive(Clone, Debug)]
pub struct SupabaseConfig {
    pub url: String,
    pub api_key: String,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
}
