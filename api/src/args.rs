use clap::{Args as ClapArgs, Parser};
use kidney_compass_core::domain::common::{CompassConfig, LlmConfig, SupabaseConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "kidney-compass-api", about = "Kidney Compass backend API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub supabase: SupabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 7860)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/backend".
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct SupabaseArgs {
    #[arg(long, env = "SUPABASE_URL")]
    pub supabase_url: Option<String>,

    #[arg(long, env = "SUPABASE_KEY")]
    pub supabase_key: Option<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY")]
    pub gemini_api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,
}

/// Unfilled template values from a copied .env must not count as
/// configuration.
fn is_placeholder(value: &str) -> bool {
    value.is_empty() || value.starts_with("your_")
}

impl From<Args> for CompassConfig {
    fn from(args: Args) -> Self {
        let supabase = match (args.supabase.supabase_url, args.supabase.supabase_key) {
            (Some(url), Some(api_key)) if !is_placeholder(&url) && !is_placeholder(&api_key) => {
                Some(SupabaseConfig { url, api_key })
            }
            _ => None,
        };

        let llm = args
            .llm
            .gemini_api_key
            .filter(|key| !is_placeholder(key))
            .map(|gemini_api_key| LlmConfig {
                gemini_api_key,
                gemini_model: args.llm.gemini_model,
            });

        CompassConfig { supabase, llm }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Args {
        Args::parse_from(std::iter::once("kidney-compass-api").chain(values.iter().copied()))
    }

    #[test]
    fn defaults_bind_the_huggingface_port() {
        let parsed = args(&[]);
        assert_eq!(parsed.server.host, "0.0.0.0");
        assert_eq!(parsed.server.port, 7860);
        assert_eq!(parsed.server.allowed_origins, vec!["*"]);
    }

    #[test]
    fn missing_credentials_disable_both_adapters() {
        let config = CompassConfig::from(args(&[]));
        assert!(config.supabase.is_none());
        assert!(config.llm.is_none());
    }

    #[test]
    fn placeholder_credentials_are_ignored() {
        let config = CompassConfig::from(args(&[
            "--supabase-url",
            "your_supabase_url",
            "--supabase-key",
            "your_supabase_key",
            "--gemini-api-key",
            "your_gemini_api_key",
        ]));
        assert!(config.supabase.is_none());
        assert!(config.llm.is_none());
    }

    #[test]
    fn real_credentials_enable_the_adapters() {
        let config = CompassConfig::from(args(&[
            "--supabase-url",
            "https://project.supabase.co",
            "--supabase-key",
            "service-key",
            "--gemini-api-key",
            "api-key",
        ]));
        assert!(config.supabase.is_some());
        assert_eq!(config.llm.unwrap().gemini_model, "gemini-2.0-flash");
    }
}
