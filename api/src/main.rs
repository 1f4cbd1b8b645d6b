use std::sync::Arc;

use clap::Parser;
use kidney_compass_api::application::http::server::http_server;
use kidney_compass_api::args::Args;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Arc::new(Args::parse());
    let addr = format!("{}:{}", args.server.host, args.server.port);

    let state = http_server::state(args);
    let router = http_server::router(state)?;

    info!("Listening on {}", addr);
    axum_server::bind(addr.parse()?)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
