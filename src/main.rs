use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use veracity::application::services::{AnalysisService, UploadService};
use veracity::infrastructure::llm::create_llm_client;
use veracity::infrastructure::observability::{TracingConfig, init_tracing};
use veracity::infrastructure::text_processing::{CompositeFileLoader, TokenSplitter};
use veracity::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    let llm_client = Arc::new(create_llm_client(&settings.llm).context("Failed to build LLM client")?);
    tracing::info!(
        provider = ?settings.llm.provider,
        model = %llm_client.model(),
        max_chunk_tokens = settings.analysis.max_chunk_tokens,
        "LLM client ready"
    );

    let analysis_service = Arc::new(AnalysisService::new(
        llm_client,
        Arc::new(TokenSplitter::new()),
        settings.analysis.max_chunk_tokens,
    ));

    let upload_service = Arc::new(UploadService::new(
        Arc::new(CompositeFileLoader::with_default_adapters()),
        analysis_service,
        settings.llm.max_tokens,
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState {
        upload_service,
        settings: Arc::new(settings),
    };

    let router = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
