use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use healthbuddy_core::CompletionGateway;
use healthbuddy_llm::ClientFactory;
use healthbuddy_web::{build_router, config::Config, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    init_logging(&config);

    tracing::info!("Starting Health Buddy server");

    let provider = config.provider();
    tracing::info!(
        provider = ?provider.provider_type(),
        base_url = %provider.resolved_base_url(),
        model = %config.llm.model,
        "Initializing chat client"
    );
    let client = ClientFactory::create_chat_client(provider)?;
    let gateway = CompletionGateway::new(client, config.llm.model.clone());

    let addr = config.bind_addr();
    let state = Arc::new(AppState::new(config, gateway)?);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}
