//! Tessera inference server binary.

use anyhow::Result;
use tessera_interface::ReasoningEngine;
use tessera_models::engine_from_env;
use tessera_pipeline::Pipeline;
use tessera_server::create_router;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let engine = engine_from_env()?;
    tracing::info!(model = engine.model_name(), "Engine configured");

    let pipeline = Pipeline::new(engine);
    let app = create_router(pipeline);

    let port: u16 = std::env::var("TESSERA_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "Tessera server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
