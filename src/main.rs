mod app;
mod middlewares;
mod routes;
mod services;
mod types;
mod utils;

use anyhow::Context;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    info!("Starting app...");

    let config = app::AppConfig::from_env().context("Failed to read configuration")?;
    let bind_address = config.bind_address.clone();
    let app = app::gen_app(config).context("Failed to build app")?;

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    info!("Listening on {}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
