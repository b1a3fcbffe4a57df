use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use grocery_recipe_agent::{api, GroqProvider, ProviderConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    #[arg(long, default_value = "8000")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // Read once; the server refuses to start without an API key.
    let config = ProviderConfig::from_env().context("Failed to load provider configuration")?;
    log::info!("Using model {} at {}", config.model, config.api_url);

    let provider = Arc::new(GroqProvider::new(config));
    let app = api::create_api(provider);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", args.host, args.port))?;

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    log::info!("Server successfully bound to {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
