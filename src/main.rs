use anyhow::Result;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use turkey_weather_mcp::{Config, TurkeyWeather};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP stream, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "turkey_weather_mcp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Turkey weather MCP server");

    let config = Config::from_env()?;
    if config.is_demo() {
        tracing::warn!("No OpenWeatherMap API key configured, serving demo data");
    } else {
        tracing::info!("Using OpenWeatherMap API at {}", config.api_base);
    }

    let weather = TurkeyWeather::new(&config)?;
    let server = weather.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
