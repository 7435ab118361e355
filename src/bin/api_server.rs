use bearing_convert::{api::create_router, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let app = create_router(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!(
        addr = %config.bind_addr,
        profile = %config.default_profile,
        "bearing-convert API listening"
    );
    tracing::info!("GET  /api/polar-to-rect?distance=<m>&angle=<bearing>[&profile=survey|legacy]");
    tracing::info!("GET  /api/rect-to-polar?northing=<m>&easting=<m>[&profile=survey|legacy]");
    tracing::info!("POST /api/batch (JSON: direction, input, profile, parallel)");
    tracing::info!("POST /api/batch/csv (multipart/form-data: input or file, direction, profile)");

    axum::serve(listener, app).await?;

    Ok(())
}
