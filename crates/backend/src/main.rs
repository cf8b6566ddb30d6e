pub mod routes;
pub mod shared;

use shared::config::{self, ConfigSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let (config, source) = config::load_config()?;

    // Log directory
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.log_filter.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    match &source {
        ConfigSource::File(path) => tracing::info!("Loaded config from: {}", path.display()),
        ConfigSource::Embedded => {
            tracing::warn!("config.toml not found next to the executable, using embedded default")
        }
    }

    let static_dir = config::resolve_static_dir(&config.server);
    if !static_dir.join("index.html").exists() {
        tracing::warn!(
            "No index.html in {}, build the frontend first",
            static_dir.display()
        );
    }
    tracing::info!("Serving frontend from {}", static_dir.display());

    let app = routes::configure_routes(&static_dir);

    let addr: SocketAddr = match config.server.addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("Invalid server address '{}': {}", config.server.addr, e);
            return Err(e.into());
        }
    };

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
