use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use website::config::ServerConfig;
use website::database::ActivityDirectory;
use website::web::app::{build_router, AppState};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env();

    let directory = ActivityDirectory::seeded();
    info!(activities = directory.list_activities().len(), "activity directory seeded");

    let app = build_router(AppState::new(directory), &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr()).await {
        Ok(l) => l,
        Err(e) => {
            let Some(fallback) = config.fallback_bind_addr() else {
                error!(addr = %config.bind_addr(), error = %e, "bind failed, no fallback port");
                std::process::exit(1);
            };
            warn!(
                addr = %config.bind_addr(),
                error = %e,
                fallback = %fallback,
                "bind failed, trying fallback port"
            );
            match tokio::net::TcpListener::bind(&fallback).await {
                Ok(l) => l,
                Err(e) => {
                    error!(addr = %fallback, error = %e, "bind failed");
                    std::process::exit(1);
                }
            }
        }
    };

    match listener.local_addr() {
        Ok(addr) => info!("serving on http://{}", addr),
        Err(e) => warn!(error = %e, "listener has no local address"),
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}
