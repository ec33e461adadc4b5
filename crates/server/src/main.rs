use anyhow::Context;
use db::{DBService, seed_if_empty};
use server::{
    Deployment,
    config::ServerConfig,
    file_logging::{self, LogSettings},
    routes,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (for development)
    dotenvy::dotenv().ok();

    // The guard must be held for the lifetime of the application so file logs are flushed
    let _file_log_guard = file_logging::init_logging(&LogSettings::from_env());

    let config = ServerConfig::from_env();

    let db = match DBService::connect(&config.database_path).await {
        Ok(db) => {
            tracing::info!("Connected to SQLite database");
            match seed_if_empty(&db.pool).await {
                Ok(report) if report.is_empty() => tracing::debug!("Seed data already present"),
                Ok(_) => {}
                Err(e) => tracing::error!("Failed to seed database: {}", e),
            }
            db
        }
        Err(e) => {
            // Keep serving; every store-backed endpoint will answer with its own failure.
            tracing::error!(
                path = %config.database_path.display(),
                "Failed to open database: {}",
                e
            );
            DBService::degraded(&config.database_path)
        }
    };

    let deployment = Deployment::new(db);
    let app_router = routes::router(deployment.clone(), &config.public_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;
    let actual_port = listener.local_addr()?.port();

    tracing::info!("Server running on http://localhost:{actual_port}");
    tracing::info!("API available at http://localhost:{actual_port}/api");

    axum::serve(listener, app_router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down...");
    deployment.db().close().await;

    Ok(())
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let terminate = async {
            if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
                sigterm.recv().await;
            } else {
                tracing::error!("Failed to install SIGTERM handler");
                // Fallback: never resolves
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await;
    }
}
