//! college-records - CRUD web backend for college student/course records
//!
//! Serves JSON endpoints and server-rendered pages over a SQLite store.
//! Schema setup runs once at startup; a failure there is fatal and the
//! server never starts.

use anyhow::Result;
use clap::Parser;
use college_records::config::Config;
use college_records::{build_router, db, AppState};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Build identification logged immediately, before any database delay
    info!(
        "Starting college-records v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config = Config::parse();
    info!("Database path: {}", config.database.display());

    let pool = match db::init_database(&config.database).await {
        Ok(pool) => {
            info!("✓ Database initialized");
            pool
        }
        Err(e) => {
            error!("Database initialization failed: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::new(pool);
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("college-records listening on http://{}", addr);
    info!("Health check: http://127.0.0.1:{}/health", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
