use std::sync::Arc;

use fitmatch::admin::{admin_routes, AdminRouteState};
use fitmatch::channels::TelegramChannel;
use fitmatch::config::AppConfig;
use fitmatch::store::{Database, LibSqlBackend};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env()?;

    eprintln!("🏋 FitMatch v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Database: {}", config.db_path);
    eprintln!(
        "   Admin API: http://0.0.0.0:{}/api/admin/plans",
        config.admin_port
    );

    // ── Database ─────────────────────────────────────────────────────────
    let db_path = std::path::Path::new(&config.db_path);
    let db: Arc<dyn Database> = Arc::new(LibSqlBackend::new_local(db_path).await.map_err(|e| {
        eprintln!("Error: Failed to open database at {}: {e}", config.db_path);
        e
    })?);

    // ── Admin server ─────────────────────────────────────────────────────
    let admin_port = config.admin_port;
    let app = admin_routes(AdminRouteState { db: Arc::clone(&db) });
    tokio::spawn(async move {
        let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{admin_port}")).await {
            Ok(listener) => listener,
            Err(e) => {
                tracing::error!(port = admin_port, "Failed to bind admin port: {e}");
                return;
            }
        };
        tracing::info!(port = admin_port, "Admin API server started");
        axum::serve(listener, app).await.ok();
    });

    // ── Telegram channel ─────────────────────────────────────────────────
    let channel = TelegramChannel::new(config.bot_token, config.poll_timeout_secs, db);
    channel.run().await?;

    Ok(())
}
