use marketplace_backend::{
    config::{get_config, init_config},
    database::{pool::create_pool, run_migrations},
    routes,
    services::seed_service::SeedService,
    utils::logging::init_logging,
    AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config();
    init_logging(config.log_format);

    let pool = create_pool().await?;
    run_migrations(&pool).await?;

    if config.seed_on_startup {
        SeedService::new(pool.clone())
            .load_from_dir(&config.seed_data_dir)
            .await?;
    } else {
        info!("Seeding disabled (set SEED_ON_STARTUP=true to import {})", config.seed_data_dir);
    }

    let app = routes::router(AppState::new(pool.clone()));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Database pool closed");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
                    _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
                }
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                ctrl_c.await.ok();
                info!("Received Ctrl+C, shutting down...");
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
