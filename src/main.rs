use anyhow::{Context, Result};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use whitebox_dashboard::app_state::build_app_state;
use whitebox_dashboard::core::config::dashboard_config::DashboardConfig;
use whitebox_dashboard::debug::run_debug;
use whitebox_dashboard::routes::app_router;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cfg = DashboardConfig::from_env();
    let _guard = init_tracing(&cfg);

    let state = build_app_state(cfg.clone())?;

    if cfg.debug_mode {
        return run_debug(&state).await;
    }

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", cfg.bind_addr))?;

    info!(
        addr = %cfg.bind_addr,
        backend = %cfg.whitebox_host,
        "🚀 Whitebox dashboard listening"
    );

    axum::serve(listener, app_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Stdout logging, plus daily-rolling files when WHITEBOX_LOG_DIR is set.
/// The returned guard must live as long as the process.
fn init_tracing(cfg: &DashboardConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer().with_target(true).with_level(true);

    match &cfg.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "whitebox-dashboard.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();

            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .init();

            None
        }
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
