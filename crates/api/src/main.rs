use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use restapi_api::app::{self, AppServices};
use restapi_api::config::AppConfig;
use restapi_infra::metrics::{MeterRegistry, MetricsFileScheduler, MetricsFileWriter};
use restapi_observability::HttpMetrics;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    restapi_observability::init();

    let config = AppConfig::load().context("failed to load configuration")?;
    info!(
        addr = %config.server.bind_addr(),
        metrics_file = %config.metrics_file.path.display(),
        metrics_file_enabled = config.metrics_file.enabled,
        "configuration loaded"
    );

    let metrics = Arc::new(HttpMetrics::new()?);
    let services = Arc::new(AppServices::in_memory());

    let scheduler = if config.metrics_file.enabled {
        let registry: Arc<dyn MeterRegistry> = Arc::new(metrics.registry().clone());
        let writer = Arc::new(MetricsFileWriter::new(registry, config.metrics_file.path.clone()));
        let handle = MetricsFileScheduler::new(config.metrics_file.reporting_interval())
            .spawn(writer)
            .context("failed to start metrics file scheduler")?;
        Some(handle)
    } else {
        info!("metrics file reporting disabled");
        None
    };

    let app = app::build_app(services, metrics);

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr()))?;

    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = scheduler {
        tokio::task::spawn_blocking(move || handle.shutdown()).await?;
    }
    info!("server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
