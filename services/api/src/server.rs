use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_subscription_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use cheongyak::config::AppConfig;
use cheongyak::error::AppError;
use cheongyak::subscription::{SimulationEngine, StrategyCatalog};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut config: AppConfig, args: ServeArgs) -> Result<(), AppError> {
    apply_overrides(&mut config, args);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    // Catalog is fully built before the listener accepts requests.
    let catalog = StrategyCatalog::standard();
    let strategy_count = catalog.len();
    let engine = Arc::new(SimulationEngine::new(catalog));

    let app = with_subscription_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(%addr, strategy_count, "subscription simulator ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Command-line host and port take precedence over `APP_HOST` and `APP_PORT`.
pub(crate) fn apply_overrides(config: &mut AppConfig, args: ServeArgs) {
    config.server.override_with(args.host, args.port);
}
