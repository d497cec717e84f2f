use crate::cli::ServeArgs;
use crate::infra::{default_scoring_rubric, AppState};
use crate::routes::with_budget_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use paisa_planner::budget::BudgetPlannerService;
use paisa_planner::config::AppConfig;
use paisa_planner::error::AppError;
use paisa_planner::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let planner_service = Arc::new(BudgetPlannerService::new(default_scoring_rubric()));

    let app = with_budget_routes(planner_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "EMI planning service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
