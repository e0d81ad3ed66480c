use crate::cli::ServeArgs;
use crate::infra::{default_stage_catalog, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use hireflow::config::AppConfig;
use hireflow::error::AppError;
use hireflow::telemetry;
use hireflow::workflows::hiring::directory::DirectoryService;
use hireflow::workflows::hiring::memory::InMemoryHiringStore;
use hireflow::workflows::hiring::pipeline::InterviewScheduler;
use hireflow::workflows::timesheet::InMemoryTimesheetStore;
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

    let store = Arc::new(InMemoryHiringStore::default());
    let catalog = Arc::new(default_stage_catalog());
    let scheduler = Arc::new(InterviewScheduler::new(store.clone(), catalog));
    let directory = Arc::new(DirectoryService::new(store));
    let timesheets = Arc::new(InMemoryTimesheetStore::default());

    let app = with_service_routes(scheduler, directory, timesheets)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "applicant tracking service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
