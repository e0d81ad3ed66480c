use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use hireflow::workflows::hiring::directory::{
    directory_router, DirectoryService, DirectoryStore,
};
use hireflow::workflows::hiring::pipeline::{
    pipeline_router, HiringStore, InterviewScheduler,
};
use hireflow::workflows::timesheet::{timesheet_router, TimesheetStore};

/// Assemble the full API surface: pipeline, directory, timesheets, and the
/// operational endpoints.
pub(crate) fn with_service_routes<S, T>(
    scheduler: Arc<InterviewScheduler<S>>,
    directory: Arc<DirectoryService<S>>,
    timesheets: Arc<T>,
) -> axum::Router
where
    S: HiringStore + DirectoryStore + 'static,
    T: TimesheetStore + 'static,
{
    pipeline_router(scheduler)
        .merge(directory_router(directory))
        .merge(timesheet_router(timesheets))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
