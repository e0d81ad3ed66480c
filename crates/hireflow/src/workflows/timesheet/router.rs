use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::error;

use super::domain::{EmployeeId, TimeEntry};
use super::grid::{validate_entry, MonthGrid};
use super::store::TimesheetStore;
use crate::workflows::hiring::repository::RepositoryError;

/// Router builder exposing the timesheet endpoints.
pub fn timesheet_router<S>(store: Arc<S>) -> Router
where
    S: TimesheetStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/timesheets/:employee_id/:year/:month",
            get(grid_handler::<S>),
        )
        .route("/api/v1/timesheets/entries", post(entry_handler::<S>))
        .with_state(store)
}

pub(crate) async fn grid_handler<S>(
    State(store): State<Arc<S>>,
    Path((employee_id, year, month)): Path<(String, i32, u32)>,
) -> Response
where
    S: TimesheetStore + 'static,
{
    let employee_id = EmployeeId(employee_id);
    let employee = match store.employee(&employee_id) {
        Ok(Some(employee)) => employee,
        Ok(None) => {
            let payload = json!({ "error": "employee not found" });
            return (StatusCode::NOT_FOUND, axum::Json(payload)).into_response();
        }
        Err(error) => return storage_error_response(error),
    };

    let entries = match store.entries_for_month(&employee_id, year, month) {
        Ok(entries) => entries,
        Err(error) => return storage_error_response(error),
    };

    // Stored entries were validated on append, so a fold failure here can
    // only come from the requested month itself.
    match MonthGrid::fold(year, month, &entries) {
        Ok(grid) => (StatusCode::OK, axum::Json(grid.view(&employee))).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn entry_handler<S>(
    State(store): State<Arc<S>>,
    axum::Json(entry): axum::Json<TimeEntry>,
) -> Response
where
    S: TimesheetStore + 'static,
{
    if let Err(error) = validate_entry(&entry) {
        let payload = json!({ "error": error.to_string() });
        return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
    }

    match store.append_entry(entry) {
        Ok(()) => (
            StatusCode::CREATED,
            axum::Json(json!({ "status": "recorded" })),
        )
            .into_response(),
        Err(RepositoryError::NotFound) => {
            let payload = json!({ "error": "employee not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => storage_error_response(error),
    }
}

fn storage_error_response(error: RepositoryError) -> Response {
    error!(%error, "timesheet storage failed");
    let payload = json!({ "error": "internal error" });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
