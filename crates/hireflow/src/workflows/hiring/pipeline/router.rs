use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde_json::json;
use tracing::error;

use super::domain::{
    FeedbackRequest, InterviewId, ScheduleRequest, ScheduleStageRequest, StatusRequest,
};
use super::repository::HiringStore;
use super::service::{InterviewScheduler, ScheduleError};
use crate::workflows::hiring::domain::ApplicantId;
use crate::workflows::hiring::repository::RepositoryError;

/// Router builder exposing the interview pipeline endpoints.
pub fn pipeline_router<S>(scheduler: Arc<InterviewScheduler<S>>) -> Router
where
    S: HiringStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/hiring/interviews/first",
            post(schedule_first_handler::<S>),
        )
        .route(
            "/api/v1/hiring/interviews/next",
            post(schedule_next_handler::<S>),
        )
        .route(
            "/api/v1/hiring/interviews/stage",
            post(schedule_stage_handler::<S>),
        )
        .route(
            "/api/v1/hiring/interviews/:interview_id",
            get(interview_handler::<S>),
        )
        .route(
            "/api/v1/hiring/interviews/:interview_id/status",
            put(status_handler::<S>),
        )
        .route(
            "/api/v1/hiring/interviews/:interview_id/feedback",
            post(feedback_handler::<S>),
        )
        .route(
            "/api/v1/hiring/applicants/:applicant_id/interviews",
            get(applicant_interviews_handler::<S>),
        )
        .with_state(scheduler)
}

pub(crate) async fn schedule_first_handler<S>(
    State(scheduler): State<Arc<InterviewScheduler<S>>>,
    axum::Json(request): axum::Json<ScheduleRequest>,
) -> Response
where
    S: HiringStore + 'static,
{
    match scheduler.schedule_first(request) {
        Ok(view) => (StatusCode::CREATED, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn schedule_next_handler<S>(
    State(scheduler): State<Arc<InterviewScheduler<S>>>,
    axum::Json(request): axum::Json<ScheduleRequest>,
) -> Response
where
    S: HiringStore + 'static,
{
    match scheduler.schedule_next(request) {
        Ok(view) => (StatusCode::CREATED, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn schedule_stage_handler<S>(
    State(scheduler): State<Arc<InterviewScheduler<S>>>,
    axum::Json(request): axum::Json<ScheduleStageRequest>,
) -> Response
where
    S: HiringStore + 'static,
{
    match scheduler.schedule_stage(request) {
        Ok(view) => (StatusCode::CREATED, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn interview_handler<S>(
    State(scheduler): State<Arc<InterviewScheduler<S>>>,
    Path(interview_id): Path<String>,
) -> Response
where
    S: HiringStore + 'static,
{
    match scheduler.interview(&InterviewId(interview_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<S>(
    State(scheduler): State<Arc<InterviewScheduler<S>>>,
    Path(interview_id): Path<String>,
    axum::Json(request): axum::Json<StatusRequest>,
) -> Response
where
    S: HiringStore + 'static,
{
    match scheduler.update_status(&InterviewId(interview_id), request.status) {
        Ok(interview) => (StatusCode::OK, axum::Json(interview)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn feedback_handler<S>(
    State(scheduler): State<Arc<InterviewScheduler<S>>>,
    Path(interview_id): Path<String>,
    axum::Json(request): axum::Json<FeedbackRequest>,
) -> Response
where
    S: HiringStore + 'static,
{
    match scheduler.submit_feedback(&InterviewId(interview_id), request) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn applicant_interviews_handler<S>(
    State(scheduler): State<Arc<InterviewScheduler<S>>>,
    Path(applicant_id): Path<String>,
) -> Response
where
    S: HiringStore + 'static,
{
    match scheduler.interviews_for_applicant(&ApplicantId(applicant_id)) {
        Ok(views) => (StatusCode::OK, axum::Json(views)).into_response(),
        Err(error) => error_response(error),
    }
}

/// Translate scheduler errors into responses. Business-rule violations and
/// missing entities keep their message; everything unexpected is logged
/// and redacted.
fn error_response(error: ScheduleError) -> Response {
    let status = match &error {
        ScheduleError::ApplicantNotFound
        | ScheduleError::InterviewerNotFound
        | ScheduleError::InterviewNotFound
        | ScheduleError::StageRecordNotFound
        | ScheduleError::UnknownStage
        | ScheduleError::JobNotFound
        | ScheduleError::NoPriorInterview
        | ScheduleError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ScheduleError::FirstStageRequiresHr
        | ScheduleError::PreviousStageNotPassed
        | ScheduleError::ProcessCompleted
        | ScheduleError::UnmappedStage { .. }
        | ScheduleError::WrongInterviewerType { .. } => StatusCode::BAD_REQUEST,
        ScheduleError::StageAlreadyConducted { .. }
        | ScheduleError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ScheduleError::EmptyCatalog
        | ScheduleError::StageMissingFromCatalog(_)
        | ScheduleError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!(%error, "interview scheduling failed");
        let payload = json!({ "error": "internal error" });
        return (status, axum::Json(payload)).into_response();
    }

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
