use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::service::{DirectoryError, DirectoryService, DirectoryStore};
use crate::workflows::hiring::domain::{
    ApplicantId, ApplicantStatus, InterviewerId, InterviewerType, InterviewerUpdate, JobId,
    NewApplicant, NewInterviewer,
};
use crate::workflows::hiring::repository::RepositoryError;

/// Router builder exposing the people-directory endpoints.
pub fn directory_router<S>(service: Arc<DirectoryService<S>>) -> Router
where
    S: DirectoryStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/hiring/applicants",
            get(list_applicants_handler::<S>).post(create_applicant_handler::<S>),
        )
        .route(
            "/api/v1/hiring/applicants/:applicant_id",
            get(get_applicant_handler::<S>),
        )
        .route(
            "/api/v1/hiring/applicants/:applicant_id/status",
            put(applicant_status_handler::<S>),
        )
        .route("/api/v1/hiring/jobs", post(create_job_handler::<S>))
        .route("/api/v1/hiring/jobs/:job_id", get(get_job_handler::<S>))
        .route(
            "/api/v1/hiring/jobs/:job_id/applicants",
            get(job_applicants_handler::<S>),
        )
        .route(
            "/api/v1/hiring/interviewers",
            get(list_interviewers_handler::<S>).post(create_interviewer_handler::<S>),
        )
        .route(
            "/api/v1/hiring/interviewers/:interviewer_id",
            get(get_interviewer_handler::<S>)
                .put(update_interviewer_handler::<S>)
                .delete(delete_interviewer_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct InterviewerFilter {
    pub(crate) interview_type: Option<InterviewerType>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewJobRequest {
    pub(crate) title: String,
    pub(crate) company: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApplicantStatusRequest {
    pub(crate) status: ApplicantStatus,
}

pub(crate) async fn create_applicant_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    axum::Json(request): axum::Json<NewApplicant>,
) -> Response
where
    S: DirectoryStore + 'static,
{
    match service.create_applicant(request) {
        Ok(applicant) => (StatusCode::CREATED, axum::Json(applicant)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_applicants_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
) -> Response
where
    S: DirectoryStore + 'static,
{
    match service.applicants() {
        Ok(applicants) => (StatusCode::OK, axum::Json(applicants)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_applicant_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Path(applicant_id): Path<String>,
) -> Response
where
    S: DirectoryStore + 'static,
{
    match service.applicant(&ApplicantId(applicant_id)) {
        Ok(applicant) => (StatusCode::OK, axum::Json(applicant)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn applicant_status_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Path(applicant_id): Path<String>,
    axum::Json(request): axum::Json<ApplicantStatusRequest>,
) -> Response
where
    S: DirectoryStore + 'static,
{
    match service.set_applicant_status(&ApplicantId(applicant_id), request.status) {
        Ok(applicant) => (StatusCode::OK, axum::Json(applicant)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn create_job_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    axum::Json(request): axum::Json<NewJobRequest>,
) -> Response
where
    S: DirectoryStore + 'static,
{
    match service.create_job(&request.title, &request.company) {
        Ok(job) => (StatusCode::CREATED, axum::Json(job)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_job_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Path(job_id): Path<String>,
) -> Response
where
    S: DirectoryStore + 'static,
{
    match service.job(&JobId(job_id)) {
        Ok(job) => (StatusCode::OK, axum::Json(job)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn job_applicants_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Path(job_id): Path<String>,
) -> Response
where
    S: DirectoryStore + 'static,
{
    match service.applicants_for_job(&JobId(job_id)) {
        Ok(applicants) => (StatusCode::OK, axum::Json(applicants)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn create_interviewer_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    axum::Json(request): axum::Json<NewInterviewer>,
) -> Response
where
    S: DirectoryStore + 'static,
{
    match service.create_interviewer(request) {
        Ok(interviewer) => (StatusCode::CREATED, axum::Json(interviewer)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_interviewers_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Query(filter): Query<InterviewerFilter>,
) -> Response
where
    S: DirectoryStore + 'static,
{
    match service.interviewers(filter.interview_type) {
        Ok(interviewers) => (StatusCode::OK, axum::Json(interviewers)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_interviewer_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Path(interviewer_id): Path<String>,
) -> Response
where
    S: DirectoryStore + 'static,
{
    match service.interviewer(&InterviewerId(interviewer_id)) {
        Ok(interviewer) => (StatusCode::OK, axum::Json(interviewer)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_interviewer_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Path(interviewer_id): Path<String>,
    axum::Json(request): axum::Json<InterviewerUpdate>,
) -> Response
where
    S: DirectoryStore + 'static,
{
    match service.update_interviewer(&InterviewerId(interviewer_id), request) {
        Ok(interviewer) => (StatusCode::OK, axum::Json(interviewer)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_interviewer_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Path(interviewer_id): Path<String>,
) -> Response
where
    S: DirectoryStore + 'static,
{
    match service.delete_interviewer(&InterviewerId(interviewer_id)) {
        Ok(()) => (
            StatusCode::OK,
            axum::Json(json!({ "status": "interviewer deleted" })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: DirectoryError) -> Response {
    let status = match &error {
        DirectoryError::MissingFields | DirectoryError::InvalidEmail => StatusCode::BAD_REQUEST,
        DirectoryError::JobNotFound
        | DirectoryError::ApplicantNotFound
        | DirectoryError::NoApplicantsForJob
        | DirectoryError::InterviewerNotFound
        | DirectoryError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        DirectoryError::EmailTaken | DirectoryError::Repository(RepositoryError::Conflict) => {
            StatusCode::CONFLICT
        }
        DirectoryError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!(%error, "directory operation failed");
        let payload = json!({ "error": "internal error" });
        return (status, axum::Json(payload)).into_response();
    }

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::hiring::memory::InMemoryHiringStore;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn build_router() -> (Router, Arc<DirectoryService<InMemoryHiringStore>>) {
        let store = Arc::new(InMemoryHiringStore::default());
        let service = Arc::new(DirectoryService::new(store));
        (directory_router(service.clone()), service)
    }

    async fn read_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn applicant_intake_round_trips_over_http() {
        let (router, service) = build_router();
        let job = service.create_job("Plumber", "Acme").expect("job created");

        let payload = serde_json::json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "555-0100",
            "resume": "{\"summary\":\"10 years\"}",
            "job_id": job.id.0,
        });
        let response = router
            .clone()
            .oneshot(
                Request::post("/api/v1/hiring/applicants")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = read_json_body(response).await;
        assert_eq!(created.get("status"), Some(&serde_json::json!("applied")));

        let listing = router
            .clone()
            .oneshot(
                Request::get(format!("/api/v1/hiring/jobs/{}/applicants", job.id.0))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("route executes");
        assert_eq!(listing.status(), StatusCode::OK);
        let rows = read_json_body(listing).await;
        assert_eq!(rows.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn duplicate_interviewer_email_returns_conflict() {
        let (router, _) = build_router();
        let payload = serde_json::json!({
            "name": "Ann",
            "email": "ann@example.com",
            "phone": "555-0101",
            "position": "Recruiter",
            "interview_type": "HR",
        });

        for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
            let response = router
                .clone()
                .oneshot(
                    Request::post("/api/v1/hiring/interviewers")
                        .header("content-type", "application/json")
                        .body(Body::from(payload.to_string()))
                        .expect("request"),
                )
                .await
                .expect("route executes");
            assert_eq!(response.status(), expected);
        }
    }

    #[tokio::test]
    async fn unknown_interview_type_is_rejected_at_the_boundary() {
        let (router, _) = build_router();
        let payload = serde_json::json!({
            "name": "Ann",
            "email": "ann@example.com",
            "phone": "555-0101",
            "position": "Recruiter",
            "interview_type": "Wizard",
        });
        let response = router
            .oneshot(
                Request::post("/api/v1/hiring/interviewers")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn interviewer_filter_is_exact_match() {
        let (router, service) = build_router();
        for (name, email, interview_type) in [
            ("Ann", "ann@example.com", InterviewerType::Hr),
            ("Bob", "bob@example.com", InterviewerType::Technical),
        ] {
            service
                .create_interviewer(NewInterviewer {
                    name: name.to_string(),
                    email: email.to_string(),
                    phone: "555-0102".to_string(),
                    position: "Staff".to_string(),
                    interview_type,
                })
                .expect("interviewer created");
        }

        let response = router
            .oneshot(
                Request::get("/api/v1/hiring/interviewers?interview_type=Technical")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        let rows = read_json_body(response).await;
        let names: Vec<&str> = rows
            .as_array()
            .expect("array payload")
            .iter()
            .filter_map(|row| row.get("name").and_then(Value::as_str))
            .collect();
        assert_eq!(names, vec!["Bob"]);
    }

    #[tokio::test]
    async fn missing_applicant_returns_not_found() {
        let (router, _) = build_router();
        let response = router
            .oneshot(
                Request::get("/api/v1/hiring/applicants/apl-999999")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
