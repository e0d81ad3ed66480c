use std::collections::BTreeMap;
use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::hiring::domain::{
    Applicant, ApplicantId, ApplicantStatus, Interviewer, InterviewerId, InterviewerType,
    InterviewerUpdate, Job, JobId, NewApplicant, NewInterviewer,
};
use crate::workflows::hiring::memory::InMemoryHiringStore;
use crate::workflows::hiring::pipeline::catalog::{StageCatalog, StageDefinition, StageId};
use crate::workflows::hiring::pipeline::domain::{
    Interview, InterviewId, InterviewStage, InterviewStatus, ScheduleRequest,
    ScheduleStageRequest, StageResult,
};
use crate::workflows::hiring::pipeline::repository::{InterviewRepository, ScheduleCommand};
use crate::workflows::hiring::pipeline::service::InterviewScheduler;
use crate::workflows::hiring::repository::{
    ApplicantRepository, InterviewerRepository, JobRepository, RepositoryError,
};

pub(super) fn build_store() -> Arc<InMemoryHiringStore> {
    Arc::new(InMemoryHiringStore::default())
}

pub(super) fn seed_job(store: &InMemoryHiringStore) -> Job {
    store
        .insert_job("Backend Engineer", "Initech")
        .expect("job inserted")
}

pub(super) fn seed_applicant(store: &InMemoryHiringStore, job: &Job, name: &str) -> Applicant {
    let email = format!(
        "{}@example.com",
        name.to_ascii_lowercase().replace(' ', ".")
    );
    store
        .insert_applicant(NewApplicant {
            name: name.to_string(),
            email,
            phone: "555-0100".to_string(),
            resume: "{\"summary\":\"experienced\"}".to_string(),
            job_id: job.id.clone(),
        })
        .expect("applicant inserted")
}

pub(super) fn seed_interviewer(
    store: &InMemoryHiringStore,
    name: &str,
    interview_type: InterviewerType,
) -> Interviewer {
    let email = format!(
        "{}@example.com",
        name.to_ascii_lowercase().replace(' ', ".")
    );
    store
        .insert_interviewer(NewInterviewer {
            name: name.to_string(),
            email,
            phone: "555-0101".to_string(),
            position: "Staff".to_string(),
            interview_type,
        })
        .expect("interviewer inserted")
}

pub(super) fn standard_scheduler(
    store: Arc<InMemoryHiringStore>,
) -> InterviewScheduler<InMemoryHiringStore> {
    InterviewScheduler::new(store, Arc::new(StageCatalog::standard()))
}

pub(super) fn scheduler_with(
    store: Arc<InMemoryHiringStore>,
    catalog: StageCatalog,
) -> InterviewScheduler<InMemoryHiringStore> {
    InterviewScheduler::new(store, Arc::new(catalog))
}

fn stage(id: &str, name: &str, order: u32) -> StageDefinition {
    StageDefinition {
        id: StageId(id.to_string()),
        name: name.to_string(),
        order,
    }
}

fn standard_type_map() -> BTreeMap<String, InterviewerType> {
    let mut map = BTreeMap::new();
    map.insert("HR Interview".to_string(), InterviewerType::Hr);
    map.insert("Technical Round".to_string(), InterviewerType::Technical);
    map.insert("Cultural Fit".to_string(), InterviewerType::Cultural);
    map.insert("Final Round".to_string(), InterviewerType::Final);
    map
}

/// Two stages only, both mapped.
pub(super) fn two_stage_catalog() -> StageCatalog {
    StageCatalog::new(
        vec![
            stage("stage-hr", "HR Interview", 1),
            stage("stage-technical", "Technical Round", 2),
        ],
        standard_type_map(),
    )
}

/// Orders 1 and 3: the progression hits a gap after the first stage.
pub(super) fn gapped_catalog() -> StageCatalog {
    StageCatalog::new(
        vec![
            stage("stage-hr", "HR Interview", 1),
            stage("stage-final", "Final Round", 3),
        ],
        standard_type_map(),
    )
}

/// The second stage exists in the catalog but not in the type map.
pub(super) fn unmapped_second_stage_catalog() -> StageCatalog {
    StageCatalog::new(
        vec![
            stage("stage-hr", "HR Interview", 1),
            stage("stage-shadow", "Shadow Round", 2),
        ],
        standard_type_map(),
    )
}

/// A catalog whose first stage is not the HR one.
pub(super) fn technical_first_catalog() -> StageCatalog {
    StageCatalog::new(
        vec![stage("stage-technical", "Technical Round", 1)],
        standard_type_map(),
    )
}

pub(super) fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn schedule_request(
    applicant: &Applicant,
    interviewer: &Interviewer,
    date_time: DateTime<Utc>,
) -> ScheduleRequest {
    ScheduleRequest {
        applicant_id: applicant.id.clone(),
        interviewer_id: interviewer.id.clone(),
        date_time,
    }
}

pub(super) fn schedule_stage_request(
    applicant: &Applicant,
    interviewer: &Interviewer,
    date_time: DateTime<Utc>,
    stage_name: &str,
) -> ScheduleStageRequest {
    ScheduleStageRequest {
        applicant_id: applicant.id.clone(),
        interviewer_id: interviewer.id.clone(),
        date_time,
        stage_name: stage_name.to_string(),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Store stub whose every operation fails, for the redaction paths.
pub(super) struct UnavailableStore;

fn offline<T>() -> Result<T, RepositoryError> {
    Err(RepositoryError::Unavailable("database offline".to_string()))
}

impl ApplicantRepository for UnavailableStore {
    fn insert_applicant(&self, _applicant: NewApplicant) -> Result<Applicant, RepositoryError> {
        offline()
    }

    fn applicant(&self, _id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
        offline()
    }

    fn applicants(&self) -> Result<Vec<Applicant>, RepositoryError> {
        offline()
    }

    fn applicants_for_job(&self, _job: &JobId) -> Result<Vec<Applicant>, RepositoryError> {
        offline()
    }

    fn set_applicant_status(
        &self,
        _id: &ApplicantId,
        _status: ApplicantStatus,
    ) -> Result<Applicant, RepositoryError> {
        offline()
    }
}

impl InterviewerRepository for UnavailableStore {
    fn insert_interviewer(
        &self,
        _interviewer: NewInterviewer,
    ) -> Result<Interviewer, RepositoryError> {
        offline()
    }

    fn interviewer(&self, _id: &InterviewerId) -> Result<Option<Interviewer>, RepositoryError> {
        offline()
    }

    fn interviewers(
        &self,
        _interview_type: Option<InterviewerType>,
    ) -> Result<Vec<Interviewer>, RepositoryError> {
        offline()
    }

    fn update_interviewer(
        &self,
        _id: &InterviewerId,
        _update: InterviewerUpdate,
    ) -> Result<Interviewer, RepositoryError> {
        offline()
    }

    fn delete_interviewer(&self, _id: &InterviewerId) -> Result<(), RepositoryError> {
        offline()
    }
}

impl JobRepository for UnavailableStore {
    fn insert_job(&self, _title: &str, _company: &str) -> Result<Job, RepositoryError> {
        offline()
    }

    fn job(&self, _id: &JobId) -> Result<Option<Job>, RepositoryError> {
        offline()
    }
}

impl InterviewRepository for UnavailableStore {
    fn schedule(
        &self,
        _command: ScheduleCommand,
    ) -> Result<(Interview, InterviewStage), RepositoryError> {
        offline()
    }

    fn interview(&self, _id: &InterviewId) -> Result<Option<Interview>, RepositoryError> {
        offline()
    }

    fn interviews_for_applicant(
        &self,
        _applicant: &ApplicantId,
    ) -> Result<Vec<Interview>, RepositoryError> {
        offline()
    }

    fn latest_interview(
        &self,
        _applicant: &ApplicantId,
    ) -> Result<Option<Interview>, RepositoryError> {
        offline()
    }

    fn stages_for_interview(
        &self,
        _interview: &InterviewId,
    ) -> Result<Vec<InterviewStage>, RepositoryError> {
        offline()
    }

    fn stage_conducted(
        &self,
        _applicant: &ApplicantId,
        _stage: &StageId,
    ) -> Result<bool, RepositoryError> {
        offline()
    }

    fn record_feedback(
        &self,
        _interview: &InterviewId,
        _feedback: Option<String>,
        _result: StageResult,
        _notes: Option<String>,
        _completed_at: DateTime<Utc>,
    ) -> Result<InterviewStage, RepositoryError> {
        offline()
    }

    fn set_interview_status(
        &self,
        _id: &InterviewId,
        _status: InterviewStatus,
    ) -> Result<Interview, RepositoryError> {
        offline()
    }
}
