use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{StageDefinition, StageId};
use crate::workflows::hiring::domain::{
    ApplicantId, ApplicantView, InterviewerId, InterviewerView,
};

/// Identifier wrapper for interviews.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterviewId(pub String);

/// Identifier wrapper for interview stage records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StageRecordId(pub String);

/// Lifecycle of a scheduled interview event. Status transitions are not
/// validated; the update endpoint overwrites unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl InterviewStatus {
    pub const fn label(self) -> &'static str {
        match self {
            InterviewStatus::Scheduled => "scheduled",
            InterviewStatus::Completed => "completed",
            InterviewStatus::Cancelled => "cancelled",
        }
    }
}

/// Outcome recorded for an interview stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageResult {
    Pending,
    Pass,
    Fail,
}

impl StageResult {
    pub const fn label(self) -> &'static str {
        match self {
            StageResult::Pending => "pending",
            StageResult::Pass => "pass",
            StageResult::Fail => "fail",
        }
    }
}

/// One scheduling event. Immutable except `status`; `created_at` is
/// assigned by the store and drives the "latest interview" ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
    pub id: InterviewId,
    pub applicant_id: ApplicantId,
    pub interviewer_id: InterviewerId,
    pub date_time: DateTime<Utc>,
    pub status: InterviewStatus,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// The outcome record for one interview. Exactly one per interview in
/// practice; modeled one-to-many for extensibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewStage {
    pub id: StageRecordId,
    pub interview_id: InterviewId,
    pub stage_id: StageId,
    pub result: StageResult,
    pub feedback: Option<String>,
    pub notes: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Request body for scheduling the first or the next interview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub applicant_id: ApplicantId,
    pub interviewer_id: InterviewerId,
    pub date_time: DateTime<Utc>,
}

/// Request body for scheduling a specific stage by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleStageRequest {
    pub applicant_id: ApplicantId,
    pub interviewer_id: InterviewerId,
    pub date_time: DateTime<Utc>,
    pub stage_name: String,
}

/// Request body for recording stage feedback. `result` is constrained to
/// the [`StageResult`] domain at the serde boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub feedback: Option<String>,
    pub result: StageResult,
    pub notes: Option<String>,
}

/// Request body for overwriting an interview's status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRequest {
    pub status: InterviewStatus,
}

/// Catalog fields attached to a stage record in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageLookupView {
    pub id: StageId,
    pub name: String,
    pub order: u32,
}

impl From<&StageDefinition> for StageLookupView {
    fn from(definition: &StageDefinition) -> Self {
        Self {
            id: definition.id.clone(),
            name: definition.name.clone(),
            order: definition.order,
        }
    }
}

/// A stage record annotated with its catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageView {
    pub id: StageRecordId,
    pub interview_id: InterviewId,
    pub result: StageResult,
    pub feedback: Option<String>,
    pub notes: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub stage: StageLookupView,
}

impl StageView {
    pub fn assemble(record: InterviewStage, definition: &StageDefinition) -> Self {
        Self {
            id: record.id,
            interview_id: record.interview_id,
            result: record.result,
            feedback: record.feedback,
            notes: record.notes,
            completed_at: record.completed_at,
            stage: StageLookupView::from(definition),
        }
    }
}

/// Full interview payload returned by the scheduling operations: the
/// interview annotated with its stages, its interviewer, and its applicant
/// with the owning job. `interviewer` is `None` only when the interviewer
/// was deleted after scheduling.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewDetailView {
    pub id: InterviewId,
    pub name: String,
    pub date_time: DateTime<Utc>,
    pub status: InterviewStatus,
    pub created_at: DateTime<Utc>,
    pub stages: Vec<StageView>,
    pub interviewer: Option<InterviewerView>,
    pub applicant: ApplicantView,
}

/// Compact interview payload for per-applicant listings.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewSummaryView {
    pub id: InterviewId,
    pub name: String,
    pub date_time: DateTime<Utc>,
    pub status: InterviewStatus,
    pub interviewer: Option<InterviewerView>,
}
