use chrono::{DateTime, Utc};

use super::catalog::StageId;
use super::domain::{
    Interview, InterviewId, InterviewStage, InterviewStatus, StageResult,
};
use crate::workflows::hiring::domain::{ApplicantId, ApplicantStatus, InterviewerId};
use crate::workflows::hiring::repository::{
    ApplicantRepository, InterviewerRepository, JobRepository, RepositoryError,
};

/// Inputs for the atomic schedule commit.
#[derive(Debug, Clone)]
pub struct ScheduleCommand {
    pub applicant_id: ApplicantId,
    pub interviewer_id: InterviewerId,
    pub date_time: DateTime<Utc>,
    pub name: String,
    pub stage_id: StageId,
    /// Applied to the applicant inside the same commit when set. Only the
    /// first interview changes the applicant's status.
    pub applicant_status: Option<ApplicantStatus>,
}

/// Storage abstraction for interviews and their stage records.
///
/// `schedule` is a single commit: the interview row, its pending stage
/// record, and the optional applicant status change land together or not
/// at all. Implementations must also re-check inside that commit that no
/// stage record already exists for `(applicant_id, stage_id)` and return
/// [`RepositoryError::Conflict`] otherwise, so two racing schedules for
/// the same stage cannot both succeed.
pub trait InterviewRepository: Send + Sync {
    fn schedule(
        &self,
        command: ScheduleCommand,
    ) -> Result<(Interview, InterviewStage), RepositoryError>;
    fn interview(&self, id: &InterviewId) -> Result<Option<Interview>, RepositoryError>;
    /// All interviews for an applicant, ordered by `date_time` descending.
    fn interviews_for_applicant(
        &self,
        applicant: &ApplicantId,
    ) -> Result<Vec<Interview>, RepositoryError>;
    /// The applicant's most recently created interview, ties broken by
    /// insertion order.
    fn latest_interview(
        &self,
        applicant: &ApplicantId,
    ) -> Result<Option<Interview>, RepositoryError>;
    fn stages_for_interview(
        &self,
        interview: &InterviewId,
    ) -> Result<Vec<InterviewStage>, RepositoryError>;
    /// Whether any stage record references this stage for this applicant,
    /// regardless of its result.
    fn stage_conducted(
        &self,
        applicant: &ApplicantId,
        stage: &StageId,
    ) -> Result<bool, RepositoryError>;
    /// Record feedback on the interview's stage record (first match).
    /// Returns [`RepositoryError::NotFound`] when no stage record exists.
    fn record_feedback(
        &self,
        interview: &InterviewId,
        feedback: Option<String>,
        result: StageResult,
        notes: Option<String>,
        completed_at: DateTime<Utc>,
    ) -> Result<InterviewStage, RepositoryError>;
    fn set_interview_status(
        &self,
        id: &InterviewId,
        status: InterviewStatus,
    ) -> Result<Interview, RepositoryError>;
}

/// Everything the interview scheduler needs from storage.
pub trait HiringStore:
    ApplicantRepository + InterviewerRepository + JobRepository + InterviewRepository
{
}

impl<T> HiringStore for T where
    T: ApplicantRepository + InterviewerRepository + JobRepository + InterviewRepository
{
}
