use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::catalog::StageCatalog;
use super::domain::{
    FeedbackRequest, Interview, InterviewDetailView, InterviewId, InterviewStatus,
    InterviewSummaryView, ScheduleRequest, ScheduleStageRequest, StageResult, StageView,
};
use super::repository::{HiringStore, ScheduleCommand};
use crate::workflows::hiring::domain::{
    Applicant, ApplicantId, ApplicantStatus, ApplicantView, Interviewer, InterviewerId,
    InterviewerType, InterviewerView,
};
use crate::workflows::hiring::repository::RepositoryError;

/// Error raised by the interview scheduler.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("applicant not found")]
    ApplicantNotFound,
    #[error("interviewer not found")]
    InterviewerNotFound,
    #[error("interview not found")]
    InterviewNotFound,
    #[error("interview stage not found")]
    StageRecordNotFound,
    #[error("stage not found")]
    UnknownStage,
    #[error("job not found")]
    JobNotFound,
    #[error("no previous interview found for this applicant")]
    NoPriorInterview,
    #[error("first interview must be with an HR interviewer")]
    FirstStageRequiresHr,
    #[error("cannot schedule next interview: previous stage was not passed or is still pending")]
    PreviousStageNotPassed,
    #[error("no next stage available: interview process completed")]
    ProcessCompleted,
    #[error("no interviewer type is mapped for stage '{stage}'")]
    UnmappedStage { stage: String },
    #[error("this stage requires a {required} interviewer")]
    WrongInterviewerType { required: InterviewerType },
    #[error("{stage} was already conducted for this applicant")]
    StageAlreadyConducted { stage: String },
    #[error("no stages are configured in the catalog")]
    EmptyCatalog,
    #[error("stage '{0}' is missing from the catalog")]
    StageMissingFromCatalog(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Decides whether a requested interview may be scheduled, for whom, and
/// records the outcome. The stage catalog is injected, never ambient.
pub struct InterviewScheduler<S> {
    store: Arc<S>,
    catalog: Arc<StageCatalog>,
}

impl<S> InterviewScheduler<S>
where
    S: HiringStore + 'static,
{
    pub fn new(store: Arc<S>, catalog: Arc<StageCatalog>) -> Self {
        Self { store, catalog }
    }

    pub fn catalog(&self) -> &StageCatalog {
        &self.catalog
    }

    /// Schedule the applicant's first interview. The first stage is the
    /// catalog's lowest order and is hard-mapped to HR interviewers,
    /// independent of the name-to-type map. Sets the applicant's status to
    /// `interviewing` inside the same commit.
    pub fn schedule_first(
        &self,
        request: ScheduleRequest,
    ) -> Result<InterviewDetailView, ScheduleError> {
        let applicant = self.require_applicant(&request.applicant_id)?;
        let interviewer = self.require_interviewer(&request.interviewer_id)?;
        if interviewer.interview_type != InterviewerType::Hr {
            return Err(ScheduleError::FirstStageRequiresHr);
        }

        let stage = self
            .catalog
            .first_stage()
            .ok_or(ScheduleError::EmptyCatalog)?;

        let (interview, _) = self.store.schedule(ScheduleCommand {
            applicant_id: applicant.id.clone(),
            interviewer_id: interviewer.id.clone(),
            date_time: request.date_time,
            name: format!("{} - {}", stage.name, applicant.name),
            stage_id: stage.id.clone(),
            applicant_status: Some(ApplicantStatus::Interviewing),
        })?;

        info!(
            interview = %interview.id.0,
            applicant = %applicant.id.0,
            stage = %stage.name,
            "scheduled first interview"
        );
        self.interview_detail(interview)
    }

    /// Schedule the stage after the applicant's latest interview. Requires
    /// the latest stage to have passed; an order gap in the catalog means
    /// the process is complete.
    pub fn schedule_next(
        &self,
        request: ScheduleRequest,
    ) -> Result<InterviewDetailView, ScheduleError> {
        let current = self
            .store
            .latest_interview(&request.applicant_id)?
            .ok_or(ScheduleError::NoPriorInterview)?;
        let stages = self.store.stages_for_interview(&current.id)?;
        let current_stage = stages.first().ok_or(ScheduleError::StageRecordNotFound)?;
        if current_stage.result != StageResult::Pass {
            return Err(ScheduleError::PreviousStageNotPassed);
        }

        let current_definition = self
            .catalog
            .stage_by_id(&current_stage.stage_id)
            .ok_or_else(|| {
                ScheduleError::StageMissingFromCatalog(current_stage.stage_id.0.clone())
            })?;
        let next = self
            .catalog
            .stage_with_order(current_definition.order + 1)
            .ok_or(ScheduleError::ProcessCompleted)?;

        let interviewer = self.require_interviewer(&request.interviewer_id)?;
        let required = self
            .catalog
            .required_interviewer_type(&next.name)
            .ok_or_else(|| ScheduleError::UnmappedStage {
                stage: next.name.clone(),
            })?;
        if interviewer.interview_type != required {
            return Err(ScheduleError::WrongInterviewerType { required });
        }

        let applicant = self.require_applicant(&request.applicant_id)?;
        let (interview, _) = self.store.schedule(ScheduleCommand {
            applicant_id: applicant.id.clone(),
            interviewer_id: interviewer.id.clone(),
            date_time: request.date_time,
            name: format!("{} - {}", next.name, applicant.name),
            stage_id: next.id.clone(),
            applicant_status: None,
        })?;

        info!(
            interview = %interview.id.0,
            applicant = %applicant.id.0,
            stage = %next.name,
            "scheduled next interview"
        );
        self.interview_detail(interview)
    }

    /// Schedule a specific stage by exact name, rejecting stages already
    /// conducted for the applicant regardless of their result.
    pub fn schedule_stage(
        &self,
        request: ScheduleStageRequest,
    ) -> Result<InterviewDetailView, ScheduleError> {
        let stage = self
            .catalog
            .stage_by_name(&request.stage_name)
            .ok_or(ScheduleError::UnknownStage)?;
        let applicant = self.require_applicant(&request.applicant_id)?;
        let interviewer = self.require_interviewer(&request.interviewer_id)?;

        let required = self
            .catalog
            .required_interviewer_type(&stage.name)
            .ok_or_else(|| ScheduleError::UnmappedStage {
                stage: stage.name.clone(),
            })?;
        if interviewer.interview_type != required {
            return Err(ScheduleError::WrongInterviewerType { required });
        }

        if self.store.stage_conducted(&applicant.id, &stage.id)? {
            return Err(ScheduleError::StageAlreadyConducted {
                stage: stage.name.clone(),
            });
        }

        let (interview, _) = self.store.schedule(ScheduleCommand {
            applicant_id: applicant.id.clone(),
            interviewer_id: interviewer.id.clone(),
            date_time: request.date_time,
            name: format!("{} - {}", stage.name, applicant.name),
            stage_id: stage.id.clone(),
            applicant_status: None,
        })?;

        info!(
            interview = %interview.id.0,
            applicant = %applicant.id.0,
            stage = %stage.name,
            "scheduled specific stage"
        );
        self.interview_detail(interview)
    }

    /// Record feedback on the interview's stage record and stamp its
    /// completion time.
    pub fn submit_feedback(
        &self,
        interview_id: &InterviewId,
        request: FeedbackRequest,
    ) -> Result<StageView, ScheduleError> {
        let record = self
            .store
            .record_feedback(
                interview_id,
                request.feedback,
                request.result,
                request.notes,
                Utc::now(),
            )
            .map_err(|err| match err {
                RepositoryError::NotFound => ScheduleError::StageRecordNotFound,
                other => ScheduleError::Repository(other),
            })?;

        let definition = self
            .catalog
            .stage_by_id(&record.stage_id)
            .ok_or_else(|| ScheduleError::StageMissingFromCatalog(record.stage_id.0.clone()))?;
        Ok(StageView::assemble(record, definition))
    }

    /// Unconditional status overwrite; no transition validation.
    pub fn update_status(
        &self,
        interview_id: &InterviewId,
        status: InterviewStatus,
    ) -> Result<Interview, ScheduleError> {
        self.store
            .set_interview_status(interview_id, status)
            .map_err(|err| match err {
                RepositoryError::NotFound => ScheduleError::InterviewNotFound,
                other => ScheduleError::Repository(other),
            })
    }

    /// All interviews for an applicant, newest `date_time` first, each
    /// annotated with its interviewer.
    pub fn interviews_for_applicant(
        &self,
        applicant_id: &ApplicantId,
    ) -> Result<Vec<InterviewSummaryView>, ScheduleError> {
        self.require_applicant(applicant_id)?;
        let interviews = self.store.interviews_for_applicant(applicant_id)?;

        let mut views = Vec::with_capacity(interviews.len());
        for interview in interviews {
            let interviewer = self
                .store
                .interviewer(&interview.interviewer_id)?
                .map(|interviewer| InterviewerView::from(&interviewer));
            views.push(InterviewSummaryView {
                id: interview.id,
                name: interview.name,
                date_time: interview.date_time,
                status: interview.status,
                interviewer,
            });
        }
        Ok(views)
    }

    pub fn interview(
        &self,
        interview_id: &InterviewId,
    ) -> Result<InterviewDetailView, ScheduleError> {
        let interview = self
            .store
            .interview(interview_id)?
            .ok_or(ScheduleError::InterviewNotFound)?;
        self.interview_detail(interview)
    }

    fn require_applicant(&self, id: &ApplicantId) -> Result<Applicant, ScheduleError> {
        self.store
            .applicant(id)?
            .ok_or(ScheduleError::ApplicantNotFound)
    }

    fn require_interviewer(&self, id: &InterviewerId) -> Result<Interviewer, ScheduleError> {
        self.store
            .interviewer(id)?
            .ok_or(ScheduleError::InterviewerNotFound)
    }

    fn interview_detail(
        &self,
        interview: Interview,
    ) -> Result<InterviewDetailView, ScheduleError> {
        let records = self.store.stages_for_interview(&interview.id)?;
        let mut stages = Vec::with_capacity(records.len());
        for record in records {
            let definition = self
                .catalog
                .stage_by_id(&record.stage_id)
                .ok_or_else(|| ScheduleError::StageMissingFromCatalog(record.stage_id.0.clone()))?;
            stages.push(StageView::assemble(record, definition));
        }

        let interviewer = self
            .store
            .interviewer(&interview.interviewer_id)?
            .map(|interviewer| InterviewerView::from(&interviewer));
        let applicant = self.require_applicant(&interview.applicant_id)?;
        let job = self
            .store
            .job(&applicant.job_id)?
            .ok_or(ScheduleError::JobNotFound)?;

        Ok(InterviewDetailView {
            id: interview.id,
            name: interview.name,
            date_time: interview.date_time,
            status: interview.status,
            created_at: interview.created_at,
            stages,
            interviewer,
            applicant: ApplicantView::assemble(&applicant, &job),
        })
    }
}
