use super::domain::{
    Applicant, ApplicantId, ApplicantStatus, Interviewer, InterviewerId, InterviewerType,
    InterviewerUpdate, Job, JobId, NewApplicant, NewInterviewer,
};

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Storage abstraction for applicants so the services can be exercised in
/// isolation. Implementations assign identifiers and the initial
/// `applied` status on insert, and reject duplicate emails with
/// [`RepositoryError::Conflict`].
pub trait ApplicantRepository: Send + Sync {
    fn insert_applicant(&self, applicant: NewApplicant) -> Result<Applicant, RepositoryError>;
    fn applicant(&self, id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError>;
    fn applicants(&self) -> Result<Vec<Applicant>, RepositoryError>;
    fn applicants_for_job(&self, job: &JobId) -> Result<Vec<Applicant>, RepositoryError>;
    fn set_applicant_status(
        &self,
        id: &ApplicantId,
        status: ApplicantStatus,
    ) -> Result<Applicant, RepositoryError>;
}

/// Storage abstraction for interviewers. `interviewers` returns rows
/// ordered by name ascending, optionally filtered by exact type.
pub trait InterviewerRepository: Send + Sync {
    fn insert_interviewer(
        &self,
        interviewer: NewInterviewer,
    ) -> Result<Interviewer, RepositoryError>;
    fn interviewer(&self, id: &InterviewerId) -> Result<Option<Interviewer>, RepositoryError>;
    fn interviewers(
        &self,
        interview_type: Option<InterviewerType>,
    ) -> Result<Vec<Interviewer>, RepositoryError>;
    fn update_interviewer(
        &self,
        id: &InterviewerId,
        update: InterviewerUpdate,
    ) -> Result<Interviewer, RepositoryError>;
    fn delete_interviewer(&self, id: &InterviewerId) -> Result<(), RepositoryError>;
}

/// Storage abstraction for job postings.
pub trait JobRepository: Send + Sync {
    fn insert_job(&self, title: &str, company: &str) -> Result<Job, RepositoryError>;
    fn job(&self, id: &JobId) -> Result<Option<Job>, RepositoryError>;
}
