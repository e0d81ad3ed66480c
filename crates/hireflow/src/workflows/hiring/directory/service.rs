use std::sync::Arc;

use tracing::info;

use crate::workflows::hiring::domain::{
    Applicant, ApplicantId, ApplicantStatus, Interviewer, InterviewerId, InterviewerType,
    InterviewerUpdate, Job, JobId, NewApplicant, NewInterviewer,
};
use crate::workflows::hiring::repository::{
    ApplicantRepository, InterviewerRepository, JobRepository, RepositoryError,
};

/// Everything the directory needs from storage.
pub trait DirectoryStore: ApplicantRepository + InterviewerRepository + JobRepository {}

impl<T> DirectoryStore for T where T: ApplicantRepository + InterviewerRepository + JobRepository {}

/// Error raised by the directory service.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("please provide all required fields: name, email, phone, resume, and job_id")]
    MissingFields,
    #[error("please provide a valid email address")]
    InvalidEmail,
    #[error("job not found")]
    JobNotFound,
    #[error("applicant not found")]
    ApplicantNotFound,
    #[error("no applicants found for this job")]
    NoApplicantsForJob,
    #[error("email already registered")]
    EmailTaken,
    #[error("interviewer not found")]
    InterviewerNotFound,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// CRUD facade over applicants, jobs, and interviewers.
pub struct DirectoryService<S> {
    store: Arc<S>,
}

impl<S> DirectoryService<S>
where
    S: DirectoryStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Register an applicant against an existing job. New applicants start
    /// in the `applied` status.
    pub fn create_applicant(
        &self,
        applicant: NewApplicant,
    ) -> Result<Applicant, DirectoryError> {
        let blank = applicant.name.trim().is_empty()
            || applicant.email.trim().is_empty()
            || applicant.phone.trim().is_empty()
            || applicant.resume.trim().is_empty()
            || applicant.job_id.0.trim().is_empty();
        if blank {
            return Err(DirectoryError::MissingFields);
        }
        if !is_valid_email(&applicant.email) {
            return Err(DirectoryError::InvalidEmail);
        }
        self.store
            .job(&applicant.job_id)?
            .ok_or(DirectoryError::JobNotFound)?;

        let record = self
            .store
            .insert_applicant(applicant)
            .map_err(|err| match err {
                RepositoryError::Conflict => DirectoryError::EmailTaken,
                other => DirectoryError::Repository(other),
            })?;
        info!(applicant = %record.id.0, job = %record.job_id.0, "applicant created");
        Ok(record)
    }

    pub fn applicants(&self) -> Result<Vec<Applicant>, DirectoryError> {
        Ok(self.store.applicants()?)
    }

    pub fn applicant(&self, id: &ApplicantId) -> Result<Applicant, DirectoryError> {
        self.store
            .applicant(id)?
            .ok_or(DirectoryError::ApplicantNotFound)
    }

    /// Applicants for a job. An existing job with zero applicants is
    /// reported as not found, matching the upstream API contract.
    pub fn applicants_for_job(&self, job: &JobId) -> Result<Vec<Applicant>, DirectoryError> {
        self.store.job(job)?.ok_or(DirectoryError::JobNotFound)?;
        let rows = self.store.applicants_for_job(job)?;
        if rows.is_empty() {
            return Err(DirectoryError::NoApplicantsForJob);
        }
        Ok(rows)
    }

    /// Unconditional status overwrite; no transition validation.
    pub fn set_applicant_status(
        &self,
        id: &ApplicantId,
        status: ApplicantStatus,
    ) -> Result<Applicant, DirectoryError> {
        self.store
            .set_applicant_status(id, status)
            .map_err(|err| match err {
                RepositoryError::NotFound => DirectoryError::ApplicantNotFound,
                other => DirectoryError::Repository(other),
            })
    }

    pub fn create_job(&self, title: &str, company: &str) -> Result<Job, DirectoryError> {
        if title.trim().is_empty() || company.trim().is_empty() {
            return Err(DirectoryError::MissingFields);
        }
        Ok(self.store.insert_job(title, company)?)
    }

    pub fn job(&self, id: &JobId) -> Result<Job, DirectoryError> {
        self.store.job(id)?.ok_or(DirectoryError::JobNotFound)
    }

    pub fn create_interviewer(
        &self,
        interviewer: NewInterviewer,
    ) -> Result<Interviewer, DirectoryError> {
        if !is_valid_email(&interviewer.email) {
            return Err(DirectoryError::InvalidEmail);
        }
        let record = self
            .store
            .insert_interviewer(interviewer)
            .map_err(|err| match err {
                RepositoryError::Conflict => DirectoryError::EmailTaken,
                other => DirectoryError::Repository(other),
            })?;
        info!(interviewer = %record.id.0, interview_type = %record.interview_type, "interviewer created");
        Ok(record)
    }

    pub fn interviewers(
        &self,
        interview_type: Option<InterviewerType>,
    ) -> Result<Vec<Interviewer>, DirectoryError> {
        Ok(self.store.interviewers(interview_type)?)
    }

    pub fn interviewer(&self, id: &InterviewerId) -> Result<Interviewer, DirectoryError> {
        self.store
            .interviewer(id)?
            .ok_or(DirectoryError::InterviewerNotFound)
    }

    pub fn update_interviewer(
        &self,
        id: &InterviewerId,
        update: InterviewerUpdate,
    ) -> Result<Interviewer, DirectoryError> {
        if let Some(email) = &update.email {
            if !is_valid_email(email) {
                return Err(DirectoryError::InvalidEmail);
            }
        }
        self.store
            .update_interviewer(id, update)
            .map_err(|err| match err {
                RepositoryError::NotFound => DirectoryError::InterviewerNotFound,
                RepositoryError::Conflict => DirectoryError::EmailTaken,
                other => DirectoryError::Repository(other),
            })
    }

    pub fn delete_interviewer(&self, id: &InterviewerId) -> Result<(), DirectoryError> {
        self.store
            .delete_interviewer(id)
            .map_err(|err| match err {
                RepositoryError::NotFound => DirectoryError::InterviewerNotFound,
                other => DirectoryError::Repository(other),
            })
    }
}

/// Local-part@domain.tld shape with no whitespace; the same predicate the
/// upstream intake form enforces.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.len() >= 3
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}
