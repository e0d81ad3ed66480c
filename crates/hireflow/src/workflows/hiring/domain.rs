use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored applicants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicantId(pub String);

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

/// Identifier wrapper for interviewers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterviewerId(pub String);

/// Lifecycle of an applicant across the hiring pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicantStatus {
    Applied,
    Interviewing,
    Hired,
    Rejected,
}

impl ApplicantStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicantStatus::Applied => "applied",
            ApplicantStatus::Interviewing => "interviewing",
            ApplicantStatus::Hired => "hired",
            ApplicantStatus::Rejected => "rejected",
        }
    }
}

/// The closed set of interviewer specializations. Stage requirements are
/// matched against these exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InterviewerType {
    #[serde(rename = "HR")]
    Hr,
    Technical,
    Cultural,
    Final,
}

impl InterviewerType {
    pub const fn label(self) -> &'static str {
        match self {
            InterviewerType::Hr => "HR",
            InterviewerType::Technical => "Technical",
            InterviewerType::Cultural => "Cultural",
            InterviewerType::Final => "Final",
        }
    }
}

impl fmt::Display for InterviewerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A stored applicant. The `resume` payload is serialized structured text
/// produced upstream; the service stores and returns it opaquely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: ApplicantId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub resume: String,
    pub status: ApplicantStatus,
    pub job_id: JobId,
}

/// A job posting owning zero or more applicants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
}

/// An interviewer. Email is unique across interviewers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interviewer {
    pub id: InterviewerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub interview_type: InterviewerType,
}

/// Intake payload for a new applicant. Status is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewApplicant {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub resume: String,
    pub job_id: JobId,
}

/// Intake payload for a new interviewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInterviewer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub interview_type: InterviewerType,
}

/// Partial update for an interviewer; absent fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterviewerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub interview_type: Option<InterviewerType>,
}

/// Interviewer fields exposed on interview payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewerView {
    pub id: InterviewerId,
    pub name: String,
    pub position: String,
    pub interview_type: InterviewerType,
}

impl From<&Interviewer> for InterviewerView {
    fn from(interviewer: &Interviewer) -> Self {
        Self {
            id: interviewer.id.clone(),
            name: interviewer.name.clone(),
            position: interviewer.position.clone(),
            interview_type: interviewer.interview_type,
        }
    }
}

/// Job fields nested under applicant payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobView {
    pub id: JobId,
    pub title: String,
    pub company: String,
}

impl From<&Job> for JobView {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
        }
    }
}

/// Applicant fields exposed on interview payloads, with the owning job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicantView {
    pub id: ApplicantId,
    pub name: String,
    pub email: String,
    pub status: ApplicantStatus,
    pub job: JobView,
}

impl ApplicantView {
    pub fn assemble(applicant: &Applicant, job: &Job) -> Self {
        Self {
            id: applicant.id.clone(),
            name: applicant.name.clone(),
            email: applicant.email.clone(),
            status: applicant.status,
            job: JobView::from(job),
        }
    }
}
