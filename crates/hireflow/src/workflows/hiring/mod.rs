//! Hiring workflows: the people directory and the interview pipeline.
//!
//! `directory` covers applicant intake and interviewer administration.
//! `pipeline` holds the stage-progression state machine that decides which
//! interview may be scheduled next for an applicant. Both share the storage
//! traits in `repository` and the domain types in `domain`; `memory`
//! provides the single in-memory store used by the API service, the demo,
//! and the tests.

pub mod directory;
pub mod domain;
pub mod memory;
pub mod pipeline;
pub mod repository;

pub use domain::{
    Applicant, ApplicantId, ApplicantStatus, ApplicantView, Interviewer, InterviewerId,
    InterviewerType, InterviewerUpdate, InterviewerView, Job, JobId, JobView, NewApplicant,
    NewInterviewer,
};
pub use memory::InMemoryHiringStore;
pub use repository::{
    ApplicantRepository, InterviewerRepository, JobRepository, RepositoryError,
};
