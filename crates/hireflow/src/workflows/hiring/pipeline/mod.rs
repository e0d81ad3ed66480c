//! Interview pipeline: stage progression, feedback, and scheduling.
//!
//! The pipeline decides whether a requested interview may be scheduled,
//! for whom, and records the outcome. Stage ordering and the stage-name to
//! interviewer-type map are immutable configuration ([`StageCatalog`])
//! injected into the scheduler at startup. All interview writes go through
//! the store's atomic `schedule` commit so an interview, its pending stage,
//! and the applicant status change land together or not at all.

pub mod catalog;
pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{StageCatalog, StageDefinition, StageId};
pub use domain::{
    FeedbackRequest, Interview, InterviewDetailView, InterviewId, InterviewStage,
    InterviewStatus, InterviewSummaryView, ScheduleRequest, ScheduleStageRequest,
    StageLookupView, StageRecordId, StageResult, StageView, StatusRequest,
};
pub use repository::{HiringStore, InterviewRepository, ScheduleCommand};
pub use router::pipeline_router;
pub use service::{InterviewScheduler, ScheduleError};
