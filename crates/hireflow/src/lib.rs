//! Applicant tracking, interview scheduling, and timesheet workflows.
//!
//! The library exposes the domain logic behind the `hireflow-api` service:
//! a people directory (applicants, jobs, interviewers), the interview
//! pipeline state machine, and the monthly timesheet grid. Storage is a set
//! of traits so the workflows can run against the bundled in-memory store
//! or a real database adapter.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
