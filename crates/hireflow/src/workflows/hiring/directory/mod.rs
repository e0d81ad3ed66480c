//! People directory: applicant intake and interviewer administration.

pub mod router;
pub mod service;

pub use router::directory_router;
pub use service::{DirectoryError, DirectoryService, DirectoryStore};
