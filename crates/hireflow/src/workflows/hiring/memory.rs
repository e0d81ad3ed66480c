//! In-memory store backing the API service, the demo, and the tests.
//!
//! A single mutex guards every table, which makes it the serialization
//! point the pipeline relies on: the `schedule` commit writes the
//! interview, its stage record, and the applicant status change under one
//! lock, and re-checks stage uniqueness inside that same critical section.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use super::domain::{
    Applicant, ApplicantId, ApplicantStatus, Interviewer, InterviewerId, InterviewerType,
    InterviewerUpdate, Job, JobId, NewApplicant, NewInterviewer,
};
use super::pipeline::catalog::StageId;
use super::pipeline::domain::{
    Interview, InterviewId, InterviewStage, InterviewStatus, StageRecordId, StageResult,
};
use super::pipeline::repository::{InterviewRepository, ScheduleCommand};
use super::repository::{
    ApplicantRepository, InterviewerRepository, JobRepository, RepositoryError,
};

#[derive(Default)]
struct Inner {
    jobs: HashMap<JobId, Job>,
    applicants: HashMap<ApplicantId, Applicant>,
    interviewers: HashMap<InterviewerId, Interviewer>,
    interviews: Vec<Interview>,
    stages: Vec<InterviewStage>,
    next_job: u64,
    next_applicant: u64,
    next_interviewer: u64,
    next_interview: u64,
    next_stage: u64,
}

impl Inner {
    fn stage_conducted(&self, applicant: &ApplicantId, stage: &StageId) -> bool {
        self.stages.iter().any(|record| {
            &record.stage_id == stage
                && self
                    .interviews
                    .iter()
                    .any(|interview| {
                        interview.id == record.interview_id && &interview.applicant_id == applicant
                    })
        })
    }
}

/// Shared in-memory implementation of every hiring storage trait.
#[derive(Default)]
pub struct InMemoryHiringStore {
    inner: Mutex<Inner>,
}

impl InMemoryHiringStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl JobRepository for InMemoryHiringStore {
    fn insert_job(&self, title: &str, company: &str) -> Result<Job, RepositoryError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        inner.next_job += 1;
        let job = Job {
            id: JobId(format!("job-{:06}", inner.next_job)),
            title: title.to_string(),
            company: company.to_string(),
        };
        inner.jobs.insert(job.id.clone(), job.clone());
        Ok(job)
    }

    fn job(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner.jobs.get(id).cloned())
    }
}

impl ApplicantRepository for InMemoryHiringStore {
    fn insert_applicant(&self, applicant: NewApplicant) -> Result<Applicant, RepositoryError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        if inner
            .applicants
            .values()
            .any(|existing| existing.email == applicant.email)
        {
            return Err(RepositoryError::Conflict);
        }
        inner.next_applicant += 1;
        let record = Applicant {
            id: ApplicantId(format!("apl-{:06}", inner.next_applicant)),
            name: applicant.name,
            email: applicant.email,
            phone: applicant.phone,
            resume: applicant.resume,
            status: ApplicantStatus::Applied,
            job_id: applicant.job_id,
        };
        inner.applicants.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn applicant(&self, id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner.applicants.get(id).cloned())
    }

    fn applicants(&self) -> Result<Vec<Applicant>, RepositoryError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        let mut rows: Vec<Applicant> = inner.applicants.values().cloned().collect();
        rows.sort_by(|a, b| a.id.0.cmp(&b.id.0));
        Ok(rows)
    }

    fn applicants_for_job(&self, job: &JobId) -> Result<Vec<Applicant>, RepositoryError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        let mut rows: Vec<Applicant> = inner
            .applicants
            .values()
            .filter(|applicant| &applicant.job_id == job)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.id.0.cmp(&b.id.0));
        Ok(rows)
    }

    fn set_applicant_status(
        &self,
        id: &ApplicantId,
        status: ApplicantStatus,
    ) -> Result<Applicant, RepositoryError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        let applicant = inner
            .applicants
            .get_mut(id)
            .ok_or(RepositoryError::NotFound)?;
        applicant.status = status;
        Ok(applicant.clone())
    }
}

impl InterviewerRepository for InMemoryHiringStore {
    fn insert_interviewer(
        &self,
        interviewer: NewInterviewer,
    ) -> Result<Interviewer, RepositoryError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        if inner
            .interviewers
            .values()
            .any(|existing| existing.email == interviewer.email)
        {
            return Err(RepositoryError::Conflict);
        }
        inner.next_interviewer += 1;
        let record = Interviewer {
            id: InterviewerId(format!("ivr-{:06}", inner.next_interviewer)),
            name: interviewer.name,
            email: interviewer.email,
            phone: interviewer.phone,
            position: interviewer.position,
            interview_type: interviewer.interview_type,
        };
        inner
            .interviewers
            .insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn interviewer(&self, id: &InterviewerId) -> Result<Option<Interviewer>, RepositoryError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner.interviewers.get(id).cloned())
    }

    fn interviewers(
        &self,
        interview_type: Option<InterviewerType>,
    ) -> Result<Vec<Interviewer>, RepositoryError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        let mut rows: Vec<Interviewer> = inner
            .interviewers
            .values()
            .filter(|interviewer| {
                interview_type
                    .map(|wanted| interviewer.interview_type == wanted)
                    .unwrap_or(true)
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    fn update_interviewer(
        &self,
        id: &InterviewerId,
        update: InterviewerUpdate,
    ) -> Result<Interviewer, RepositoryError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        if !inner.interviewers.contains_key(id) {
            return Err(RepositoryError::NotFound);
        }
        if let Some(email) = &update.email {
            let taken = inner
                .interviewers
                .values()
                .any(|existing| &existing.email == email && &existing.id != id);
            if taken {
                return Err(RepositoryError::Conflict);
            }
        }
        let interviewer = inner
            .interviewers
            .get_mut(id)
            .ok_or(RepositoryError::NotFound)?;
        if let Some(name) = update.name {
            interviewer.name = name;
        }
        if let Some(email) = update.email {
            interviewer.email = email;
        }
        if let Some(phone) = update.phone {
            interviewer.phone = phone;
        }
        if let Some(position) = update.position {
            interviewer.position = position;
        }
        if let Some(interview_type) = update.interview_type {
            interviewer.interview_type = interview_type;
        }
        Ok(interviewer.clone())
    }

    fn delete_interviewer(&self, id: &InterviewerId) -> Result<(), RepositoryError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        inner
            .interviewers
            .remove(id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

impl InterviewRepository for InMemoryHiringStore {
    fn schedule(
        &self,
        command: ScheduleCommand,
    ) -> Result<(Interview, InterviewStage), RepositoryError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        if !inner.applicants.contains_key(&command.applicant_id) {
            return Err(RepositoryError::NotFound);
        }
        // Uniqueness re-check inside the commit: the loser of a race gets
        // a conflict instead of a duplicate stage.
        if inner.stage_conducted(&command.applicant_id, &command.stage_id) {
            return Err(RepositoryError::Conflict);
        }

        inner.next_interview += 1;
        let interview = Interview {
            id: InterviewId(format!("int-{:06}", inner.next_interview)),
            applicant_id: command.applicant_id.clone(),
            interviewer_id: command.interviewer_id,
            date_time: command.date_time,
            status: InterviewStatus::Scheduled,
            name: command.name,
            created_at: Utc::now(),
        };
        inner.next_stage += 1;
        let stage = InterviewStage {
            id: StageRecordId(format!("stg-{:06}", inner.next_stage)),
            interview_id: interview.id.clone(),
            stage_id: command.stage_id,
            result: StageResult::Pending,
            feedback: None,
            notes: None,
            completed_at: None,
        };

        if let Some(status) = command.applicant_status {
            if let Some(applicant) = inner.applicants.get_mut(&command.applicant_id) {
                applicant.status = status;
            }
        }
        inner.interviews.push(interview.clone());
        inner.stages.push(stage.clone());
        Ok((interview, stage))
    }

    fn interview(&self, id: &InterviewId) -> Result<Option<Interview>, RepositoryError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner
            .interviews
            .iter()
            .find(|interview| &interview.id == id)
            .cloned())
    }

    fn interviews_for_applicant(
        &self,
        applicant: &ApplicantId,
    ) -> Result<Vec<Interview>, RepositoryError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        let mut rows: Vec<Interview> = inner
            .interviews
            .iter()
            .filter(|interview| &interview.applicant_id == applicant)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.date_time.cmp(&a.date_time));
        Ok(rows)
    }

    fn latest_interview(
        &self,
        applicant: &ApplicantId,
    ) -> Result<Option<Interview>, RepositoryError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        // max_by_key keeps the last maximum, so equal timestamps resolve
        // to the most recently inserted interview.
        Ok(inner
            .interviews
            .iter()
            .filter(|interview| &interview.applicant_id == applicant)
            .max_by_key(|interview| interview.created_at)
            .cloned())
    }

    fn stages_for_interview(
        &self,
        interview: &InterviewId,
    ) -> Result<Vec<InterviewStage>, RepositoryError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner
            .stages
            .iter()
            .filter(|record| &record.interview_id == interview)
            .cloned()
            .collect())
    }

    fn stage_conducted(
        &self,
        applicant: &ApplicantId,
        stage: &StageId,
    ) -> Result<bool, RepositoryError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner.stage_conducted(applicant, stage))
    }

    fn record_feedback(
        &self,
        interview: &InterviewId,
        feedback: Option<String>,
        result: StageResult,
        notes: Option<String>,
        completed_at: DateTime<Utc>,
    ) -> Result<InterviewStage, RepositoryError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        let record = inner
            .stages
            .iter_mut()
            .find(|record| &record.interview_id == interview)
            .ok_or(RepositoryError::NotFound)?;
        record.feedback = feedback;
        record.result = result;
        record.notes = notes;
        record.completed_at = Some(completed_at);
        Ok(record.clone())
    }

    fn set_interview_status(
        &self,
        id: &InterviewId,
        status: InterviewStatus,
    ) -> Result<Interview, RepositoryError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        let interview = inner
            .interviews
            .iter_mut()
            .find(|interview| &interview.id == id)
            .ok_or(RepositoryError::NotFound)?;
        interview.status = status;
        Ok(interview.clone())
    }
}
