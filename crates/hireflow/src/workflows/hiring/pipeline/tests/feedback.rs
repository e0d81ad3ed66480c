use super::common::*;
use crate::workflows::hiring::domain::{ApplicantId, InterviewerType};
use crate::workflows::hiring::pipeline::domain::{
    FeedbackRequest, InterviewId, InterviewStatus, StageResult,
};
use crate::workflows::hiring::pipeline::service::ScheduleError;

#[test]
fn feedback_records_the_outcome_and_completion_time() {
    let store = build_store();
    let job = seed_job(&store);
    let applicant = seed_applicant(&store, &job, "Jane Doe");
    let hr = seed_interviewer(&store, "Ann Recruiter", InterviewerType::Hr);
    let scheduler = standard_scheduler(store);

    let interview = scheduler
        .schedule_first(schedule_request(&applicant, &hr, at(1, 9)))
        .expect("first interview scheduled");

    let stage = scheduler
        .submit_feedback(
            &interview.id,
            FeedbackRequest {
                feedback: Some("clear and structured answers".to_string()),
                result: StageResult::Pass,
                notes: Some("fast-track to technical".to_string()),
            },
        )
        .expect("feedback recorded");

    assert_eq!(stage.result, StageResult::Pass);
    assert_eq!(stage.feedback.as_deref(), Some("clear and structured answers"));
    assert_eq!(stage.notes.as_deref(), Some("fast-track to technical"));
    assert!(stage.completed_at.is_some());
    assert_eq!(stage.stage.name, "HR Interview");
    assert_eq!(stage.stage.order, 1);
}

#[test]
fn feedback_for_an_unknown_interview_is_not_found() {
    let store = build_store();
    let scheduler = standard_scheduler(store);

    assert!(matches!(
        scheduler.submit_feedback(
            &InterviewId("int-999999".to_string()),
            FeedbackRequest {
                feedback: None,
                result: StageResult::Pass,
                notes: None,
            },
        ),
        Err(ScheduleError::StageRecordNotFound)
    ));
}

#[test]
fn status_updates_overwrite_without_transition_checks() {
    let store = build_store();
    let job = seed_job(&store);
    let applicant = seed_applicant(&store, &job, "Jane Doe");
    let hr = seed_interviewer(&store, "Ann Recruiter", InterviewerType::Hr);
    let scheduler = standard_scheduler(store);

    let interview = scheduler
        .schedule_first(schedule_request(&applicant, &hr, at(1, 9)))
        .expect("first interview scheduled");

    let cancelled = scheduler
        .update_status(&interview.id, InterviewStatus::Cancelled)
        .expect("status updated");
    assert_eq!(cancelled.status, InterviewStatus::Cancelled);

    // Any overwrite is accepted, even one that walks backwards.
    let completed = scheduler
        .update_status(&interview.id, InterviewStatus::Completed)
        .expect("status updated");
    assert_eq!(completed.status, InterviewStatus::Completed);
}

#[test]
fn status_update_for_an_unknown_interview_is_not_found() {
    let store = build_store();
    let scheduler = standard_scheduler(store);

    assert!(matches!(
        scheduler.update_status(&InterviewId("int-999999".to_string()), InterviewStatus::Cancelled),
        Err(ScheduleError::InterviewNotFound)
    ));
}

#[test]
fn applicant_interview_listing_sorts_by_date_descending() {
    let store = build_store();
    let job = seed_job(&store);
    let applicant = seed_applicant(&store, &job, "Jane Doe");
    let hr = seed_interviewer(&store, "Ann Recruiter", InterviewerType::Hr);
    let technical = seed_interviewer(&store, "Tom Tech", InterviewerType::Technical);
    let scheduler = scheduler_with(store, two_stage_catalog());

    // The second interview is created later but booked for an earlier slot.
    let first = scheduler
        .schedule_first(schedule_request(&applicant, &hr, at(10, 9)))
        .expect("first interview scheduled");
    scheduler
        .submit_feedback(
            &first.id,
            FeedbackRequest {
                feedback: None,
                result: StageResult::Pass,
                notes: None,
            },
        )
        .expect("feedback recorded");
    scheduler
        .schedule_next(schedule_request(&applicant, &technical, at(5, 9)))
        .expect("next interview scheduled");

    let listing = scheduler
        .interviews_for_applicant(&applicant.id)
        .expect("listing succeeds");
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0].name, "HR Interview - Jane Doe");
    assert_eq!(listing[1].name, "Technical Round - Jane Doe");
    let interviewer = listing[0].interviewer.as_ref().expect("interviewer attached");
    assert_eq!(interviewer.interview_type, InterviewerType::Hr);
}

#[test]
fn listing_for_an_unknown_applicant_is_not_found() {
    let store = build_store();
    let scheduler = standard_scheduler(store);

    assert!(matches!(
        scheduler.interviews_for_applicant(&ApplicantId("apl-999999".to_string())),
        Err(ScheduleError::ApplicantNotFound)
    ));
}

#[test]
fn interview_detail_nests_interviewer_applicant_and_job() {
    let store = build_store();
    let job = seed_job(&store);
    let applicant = seed_applicant(&store, &job, "Jane Doe");
    let hr = seed_interviewer(&store, "Ann Recruiter", InterviewerType::Hr);
    let scheduler = standard_scheduler(store);

    let scheduled = scheduler
        .schedule_first(schedule_request(&applicant, &hr, at(1, 9)))
        .expect("first interview scheduled");
    let detail = scheduler.interview(&scheduled.id).expect("detail loads");

    let interviewer = detail.interviewer.expect("interviewer attached");
    assert_eq!(interviewer.name, "Ann Recruiter");
    assert_eq!(detail.applicant.name, "Jane Doe");
    assert_eq!(detail.applicant.job.company, "Initech");
    assert_eq!(detail.stages.len(), 1);
}
