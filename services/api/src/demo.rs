use crate::infra::default_stage_catalog;
use chrono::{Datelike, Duration, Local, NaiveDate, TimeZone, Utc};
use clap::Args;
use std::sync::Arc;

use hireflow::error::AppError;
use hireflow::workflows::hiring::directory::DirectoryService;
use hireflow::workflows::hiring::memory::InMemoryHiringStore;
use hireflow::workflows::hiring::pipeline::{
    FeedbackRequest, InterviewScheduler, ScheduleRequest, ScheduleStageRequest, StageResult,
};
use hireflow::workflows::hiring::{InterviewerType, NewApplicant, NewInterviewer};
use hireflow::workflows::timesheet::{
    ClientDetails, InMemoryTimesheetStore, MonthGrid, NonChargeableKind, TimeEntry,
    TimeEntryKind, TimesheetStore,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Month for the timesheet portion (1-12, defaults to the current month)
    #[arg(long)]
    pub(crate) month: Option<u32>,
    /// Year for the timesheet portion (defaults to the current year)
    #[arg(long)]
    pub(crate) year: Option<i32>,
    /// Skip the timesheet portion of the demo
    #[arg(long)]
    pub(crate) skip_timesheet: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        month,
        year,
        skip_timesheet,
    } = args;

    println!("Interview pipeline demo");

    let store = Arc::new(InMemoryHiringStore::default());
    let directory = DirectoryService::new(store.clone());
    let scheduler = InterviewScheduler::new(store, Arc::new(default_stage_catalog()));

    let job = match directory.create_job("Backend Engineer", "Initech") {
        Ok(job) => job,
        Err(err) => {
            println!("  Could not seed the job posting: {err}");
            return Ok(());
        }
    };
    println!("- Posted {} at {}", job.title, job.company);

    let applicant = match directory.create_applicant(NewApplicant {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: "555-0100".to_string(),
        resume: "{\"summary\":\"8 years of backend services\"}".to_string(),
        job_id: job.id.clone(),
    }) {
        Ok(applicant) => applicant,
        Err(err) => {
            println!("  Could not seed the applicant: {err}");
            return Ok(());
        }
    };
    println!(
        "- Applicant {} ({}) -> status {}",
        applicant.name,
        applicant.id.0,
        applicant.status.label()
    );

    let mut interviewers = Vec::new();
    for (name, email, position, interview_type) in [
        ("Ann Recruiter", "ann@example.com", "Recruiter", InterviewerType::Hr),
        ("Tom Tech", "tom@example.com", "Staff Engineer", InterviewerType::Technical),
    ] {
        match directory.create_interviewer(NewInterviewer {
            name: name.to_string(),
            email: email.to_string(),
            phone: "555-0101".to_string(),
            position: position.to_string(),
            interview_type,
        }) {
            Ok(interviewer) => interviewers.push(interviewer),
            Err(err) => {
                println!("  Could not seed interviewer {name}: {err}");
                return Ok(());
            }
        }
    }
    let (hr, technical) = (&interviewers[0], &interviewers[1]);

    let slot = Utc
        .with_ymd_and_hms(Utc::now().year(), Utc::now().month(), 15, 9, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    let first = match scheduler.schedule_first(ScheduleRequest {
        applicant_id: applicant.id.clone(),
        interviewer_id: hr.id.clone(),
        date_time: slot,
    }) {
        Ok(detail) => detail,
        Err(err) => {
            println!("  First interview rejected: {err}");
            return Ok(());
        }
    };
    println!(
        "- Scheduled \"{}\" with {} -> applicant status {}",
        first.name,
        hr.name,
        first.applicant.status.label()
    );

    // The next stage stays closed until feedback lands.
    match scheduler.schedule_next(ScheduleRequest {
        applicant_id: applicant.id.clone(),
        interviewer_id: technical.id.clone(),
        date_time: slot + Duration::days(3),
    }) {
        Ok(_) => println!("  Unexpected: next stage opened without feedback"),
        Err(err) => println!("  Next stage correctly refused: {err}"),
    }

    if let Err(err) = scheduler.submit_feedback(
        &first.id,
        FeedbackRequest {
            feedback: Some("clear and structured answers".to_string()),
            result: StageResult::Pass,
            notes: Some("fast-track".to_string()),
        },
    ) {
        println!("  Feedback failed: {err}");
        return Ok(());
    }
    println!("- HR stage passed; feedback recorded");

    match scheduler.schedule_next(ScheduleRequest {
        applicant_id: applicant.id.clone(),
        interviewer_id: technical.id.clone(),
        date_time: slot + Duration::days(3),
    }) {
        Ok(detail) => println!("- Scheduled \"{}\" with {}", detail.name, technical.name),
        Err(err) => println!("  Next stage failed: {err}"),
    }

    // Re-running a stage that was already conducted is a conflict.
    match scheduler.schedule_stage(ScheduleStageRequest {
        applicant_id: applicant.id.clone(),
        interviewer_id: hr.id.clone(),
        date_time: slot + Duration::days(4),
        stage_name: "HR Interview".to_string(),
    }) {
        Ok(_) => println!("  Unexpected: duplicate stage accepted"),
        Err(err) => println!("  Duplicate stage correctly refused: {err}"),
    }

    match scheduler.interviews_for_applicant(&applicant.id) {
        Ok(listing) => {
            println!("- Interview history ({} entries):", listing.len());
            for interview in listing {
                let with = interview
                    .interviewer
                    .map(|interviewer| interviewer.name)
                    .unwrap_or_else(|| "unassigned".to_string());
                println!(
                    "    {} | {} | {} | with {}",
                    interview.id.0,
                    interview.name,
                    interview.status.label(),
                    with
                );
            }
        }
        Err(err) => println!("  Listing failed: {err}"),
    }

    if skip_timesheet {
        return Ok(());
    }

    println!("\nMonthly timesheet demo");
    let today = Local::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or_else(|| today.month());

    let timesheets = InMemoryTimesheetStore::default();
    let employee = match timesheets.insert_employee("Jane Doe", "JD-01", "Senior") {
        Ok(employee) => employee,
        Err(err) => {
            println!("  Could not seed the employee: {err}");
            return Ok(());
        }
    };

    let client = ClientDetails {
        name: "Acme Ltd".to_string(),
        code: "AC-14".to_string(),
        nature_of_work: "Audit".to_string(),
    };
    for (day, hours, kind) in [
        (2, 8, TimeEntryKind::Chargeable { client_slot: 0, client: client.clone() }),
        (3, 6, TimeEntryKind::Chargeable { client_slot: 0, client: client.clone() }),
        (3, 2, TimeEntryKind::NonChargeable { kind: NonChargeableKind::Training }),
        (4, 8, TimeEntryKind::NonChargeable { kind: NonChargeableKind::Leave }),
    ] {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        if let Err(err) = timesheets.append_entry(TimeEntry {
            employee_id: employee.id.clone(),
            date,
            hours,
            kind,
        }) {
            println!("  Entry rejected: {err}");
        }
    }

    let entries = match timesheets.entries_for_month(&employee.id, year, month) {
        Ok(entries) => entries,
        Err(err) => {
            println!("  Could not load entries: {err}");
            return Ok(());
        }
    };
    match MonthGrid::fold(year, month, &entries) {
        Ok(grid) => {
            let view = grid.view(&employee);
            println!(
                "- {} ({}) | {}-{:02} | {} days",
                view.employee.name,
                view.employee.staff_code,
                view.year,
                view.month,
                view.days_in_month
            );
            for row in &view.chargeable_rows {
                if let Some(client) = &row.client {
                    println!(
                        "    client row {} ({}): {} hours",
                        row.slot, client.name, row.total
                    );
                }
            }
            for row in &view.non_chargeable_rows {
                if row.total > 0 {
                    println!("    {}: {} hours", row.label, row.total);
                }
            }
            println!(
                "    totals: {} chargeable + {} non-chargeable = {}",
                view.total_chargeable, view.total_non_chargeable, view.grand_total
            );
        }
        Err(err) => println!("  Grid rejected: {err}"),
    }

    Ok(())
}
