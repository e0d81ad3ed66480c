//! Monthly timesheet grid: fold a day-keyed entry list into the grid the
//! timesheet form renders, and back. Eight chargeable client rows plus the
//! fixed non-chargeable categories, with per-row, per-day, and grand
//! totals. Pure data transformation; rendering stays upstream.

pub mod domain;
pub mod grid;
pub mod router;
pub mod store;

pub use domain::{
    ClientDetails, Employee, EmployeeId, NonChargeableKind, TimeEntry, TimeEntryKind,
};
pub use grid::{MonthGrid, TimesheetError, TimesheetView, CLIENT_SLOTS, MAX_DAILY_HOURS};
pub use router::timesheet_router;
pub use store::{InMemoryTimesheetStore, TimesheetStore};
