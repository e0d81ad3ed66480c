use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::domain::{
    ClientDetails, Employee, EmployeeId, NonChargeableKind, TimeEntry, TimeEntryKind,
};

/// Number of chargeable client rows on the form.
pub const CLIENT_SLOTS: usize = 8;

/// Upper bound for hours entered in a single cell.
pub const MAX_DAILY_HOURS: u8 = 8;

/// Validation errors raised while folding entries into a grid.
#[derive(Debug, thiserror::Error)]
pub enum TimesheetError {
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
    #[error("hours must be between 1 and 8, got {0}")]
    HoursOutOfRange(u8),
    #[error("client slot must be below 8, got {0}")]
    ClientSlotOutOfRange(u8),
    #[error("entry on {date} falls outside {year}-{month:02}")]
    DateOutsideMonth {
        date: NaiveDate,
        year: i32,
        month: u32,
    },
}

/// Reject hours and client slots the form would not accept.
pub fn validate_entry(entry: &TimeEntry) -> Result<(), TimesheetError> {
    if entry.hours == 0 || entry.hours > MAX_DAILY_HOURS {
        return Err(TimesheetError::HoursOutOfRange(entry.hours));
    }
    if let TimeEntryKind::Chargeable { client_slot, .. } = &entry.kind {
        if *client_slot as usize >= CLIENT_SLOTS {
            return Err(TimesheetError::ClientSlotOutOfRange(*client_slot));
        }
    }
    Ok(())
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next.signed_duration_since(first).num_days() as u32)
}

/// A month of timesheet cells keyed by row and day. Folding the same cell
/// twice keeps the later value, the way repeated form input does.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    days_in_month: u32,
    chargeable: Vec<BTreeMap<u32, u8>>,
    clients: Vec<Option<ClientDetails>>,
    non_chargeable: BTreeMap<NonChargeableKind, BTreeMap<u32, u8>>,
}

impl MonthGrid {
    pub fn new(year: i32, month: u32) -> Result<Self, TimesheetError> {
        let days_in_month =
            days_in_month(year, month).ok_or(TimesheetError::InvalidMonth(month))?;
        Ok(Self {
            year,
            month,
            days_in_month,
            chargeable: vec![BTreeMap::new(); CLIENT_SLOTS],
            clients: vec![None; CLIENT_SLOTS],
            non_chargeable: BTreeMap::new(),
        })
    }

    /// Fold a day-keyed entry list into the grid.
    pub fn fold(year: i32, month: u32, entries: &[TimeEntry]) -> Result<Self, TimesheetError> {
        let mut grid = Self::new(year, month)?;
        for entry in entries {
            grid.apply(entry)?;
        }
        Ok(grid)
    }

    pub fn apply(&mut self, entry: &TimeEntry) -> Result<(), TimesheetError> {
        validate_entry(entry)?;
        if entry.date.year() != self.year || entry.date.month() != self.month {
            return Err(TimesheetError::DateOutsideMonth {
                date: entry.date,
                year: self.year,
                month: self.month,
            });
        }
        let day = entry.date.day();

        match &entry.kind {
            TimeEntryKind::Chargeable {
                client_slot,
                client,
            } => {
                let slot = *client_slot as usize;
                self.chargeable[slot].insert(day, entry.hours);
                self.clients[slot] = Some(client.clone());
            }
            TimeEntryKind::NonChargeable { kind } => {
                self.non_chargeable
                    .entry(*kind)
                    .or_default()
                    .insert(day, entry.hours);
            }
        }
        Ok(())
    }

    /// Unfold the grid back into the day-keyed entry list, skipping empty
    /// cells. Folding the result reproduces the populated cells.
    pub fn entries(&self, employee_id: &EmployeeId) -> Vec<TimeEntry> {
        let mut entries = Vec::new();
        for (slot, cells) in self.chargeable.iter().enumerate() {
            let Some(client) = &self.clients[slot] else {
                continue;
            };
            for (&day, &hours) in cells {
                let Some(date) = NaiveDate::from_ymd_opt(self.year, self.month, day) else {
                    continue;
                };
                entries.push(TimeEntry {
                    employee_id: employee_id.clone(),
                    date,
                    hours,
                    kind: TimeEntryKind::Chargeable {
                        client_slot: slot as u8,
                        client: client.clone(),
                    },
                });
            }
        }
        for (kind, cells) in &self.non_chargeable {
            for (&day, &hours) in cells {
                let Some(date) = NaiveDate::from_ymd_opt(self.year, self.month, day) else {
                    continue;
                };
                entries.push(TimeEntry {
                    employee_id: employee_id.clone(),
                    date,
                    hours,
                    kind: TimeEntryKind::NonChargeable { kind: *kind },
                });
            }
        }
        entries
    }

    pub fn chargeable_row_total(&self, slot: usize) -> u32 {
        self.chargeable
            .get(slot)
            .map(|cells| cells.values().map(|&hours| u32::from(hours)).sum())
            .unwrap_or(0)
    }

    pub fn non_chargeable_row_total(&self, kind: NonChargeableKind) -> u32 {
        self.non_chargeable
            .get(&kind)
            .map(|cells| cells.values().map(|&hours| u32::from(hours)).sum())
            .unwrap_or(0)
    }

    pub fn day_chargeable_total(&self, day: u32) -> u32 {
        self.chargeable
            .iter()
            .filter_map(|cells| cells.get(&day))
            .map(|&hours| u32::from(hours))
            .sum()
    }

    pub fn day_non_chargeable_total(&self, day: u32) -> u32 {
        self.non_chargeable
            .values()
            .filter_map(|cells| cells.get(&day))
            .map(|&hours| u32::from(hours))
            .sum()
    }

    pub fn total_chargeable(&self) -> u32 {
        (0..CLIENT_SLOTS).map(|slot| self.chargeable_row_total(slot)).sum()
    }

    pub fn total_non_chargeable(&self) -> u32 {
        NonChargeableKind::ALL
            .iter()
            .map(|&kind| self.non_chargeable_row_total(kind))
            .sum()
    }

    pub fn grand_total(&self) -> u32 {
        self.total_chargeable() + self.total_non_chargeable()
    }

    /// Assemble the serializable grid with the employee header.
    pub fn view(&self, employee: &Employee) -> TimesheetView {
        let chargeable_rows = (0..CLIENT_SLOTS)
            .map(|slot| ChargeableRowView {
                slot: slot as u8,
                client: self.clients[slot].clone(),
                cells: self.chargeable[slot].clone(),
                total: self.chargeable_row_total(slot),
            })
            .collect();

        let non_chargeable_rows = NonChargeableKind::ALL
            .iter()
            .map(|&kind| NonChargeableRowView {
                kind,
                label: kind.label(),
                cells: self
                    .non_chargeable
                    .get(&kind)
                    .cloned()
                    .unwrap_or_default(),
                total: self.non_chargeable_row_total(kind),
            })
            .collect();

        let mut day_totals = BTreeMap::new();
        for day in 1..=self.days_in_month {
            day_totals.insert(
                day,
                DayTotalView {
                    chargeable: self.day_chargeable_total(day),
                    non_chargeable: self.day_non_chargeable_total(day),
                },
            );
        }

        TimesheetView {
            employee: employee.clone(),
            year: self.year,
            month: self.month,
            days_in_month: self.days_in_month,
            chargeable_rows,
            non_chargeable_rows,
            day_totals,
            total_chargeable: self.total_chargeable(),
            total_non_chargeable: self.total_non_chargeable(),
            grand_total: self.grand_total(),
        }
    }
}

/// One chargeable row with its client columns and total.
#[derive(Debug, Clone, Serialize)]
pub struct ChargeableRowView {
    pub slot: u8,
    pub client: Option<ClientDetails>,
    pub cells: BTreeMap<u32, u8>,
    pub total: u32,
}

/// One non-chargeable row with its label and total.
#[derive(Debug, Clone, Serialize)]
pub struct NonChargeableRowView {
    pub kind: NonChargeableKind,
    pub label: &'static str,
    pub cells: BTreeMap<u32, u8>,
    pub total: u32,
}

/// Per-day column totals.
#[derive(Debug, Clone, Serialize)]
pub struct DayTotalView {
    pub chargeable: u32,
    pub non_chargeable: u32,
}

/// The full serializable timesheet for one employee and month.
#[derive(Debug, Clone, Serialize)]
pub struct TimesheetView {
    pub employee: Employee,
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    pub chargeable_rows: Vec<ChargeableRowView>,
    pub non_chargeable_rows: Vec<NonChargeableRowView>,
    pub day_totals: BTreeMap<u32, DayTotalView>,
    pub total_chargeable: u32,
    pub total_non_chargeable: u32,
    pub grand_total: u32,
}
