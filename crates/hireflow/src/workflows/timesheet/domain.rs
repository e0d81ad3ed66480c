use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for employees.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub String);

/// Header fields shown on a timesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub staff_code: String,
    pub grade: String,
}

/// Client columns attached to a chargeable row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDetails {
    pub name: String,
    pub code: String,
    pub nature_of_work: String,
}

/// The fixed non-chargeable categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonChargeableKind {
    Office,
    Training,
    Leave,
    Overtime,
    Holiday,
}

impl NonChargeableKind {
    pub const ALL: [NonChargeableKind; 5] = [
        NonChargeableKind::Office,
        NonChargeableKind::Training,
        NonChargeableKind::Leave,
        NonChargeableKind::Overtime,
        NonChargeableKind::Holiday,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            NonChargeableKind::Office => "Office Work",
            NonChargeableKind::Training => "Training",
            NonChargeableKind::Leave => "Leave",
            NonChargeableKind::Overtime => "Overtime Hours",
            NonChargeableKind::Holiday => "Public Holiday",
        }
    }
}

/// Which grid row an entry lands in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TimeEntryKind {
    /// One of the eight client rows, carrying the client columns.
    Chargeable {
        client_slot: u8,
        client: ClientDetails,
    },
    /// One of the fixed non-chargeable rows.
    NonChargeable { kind: NonChargeableKind },
}

/// One cell of the grid: hours worked by an employee on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub hours: u8,
    #[serde(flatten)]
    pub kind: TimeEntryKind,
}
