use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Datelike;

use super::domain::{Employee, EmployeeId, TimeEntry};
use crate::workflows::hiring::repository::RepositoryError;

/// Storage abstraction for employees and their timesheet entries.
pub trait TimesheetStore: Send + Sync {
    fn insert_employee(
        &self,
        name: &str,
        staff_code: &str,
        grade: &str,
    ) -> Result<Employee, RepositoryError>;
    fn employee(&self, id: &EmployeeId) -> Result<Option<Employee>, RepositoryError>;
    /// Append one cell's worth of hours. Fails with
    /// [`RepositoryError::NotFound`] when the employee does not exist.
    fn append_entry(&self, entry: TimeEntry) -> Result<(), RepositoryError>;
    fn entries_for_month(
        &self,
        employee: &EmployeeId,
        year: i32,
        month: u32,
    ) -> Result<Vec<TimeEntry>, RepositoryError>;
}

#[derive(Default)]
struct Inner {
    employees: HashMap<EmployeeId, Employee>,
    entries: Vec<TimeEntry>,
    next_employee: u64,
}

/// In-memory implementation used by the API service and the tests.
#[derive(Default)]
pub struct InMemoryTimesheetStore {
    inner: Mutex<Inner>,
}

impl InMemoryTimesheetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TimesheetStore for InMemoryTimesheetStore {
    fn insert_employee(
        &self,
        name: &str,
        staff_code: &str,
        grade: &str,
    ) -> Result<Employee, RepositoryError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        inner.next_employee += 1;
        let employee = Employee {
            id: EmployeeId(format!("emp-{:06}", inner.next_employee)),
            name: name.to_string(),
            staff_code: staff_code.to_string(),
            grade: grade.to_string(),
        };
        inner.employees.insert(employee.id.clone(), employee.clone());
        Ok(employee)
    }

    fn employee(&self, id: &EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner.employees.get(id).cloned())
    }

    fn append_entry(&self, entry: TimeEntry) -> Result<(), RepositoryError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        if !inner.employees.contains_key(&entry.employee_id) {
            return Err(RepositoryError::NotFound);
        }
        inner.entries.push(entry);
        Ok(())
    }

    fn entries_for_month(
        &self,
        employee: &EmployeeId,
        year: i32,
        month: u32,
    ) -> Result<Vec<TimeEntry>, RepositoryError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner
            .entries
            .iter()
            .filter(|entry| {
                &entry.employee_id == employee
                    && entry.date.year() == year
                    && entry.date.month() == month
            })
            .cloned()
            .collect())
    }
}
