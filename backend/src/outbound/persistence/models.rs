//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use diesel::prelude::*;

use super::schema::employees;
use crate::domain::Employee;

/// Row struct for reading from the employees table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self::new(row.id, row.name, row.email)
    }
}

/// Insertable struct for creating new employee records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub id: i32,
    pub name: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a Employee> for NewEmployeeRow<'a> {
    fn from(employee: &'a Employee) -> Self {
        Self {
            id: employee.id.value(),
            name: employee.name.as_str(),
            email: employee.email.as_str(),
        }
    }
}
