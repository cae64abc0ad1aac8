//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the domain port and remain testable without a database.

use std::sync::Arc;

use crate::domain::ports::EmployeeRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Employee persistence port used by every CRUD handler.
    pub employees: Arc<dyn EmployeeRepository>,
}

impl HttpState {
    /// Construct state around an employee repository port.
    pub fn new(employees: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees }
    }
}
