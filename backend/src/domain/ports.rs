//! Port abstraction for employee persistence adapters and their errors.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, Error};

/// Persistence errors raised by employee repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeePersistenceError {
    /// Repository connection could not be established.
    #[error("employee repository connection failed: {message}")]
    Connection {
        /// Underlying connection failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("employee repository query failed: {message}")]
    Query {
        /// Underlying query failure description.
        message: String,
    },
}

impl EmployeePersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

impl From<EmployeePersistenceError> for Error {
    /// Every infrastructure failure collapses to an internal error. The
    /// carried detail stays server-side: the HTTP adapter logs it and sends
    /// a generic message to the client.
    fn from(error: EmployeePersistenceError) -> Self {
        match error {
            EmployeePersistenceError::Connection { message }
            | EmployeePersistenceError::Query { message } => Self::internal(message),
        }
    }
}

/// Collection-style access to persisted employee records.
///
/// Each method is a single semantic action against the store. Handlers
/// compose these with confirm re-reads; adapters never branch on business
/// outcomes.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Fetch every employee record.
    async fn list(&self) -> Result<Vec<Employee>, EmployeePersistenceError>;

    /// Fetch one employee by identifier.
    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError>;

    /// Insert a record and return the stored row.
    async fn insert(&self, employee: &Employee) -> Result<Employee, EmployeePersistenceError>;

    /// Overwrite the record at `id` with `employee` — all fields, the
    /// identifier included — and return the stored row, or `None` when `id`
    /// is absent.
    async fn update(
        &self,
        id: EmployeeId,
        employee: &Employee,
    ) -> Result<Option<Employee>, EmployeePersistenceError>;

    /// Remove the record at `id`, reporting whether a record was removed.
    async fn delete(&self, id: EmployeeId) -> Result<bool, EmployeePersistenceError>;
}

/// In-memory employee repository.
///
/// Backs handler tests and database-less development runs; the server falls
/// back to it when no database pool is configured.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    records: Mutex<Vec<Employee>>,
}

impl InMemoryEmployeeRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with records.
    pub fn seeded(records: impl IntoIterator<Item = Employee>) -> Self {
        Self {
            records: Mutex::new(records.into_iter().collect()),
        }
    }

    fn with_records<T>(
        &self,
        f: impl FnOnce(&mut Vec<Employee>) -> T,
    ) -> Result<T, EmployeePersistenceError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| EmployeePersistenceError::query("employee store lock poisoned"))?;
        Ok(f(&mut records))
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, EmployeePersistenceError> {
        self.with_records(|records| records.clone())
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        self.with_records(|records| records.iter().find(|e| e.id == id).cloned())
    }

    async fn insert(&self, employee: &Employee) -> Result<Employee, EmployeePersistenceError> {
        let inserted = self.with_records(|records| {
            if records.iter().any(|e| e.id == employee.id) {
                None
            } else {
                records.push(employee.clone());
                Some(employee.clone())
            }
        })?;

        // Mirrors the unique-key constraint a relational store enforces.
        inserted.ok_or_else(|| {
            EmployeePersistenceError::query(format!("duplicate employee id {}", employee.id))
        })
    }

    async fn update(
        &self,
        id: EmployeeId,
        employee: &Employee,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        self.with_records(|records| {
            let slot = records.iter_mut().find(|e| e.id == id)?;
            *slot = employee.clone();
            Some(employee.clone())
        })
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, EmployeePersistenceError> {
        self.with_records(|records| {
            let before = records.len();
            records.retain(|e| e.id != id);
            records.len() < before
        })
    }
}
