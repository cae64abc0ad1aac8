//! PostgreSQL-backed `EmployeeRepository` implementation using Diesel ORM.
//!
//! A thin adapter: it translates between Diesel rows and the domain
//! employee type and maps infrastructure failures into the port's typed
//! errors. Raw driver messages are logged at debug level and replaced with
//! stable descriptions before they leave this module.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{EmployeePersistenceError, EmployeeRepository};
use crate::domain::{Employee, EmployeeId};

use super::models::{EmployeeRow, NewEmployeeRow};
use super::pool::{DbPool, PoolError};
use super::schema::employees;

/// Diesel-backed implementation of the employee repository port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to the port's connection error.
fn map_pool_error(error: PoolError) -> EmployeePersistenceError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    EmployeePersistenceError::connection(message)
}

/// Map Diesel errors to the port's query/connection errors.
fn map_diesel_error(error: diesel::result::Error) -> EmployeePersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            EmployeePersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            EmployeePersistenceError::query("duplicate employee id")
        }
        DieselError::DatabaseError(_, _) => EmployeePersistenceError::query("database error"),
        _ => EmployeePersistenceError::query("database error"),
    }
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<EmployeeRow> = employees::table
            .order(employees::id.asc())
            .select(EmployeeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EmployeeRow> = employees::table
            .find(id.value())
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Employee::from))
    }

    async fn insert(&self, employee: &Employee) -> Result<Employee, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: EmployeeRow = diesel::insert_into(employees::table)
            .values(NewEmployeeRow::from(employee))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: EmployeeId,
        employee: &Employee,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Tuple changeset rather than an `AsChangeset` struct: the update
        // contract overwrites the identifier too, and `AsChangeset` skips
        // primary-key columns.
        let row: Option<EmployeeRow> = diesel::update(employees::table.find(id.value()))
            .set((
                employees::id.eq(employee.id.value()),
                employees::name.eq(employee.name.as_str()),
                employees::email.eq(employee.email.as_str()),
            ))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Employee::from))
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(employees::table.find(id.value()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Error-mapping coverage; query behaviour is exercised against a live
    //! database in deployment environments.

    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_map_to_connection_errors() {
        let checkout = map_pool_error(PoolError::checkout("timed out"));
        let build = map_pool_error(PoolError::build("bad url"));

        assert_eq!(checkout, EmployeePersistenceError::connection("timed out"));
        assert_eq!(build, EmployeePersistenceError::connection("bad url"));
    }

    #[rstest]
    fn unclassified_diesel_errors_map_to_query_errors() {
        let mapped = map_diesel_error(diesel::result::Error::NotFound);

        assert_eq!(mapped, EmployeePersistenceError::query("database error"));
    }

    #[rstest]
    fn rollback_errors_map_to_query_errors() {
        let mapped = map_diesel_error(diesel::result::Error::RollbackTransaction);

        assert!(matches!(mapped, EmployeePersistenceError::Query { .. }));
    }
}
