//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides the concrete implementation of the employee repository port,
//! backed by PostgreSQL via Diesel with async support through `diesel-async`
//! and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapter**: the repository only translates between Diesel rows
//!   and the domain employee type. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and the schema
//!   definition (`schema.rs`) are implementation details, never exposed to
//!   the domain layer.
//! - **Strongly typed errors**: database failures are mapped to the port's
//!   persistence error type; raw driver messages stay out of responses.

mod diesel_employee_repository;
mod models;
mod pool;
mod schema;

pub use diesel_employee_repository::DieselEmployeeRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
