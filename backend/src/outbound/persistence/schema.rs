//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the deployed schema exactly; Diesel uses
//! them for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Employee records table.
    ///
    /// The `id` column is the numeric primary key supplied by the client.
    employees (id) {
        /// Primary key: numeric employee identifier.
        id -> Int4,
        /// Employee name.
        name -> Varchar,
        /// Employee email address.
        email -> Varchar,
    }
}
