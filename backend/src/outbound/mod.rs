//! Outbound adapters connecting the domain to external infrastructure.

pub mod persistence;
