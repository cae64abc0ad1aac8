//! Employee data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Numeric employee identifier used as the primary key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct EmployeeId(i32);

impl EmployeeId {
    /// Wrap a raw numeric identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw numeric value.
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for EmployeeId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Employee record.
///
/// Serialisation contract: `{ "id": 1, "name": "Ada", "email": "ada@example.com" }`.
/// The same shape is accepted as the request payload for create and update;
/// unknown fields are ignored and payload validation stops at shape checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    /// Unique numeric identifier.
    #[schema(example = 1)]
    pub id: EmployeeId,
    /// Employee name.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Employee email address.
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl Employee {
    /// Build an employee record from its parts.
    pub fn new(id: impl Into<EmployeeId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}
