//! Uniform response envelope for the employee API.
//!
//! Every HTTP outcome, success or failure, is reported through
//! [`ApiResponse`]: a success flag, a human-readable message, and a payload
//! that is a single employee, a list of employees, or nothing. The payload is
//! a proper sum type rather than free-form JSON; the empty case serialises as
//! `null` so the wire shape is always `{ "isSuccess": …, "message": …,
//! "data": … }`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Employee;

/// Payload slot of the envelope.
///
/// `Empty` serialises as JSON `null`; the other variants serialise as the
/// employee object or array directly, without an enum tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ResponsePayload {
    /// A single employee record.
    One(Employee),
    /// A list of employee records.
    Many(Vec<Employee>),
    /// No payload; serialised as `null`.
    Empty,
}

impl From<Employee> for ResponsePayload {
    fn from(employee: Employee) -> Self {
        Self::One(employee)
    }
}

impl From<Vec<Employee>> for ResponsePayload {
    fn from(employees: Vec<Employee>) -> Self {
        Self::Many(employees)
    }
}

/// Envelope wrapping every API outcome.
///
/// ## Invariants
/// - Failure envelopes always carry [`ResponsePayload::Empty`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// Whether the requested operation succeeded.
    pub is_success: bool,
    /// Human-readable outcome description.
    #[schema(example = "Employees retrieved successfully.")]
    pub message: String,
    /// Operation payload; `null` on failure.
    pub data: ResponsePayload,
}

impl ApiResponse {
    /// Build a success envelope around a payload.
    pub fn success(message: impl Into<String>, data: impl Into<ResponsePayload>) -> Self {
        Self {
            is_success: true,
            message: message.into(),
            data: data.into(),
        }
    }

    /// Build a failure envelope; the payload slot stays empty.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            message: message.into(),
            data: ResponsePayload::Empty,
        }
    }
}
