//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API: the five employee CRUD endpoints, the health probes,
//! and the envelope/employee schemas. The generated document backs Swagger
//! UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{ApiResponse, Employee, EmployeeId, ResponsePayload};

/// OpenAPI document for the employee API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Staffdir backend API",
        description = "CRUD HTTP interface over employee records. Every response body is an ApiResponse envelope."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::get_all_employees,
        crate::inbound::http::employees::get_employee_by_id,
        crate::inbound::http::employees::post_employee,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(Employee, EmployeeId, ApiResponse, ResponsePayload)),
    tags(
        (name = "employees", description = "CRUD operations over employee records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
