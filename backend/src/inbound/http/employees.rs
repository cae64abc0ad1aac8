//! Employee CRUD handlers.
//!
//! ```text
//! GET    /api/getAllEmployees
//! GET    /api/getEmployeeById/{id}
//! POST   /api/postEmployee
//! PUT    /api/UpdateEmployee/{id}
//! DELETE /api/DeleteEmployee/{id}
//! ```
//!
//! Every handler performs exactly one semantic action against the store,
//! re-reads state to confirm or report, and wraps the outcome in the
//! [`ApiResponse`] envelope. Requests are stateless and independent; no
//! cross-request state is held.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{ApiResponse, Employee, EmployeeId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

fn no_employees_found() -> Error {
    Error::not_found("No employees found.")
}

fn employee_not_found(id: EmployeeId) -> Error {
    Error::not_found(format!("Employee with ID {id} not found."))
}

/// List every employee record.
#[utoipa::path(
    get,
    path = "/api/getAllEmployees",
    responses(
        (status = 200, description = "Employees retrieved", body = ApiResponse),
        (status = 404, description = "No employees exist", body = ApiResponse),
        (status = 500, description = "Persistence failure", body = ApiResponse)
    ),
    tags = ["employees"],
    operation_id = "getAllEmployees"
)]
#[get("/getAllEmployees")]
pub async fn get_all_employees(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let employees = state.employees.list().await?;
    if employees.is_empty() {
        return Err(no_employees_found());
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Employees retrieved successfully.",
        employees,
    )))
}

/// Fetch one employee by identifier.
#[utoipa::path(
    get,
    path = "/api/getEmployeeById/{id}",
    params(("id" = i32, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee retrieved", body = ApiResponse),
        (status = 400, description = "Non-numeric identifier", body = ApiResponse),
        (status = 404, description = "Employee absent", body = ApiResponse),
        (status = 500, description = "Persistence failure", body = ApiResponse)
    ),
    tags = ["employees"],
    operation_id = "getEmployeeById"
)]
#[get("/getEmployeeById/{id}")]
pub async fn get_employee_by_id(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = EmployeeId::new(path.into_inner());
    let employee = state
        .employees
        .find_by_id(id)
        .await?
        .ok_or_else(|| employee_not_found(id))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        format!("Employee with ID {id} retrieved successfully."),
        employee,
    )))
}

/// Create an employee record from the request payload.
///
/// The insert returns the stored row, which doubles as the confirm re-read;
/// the envelope echoes it back.
#[utoipa::path(
    post,
    path = "/api/postEmployee",
    request_body = Employee,
    responses(
        (status = 200, description = "Employee created", body = ApiResponse),
        (status = 400, description = "Malformed or absent payload", body = ApiResponse),
        (status = 500, description = "Persistence failure", body = ApiResponse)
    ),
    tags = ["employees"],
    operation_id = "postEmployee"
)]
#[post("/postEmployee")]
pub async fn post_employee(
    state: web::Data<HttpState>,
    payload: web::Json<Employee>,
) -> ApiResult<HttpResponse> {
    let created = state.employees.insert(&payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Employee created successfully.",
        created,
    )))
}

/// Overwrite the employee at `{id}` with the request payload.
///
/// All three fields are replaced, the identifier included.
#[utoipa::path(
    put,
    path = "/api/UpdateEmployee/{id}",
    params(("id" = i32, Path, description = "Employee identifier")),
    request_body = Employee,
    responses(
        (status = 200, description = "Employee updated", body = ApiResponse),
        (status = 400, description = "Malformed payload or identifier", body = ApiResponse),
        (status = 404, description = "Employee absent", body = ApiResponse),
        (status = 500, description = "Persistence failure", body = ApiResponse)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/UpdateEmployee/{id}")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<Employee>,
) -> ApiResult<HttpResponse> {
    let id = EmployeeId::new(path.into_inner());
    let updated = state
        .employees
        .update(id, &payload.into_inner())
        .await?
        .ok_or_else(|| employee_not_found(id))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Employee updated successfully.",
        updated,
    )))
}

/// Remove the employee at `{id}` and report the remaining records.
///
/// The post-delete re-read applies the same empty-collection rule as the
/// list endpoint: deleting the last employee yields a 404 envelope even
/// though the delete itself committed.
#[utoipa::path(
    delete,
    path = "/api/DeleteEmployee/{id}",
    params(("id" = i32, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee deleted; remaining records returned", body = ApiResponse),
        (status = 400, description = "Non-numeric identifier", body = ApiResponse),
        (status = 404, description = "Employee absent, or no employees remain", body = ApiResponse),
        (status = 500, description = "Persistence failure", body = ApiResponse)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/DeleteEmployee/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = EmployeeId::new(path.into_inner());
    if !state.employees.delete(id).await? {
        return Err(employee_not_found(id));
    }

    let remaining = state.employees.list().await?;
    if remaining.is_empty() {
        return Err(no_employees_found());
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        format!("Employee with ID {id} deleted successfully."),
        remaining,
    )))
}
