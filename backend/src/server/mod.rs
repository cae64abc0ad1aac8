//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::{EmployeeRepository, InMemoryEmployeeRepository};
use crate::inbound::http::employees::{
    delete_employee, get_all_employees, get_employee_by_id, post_employee, update_employee,
};
use crate::inbound::http::error::{json_error_handler, not_found_fallback, path_error_handler};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::DieselEmployeeRepository;

/// Build the employee repository based on configuration.
///
/// Uses the Diesel-backed adapter when a pool is available, otherwise falls
/// back to the in-memory repository for database-less runs.
fn build_employee_repository(config: &ServerConfig) -> Arc<dyn EmployeeRepository> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselEmployeeRepository::new(pool.clone())),
        None => {
            warn!("no database pool configured; serving from the in-memory employee repository");
            Arc::new(InMemoryEmployeeRepository::new())
        }
    }
}

/// Assemble the actix application serving the employee API.
///
/// Extractor failures and unmatched routes are routed through the envelope
/// error handlers so clients never see a bare framework error page.
pub fn build_app(
    state: HttpState,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .app_data(web::Data::new(state))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(get_all_employees)
        .service(get_employee_by_id)
        .service(post_employee)
        .service(update_employee)
        .service(delete_employee)
        .default_service(web::route().to(not_found_fallback));

    let mut app = App::new()
        .app_data(health_state)
        .service(api)
        .service(ready)
        .service(live)
        .default_service(web::route().to(not_found_fallback));

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}

/// Run the HTTP server until shutdown.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the listener cannot bind the configured
/// address.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let repository = build_employee_repository(&config);
    let state = HttpState::new(repository);

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays accessible.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || build_app(state.clone(), server_health_state.clone()))
        .bind(config.bind_addr)?;

    info!(addr = %config.bind_addr, "employee API listening");
    health_state.mark_ready();
    server.run().await
}
