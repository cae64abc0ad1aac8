//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting actix
//! handlers turn domain failures into envelope-shaped JSON responses and
//! status codes. Extractor failures (malformed bodies, non-numeric path
//! ids) and unmatched routes are mapped here too, so a client never sees a
//! bare framework error page.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use tracing::error;

use crate::domain::{ApiResponse, Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message sent to clients in place of internal failure detail.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render the envelope for a failed request.
///
/// Internal failures are redacted: the underlying detail goes to the log,
/// the client gets a fixed generic message.
fn envelope_for(error: &Error) -> ApiResponse {
    if matches!(error.code(), ErrorCode::InternalError) {
        error!(detail = %error.message(), "request failed in the persistence layer");
        ApiResponse::failure(INTERNAL_ERROR_MESSAGE)
    } else {
        ApiResponse::failure(error.message())
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(envelope_for(self))
    }
}

/// Map JSON body extraction failures to a 400 envelope.
///
/// Registered via `web::JsonConfig`; covers absent, truncated, and
/// shape-invalid employee payloads.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::failure("Invalid employee data."));
    actix_web::error::InternalError::from_response(err, response).into()
}

/// Map path-segment extraction failures (non-numeric ids) to a 400 envelope.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::failure("Invalid employee id."));
    actix_web::error::InternalError::from_response(err, response).into()
}

/// Fallback for unmatched routes; keeps the envelope invariant.
pub async fn not_found_fallback() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::failure("Resource not found."))
}
