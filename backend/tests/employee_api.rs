//! End-to-end contract tests over the assembled application.
//!
//! Drives the public `build_app` wiring the way an HTTP client would. Two
//! properties anchor the suite: every response body deserialises to the
//! `ApiResponse` envelope, and the create → get → delete lifecycle behaves
//! as documented, including the empty-store report after deleting the last
//! record.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use staffdir::domain::Employee;
use staffdir::domain::ports::InMemoryEmployeeRepository;
use staffdir::inbound::http::health::HealthState;
use staffdir::inbound::http::state::HttpState;
use staffdir::server::build_app;

fn test_app(
    repository: InMemoryEmployeeRepository,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    build_app(HttpState::new(Arc::new(repository)), health_state)
}

async fn envelope_of(response: ServiceResponse) -> Value {
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("envelope JSON")
}

/// Assert the uniform envelope shape without caring about the outcome.
fn assert_envelope_shape(envelope: &Value) {
    let object = envelope.as_object().expect("envelope is an object");
    assert!(object.contains_key("isSuccess"), "isSuccess missing");
    assert!(object.contains_key("message"), "message missing");
    assert!(object.contains_key("data"), "data missing");
    assert!(object["isSuccess"].is_boolean());
    assert!(object["message"].is_string());
}

#[actix_web::test]
async fn create_get_delete_lifecycle_follows_the_contract() {
    let app = actix_test::init_service(test_app(InMemoryEmployeeRepository::new())).await;
    let employee = json!({ "id": 1, "name": "A", "email": "a@x.com" });

    let created = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/postEmployee")
            .set_json(&employee)
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::OK);
    let created_envelope = envelope_of(created).await;
    assert_eq!(created_envelope["data"], employee);

    let fetched = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/getEmployeeById/1")
            .to_request(),
    )
    .await;
    assert_eq!(fetched.status(), StatusCode::OK);
    let fetched_envelope = envelope_of(fetched).await;
    assert_eq!(fetched_envelope["data"], employee);

    // Deleting the only record commits, but the post-delete report applies
    // the empty-collection rule and answers not-found.
    let deleted = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/api/DeleteEmployee/1")
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NOT_FOUND);
    let deleted_envelope = envelope_of(deleted).await;
    assert_eq!(deleted_envelope["message"], json!("No employees found."));

    let refetched = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/getEmployeeById/1")
            .to_request(),
    )
    .await;
    assert_eq!(refetched.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case::list_empty(actix_test::TestRequest::get().uri("/api/getAllEmployees"))]
#[case::get_missing(actix_test::TestRequest::get().uri("/api/getEmployeeById/99"))]
#[case::get_non_numeric(actix_test::TestRequest::get().uri("/api/getEmployeeById/abc"))]
#[case::create_valid(
    actix_test::TestRequest::post()
        .uri("/api/postEmployee")
        .set_json(serde_json::json!({ "id": 5, "name": "E", "email": "e@x.com" }))
)]
#[case::create_malformed(
    actix_test::TestRequest::post()
        .uri("/api/postEmployee")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
)]
#[case::update_missing(
    actix_test::TestRequest::put()
        .uri("/api/UpdateEmployee/99")
        .set_json(serde_json::json!({ "id": 99, "name": "E", "email": "e@x.com" }))
)]
#[case::delete_missing(actix_test::TestRequest::delete().uri("/api/DeleteEmployee/99"))]
#[case::unmatched_route(actix_test::TestRequest::get().uri("/api/listEmployees"))]
#[case::unmatched_root(actix_test::TestRequest::get().uri("/nothing/here"))]
#[actix_web::test]
async fn every_response_body_is_an_envelope(#[case] request: actix_test::TestRequest) {
    let app = actix_test::init_service(test_app(InMemoryEmployeeRepository::new())).await;

    let response = actix_test::call_service(&app, request.to_request()).await;
    let envelope = envelope_of(response).await;

    assert_envelope_shape(&envelope);
}

#[actix_web::test]
async fn failure_envelopes_carry_a_null_data_slot() {
    let app = actix_test::init_service(test_app(InMemoryEmployeeRepository::new())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/getAllEmployees")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let envelope = envelope_of(response).await;
    assert_eq!(envelope["data"], Value::Null);
    assert_eq!(envelope["isSuccess"], json!(false));
}

#[actix_web::test]
async fn successive_creates_accumulate_in_the_list() {
    let app = actix_test::init_service(test_app(InMemoryEmployeeRepository::new())).await;

    for employee in [
        Employee::new(1, "Ada Lovelace", "ada@example.com"),
        Employee::new(2, "Grace Hopper", "grace@example.com"),
    ] {
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/postEmployee")
                .set_json(employee)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let list = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/getAllEmployees")
            .to_request(),
    )
    .await;
    assert_eq!(list.status(), StatusCode::OK);
    let envelope = envelope_of(list).await;
    assert_eq!(envelope["data"].as_array().map(Vec::len), Some(2));
}

#[actix_web::test]
async fn health_probes_answer_outside_the_envelope() {
    let app = actix_test::init_service(test_app(InMemoryEmployeeRepository::new())).await;

    for uri in ["/health/ready", "/health/live"] {
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri(uri).to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK, "probe {uri}");
        let body = actix_test::read_body(response).await;
        assert!(body.is_empty(), "probe {uri} body should be empty");
    }
}
