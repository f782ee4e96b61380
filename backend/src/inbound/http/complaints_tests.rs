//! Tests for complaint HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{
    CheckStatusResponse, ComplaintCommand, ComplaintQuery, FIXTURE_TICKET,
    FixtureComplaintCommand, FixtureComplaintQuery, MockComplaintCommand, MockComplaintQuery,
};
use crate::domain::{ComplaintStatus, ErrorCode};
use crate::inbound::http::validation::json_config;

fn test_app(
    command: Arc<dyn ComplaintCommand>,
    query: Arc<dyn ComplaintQuery>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(command, query)))
        .app_data(json_config())
        .configure(configure)
}

fn fixture_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    test_app(Arc::new(FixtureComplaintCommand), Arc::new(FixtureComplaintQuery))
}

async fn read_json(response: actix_web::dev::ServiceResponse) -> Value {
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("json body")
}

#[actix_web::test]
async fn submit_returns_message_and_ticket() {
    let app = actix_test::init_service(fixture_app()).await;
    let request = actix_test::TestRequest::post()
        .uri("/submit_complaint")
        .set_json(json!({"email": "a@x.com", "complaint": "broken widget"}))
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Complaint submitted");
    assert_eq!(body["ticket_number"], FIXTURE_TICKET);
}

#[rstest]
#[case(json!({"complaint": "broken widget"}), "email")]
#[case(json!({"email": "a@x.com"}), "complaint")]
#[actix_web::test]
async fn submit_rejects_missing_fields(#[case] payload: Value, #[case] field: &str) {
    let app = actix_test::init_service(fixture_app()).await;
    let request = actix_test::TestRequest::post()
        .uri("/submit_complaint")
        .set_json(payload)
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], field);
    assert_eq!(body["details"]["code"], "missing_field");
}

#[actix_web::test]
async fn submit_rejects_malformed_json() {
    let app = actix_test::init_service(fixture_app()).await;
    let request = actix_test::TestRequest::post()
        .uri("/submit_complaint")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["details"]["code"], "malformed_body");
}

#[actix_web::test]
async fn submit_surfaces_domain_errors() {
    let mut command = MockComplaintCommand::new();
    command.expect_submit().times(1).return_once(|_| {
        Err(Error::notification_failed("relay down")
            .with_details(json!({"ticketNumber": "AB12CD", "code": "notification_failed"})))
    });
    let app = actix_test::init_service(test_app(
        Arc::new(command),
        Arc::new(FixtureComplaintQuery),
    ))
    .await;
    let request = actix_test::TestRequest::post()
        .uri("/submit_complaint")
        .set_json(json!({"email": "a@x.com", "complaint": "broken widget"}))
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = read_json(response).await;
    assert_eq!(body["details"]["ticketNumber"], "AB12CD");
}

#[actix_web::test]
async fn resolve_returns_confirmation() {
    let app = actix_test::init_service(fixture_app()).await;
    let request = actix_test::TestRequest::put()
        .uri("/resolve_complaint/AB12CD")
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({"message": "Complaint resolved"}));
}

#[rstest]
#[case("/resolve_complaint/abc", "Complaint not found")]
#[case("/resolve_complaint/TOOLONG1", "Complaint not found")]
#[actix_web::test]
async fn resolve_treats_malformed_tickets_as_missing(#[case] uri: &str, #[case] message: &str) {
    let mut command = MockComplaintCommand::new();
    command.expect_resolve().never();
    let app = actix_test::init_service(test_app(
        Arc::new(command),
        Arc::new(FixtureComplaintQuery),
    ))
    .await;
    let request = actix_test::TestRequest::put().uri(uri).to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(response).await["message"], message);
}

#[rstest]
#[case(ComplaintStatus::Pending, "Status: pending")]
#[case(ComplaintStatus::Resolved, "Status: resolved")]
#[actix_web::test]
async fn check_status_reports_stored_status(
    #[case] status: ComplaintStatus,
    #[case] expected: &str,
) {
    let mut query = MockComplaintQuery::new();
    query
        .expect_check_status()
        .withf(|request| request.ticket_number.as_str() == "AB12CD")
        .times(1)
        .return_once(move |request| {
            Ok(CheckStatusResponse {
                ticket_number: request.ticket_number,
                status,
            })
        });
    let app = actix_test::init_service(test_app(
        Arc::new(FixtureComplaintCommand),
        Arc::new(query),
    ))
    .await;
    let request = actix_test::TestRequest::get()
        .uri("/check_status/AB12CD")
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({"message": expected}));
}

#[actix_web::test]
async fn check_status_maps_not_found() {
    let mut query = MockComplaintQuery::new();
    query
        .expect_check_status()
        .return_once(|_| Err(Error::not_found(TICKET_NOT_FOUND)));
    let app = actix_test::init_service(test_app(
        Arc::new(FixtureComplaintCommand),
        Arc::new(query),
    ))
    .await;
    let request = actix_test::TestRequest::get()
        .uri("/check_status/NOPE12")
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Ticket not found");
    assert_eq!(body["code"], "not_found");
}

#[rstest]
fn parse_submission_keeps_empty_strings_for_domain_validation() {
    let request = parse_submission(SubmitComplaintBody {
        email: Some(String::new()),
        complaint: Some("broken widget".to_owned()),
    })
    .expect("present fields parse");
    assert!(request.email.is_empty());
}

#[rstest]
fn parse_ticket_maps_to_operation_message() {
    let err = parse_ticket("lower1", TICKET_NOT_FOUND).expect_err("lowercase is invalid");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), TICKET_NOT_FOUND);
}
