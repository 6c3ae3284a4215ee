//! Tests for HTTP error mapping.

use super::*;
use crate::domain::Error;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("login required"), StatusCode::SEE_OTHER)]
#[case(Error::forbidden("denied"), StatusCode::SEE_OTHER)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("taken"), StatusCode::CONFLICT)]
#[case(Error::service_unavailable("db down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[case(Error::unauthorized("login required"), LOGIN_PATH)]
#[case(Error::forbidden("not shared with you"), DASHBOARD_PATH)]
#[actix_web::test]
async fn authorisation_failures_redirect_without_body(
    #[case] error: Error,
    #[case] location: &str,
    expected_trace_id: String,
) {
    let response = ResponseError::error_response(&error.with_trace_id(expected_trace_id.clone()));

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some(location)
    );
    assert_eq!(
        response.headers().get(TRACE_ID_HEADER).and_then(|v| v.to_str().ok()),
        Some(expected_trace_id.as_str())
    );
    let bytes = to_bytes(response.into_body()).await.expect("read body");
    assert!(bytes.is_empty());
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = Error::internal("connection string leaked")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"secret": "x"}));

    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = to_bytes(response.into_body()).await.expect("read body");
    let payload: Error = serde_json::from_slice(&bytes).expect("error payload");

    assert_eq!(payload.message(), "Internal server error");
    assert_eq!(payload.trace_id(), Some(expected_trace_id.as_str()));
    assert!(payload.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn field_errors_pass_through() {
    let error = crate::domain::FieldErrors::single("name", "This field is required.");

    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
    let bytes = to_bytes(response.into_body()).await.expect("read body");
    let payload: serde_json::Value = serde_json::from_slice(&bytes).expect("json");

    assert_eq!(payload["code"], "invalid_request");
    assert_eq!(
        payload["details"]["fieldErrors"]["name"][0],
        "This field is required."
    );
}

#[rstest]
fn see_other_sets_location() {
    let response = see_other("/gardens/");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/gardens/")
    );
}

#[test]
fn from_actix_error_is_redacted_internal_error() {
    let err: Error = actix_web::error::ErrorBadRequest("boom").into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
    assert_eq!(err.details(), None);
}
