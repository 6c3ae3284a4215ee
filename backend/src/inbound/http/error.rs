//! HTTP adapter mapping for domain errors.
//!
//! Validation and lookup failures become JSON error payloads with a status
//! code. Authorisation failures never produce a body: an anonymous caller is
//! sent to the login page and a signed-in caller without permission is sent
//! back to the dashboard.

use actix_web::http::header;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Where anonymous callers are sent.
pub const LOGIN_PATH: &str = "/login/";
/// Where callers lacking permission are sent.
pub const DASHBOARD_PATH: &str = "/dashboard/";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized | ErrorCode::Forbidden => StatusCode::SEE_OTHER,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redirect_for(code: ErrorCode) -> Option<&'static str> {
    match code {
        ErrorCode::Unauthorized => Some(LOGIN_PATH),
        ErrorCode::Forbidden => Some(DASHBOARD_PATH),
        _ => None,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

/// Build a `303 See Other` response pointing at `location`.
///
/// # Examples
/// ```
/// use actix_web::http::{StatusCode, header};
/// use garden_journal::inbound::http::error::see_other;
///
/// let response = see_other("/gardens/");
/// assert_eq!(response.status(), StatusCode::SEE_OTHER);
/// assert_eq!(response.headers().get(header::LOCATION).expect("location"), "/gardens/");
/// ```
pub fn see_other(location: impl AsRef<str>) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.as_ref()))
        .finish()
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        match redirect_for(self.code()) {
            Some(location) => builder
                .insert_header((header::LOCATION, location))
                .finish(),
            None => builder.json(redact_if_internal(self)),
        }
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests;
