//! Domain errors rendered as HTTP responses.
//!
//! Clients always receive the `Error` JSON envelope. Store and internal
//! failures are answered with fixed messages; their original text only
//! reaches the server log, tagged with the request's trace id.

use std::borrow::Cow;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for complaint handlers.
pub type ApiResult<T> = Result<T, Error>;

const INTERNAL_MESSAGE: &str = "Internal server error";
const STORE_UNAVAILABLE_MESSAGE: &str = "Complaint store unavailable";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::NotificationFailed => StatusCode::BAD_GATEWAY,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Fixed client-facing message for codes whose text may carry store or
/// driver internals.
fn withheld_message(code: ErrorCode) -> Option<&'static str> {
    match code {
        ErrorCode::InternalError => Some(INTERNAL_MESSAGE),
        ErrorCode::ServiceUnavailable => Some(STORE_UNAVAILABLE_MESSAGE),
        _ => None,
    }
}

fn client_view(error: &Error) -> Cow<'_, Error> {
    let Some(message) = withheld_message(error.code()) else {
        return Cow::Borrowed(error);
    };
    error!(
        code = ?error.code(),
        message = error.message(),
        trace_id = error.trace_id(),
        "complaint request failed"
    );
    let mut public = Error::new(error.code(), message);
    if let Some(id) = error.trace_id() {
        public = public.with_trace_id(id.to_owned());
    }
    Cow::Owned(public)
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        let body = client_view(self);
        response.json(&*body)
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error surfaced by a complaint handler");
        Error::internal(INTERNAL_MESSAGE)
    }
}
