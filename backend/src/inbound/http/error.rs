//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while rendering every
//! failure — handler-raised or extractor-raised — as the uniform
//! `{status, msg}` body with the status the taxonomy dictates. No actix
//! default error body ever reaches a client.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Uniform error body: `{"status": <code>, "msg": <human string>}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    status: u16,
    msg: String,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render a status and message as the uniform error body.
pub(crate) fn render(status: StatusCode, msg: &str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody {
        status: status.as_u16(),
        msg: msg.to_owned(),
    })
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if matches!(self.code(), ErrorCode::InternalError) {
            // Store-level detail goes to the log, never to the client.
            error!(error = %self, "internal error surfaced to boundary");
            return render(status, "Internal server error");
        }
        render(status, self.message())
    }
}

/// Map JSON body extraction failures (malformed JSON, unknown or missing
/// fields, wrong types) onto the canonical 400 outcome.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request body");
    Error::invalid_input().into()
}

/// Map query-string extraction failures onto the canonical 400 outcome.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected query string");
    Error::invalid_input().into()
}

/// Map path extraction failures onto the canonical 400 outcome.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected path segment");
    Error::invalid_input().into()
}
