//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while giving every
//! handler one dispatch point that turns classified failures into status
//! codes and the `{"error": ...}` payload the API promises.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{ApiResult, Error, ErrorKind};

/// Wire shape of every error payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "malformatted id")]
    pub error: String,
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::MissingField | ErrorKind::MalformedId | ErrorKind::RecordInvalid => {
            StatusCode::BAD_REQUEST
        }
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::UnknownEndpoint => StatusCode::NOT_FOUND,
        ErrorKind::Unhandled => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.kind())
    }

    fn error_response(&self) -> HttpResponse {
        let message = if self.kind() == ErrorKind::Unhandled {
            // Log the message, surface a generic failure. Callers never see
            // store internals.
            error!(message = %self.message(), "unhandled error");
            "internal server error".to_owned()
        } else {
            self.message().to_owned()
        };

        HttpResponse::build(self.status_code()).json(ErrorBody { error: message })
    }
}

/// Catch-all for routes matching no registered operation.
///
/// Registered as the app's default service, so there is no global fallthrough
/// chain: anything the explicit route table does not claim lands here.
pub async fn unknown_endpoint() -> ApiResult<HttpResponse> {
    Err(Error::unknown_endpoint())
}
