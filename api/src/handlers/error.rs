//! HTTP rendering of domain failures
//!
//! Every failure leaves the API as `{"statusCode": <u16>, "response": ...}`,
//! the shape produced by [`map_error`].

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;

use mv_core::errors::{map_error, DomainError, ErrorReport};

/// Error returned by route handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failure raised by the verification service
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Failure raised before the request reached the service
    #[error("{message}")]
    Request { status: StatusCode, message: String },
}

impl ApiError {
    pub fn request(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError::Request {
            status,
            message: message.into(),
        }
    }

    pub fn report(&self) -> ErrorReport {
        match self {
            ApiError::Domain(error) => map_error(error),
            ApiError::Request { status, message } => {
                ErrorReport::new(status.as_u16(), message.as_str())
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.report().status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let report = self.report();
        let status = self.status_code();

        // Internal details go to the log only
        if status.is_server_error() {
            log::error!("Request failed with {}: {}", status, self);
        } else {
            log::debug!("Request rejected with {}: {}", status, self);
        }

        HttpResponse::build(status).json(report)
    }
}

/// Render malformed JSON bodies in the common error shape
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let status = match &err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        JsonPayloadError::ContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        _ => StatusCode::BAD_REQUEST,
    };

    ApiError::request(status, err.to_string()).into()
}

/// Default handler for unknown routes
pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::request(StatusCode::NOT_FOUND, "Not Found"))
}
