//! Request id used as a log prefix

use actix_web::HttpRequest;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Extension trait to read or mint a request id
pub trait RequestIdExt {
    /// The caller's `X-Request-ID` header, or a fresh uuid v4
    fn request_id(&self) -> String;
}

impl RequestIdExt for HttpRequest {
    fn request_id(&self) -> String {
        self.headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty() && v.len() <= 128)
            .map(String::from)
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_header_is_reused() {
        let req = TestRequest::default()
            .insert_header((REQUEST_ID_HEADER, "abc-123"))
            .to_http_request();
        assert_eq!(req.request_id(), "abc-123");
    }

    #[test]
    fn test_missing_header_mints_uuid() {
        let req = TestRequest::default().to_http_request();
        assert!(Uuid::parse_str(&req.request_id()).is_ok());
    }
}
