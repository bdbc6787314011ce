//! HTTP response handling.
//!
//! [`Response`] carries the status, headers and body exactly as the transport
//! returned them. No status is treated as an error here: a `404` from a
//! document lookup or a `409` from a versioned write is a normal response for
//! the caller to interpret.

use bytes::Bytes;
use http::{HeaderMap, StatusCode};

/// HTTP response with status, headers, and body.
#[derive(Debug, Clone)]
pub struct Response<B = Bytes> {
    status: u16,
    headers: HeaderMap,
    body: B,
}

impl<B> Response<B> {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: HeaderMap, body: B) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// HTTP status as a typed [`StatusCode`], if it is in the valid range.
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.status).ok()
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// First value of a header, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &B {
        &self.body
    }

    /// Consume into body.
    #[must_use]
    pub fn into_body(self) -> B {
        self.body
    }

    /// Consume into (status, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (u16, HeaderMap, B) {
        (self.status, self.headers, self.body)
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Status is 4xx.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Status is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }

    /// Transform the body with a function.
    pub fn map_body<F, B2>(self, f: F) -> Response<B2>
    where
        F: FnOnce(B) -> B2,
    {
        Response {
            status: self.status,
            headers: self.headers,
            body: f(self.body),
        }
    }
}

impl Response<Bytes> {
    /// Deserialize the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> crate::Result<T> {
        crate::from_json(&self.body)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use http::{HeaderValue, header};

    use super::*;

    #[test]
    fn response_basic() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.append("warning", HeaderValue::from_static("299 first"));
        headers.append("warning", HeaderValue::from_static("299 second"));

        let response = Response::new(200, headers, Bytes::from(r#"{"acknowledged":true}"#));

        assert_eq!(response.status(), 200);
        assert_eq!(response.status_code(), Some(StatusCode::OK));
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.headers().get_all("warning").iter().count(), 2);
        assert!(response.is_success());
        assert!(!response.is_client_error());
    }

    #[test]
    fn response_status_checks() {
        let response = Response::new(404, HeaderMap::new(), Bytes::new());
        assert!(response.is_client_error());
        assert!(!response.is_success());

        let response = Response::new(503, HeaderMap::new(), Bytes::new());
        assert!(response.is_server_error());
    }

    #[test]
    fn response_json_and_text() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Acknowledged {
            acknowledged: bool,
        }

        let response = Response::new(
            200,
            HeaderMap::new(),
            Bytes::from(r#"{"acknowledged":true}"#),
        );
        let body: Acknowledged = response.json().expect("deserialize");
        assert_eq!(body, Acknowledged { acknowledged: true });
        assert_eq!(
            response.text().expect("utf8"),
            r#"{"acknowledged":true}"#
        );
    }

    #[test]
    fn response_map_body() {
        let response = Response::new(200, HeaderMap::new(), Bytes::from("green"));
        let mapped = response.map_body(|b| b.len());

        assert_eq!(mapped.status(), 200);
        assert_eq!(*mapped.body(), 5);
    }
}
