//! Fixed response headers module
//!
//! Every response leaves the server through `apply_standard_headers`, which
//! attaches the allow-all CORS headers and disables client caching.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderName, HeaderValue};
use hyper::Response;

/// Headers attached to every response, regardless of method or status code.
pub const STANDARD_HEADERS: [(&str, &str); 4] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "*"),
    ("access-control-allow-headers", "*"),
    ("cache-control", "no-store, no-cache, must-revalidate"),
];

/// Attach the standard header set to a response.
///
/// Uses `HeaderMap::insert`, so each header ends up present exactly once
/// even when a builder already set one of them or the function runs twice.
pub fn apply_standard_headers(response: &mut Response<Full<Bytes>>) {
    let header_map = response.headers_mut();
    for (name, value) in STANDARD_HEADERS {
        header_map.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_values(response: &Response<Full<Bytes>>, name: &str) -> Vec<String> {
        response
            .headers()
            .get_all(name)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_headers_added_to_bare_response() {
        let mut response = Response::new(Full::new(Bytes::new()));
        apply_standard_headers(&mut response);

        for (name, value) in STANDARD_HEADERS {
            assert_eq!(header_values(&response, name), vec![value.to_string()]);
        }
    }

    #[test]
    fn test_existing_header_replaced_not_duplicated() {
        let mut response = Response::builder()
            .status(404)
            .header("Cache-Control", "public, max-age=3600")
            .body(Full::new(Bytes::new()))
            .unwrap();
        apply_standard_headers(&mut response);

        assert_eq!(
            header_values(&response, "cache-control"),
            vec!["no-store, no-cache, must-revalidate".to_string()]
        );
    }

    #[test]
    fn test_idempotent_when_applied_twice() {
        let mut response = Response::new(Full::new(Bytes::new()));
        apply_standard_headers(&mut response);
        apply_standard_headers(&mut response);

        for (name, _) in STANDARD_HEADERS {
            assert_eq!(response.headers().get_all(name).iter().count(), 1);
        }
    }
}
