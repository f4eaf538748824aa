// ABOUTME: HTTP delivery of serialized visuals to the wcat display server
// ABOUTME: Resolves the endpoint from WCATSERVER and downgrades connection failures to printed notices

use std::fmt;

use once_cell::sync::Lazy;
use reqwest::blocking::{Body, Client};
use reqwest::header::CONTENT_TYPE;

use crate::constants::{headers, server};

/// The fixed set of MIME types the display server accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Png,
    Jpeg,
    Svg,
    Html,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Png => "image/png",
            ContentType::Jpeg => "image/jpeg",
            ContentType::Svg => "image/svg+xml",
            ContentType::Html => "text/html",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A serialized visual, created right before transport and dropped right after.
#[derive(Debug, Clone)]
pub enum Payload {
    Bytes(Vec<u8>),
    Text(String),
}

impl Payload {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Bytes(bytes) => bytes,
            Payload::Text(text) => text.as_bytes(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Bytes(bytes)
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<Payload> for Body {
    fn from(payload: Payload) -> Self {
        match payload {
            Payload::Bytes(bytes) => bytes.into(),
            Payload::Text(text) => text.into(),
        }
    }
}

/// Seam the adapters deliver through, so tests can substitute a recording double.
pub trait Transport {
    /// Deliver one payload to the display server under the given display name.
    ///
    /// Fire-and-forget: the server's response body is printed to stdout and a
    /// connection failure becomes a one-line notice, never an error.
    fn post_file(&self, payload: Payload, content_type: ContentType, name: &str);
}

/// Blocking HTTP client bound to one wcat server endpoint.
pub struct WcatClient {
    http: Client,
    endpoint: String,
}

impl WcatClient {
    /// Client for the endpoint named by `WCATSERVER`, or the default
    /// `http://localhost:8085` when unset.
    pub fn from_env() -> Self {
        Self::new(endpoint_from_env())
    }

    pub fn new(endpoint: impl Into<String>) -> Self {
        let mut endpoint = endpoint.into();
        while endpoint.ends_with('/') {
            endpoint.pop();
        }
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask the server to drop every preview it is currently holding.
    pub fn clear_previews(&self) {
        let url = format!("{}{}", self.endpoint, server::CLEAR_PATH);
        log::debug!("clearing previews at {}", url);
        match self.http.post(&url).send() {
            Ok(response) => print_response(response, &self.endpoint),
            Err(err) => {
                log::debug!("clear request failed: {}", err);
                println!("{}", connect_failure_notice(&self.endpoint));
            }
        }
    }
}

impl Transport for WcatClient {
    fn post_file(&self, payload: Payload, content_type: ContentType, name: &str) {
        let url = format!("{}{}", self.endpoint, server::SHOW_PATH);
        log::debug!(
            "posting {} bytes as {} to {} (name: {})",
            payload.len(),
            content_type,
            url,
            name
        );
        let result = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, content_type.as_str())
            .header(headers::FILENAME, name)
            .body(payload)
            .send();
        match result {
            Ok(response) => print_response(response, &self.endpoint),
            Err(err) => {
                log::debug!("show request failed: {}", err);
                println!("{}", connect_failure_notice(&self.endpoint));
            }
        }
    }
}

static DEFAULT_CLIENT: Lazy<WcatClient> = Lazy::new(WcatClient::from_env);

/// Process-wide client used by the module-level `show` helpers. The endpoint
/// is resolved from the environment exactly once, at first use.
pub fn default_client() -> &'static WcatClient {
    &DEFAULT_CLIENT
}

fn endpoint_from_env() -> String {
    std::env::var(server::ENDPOINT_ENV_VAR)
        .unwrap_or_else(|_| server::DEFAULT_ENDPOINT.to_string())
}

fn print_response(response: reqwest::blocking::Response, endpoint: &str) {
    match response.text() {
        Ok(text) => println!("{}", text),
        Err(err) => {
            log::debug!("reading response body failed: {}", err);
            println!("{}", connect_failure_notice(endpoint));
        }
    }
}

fn connect_failure_notice(endpoint: &str) -> String {
    format!("Failed to make request to wcat server at {}", endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_strings() {
        assert_eq!(ContentType::Png.as_str(), "image/png");
        assert_eq!(ContentType::Jpeg.as_str(), "image/jpeg");
        assert_eq!(ContentType::Svg.as_str(), "image/svg+xml");
        assert_eq!(ContentType::Html.as_str(), "text/html");
        assert_eq!(ContentType::Svg.to_string(), "image/svg+xml");
    }

    #[test]
    fn test_payload_views() {
        let bytes = Payload::from(vec![0x89, 0x50]);
        assert_eq!(bytes.as_bytes(), &[0x89, 0x50]);
        assert_eq!(bytes.len(), 2);
        assert!(!bytes.is_empty());

        let text = Payload::from("<svg/>".to_string());
        assert_eq!(text.as_bytes(), b"<svg/>");
        assert!(Payload::Text(String::new()).is_empty());
    }

    #[test]
    fn test_new_trims_trailing_slashes() {
        let client = WcatClient::new("http://example:9000///");
        assert_eq!(client.endpoint(), "http://example:9000");
    }

    #[test]
    fn test_failure_notice_names_endpoint() {
        let notice = connect_failure_notice("http://localhost:8085");
        assert_eq!(
            notice,
            "Failed to make request to wcat server at http://localhost:8085"
        );
    }

    #[test]
    #[serial_test::serial]
    fn test_endpoint_from_env_default() {
        unsafe {
            std::env::remove_var(server::ENDPOINT_ENV_VAR);
        }
        assert_eq!(endpoint_from_env(), server::DEFAULT_ENDPOINT);
    }

    #[test]
    #[serial_test::serial]
    fn test_endpoint_from_env_override() {
        unsafe {
            std::env::set_var(server::ENDPOINT_ENV_VAR, "http://example:9000");
        }
        assert_eq!(endpoint_from_env(), "http://example:9000");
        let client = WcatClient::from_env();
        assert_eq!(client.endpoint(), "http://example:9000");
        unsafe {
            std::env::remove_var(server::ENDPOINT_ENV_VAR);
        }
    }
}
