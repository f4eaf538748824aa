// ABOUTME: Centralized constants for the wcat client library
// ABOUTME: Contains server endpoint configuration, API paths, and adapter defaults

/// Display server endpoint configuration
pub mod server {
    /// Environment variable naming the wcat server base URL
    pub const ENDPOINT_ENV_VAR: &str = "WCATSERVER";

    /// Base URL used when the environment variable is unset
    pub const DEFAULT_ENDPOINT: &str = "http://localhost:8085";

    /// Path that receives uploaded previews
    pub const SHOW_PATH: &str = "/api/showthis";

    /// Path that clears all previews held by the server
    pub const CLEAR_PATH: &str = "/api/clearpreviews";
}

/// Header names of the upload protocol
pub mod headers {
    /// Display-name header, passed through verbatim from the caller
    pub const FILENAME: &str = "filename";
}

/// Chart adapter defaults
pub mod chart {
    /// Default drawing area width in pixels
    pub const DEFAULT_WIDTH: u32 = 640;

    /// Default drawing area height in pixels
    pub const DEFAULT_HEIGHT: u32 = 480;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_constants() {
        assert_eq!(server::ENDPOINT_ENV_VAR, "WCATSERVER");
        assert!(server::DEFAULT_ENDPOINT.starts_with("http://"));
        assert!(server::DEFAULT_ENDPOINT.contains("8085"));
        assert!(server::SHOW_PATH.starts_with('/'));
        assert!(server::CLEAR_PATH.starts_with('/'));
    }

    #[test]
    fn test_chart_defaults() {
        assert_eq!(chart::DEFAULT_WIDTH, 640);
        assert_eq!(chart::DEFAULT_HEIGHT, 480);
    }
}
