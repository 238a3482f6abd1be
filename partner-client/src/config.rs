//! Client configuration

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://fourtrip-server.onrender.com";

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "PARTNER_API_URL";

/// Client configuration for connecting to the fourtrip server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g. "https://fourtrip-server.onrender.com")
    pub base_url: String,

    /// Bearer token for authenticated endpoints
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Create a configuration from the environment, falling back to the
    /// platform default base URL
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::ClientResult<super::HttpClient> {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
