/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP port |
/// | ENVIRONMENT | development | development / staging / production |
/// | RENTAL_API_URL | http://localhost:4000 | External rental API |
/// | REQUEST_TIMEOUT_MS | 30000 | Timeout for rental API calls and requests |
/// | LOG_LEVEL | info | Log level / filter directive |
/// | LOG_JSON | false | JSON log output (forced on in production) |
/// | LOG_DIR | (unset) | Directory for rotating log files |
///
/// # Example
///
/// ```ignore
/// RENTAL_API_URL=https://api.rentals.example HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Base URL of the rental API (credits, health)
    pub rental_api_url: String,
    /// Request timeout (milliseconds)
    pub request_timeout_ms: u64,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            rental_api_url: std::env::var("RENTAL_API_URL")
                .unwrap_or_else(|_| "http://localhost:4000".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// Override part of the configuration
    ///
    /// Mostly used by tests
    pub fn with_overrides(rental_api_url: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.rental_api_url = rental_api_url.into();
        config.http_port = http_port;
        config
    }

    /// Whether this is a production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// JSON log output, always on in production
    pub fn json_logs(&self) -> bool {
        self.log_json || self.is_production()
    }

    /// Client configuration for the rental API
    pub fn rental_client_config(&self) -> rental_client::ClientConfig {
        rental_client::ClientConfig::new(&self.rental_api_url)
            .with_timeout_ms(self.request_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
