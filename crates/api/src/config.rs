use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Object storage configuration for image uploads.
    pub storage: StorageConfig,
    /// Link-preview metadata service configuration.
    pub preview: PreviewConfig,
}

/// S3 bucket configuration for uploaded images.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Bucket receiving uploads.
    pub bucket: String,
    /// Public base URL under which uploaded keys are served
    /// (bucket website or CDN origin).
    pub public_base_url: String,
}

/// Third-party link-metadata API configuration.
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Metadata API endpoint (default: `https://api.microlink.io`).
    pub endpoint: String,
    /// Optional API key sent as `x-api-key`.
    pub api_key: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `3000`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `S3_BUCKET`             | `atelier-uploads`          |
    /// | `S3_PUBLIC_BASE_URL`    | `http://localhost:9000/atelier-uploads` |
    /// | `LINK_PREVIEW_ENDPOINT` | `https://api.microlink.io` |
    /// | `LINK_PREVIEW_API_KEY`  | unset                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let storage = StorageConfig {
            bucket: std::env::var("S3_BUCKET").unwrap_or_else(|_| "atelier-uploads".into()),
            public_base_url: std::env::var("S3_PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:9000/atelier-uploads".into()),
        };

        let preview = PreviewConfig {
            endpoint: std::env::var("LINK_PREVIEW_ENDPOINT")
                .unwrap_or_else(|_| "https://api.microlink.io".into()),
            api_key: std::env::var("LINK_PREVIEW_API_KEY").ok(),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            storage,
            preview,
        }
    }
}
