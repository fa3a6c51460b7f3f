/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Identity-provider API key sent with every verification call.
    pub identity_api_key: String,
    /// Identity-provider base URL. Env var: `IDENTITY_BASE_URL`
    /// (default `https://identitytoolkit.googleapis.com`).
    pub identity_base_url: String,
    /// TCP port for the HTTP server (default 3000). Env var: `API_PORT`.
    pub api_port: u16,
    /// Allowed CORS origins, comma-separated. Env var: `CORS_ORIGINS`
    /// (default `http://localhost:4200`).
    pub cors_origins: Vec<String>,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            identity_api_key: std::env::var("IDENTITY_API_KEY").expect("IDENTITY_API_KEY"),
            identity_base_url: std::env::var("IDENTITY_BASE_URL")
                .unwrap_or_else(|_| "https://identitytoolkit.googleapis.com".to_owned()),
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:4200".to_owned())
                .split(',')
                .map(|s| s.trim().to_owned())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}
