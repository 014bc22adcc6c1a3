/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing bearer tokens.
    pub jwt_secret: String,
    /// TCP port for the HTTP server (default 3100). Env var: `API_PORT`.
    pub api_port: u16,
    /// Bearer token lifetime in minutes (default 60). Env var: `TOKEN_EXPIRY_MINUTES`.
    pub token_expiry_minutes: u64,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3100),
            token_expiry_minutes: std::env::var("TOKEN_EXPIRY_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}
