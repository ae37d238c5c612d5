use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite connection URL (default: `sqlite://alliswell.db`).
    pub database_url: String,
    /// Upper bound on pooled SQLite connections (default: `5`).
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Accept a bare `X-User-Id` header as the caller identity.
    ///
    /// This is the acting-director mode for trusted deployments behind an
    /// authenticating proxy. Off by default.
    pub allow_user_id_header: bool,
    /// JWT verification settings.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `DATABASE_URL`         | `sqlite://alliswell.db`    |
    /// | `DB_MAX_CONNECTIONS`   | `5`                        |
    /// | `CORS_ORIGINS`         | `http://localhost:3001`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ALLOW_USER_ID_HEADER` | `false`                    |
    ///
    /// # Panics
    ///
    /// Panics on malformed numeric or boolean values and when `JWT_SECRET`
    /// is missing, so misconfiguration stops the server at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://alliswell.db".into());

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3001".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let allow_user_id_header = std::env::var("ALLOW_USER_ID_HEADER")
            .map(|v| parse_flag(&v).expect("ALLOW_USER_ID_HEADER must be true or false"))
            .unwrap_or(false);

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            database_url,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
            allow_user_id_header,
            jwt,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" | "" => Some(false),
        _ => None,
    }
}
