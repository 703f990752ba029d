use chrono::NaiveTime;
use rollcall_core::attendance::DEFAULT_LATE_CUTOFF;
use rollcall_core::matcher::{validate_match_threshold, DEFAULT_MATCH_THRESHOLD};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables. The match threshold
/// and late cutoff are deployment policy, not code, so they live here
/// rather than as hardcoded constants in the handlers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum Euclidean distance for an accepted face match (default: `0.6`).
    pub match_threshold: f64,
    /// Wall-clock time after which a check-in is classified late
    /// (default: `08:15:00`).
    pub late_cutoff: NaiveTime,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MATCH_THRESHOLD`      | `0.6`                      |
    /// | `LATE_CUTOFF`          | `08:15:00`                 |
    ///
    /// Panics on malformed values; misconfiguration should fail at startup.
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

        let match_threshold: f64 = std::env::var("MATCH_THRESHOLD")
            .map(|v| v.parse().expect("MATCH_THRESHOLD must be a valid f64"))
            .unwrap_or(DEFAULT_MATCH_THRESHOLD);
        validate_match_threshold(match_threshold)
            .unwrap_or_else(|e| panic!("Invalid MATCH_THRESHOLD: {e}"));

        let late_cutoff = NaiveTime::parse_from_str(
            &std::env::var("LATE_CUTOFF").unwrap_or_else(|_| DEFAULT_LATE_CUTOFF.into()),
            "%H:%M:%S",
        )
        .expect("LATE_CUTOFF must be a valid HH:MM:SS time");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            match_threshold,
            late_cutoff,
        }
    }
}
