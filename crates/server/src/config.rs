const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite://itlogger.sqlite?mode=rwc";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Serve the embedded SPA bundle for unmatched paths.
    pub serve_frontend: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_port(std::env::var("PORT").ok()),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            serve_frontend: is_production(std::env::var("APP_ENV").ok()),
        }
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    let Some(raw) = raw else {
        return DEFAULT_PORT;
    };
    match raw.trim().parse::<u16>() {
        Ok(port) => port,
        Err(err) => {
            tracing::warn!(value = %raw, error = %err, "Invalid PORT; using default");
            DEFAULT_PORT
        }
    }
}

fn is_production(raw: Option<String>) -> bool {
    raw.as_deref()
        .map(str::trim)
        .is_some_and(|v| v.eq_ignore_ascii_case("production"))
}
