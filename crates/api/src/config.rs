/// Server configuration loaded from environment variables.
///
/// Everything except the photo API location has a default suitable for
/// local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Inbound request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL of the remote photo API (required, absolute).
    pub photo_api_url: String,
    /// Timeout for a single photo API request in seconds (default: `10`).
    pub upstream_timeout_secs: u64,
}

/// Startup configuration problems. The server refuses to start on any of them.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value '{value}' for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
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
    /// | `PHOTO_API_URL`         | -- (required)              |
    /// | `UPSTREAM_TIMEOUT_SECS` | `10`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or("PORT", lookup("PORT"), 3000)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs =
            parse_or("REQUEST_TIMEOUT_SECS", lookup("REQUEST_TIMEOUT_SECS"), 30)?;
        let upstream_timeout_secs =
            parse_or("UPSTREAM_TIMEOUT_SECS", lookup("UPSTREAM_TIMEOUT_SECS"), 10)?;

        let photo_api_url = lookup("PHOTO_API_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("PHOTO_API_URL"))?;
        reqwest::Url::parse(&photo_api_url).map_err(|e| ConfigError::Invalid {
            var: "PHOTO_API_URL",
            value: photo_api_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            photo_api_url,
            upstream_timeout_secs,
        })
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn applies_defaults() {
        let config = load(&[("PHOTO_API_URL", "https://jsonplaceholder.typicode.com")]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.upstream_timeout_secs, 10);
        assert_eq!(config.photo_api_url, "https://jsonplaceholder.typicode.com");
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("UPSTREAM_TIMEOUT_SECS", "2"),
            ("PHOTO_API_URL", "http://localhost:4000/api"),
        ])
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.upstream_timeout_secs, 2);
    }

    #[test]
    fn requires_photo_api_url() {
        assert_eq!(load(&[]).unwrap_err(), ConfigError::Missing("PHOTO_API_URL"));
        assert_eq!(
            load(&[("PHOTO_API_URL", "  ")]).unwrap_err(),
            ConfigError::Missing("PHOTO_API_URL")
        );
    }

    #[test]
    fn rejects_relative_photo_api_url() {
        let err = load(&[("PHOTO_API_URL", "photos.example")]).unwrap_err();
        assert!(err.to_string().starts_with("Invalid value 'photos.example' for PHOTO_API_URL"));
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = load(&[("PHOTO_API_URL", "https://api.test"), ("PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
    }
}
