//! Export tool settings

use std::env;
use std::path::PathBuf;

use super::errors::{ConfigError, ConfigResult};

/// Default Windows domain for the web-service login
const DEFAULT_DOMAIN: &str = "AD";

/// Runtime configuration for one export run
#[derive(Debug, Clone)]
pub struct Config {
    /// SQL Server host name or address
    pub database_server: String,
    /// SQL login
    pub database_username: String,
    /// SQL password
    pub database_password: String,

    /// Windows domain for web-service authentication
    pub windows_domain: String,
    /// Windows account name for web-service authentication
    pub windows_username: String,
    /// Windows account password
    pub windows_password: String,

    /// Base URL of the Xtendis web application
    pub base_url: String,
    /// Pre-established Xtendis session id, passed to the page handler.
    /// May be empty; the handler then relies on the session cookie alone.
    pub session_id: String,

    /// Root folder the export tree is written under
    pub export_folder: PathBuf,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through a lookup function
    ///
    /// Separated from [`Config::from_env`] so validation is testable
    /// without mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            database_server: required(&lookup, "XTENDIS_DATABASE_SERVER")?,
            database_username: required(&lookup, "XTENDIS_DATABASE_USERNAME")?,
            database_password: required(&lookup, "XTENDIS_DATABASE_PASSWORD")?,
            windows_domain: optional(&lookup, "XTENDIS_WINDOWS_DOMAIN")
                .unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
            windows_username: required(&lookup, "XTENDIS_WINDOWS_USERNAME")?,
            windows_password: required(&lookup, "XTENDIS_WINDOWS_PASSWORD")?,
            base_url: required(&lookup, "XTENDIS_BASE_URL")?,
            session_id: optional(&lookup, "XTENDIS_SESSION_ID").unwrap_or_default(),
            export_folder: PathBuf::from(required(&lookup, "XTENDIS_EXPORT_FOLDER")?),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                name: "XTENDIS_BASE_URL",
                reason: format!("'{}' is not an http(s) URL", self.base_url),
            });
        }
        Ok(())
    }

    /// Base URL without a trailing slash, for joining handler paths
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

fn required<F>(lookup: &F, name: &'static str) -> ConfigResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn optional<F>(lookup: &F, name: &'static str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("XTENDIS_DATABASE_SERVER", "dbhost"),
            ("XTENDIS_DATABASE_USERNAME", "sa"),
            ("XTENDIS_DATABASE_PASSWORD", "secret"),
            ("XTENDIS_WINDOWS_USERNAME", "svc_export"),
            ("XTENDIS_WINDOWS_PASSWORD", "secret2"),
            ("XTENDIS_BASE_URL", "https://dms.example.com/Xtendis.web/"),
            ("XTENDIS_EXPORT_FOLDER", "/tmp/export"),
        ])
    }

    fn load(env: &HashMap<&'static str, &'static str>) -> ConfigResult<Config> {
        Config::from_lookup(|name| env.get(name).map(|v| v.to_string()))
    }

    #[test]
    fn test_full_config_loads() {
        let config = load(&full_env()).unwrap();
        assert_eq!(config.database_server, "dbhost");
        assert_eq!(config.windows_domain, "AD");
        assert_eq!(config.export_folder, PathBuf::from("/tmp/export"));
        assert!(config.session_id.is_empty());
    }

    #[test]
    fn test_missing_value_is_rejected() {
        let mut env = full_env();
        env.remove("XTENDIS_DATABASE_PASSWORD");

        let err = load(&env).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("XTENDIS_DATABASE_PASSWORD")));
    }

    #[test]
    fn test_empty_value_is_rejected() {
        let mut env = full_env();
        env.insert("XTENDIS_WINDOWS_USERNAME", "   ");

        let err = load(&env).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("XTENDIS_WINDOWS_USERNAME")));
    }

    #[test]
    fn test_domain_override() {
        let mut env = full_env();
        env.insert("XTENDIS_WINDOWS_DOMAIN", "CORP");

        let config = load(&env).unwrap();
        assert_eq!(config.windows_domain, "CORP");
    }

    #[test]
    fn test_base_url_must_be_http() {
        let mut env = full_env();
        env.insert("XTENDIS_BASE_URL", "ftp://dms.example.com/");

        assert!(load(&env).is_err());
    }

    #[test]
    fn test_base_url_trimmed() {
        let config = load(&full_env()).unwrap();
        assert_eq!(config.base_url_trimmed(), "https://dms.example.com/Xtendis.web");
    }
}
