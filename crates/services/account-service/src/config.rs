//! Account service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};
use domain::MIN_PASSWORD_LENGTH;

/// Account service configuration.
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    /// Bind address and logging settings
    pub service: ServiceConfig,
    /// PostgreSQL settings; `None` selects the in-memory store
    pub database: Option<DatabaseConfig>,
    /// Minimum password length for new accounts
    pub min_password_length: usize,
}

impl AccountServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let database = lookup("ACCOUNT_SERVICE_DATABASE_URL")
            .or_else(|| lookup("DATABASE_URL"))
            .filter(|url| !url.trim().is_empty())
            .map(|url| DatabaseConfig {
                url,
                ..DatabaseConfig::default()
            });

        Self {
            service: ServiceConfig {
                host: lookup("ACCOUNT_SERVICE_HOST").unwrap_or(defaults.service.host),
                port: lookup("ACCOUNT_SERVICE_PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.service.port),
                log_level: lookup("RUST_LOG").unwrap_or(defaults.service.log_level),
                service_name: defaults.service.service_name,
            },
            database,
            min_password_length: lookup("ACCOUNT_SERVICE_MIN_PASSWORD_LENGTH")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_password_length),
        }
    }
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            database: None,
            min_password_length: MIN_PASSWORD_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AccountServiceConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AccountServiceConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_use_in_memory_store() {
        let config = config_from(&[]);

        assert!(config.database.is_none());
        assert_eq!(config.service.port, 8080);
        assert_eq!(config.min_password_length, MIN_PASSWORD_LENGTH);
    }

    #[test]
    fn test_service_specific_database_url_wins() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://fallback"),
            ("ACCOUNT_SERVICE_DATABASE_URL", "postgres://accounts"),
        ]);

        assert_eq!(config.database.unwrap().url, "postgres://accounts");
    }

    #[test]
    fn test_overrides_and_bad_values() {
        let config = config_from(&[
            ("ACCOUNT_SERVICE_PORT", "not-a-port"),
            ("ACCOUNT_SERVICE_HOST", "127.0.0.1"),
            ("ACCOUNT_SERVICE_MIN_PASSWORD_LENGTH", "10"),
        ]);

        assert_eq!(config.service.port, 8080);
        assert_eq!(config.service.host, "127.0.0.1");
        assert_eq!(config.min_password_length, 10);
    }
}
