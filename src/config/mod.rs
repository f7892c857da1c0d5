use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub projection: ProjectionConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Fixed UTC offset, in hours, of the timezone used for day-granularity
    /// comparisons (price validity windows). The backend's home timezone is
    /// UTC-3 year round.
    pub reference_utc_offset_hours: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Base URL prepended to stored file paths. Floor plans keep relative
    /// paths; images and videos already store absolute URLs.
    pub base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Environment picks the defaults, specific env vars override them
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("IMOVEL_UTC_OFFSET") {
            self.projection.reference_utc_offset_hours =
                v.parse().unwrap_or(self.projection.reference_utc_offset_hours);
        }
        if let Ok(v) = env::var("IMOVEL_STORAGE_BASE_URL") {
            self.storage.base_url = v;
        }
        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            projection: ProjectionConfig { reference_utc_offset_hours: -3 },
            storage: StorageConfig { base_url: "http://localhost:8000/storage".to_string() },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            projection: ProjectionConfig { reference_utc_offset_hours: -3 },
            storage: StorageConfig {
                base_url: "https://staging-cdn.example.com.br/storage".to_string(),
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            projection: ProjectionConfig { reference_utc_offset_hours: -3 },
            storage: StorageConfig { base_url: "https://cdn.example.com.br/storage".to_string() },
        }
    }
}

// Global singleton config - initialized once at first access
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert_eq!(config.projection.reference_utc_offset_hours, -3);
        assert!(config.storage.base_url.starts_with("http://localhost"));
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::production();
        assert_eq!(config.projection.reference_utc_offset_hours, -3);
        assert!(config.storage.base_url.starts_with("https://"));
    }
}
