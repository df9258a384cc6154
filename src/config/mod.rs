use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    /// Log level used when `APP_LOG_LEVEL` is not set.
    pub const fn default_log_level(self) -> &'static str {
        match self {
            Self::Production => "warn",
            Self::Development | Self::Test => "info",
        }
    }
}

/// Top-level configuration for the command-line tool.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub catalogs: CatalogConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL")
            .unwrap_or_else(|_| environment.default_log_level().to_string());

        Ok(Self {
            environment,
            catalogs: CatalogConfig {
                condition_catalog: optional_path("APP_CONDITION_CATALOG")?,
                guidance_catalog: optional_path("APP_GUIDANCE_CATALOG")?,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Optional replacements for the built-in condition and guidance catalogs.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub condition_catalog: Option<PathBuf>,
    pub guidance_catalog: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn optional_path(var: &'static str) -> Result<Option<PathBuf>, ConfigError> {
    match env::var(var) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::BlankPath { var }),
        Ok(value) => Ok(Some(PathBuf::from(value.trim()))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var }),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    BlankPath { var: &'static str },
    NotUnicode { var: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BlankPath { var } => {
                write!(f, "{var} is set but empty; unset it or provide a file path")
            }
            ConfigError::NotUnicode { var } => write!(f, "{var} must be valid unicode"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_CONDITION_CATALOG");
        env::remove_var("APP_GUIDANCE_CATALOG");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.catalogs.condition_catalog.is_none());
        assert!(config.catalogs.guidance_catalog.is_none());
    }

    #[test]
    fn reads_catalog_paths_and_environment() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "Production");
        env::set_var("APP_GUIDANCE_CATALOG", " data/guidance.csv ");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.telemetry.log_level, "warn");
        assert_eq!(
            config.catalogs.guidance_catalog,
            Some(PathBuf::from("data/guidance.csv"))
        );
        reset_env();
    }

    #[test]
    fn explicit_log_level_wins_over_environment_default() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        env::set_var("APP_LOG_LEVEL", "debug");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.telemetry.log_level, "debug");
        reset_env();
    }

    #[test]
    fn rejects_blank_catalog_path() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_CONDITION_CATALOG", "   ");
        let err = AppConfig::load().expect_err("blank path rejected");
        assert!(matches!(
            err,
            ConfigError::BlankPath {
                var: "APP_CONDITION_CATALOG"
            }
        ));
        reset_env();
    }
}
