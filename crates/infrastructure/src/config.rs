//! Application configuration

use integration_contact_shield::ContactShieldConfig;
use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetryConfig;

/// Environment variable prefix
///
/// Nested keys are joined with `__`, e.g. `EXPOSURE_CONTACT_SHIELD__APP_IDENTITY`.
pub const ENV_PREFIX: &str = "EXPOSURE";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Contact Shield backend configuration
    #[serde(default)]
    pub contact_shield: ContactShieldConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` and environment variables
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables
            .add_source(environment(None));

        let config = builder.build()?;
        let app: Self = config.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    /// Load configuration from an explicit file, still honouring environment overrides
    pub fn from_file(path: &std::path::Path) -> Result<Self, config::ConfigError> {
        Self::from_file_with_env(path, None)
    }

    /// `from_file` reading overrides from `vars` instead of the process environment
    fn from_file_with_env(
        path: &std::path::Path,
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(environment(vars))
            .build()?;
        let app: Self = config.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;
        let app: Self = config.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    /// Check values the backend cannot start without
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        self.contact_shield
            .validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))
    }
}

/// Environment source with `EXPOSURE_` prefix and `__` between nested keys
///
/// `vars` replaces the process environment when given.
fn environment(vars: Option<config::Map<String, String>>) -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .source(vars)
}
