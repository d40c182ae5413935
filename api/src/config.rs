//! Configuration loading
//!
//! Layers, lowest precedence first:
//! 1. Built-in defaults for the current [`Environment`]
//! 2. Optional `config/{environment}.toml`
//! 3. `MAILVERIFY__SECTION__KEY` environment variables

use config::{Config, ConfigError, Environment as EnvSource, File};
use mv_shared::config::{AppConfig, Environment};

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "MAILVERIFY";

/// Load configuration for the environment named by `ENVIRONMENT`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let environment = Environment::from_env();
    build_config(environment, env_source())
}

/// Environment variable source, e.g. `MAILVERIFY__SERVER__PORT=9090`
pub fn env_source() -> EnvSource {
    EnvSource::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
}

/// Merge defaults, the environment's config file and `overrides`
pub fn build_config(environment: Environment, overrides: EnvSource) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::for_environment(environment);

    let settings = Config::builder()
        .add_source(Config::try_from(&defaults)?)
        .add_source(File::with_name(environment.config_file()).required(false))
        .add_source(overrides)
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;
    config.environment = environment;
    Ok(config)
}
