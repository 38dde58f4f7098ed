use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

const DEFAULT_DATABASE_URL: &str = "sqlite://travelguide.db?mode=rwc";
const DEFAULT_GEOAPIFY_BASE_URL: &str = "https://api.geoapify.com/";
const DEFAULT_GEOAPIFY_MAPS_BASE_URL: &str = "https://maps.geoapify.com/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let database_url = or_default("DATABASE_URL", DEFAULT_DATABASE_URL);
    let env = parse_environment(&or_default("TRAVELGUIDE_ENV", "development"))?;
    let log_level = or_default("TRAVELGUIDE_LOG_LEVEL", "info");
    let geoapify_api_key = lookup("GEOAPIFY_API_KEY").ok();
    let geoapify_base_url = or_default("GEOAPIFY_BASE_URL", DEFAULT_GEOAPIFY_BASE_URL);
    let geoapify_maps_base_url =
        or_default("GEOAPIFY_MAPS_BASE_URL", DEFAULT_GEOAPIFY_MAPS_BASE_URL);

    let request_timeout_secs = parse_u64("TRAVELGUIDE_REQUEST_TIMEOUT_SECS", "30")?;
    let db_max_connections = parse_u32("TRAVELGUIDE_DB_MAX_CONNECTIONS", "5")?;
    let db_min_connections = parse_u32("TRAVELGUIDE_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_u64("TRAVELGUIDE_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    if db_min_connections > db_max_connections {
        return Err(ConfigError::InvalidEnvVar {
            var: "TRAVELGUIDE_DB_MIN_CONNECTIONS".to_string(),
            reason: format!(
                "min connections ({db_min_connections}) exceeds max connections ({db_max_connections})"
            ),
        });
    }

    Ok(AppConfig {
        database_url,
        env,
        log_level,
        geoapify_api_key,
        geoapify_base_url,
        geoapify_maps_base_url,
        request_timeout_secs,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TRAVELGUIDE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
