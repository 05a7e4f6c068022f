//! Configuration management.
//!
//! Settings are read from a JSON settings object under the `"api-snippets"`
//! key, merged with defaults, validated, and stored in a process-wide
//! instance that the snippet generators read.

pub mod schema;

pub use schema::{CurlStyle, SnippetConfig};

use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::RwLock;

/// Key under which settings are looked up.
pub const SETTINGS_KEY: &str = "api-snippets";

/// Global configuration instance, lazily initialized to defaults.
static CONFIG: Lazy<RwLock<SnippetConfig>> = Lazy::new(|| RwLock::new(SnippetConfig::default()));

/// Loads configuration from a settings JSON value.
///
/// Unparseable settings are logged and replaced by defaults; settings that
/// parse but fail validation are rejected. On success the global
/// configuration is replaced.
///
/// # Example
///
/// ```no_run
/// use api_snippets::config::{load_config, CurlStyle};
/// use serde_json::json;
///
/// let settings = json!({
///     "api-snippets": {
///         "curlStyle": "compact"
///     }
/// });
///
/// let config = load_config(Some(settings)).unwrap();
/// assert_eq!(config.curl_style, CurlStyle::Compact);
/// ```
pub fn load_config(settings_json: Option<Value>) -> Result<SnippetConfig, String> {
    let mut config = SnippetConfig::default();

    if let Some(settings) = settings_json {
        if let Some(user_settings) = settings.get(SETTINGS_KEY) {
            match serde_json::from_value::<SnippetConfig>(user_settings.clone()) {
                Ok(user_config) => config = user_config,
                Err(e) => {
                    log::warn!(
                        "Failed to parse {} settings: {}. Using defaults.",
                        SETTINGS_KEY,
                        e
                    );
                }
            }
        }
    }

    config
        .validate()
        .map_err(|e| format!("Invalid configuration: {}", e))?;

    if let Ok(mut global_config) = CONFIG.write() {
        *global_config = config.clone();
    }

    Ok(config)
}

/// Returns a clone of the current global configuration.
pub fn get_config() -> SnippetConfig {
    CONFIG
        .read()
        .map(|c| c.clone())
        .unwrap_or_else(|_| SnippetConfig::default())
}

/// Updates the global configuration in place.
///
/// If the result fails validation the configuration reverts to defaults.
///
/// ```no_run
/// use api_snippets::config::update_config;
///
/// update_config(|config| {
///     config.report_unresolved = false;
/// });
/// ```
pub fn update_config<F>(updater: F)
where
    F: FnOnce(&mut SnippetConfig),
{
    if let Ok(mut config) = CONFIG.write() {
        updater(&mut config);

        if let Err(e) = config.validate() {
            log::warn!("Configuration validation failed after update: {}", e);
            *config = SnippetConfig::default();
        }
    }
}

/// Resets the configuration to defaults.
pub fn reset_config() {
    if let Ok(mut config) = CONFIG.write() {
        *config = SnippetConfig::default();
    }
}
