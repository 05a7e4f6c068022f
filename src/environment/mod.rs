//! Environment management.
//!
//! Parses environment definitions of the form
//!
//! ```json
//! {
//!   "$shared": { "version": "v1" },
//!   "$active": "dev",
//!   "dev": { "host": "http://localhost:3000" },
//!   "prod": { "host": "https://api.example.com" }
//! }
//! ```
//!
//! and turns the active selection into a variable map for the resolver.

pub mod models;

pub use models::Environments;

use crate::models::VariableMap;
use serde_json::Value;
use std::collections::HashMap;

/// Errors that can occur while parsing environment definitions
#[derive(Debug, Clone, PartialEq)]
pub enum EnvError {
    /// Failed to parse JSON content
    ParseError(String),

    /// Invalid format or structure
    InvalidFormat(String),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::ParseError(msg) => write!(f, "Failed to parse environments: {}", msg),
            EnvError::InvalidFormat(msg) => write!(f, "Invalid environment format: {}", msg),
        }
    }
}

impl std::error::Error for EnvError {}

impl From<serde_json::Error> for EnvError {
    fn from(err: serde_json::Error) -> Self {
        EnvError::ParseError(err.to_string())
    }
}

/// Parses environment definitions from a JSON string.
pub fn parse_environments(json: &str) -> Result<Environments, EnvError> {
    let raw: Value = serde_json::from_str(json)?;
    parse_environments_value(&raw)
}

/// Parses environment definitions from an already-decoded JSON value.
pub fn parse_environments_value(raw: &Value) -> Result<Environments, EnvError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| EnvError::InvalidFormat("Root must be a JSON object".to_string()))?;

    let mut environments = HashMap::new();
    let mut shared = HashMap::new();
    let mut active = None;

    for (key, value) in obj.iter() {
        match key.as_str() {
            "shared" | "$shared" => {
                shared = parse_variable_map(value, "shared")?;
            }
            "active" | "$active" => {
                active = value.as_str().map(|s| s.to_string());
            }
            env_name => {
                if !is_valid_identifier(env_name) {
                    return Err(EnvError::InvalidFormat(format!(
                        "Invalid environment name: '{}'. Names must be alphanumeric with underscores/hyphens",
                        env_name
                    )));
                }

                let variables = parse_variable_map(value, env_name)?;
                environments.insert(env_name.to_string(), variables);
            }
        }
    }

    let mut envs = Environments {
        environments,
        shared,
        active: None,
    };
    if let Some(name) = active {
        envs.select(&name)?;
    }

    Ok(envs)
}

/// Converts a JSON object into a variable map. Scalars are stringified.
fn parse_variable_map(value: &Value, context: &str) -> Result<VariableMap, EnvError> {
    let obj = value
        .as_object()
        .ok_or_else(|| EnvError::InvalidFormat(format!("'{}' must be a JSON object", context)))?;

    let mut map = HashMap::new();

    for (key, val) in obj.iter() {
        let value_str = match val {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
            _ => {
                return Err(EnvError::InvalidFormat(format!(
                    "Variable '{}' in '{}' has invalid type (must be string, number, or boolean)",
                    key, context
                )));
            }
        };

        map.insert(key.clone(), value_str);
    }

    Ok(map)
}

/// Environment names start with a letter or underscore and continue with
/// letters, digits, underscores, or hyphens. `shared`, `active` and
/// `$`-prefixed names are reserved.
fn is_valid_identifier(name: &str) -> bool {
    if name == "shared" || name == "active" || name.starts_with('$') {
        return false;
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
