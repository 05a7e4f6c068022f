//! Request documents.
//!
//! A document bundles a request snapshot with the variables it should be
//! resolved against, as exported by the request editor:
//!
//! ```json
//! {
//!   "request": { "method": "GET", "url": "{{host}}/users/:id", ... },
//!   "variables": { "token": "abc123" },
//!   "environments": { "$active": "dev", "dev": { "host": "http://localhost" } }
//! }
//! ```

use super::request::{ApiRequest, ResolvedRequest, VariableMap};
use crate::environment::{parse_environments_value, EnvError, Environments};
use crate::variables::{resolve_request, with_dynamic_variables};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

/// Errors that can occur while loading a document.
#[derive(Debug)]
pub enum DocumentError {
    /// The file could not be read
    Io(io::Error),
    /// The content is not a valid document
    Parse(String),
    /// The `environments` section is invalid
    Environment(EnvError),
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::Io(e) => write!(f, "Failed to read document: {}", e),
            DocumentError::Parse(msg) => write!(f, "Invalid document: {}", msg),
            DocumentError::Environment(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentError::Io(e) => Some(e),
            DocumentError::Environment(e) => Some(e),
            DocumentError::Parse(_) => None,
        }
    }
}

impl From<io::Error> for DocumentError {
    fn from(err: io::Error) -> Self {
        DocumentError::Io(err)
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> Self {
        DocumentError::Parse(err.to_string())
    }
}

impl From<EnvError> for DocumentError {
    fn from(err: EnvError) -> Self {
        DocumentError::Environment(err)
    }
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    request: ApiRequest,
    #[serde(default)]
    variables: VariableMap,
    #[serde(default)]
    environments: Option<Value>,
}

/// A request together with the variables used to resolve it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnippetDocument {
    pub request: ApiRequest,

    /// Request-level variables. These override environment variables.
    pub variables: VariableMap,

    pub environments: Environments,
}

impl SnippetDocument {
    pub fn new(request: ApiRequest) -> Self {
        Self {
            request,
            variables: VariableMap::new(),
            environments: Environments::new(),
        }
    }

    /// Parses a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let raw: RawDocument = serde_json::from_str(json)?;

        let environments = match raw.environments {
            Some(value) => parse_environments_value(&value)?,
            None => Environments::new(),
        };

        Ok(Self {
            request: raw.request,
            variables: raw.variables,
            environments,
        })
    }

    /// Reads and parses a document file.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// The effective variable map: shared < active environment < document
    /// variables. With `dynamic`, `$guid` and friends are added underneath.
    pub fn variable_map(&self, dynamic: bool) -> VariableMap {
        let mut vars = self.environments.variable_map();
        vars.extend(
            self.variables
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );

        if dynamic {
            with_dynamic_variables(&vars)
        } else {
            vars
        }
    }

    /// Resolves the request against the effective variable map.
    pub fn resolve(&self, dynamic: bool) -> ResolvedRequest {
        resolve_request(&self.request, &self.variable_map(dynamic))
    }
}
