//! Environment data models.

use super::EnvError;
use crate::models::VariableMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named variable sets layered over a shared base.
///
/// Resolution sees `shared` overridden by the selected set. With no
/// selection only `shared` applies.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Environments {
    #[serde(default)]
    pub environments: HashMap<String, VariableMap>,

    #[serde(default)]
    pub shared: VariableMap,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<String>,
}

impl Environments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the selection to `name`, which must be a defined environment.
    pub fn select(&mut self, name: &str) -> Result<(), EnvError> {
        if !self.environments.contains_key(name) {
            return Err(EnvError::InvalidFormat(format!(
                "Active environment '{}' does not exist",
                name
            )));
        }

        self.active = Some(name.to_string());
        Ok(())
    }

    /// The variable map handed to the resolver.
    pub fn variable_map(&self) -> VariableMap {
        let mut vars = self.shared.clone();

        let selected = self
            .active
            .as_deref()
            .and_then(|name| self.environments.get(name));
        if let Some(overrides) = selected {
            vars.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> VariableMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn sample() -> Environments {
        let mut envs = Environments::new();
        envs.shared = vars(&[("host", "https://shared.test"), ("version", "v1")]);
        envs.environments
            .insert("dev".to_string(), vars(&[("host", "http://localhost:3000")]));
        envs.environments.insert("prod".to_string(), VariableMap::new());
        envs
    }

    #[test]
    fn test_shared_only_without_selection() {
        let map = sample().variable_map();
        assert_eq!(map, vars(&[("host", "https://shared.test"), ("version", "v1")]));
    }

    #[test]
    fn test_selection_overrides_shared() {
        let mut envs = sample();
        envs.select("dev").unwrap();

        let map = envs.variable_map();
        assert_eq!(map["host"], "http://localhost:3000");
        assert_eq!(map["version"], "v1");
    }

    #[test]
    fn test_select_unknown_keeps_previous() {
        let mut envs = sample();
        envs.select("dev").unwrap();

        assert!(envs.select("qa").is_err());
        assert_eq!(envs.active.as_deref(), Some("dev"));
    }
}
