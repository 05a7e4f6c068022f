//! Dynamic variables.
//!
//! Request editors commonly offer `{{$guid}}`, `{{$timestamp}}`,
//! `{{$isoTimestamp}}` and `{{$randomInt}}`. Resolution stays a pure function
//! of its inputs, so these are produced as a snapshot map that callers merge
//! into their variable map before resolving.

use crate::models::VariableMap;
use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use uuid::Uuid;

/// Inclusive upper bound for `$randomInt`.
pub const RANDOM_INT_MAX: u32 = 1000;

/// Names of the dynamic variables, including the `$` prefix.
pub const DYNAMIC_VARIABLE_NAMES: &[&str] = &["$guid", "$timestamp", "$isoTimestamp", "$randomInt"];

/// Produces a fresh snapshot of dynamic variable values.
pub fn dynamic_variables() -> VariableMap {
    dynamic_variables_at(Utc::now(), &mut rand::thread_rng())
}

/// Produces dynamic variable values for a fixed instant and random source.
pub fn dynamic_variables_at<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> VariableMap {
    let mut vars = VariableMap::new();
    vars.insert("$guid".to_string(), Uuid::new_v4().to_string());
    vars.insert("$timestamp".to_string(), now.timestamp().to_string());
    vars.insert(
        "$isoTimestamp".to_string(),
        now.to_rfc3339_opts(SecondsFormat::Millis, true),
    );
    vars.insert(
        "$randomInt".to_string(),
        rng.gen_range(0..=RANDOM_INT_MAX).to_string(),
    );
    vars
}

/// Returns `variables` extended with a dynamic snapshot. User-defined
/// variables with the same name win.
pub fn with_dynamic_variables(variables: &VariableMap) -> VariableMap {
    let mut merged = dynamic_variables();
    merged.extend(variables.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}
