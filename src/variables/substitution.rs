//! Template substitution engine.
//!
//! Replaces `{{variable}}` tokens from a variable map and `:pathParam` tokens
//! from a request's path parameters. Both passes scan the text once, left to
//! right, with a fixed pattern; token names are looked up, never compiled into
//! a pattern, so names containing regex metacharacters are matched literally.
//!
//! Substituted values are not re-scanned. A variable whose value contains
//! `{{other}}` produces that text verbatim; there is no transitive expansion.

use crate::models::{ApiRequest, Param, VariableMap};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Matches `{{name}}`. The name may not contain braces, so `{{{a}}}` matches
/// the inner `{{a}}`.
static VARIABLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^{}]*)\}\}").expect("Failed to compile variable regex"));

/// Matches a `:name` span. Names start with a letter or underscore, which
/// keeps ports (`:8080`) and schemes (`https://`) out, and may contain `-`
/// and `.` so kebab-case keys like `user-id` are reachable. The span is only
/// a candidate; the key itself is picked in [`substitute_path_params`].
static PATH_PARAM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":([A-Za-z_][A-Za-z0-9_.\-]*)").expect("Failed to compile path param regex")
});

/// Resolves every template token in `text`.
///
/// 1. Each `{{key}}` whose `key` is in `variables` is replaced by its value.
/// 2. If `request` is given, each `:key` matching a path parameter with a
///    non-empty value is replaced by that value. This runs over the output of
///    step 1, so a variable may produce a path token.
///
/// Unresolved tokens are left verbatim. This function never fails.
///
/// # Examples
///
/// ```
/// use api_snippets::models::{ApiRequest, HttpMethod, Param, VariableMap};
/// use api_snippets::variables::resolve_all;
///
/// let mut vars = VariableMap::new();
/// vars.insert("host".to_string(), "https://api.test".to_string());
///
/// let mut request = ApiRequest::new(HttpMethod::GET, "{{host}}/users/:id");
/// request.add_param(Param::path("id", "42"));
///
/// assert_eq!(
///     resolve_all(&request.url, &vars, Some(&request)),
///     "https://api.test/users/42"
/// );
/// assert_eq!(resolve_all("{{missing}}", &vars, None), "{{missing}}");
/// ```
pub fn resolve_all(text: &str, variables: &VariableMap, request: Option<&ApiRequest>) -> String {
    let substituted = substitute_variables(text, variables);

    match request {
        Some(request) => substitute_path_params(&substituted, request).into_owned(),
        None => substituted.into_owned(),
    }
}

/// Replaces `{{key}}` tokens found in `variables`, leaving the rest verbatim.
pub fn substitute_variables<'a>(text: &'a str, variables: &VariableMap) -> Cow<'a, str> {
    // Fast path: nothing to do without markers or variables
    if variables.is_empty() || !text.contains("{{") {
        return Cow::Borrowed(text);
    }

    VARIABLE_REGEX.replace_all(text, |caps: &Captures| match variables.get(&caps[1]) {
        Some(value) => value.clone(),
        None => caps[0].to_string(),
    })
}

/// Replaces `:key` tokens with the value of the matching path parameter.
///
/// At each `:` the longest path parameter key that ends on a word boundary
/// wins, so `:user-id` prefers `user-id` over `user`, and `:idx` never
/// matches `id`. Whatever follows the key (`-slug`, `.json`) is kept.
/// Parameters with an empty value leave the token as written. When several
/// path parameters share a key, the first one wins.
pub fn substitute_path_params<'a>(text: &'a str, request: &ApiRequest) -> Cow<'a, str> {
    if !text.contains(':') || request.path_params().next().is_none() {
        return Cow::Borrowed(text);
    }

    PATH_PARAM_REGEX.replace_all(text, |caps: &Captures| {
        let span = &caps[1];

        let mut best: Option<&Param> = None;
        for param in request.path_params() {
            let fits = !param.key.is_empty()
                && span.starts_with(param.key.as_str())
                && !span[param.key.len()..]
                    .starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_');
            if fits && best.map_or(true, |b| param.key.len() > b.key.len()) {
                best = Some(param);
            }
        }

        match best {
            Some(param) if !param.value.is_empty() => {
                format!("{}{}", param.value, &span[param.key.len()..])
            }
            _ => caps[0].to_string(),
        }
    })
}

/// Lists the variable names referenced by `{{name}}` tokens in `text`, in
/// order of first appearance and without duplicates.
pub fn find_variables(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for caps in VARIABLE_REGEX.captures_iter(text) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    names
}

/// Lists referenced variable names that `variables` cannot resolve.
pub fn unresolved_variables(text: &str, variables: &VariableMap) -> Vec<String> {
    find_variables(text)
        .into_iter()
        .filter(|name| !variables.contains_key(name))
        .collect()
}
