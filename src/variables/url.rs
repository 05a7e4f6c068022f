//! URL resolution and query-string assembly.
//!
//! The base URL template is resolved first, then enabled query parameters
//! are merged into whatever query string the template already carried.
//! Merging uses `application/x-www-form-urlencoded` semantics, the same as a
//! browser's `URLSearchParams`.

use super::substitution::resolve_all;
use crate::models::{ApiRequest, VariableMap};
use url::form_urlencoded;
use url::Url;

/// Errors raised while merging the query string.
///
/// These never leave this module: [`resolve_url`] logs them and falls back to
/// the variable-resolved URL.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlError {
    /// The URL carries a scheme but is not a valid absolute URL.
    Malformed { url: String, reason: String },
}

impl std::fmt::Display for UrlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlError::Malformed { url, reason } => {
                write!(f, "Malformed URL '{}': {}", url, reason)
            }
        }
    }
}

impl std::error::Error for UrlError {}

/// Ordered query pairs supporting `URLSearchParams.set` semantics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    /// Decodes a query string (without the leading `?`).
    pub fn parse(query: &str) -> Self {
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// Sets `name` to `value`: the first existing pair takes the value, any
    /// later pairs with the same name are removed, an unknown name is
    /// appended.
    pub fn set(&mut self, name: &str, value: &str) {
        let mut seen = false;
        self.pairs.retain_mut(|(k, v)| {
            if k != name {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            *v = value.to_string();
            true
        });

        if !seen {
            self.pairs.push((name.to_string(), value.to_string()));
        }
    }

    /// Returns every value for `name`.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encodes the pairs as `key=value&key=value`.
    pub fn serialize(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

/// Resolves the request URL and merges its enabled query parameters.
///
/// Never fails: on a malformed URL a warning is logged and the
/// variable-resolved URL is returned without query merging.
///
/// # Examples
///
/// ```
/// use api_snippets::models::{ApiRequest, HttpMethod, Param, VariableMap};
/// use api_snippets::variables::resolve_url;
///
/// let mut request = ApiRequest::new(HttpMethod::GET, "https://api.test/items?a=1");
/// request.add_param(Param::query("a", "2"));
/// request.add_param(Param::query("q", "rust lang"));
///
/// assert_eq!(
///     resolve_url(&request, &VariableMap::new()),
///     "https://api.test/items?a=2&q=rust+lang"
/// );
/// ```
pub fn resolve_url(request: &ApiRequest, variables: &VariableMap) -> String {
    let base = resolve_all(&request.url, variables, Some(request));

    match merge_query(&base, request, variables) {
        Ok(url) => url,
        Err(e) => {
            log::warn!("{}; using URL without query parameters", e);
            base
        }
    }
}

fn merge_query(
    base: &str,
    request: &ApiRequest,
    variables: &VariableMap,
) -> Result<String, UrlError> {
    validate_absolute(base)?;

    let (without_fragment, fragment) = match base.split_once('#') {
        Some((head, tail)) => (head, Some(tail)),
        None => (base, None),
    };

    let (path, existing) = match without_fragment.split_once('?') {
        Some((path, query)) => (path, query),
        None => (without_fragment, ""),
    };

    let mut query = QueryPairs::parse(existing);
    for param in request.active_query_params() {
        let value = resolve_all(&param.value, variables, Some(request));
        query.set(&param.key, &value);
    }

    let mut url = path.to_string();
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query.serialize());
    }
    if let Some(fragment) = fragment {
        url.push('#');
        url.push_str(fragment);
    }

    Ok(url)
}

/// URLs that start with `scheme://` must parse as absolute URLs. Scheme-less
/// templates (`{{host}}/users`, `/login?next=https://app.test`) are merged as
/// plain text.
fn validate_absolute(url: &str) -> Result<(), UrlError> {
    if !has_scheme(url) {
        return Ok(());
    }

    Url::parse(url).map(|_| ()).map_err(|e| UrlError::Malformed {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Whether the part before any `?` or `#` begins with `scheme://`.
fn has_scheme(url: &str) -> bool {
    let head = url.split(['?', '#']).next().unwrap_or(url);

    match head.split_once("://") {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
