//! Whole-request resolution.
//!
//! Resolves headers and body alongside the URL, producing the
//! [`ResolvedRequest`] consumed by the code generators.

use super::substitution::{find_variables, resolve_all};
use super::url::resolve_url;
use crate::models::{ApiRequest, Header, RequestBody, ResolvedRequest, VariableMap};

/// Resolves header values.
///
/// Headers with an empty key, and disabled headers, are dropped. Headers with
/// a key but an empty value pass through. Order and duplicate keys are
/// preserved.
pub fn resolve_headers(
    headers: &[Header],
    variables: &VariableMap,
    request: Option<&ApiRequest>,
) -> Vec<Header> {
    headers
        .iter()
        .filter(|h| !h.key.is_empty() && !h.disabled)
        .map(|h| Header::new(h.key.clone(), resolve_all(&h.value, variables, request)))
        .collect()
}

/// Resolves the raw body text, keeping its mode.
pub fn resolve_body(
    body: Option<&RequestBody>,
    variables: &VariableMap,
    request: Option<&ApiRequest>,
) -> Option<RequestBody> {
    body.map(|b| RequestBody {
        mode: b.mode.clone(),
        raw: resolve_all(&b.raw, variables, request),
    })
}

/// Resolves URL, headers, and body of `request` in one pass.
///
/// # Examples
///
/// ```
/// use api_snippets::models::{ApiRequest, HttpMethod, VariableMap};
/// use api_snippets::variables::resolve_request;
///
/// let mut request = ApiRequest::new(HttpMethod::POST, "{{host}}/users");
/// request.add_header("Authorization", "Bearer {{token}}");
///
/// let mut vars = VariableMap::new();
/// vars.insert("host".to_string(), "https://api.test".to_string());
/// vars.insert("token".to_string(), "abc123".to_string());
///
/// let resolved = resolve_request(&request, &vars);
/// assert_eq!(resolved.method, "POST");
/// assert_eq!(resolved.url, "https://api.test/users");
/// assert_eq!(resolved.headers[0].value, "Bearer abc123");
/// ```
pub fn resolve_request(request: &ApiRequest, variables: &VariableMap) -> ResolvedRequest {
    ResolvedRequest {
        method: request.method.as_str().to_string(),
        url: resolve_url(request, variables),
        headers: resolve_headers(&request.headers, variables, Some(request)),
        body: resolve_body(request.body.as_ref(), variables, Some(request)),
    }
}

/// Names of `{{name}}` tokens still present in a resolved request's URL,
/// header values, or body, in order of first appearance.
pub fn unresolved_request_variables(resolved: &ResolvedRequest) -> Vec<String> {
    let texts = std::iter::once(resolved.url.as_str())
        .chain(resolved.headers.iter().map(|h| h.value.as_str()))
        .chain(resolved.body.iter().map(|b| b.raw.as_str()));

    let mut names: Vec<String> = Vec::new();
    for text in texts {
        for name in find_variables(text) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }

    names
}
