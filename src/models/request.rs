//! API request data models.
//!
//! This module defines the request snapshot handed to the resolver by the
//! request editor, and the resolved request handed on to the code generators.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from variable name to its value.
///
/// Lookup is by exact name only; insertion order is irrelevant.
pub type VariableMap = HashMap<String, String>;

/// HTTP request method. Deserializes from any casing (`"post"`, `"Post"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    OPTIONS,
    HEAD,
    TRACE,
    CONNECT,
}

impl HttpMethod {
    /// Canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::OPTIONS => "OPTIONS",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::TRACE => "TRACE",
            HttpMethod::CONNECT => "CONNECT",
        }
    }

    /// Parses a string into an HttpMethod, ignoring case.
    ///
    /// # Returns
    ///
    /// `Some(HttpMethod)` if the string is a valid HTTP method, `None` otherwise.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "GET" => Some(HttpMethod::GET),
            "POST" => Some(HttpMethod::POST),
            "PUT" => Some(HttpMethod::PUT),
            "DELETE" => Some(HttpMethod::DELETE),
            "PATCH" => Some(HttpMethod::PATCH),
            "OPTIONS" => Some(HttpMethod::OPTIONS),
            "HEAD" => Some(HttpMethod::HEAD),
            "TRACE" => Some(HttpMethod::TRACE),
            "CONNECT" => Some(HttpMethod::CONNECT),
            _ => None,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for HttpMethod {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        HttpMethod::from_str(&value).ok_or_else(|| format!("unknown HTTP method '{}'", value))
    }
}

impl From<HttpMethod> for String {
    fn from(method: HttpMethod) -> Self {
        method.as_str().to_string()
    }
}

/// A single request header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header name. Never templated.
    #[serde(default)]
    pub key: String,

    /// Header value. May contain `{{name}}` tokens.
    #[serde(default)]
    pub value: String,

    /// Disabled headers are kept in the editor but never sent.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl Header {
    /// Creates an enabled header.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            disabled: false,
        }
    }
}

/// Where a parameter is placed in the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    /// Substituted for a `:key` token in the URL path.
    Path,
    /// Merged into the query string.
    Query,
}

/// A path or query parameter descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    #[serde(default)]
    pub key: String,

    /// Parameter value. May contain `{{name}}` tokens.
    #[serde(default)]
    pub value: String,

    #[serde(rename = "type")]
    pub param_type: ParamType,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Excluded query parameters are not merged into the URL.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl Param {
    /// Creates an enabled path parameter.
    pub fn path(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, value, ParamType::Path)
    }

    /// Creates an enabled query parameter.
    pub fn query(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, value, ParamType::Query)
    }

    fn new(key: impl Into<String>, value: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            param_type,
            description: String::new(),
            disabled: false,
        }
    }

    /// Attaches a human-readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Request body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestBody {
    /// Editor body mode (e.g. "raw"). Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Raw body text, conventionally JSON. May contain `{{name}}` tokens.
    #[serde(default)]
    pub raw: String,
}

impl RequestBody {
    /// Creates a raw-mode body.
    pub fn raw(raw: impl Into<String>) -> Self {
        Self {
            mode: Some("raw".to_string()),
            raw: raw.into(),
        }
    }
}

/// A templated request snapshot as edited by the user.
///
/// Absent collections deserialize as empty; the resolver never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRequest {
    pub method: HttpMethod,

    /// URL template. May contain `{{name}}` and `:name` tokens.
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub headers: Vec<Header>,

    #[serde(default)]
    pub params: Vec<Param>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,
}

impl ApiRequest {
    /// Creates a request with no headers, params, or body.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            params: Vec::new(),
            body: None,
        }
    }

    /// Appends a header.
    pub fn add_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.push(Header::new(key, value));
    }

    /// Appends a parameter.
    pub fn add_param(&mut self, param: Param) {
        self.params.push(param);
    }

    /// Sets a raw body.
    pub fn set_body(&mut self, raw: impl Into<String>) {
        self.body = Some(RequestBody::raw(raw));
    }

    /// Iterates over path-typed parameters.
    pub fn path_params(&self) -> impl Iterator<Item = &Param> {
        self.params
            .iter()
            .filter(|p| p.param_type == ParamType::Path)
    }

    /// Iterates over query parameters that take part in the URL: non-empty
    /// key and not disabled.
    pub fn active_query_params(&self) -> impl Iterator<Item = &Param> {
        self.params
            .iter()
            .filter(|p| p.param_type == ParamType::Query && !p.key.is_empty() && !p.disabled)
    }
}

/// A request with every template token already substituted.
///
/// The method is kept as free text so callers can pass any casing; emitters
/// upper-case it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRequest {
    pub method: String,

    pub url: String,

    #[serde(default)]
    pub headers: Vec<Header>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,
}

impl ResolvedRequest {
    /// Creates a resolved request with no headers or body.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Appends a header.
    pub fn add_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.push(Header::new(key, value));
    }

    /// Sets a raw body.
    pub fn set_body(&mut self, raw: impl Into<String>) {
        self.body = Some(RequestBody::raw(raw));
    }

    /// Upper-cased method name.
    pub fn method_upper(&self) -> String {
        self.method.trim().to_uppercase()
    }

    /// Body text that should be emitted: non-empty and only for methods that
    /// conventionally carry one (POST, PUT, PATCH).
    pub fn emitted_body(&self) -> Option<&str> {
        let raw = self.body.as_ref().map(|b| b.raw.as_str())?;
        if raw.is_empty() {
            return None;
        }
        match self.method_upper().as_str() {
            "POST" | "PUT" | "PATCH" => Some(raw),
            _ => None,
        }
    }

    /// Headers with both a key and a value.
    pub fn emitted_headers(&self) -> impl Iterator<Item = &Header> {
        self.headers
            .iter()
            .filter(|h| !h.key.is_empty() && !h.value.is_empty() && !h.disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_as_str() {
        assert_eq!(HttpMethod::GET.as_str(), "GET");
        assert_eq!(HttpMethod::POST.as_str(), "POST");
        assert_eq!(HttpMethod::DELETE.as_str(), "DELETE");
    }

    #[test]
    fn test_http_method_from_str() {
        assert_eq!(HttpMethod::from_str("GET"), Some(HttpMethod::GET));
        assert_eq!(HttpMethod::from_str("get"), Some(HttpMethod::GET));
        assert_eq!(HttpMethod::from_str("Post"), Some(HttpMethod::POST));
        assert_eq!(HttpMethod::from_str("INVALID"), None);
    }

    #[test]
    fn test_http_method_deserializes_any_case() {
        let method: HttpMethod = serde_json::from_str("\"patch\"").unwrap();
        assert_eq!(method, HttpMethod::PATCH);
        assert!(serde_json::from_str::<HttpMethod>("\"FETCH\"").is_err());
        assert_eq!(serde_json::to_string(&HttpMethod::PUT).unwrap(), "\"PUT\"");
    }

    #[test]
    fn test_request_deserialization_defaults() {
        let request: ApiRequest =
            serde_json::from_str(r#"{"method": "get", "url": "https://example.com"}"#).unwrap();

        assert_eq!(request.method, HttpMethod::GET);
        assert!(request.headers.is_empty());
        assert!(request.params.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_param_type_field_name() {
        let json = r#"{
            "method": "GET",
            "url": "/users/:id",
            "params": [
                {"key": "id", "value": "7", "type": "path", "description": "user id"},
                {"key": "page", "value": "2", "type": "query", "disabled": true}
            ]
        }"#;
        let request: ApiRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.params[0].param_type, ParamType::Path);
        assert_eq!(request.params[0].description, "user id");
        assert!(request.params[1].disabled);
        assert_eq!(request.path_params().count(), 1);
        assert_eq!(request.active_query_params().count(), 0);
    }

    #[test]
    fn test_active_query_params_skip_empty_keys() {
        let mut request = ApiRequest::new(HttpMethod::GET, "https://example.com");
        request.add_param(Param::query("", "orphan"));
        request.add_param(Param::query("q", "rust"));
        request.add_param(Param::path("id", "1"));

        let keys: Vec<&str> = request
            .active_query_params()
            .map(|p| p.key.as_str())
            .collect();
        assert_eq!(keys, vec!["q"]);
    }

    #[test]
    fn test_emitted_body_gating() {
        let mut request = ResolvedRequest::new("post", "https://example.com");
        request.set_body(r#"{"a":1}"#);
        assert_eq!(request.emitted_body(), Some(r#"{"a":1}"#));

        request.method = "get".to_string();
        assert_eq!(request.emitted_body(), None);

        request.method = "Patch".to_string();
        assert!(request.emitted_body().is_some());

        request.set_body("");
        assert_eq!(request.emitted_body(), None);
    }

    #[test]
    fn test_emitted_headers_filter() {
        let mut request = ResolvedRequest::new("GET", "https://example.com");
        request.add_header("", "v");
        request.add_header("X-Empty", "");
        request.add_header("Accept", "application/json");

        let keys: Vec<&str> = request.emitted_headers().map(|h| h.key.as_str()).collect();
        assert_eq!(keys, vec!["Accept"]);
    }

    #[test]
    fn test_serialization_round_trip_shape() {
        let mut request = ApiRequest::new(HttpMethod::POST, "{{host}}/users");
        request.add_header("Content-Type", "application/json");
        request.set_body(r#"{"name":"Ada"}"#);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["method"], "POST");
        assert_eq!(json["body"]["raw"], r#"{"name":"Ada"}"#);
        assert!(json["headers"][0].get("disabled").is_none());
    }
}
