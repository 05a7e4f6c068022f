//! Code snippet generation for resolved requests.
//!
//! Renders a [`ResolvedRequest`] as source code that reproduces the HTTP call
//! in five targets: cURL, JavaScript `fetch`, Python `requests`, Go
//! `net/http`, and PHP cURL. Each target is a [`SnippetEmitter`]; the rules
//! shared by all of them (method casing, body gating, header filtering) are
//! applied once when building the [`EmitContext`].
//!
//! Generators are template renderers. They do not execute, compile, or
//! validate the code they produce. Variables must be resolved beforehand
//! (see [`crate::variables::resolve_request`]).

pub mod curl;
pub mod escape;
pub mod go;
pub mod javascript;
pub mod php;
pub mod python;

use crate::config::SnippetConfig;
use crate::models::ResolvedRequest;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target output languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Shell command using cURL
    Curl,
    /// JavaScript using fetch()
    JavaScript,
    /// Python using requests
    Python,
    /// Go using net/http
    Go,
    /// PHP using the cURL extension
    Php,
}

impl Language {
    /// Stable key used in snippet maps.
    pub fn key(&self) -> &'static str {
        match self {
            Language::Curl => "curl",
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Go => "go",
            Language::Php => "php",
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Curl => "cURL",
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Go => "Go",
            Language::Php => "PHP",
        }
    }

    /// All targets in output order.
    pub fn all() -> [Language; 5] {
        [
            Language::Curl,
            Language::JavaScript,
            Language::Python,
            Language::Go,
            Language::Php,
        ]
    }

    /// The emitter rendering this target.
    pub fn emitter(&self) -> &'static dyn SnippetEmitter {
        match self {
            Language::Curl => &curl::CurlEmitter,
            Language::JavaScript => &javascript::FetchEmitter,
            Language::Python => &python::RequestsEmitter,
            Language::Go => &go::NetHttpEmitter,
            Language::Php => &php::PhpCurlEmitter,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = CodeGenError;

    /// Parses a language key, ignoring case. `js`, `py`, `golang` and
    /// `shell` are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "curl" | "shell" => Ok(Language::Curl),
            "javascript" | "js" => Ok(Language::JavaScript),
            "python" | "py" => Ok(Language::Python),
            "go" | "golang" => Ok(Language::Go),
            "php" => Ok(Language::Php),
            other => Err(CodeGenError::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// Errors that can occur when selecting a code generation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeGenError {
    /// The requested language is not supported
    UnsupportedLanguage(String),
}

impl fmt::Display for CodeGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeGenError::UnsupportedLanguage(lang) => write!(
                f,
                "Language '{}' is not supported (expected one of: curl, javascript, python, go, php)",
                lang
            ),
        }
    }
}

impl std::error::Error for CodeGenError {}

/// The parts of a resolved request every emitter renders, with the shared
/// rules already applied.
#[derive(Debug, Clone)]
pub struct EmitContext<'a> {
    /// Upper-cased method.
    pub method: String,
    pub url: &'a str,
    /// Headers with a non-empty key and value, in request order.
    pub headers: Vec<(&'a str, &'a str)>,
    /// Raw body, present only for POST, PUT, and PATCH with non-empty text.
    pub body: Option<&'a str>,
    pub config: &'a SnippetConfig,
}

impl<'a> EmitContext<'a> {
    pub fn new(request: &'a ResolvedRequest, config: &'a SnippetConfig) -> Self {
        Self {
            method: request.method_upper(),
            url: &request.url,
            headers: request
                .emitted_headers()
                .map(|h| (h.key.as_str(), h.value.as_str()))
                .collect(),
            body: request.emitted_body(),
            config,
        }
    }
}

/// Renders source text for one target language.
pub trait SnippetEmitter: Sync {
    fn language(&self) -> Language;

    fn emit(&self, ctx: &EmitContext<'_>) -> String;
}

/// Generated snippets for every target.
///
/// Serializes as `{ "curl": ..., "javascript": ..., "python": ..., "go": ...,
/// "php": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippets {
    pub curl: String,
    pub javascript: String,
    pub python: String,
    pub go: String,
    pub php: String,
}

impl Snippets {
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Curl => &self.curl,
            Language::JavaScript => &self.javascript,
            Language::Python => &self.python,
            Language::Go => &self.go,
            Language::Php => &self.php,
        }
    }

    /// Iterates `(key, snippet)` pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Language::all()
            .into_iter()
            .map(move |lang| (lang.key(), self.get(lang)))
    }
}

/// Generates one snippet with the default layout.
pub fn generate_snippet(request: &ResolvedRequest, language: Language) -> String {
    generate_snippet_with(request, language, &SnippetConfig::default())
}

/// Generates one snippet with an explicit configuration.
pub fn generate_snippet_with(
    request: &ResolvedRequest,
    language: Language,
    config: &SnippetConfig,
) -> String {
    let ctx = EmitContext::new(request, config);
    let code = language.emitter().emit(&ctx);
    log::trace!("Generated {} snippet ({} bytes)", language, code.len());
    code
}

/// Generates snippets for all five targets with the default layout.
///
/// The output depends only on `request`; use [`generate_all_snippets_with`]
/// for a different layout.
///
/// # Examples
///
/// ```
/// use api_snippets::codegen::{generate_all_snippets, Language};
/// use api_snippets::models::ResolvedRequest;
///
/// let mut request = ResolvedRequest::new("post", "https://api.test/users");
/// request.add_header("Content-Type", "application/json");
/// request.set_body(r#"{"name":"Ada"}"#);
///
/// let snippets = generate_all_snippets(&request);
/// assert!(snippets.get(Language::Curl).starts_with("curl -X POST"));
/// assert!(snippets.python.contains("requests.post("));
/// ```
pub fn generate_all_snippets(request: &ResolvedRequest) -> Snippets {
    generate_all_snippets_with(request, &SnippetConfig::default())
}

/// Generates snippets for all five targets with an explicit configuration.
pub fn generate_all_snippets_with(request: &ResolvedRequest, config: &SnippetConfig) -> Snippets {
    let ctx = EmitContext::new(request, config);

    Snippets {
        curl: curl::CurlEmitter.emit(&ctx),
        javascript: javascript::FetchEmitter.emit(&ctx),
        python: python::RequestsEmitter.emit(&ctx),
        go: go::NetHttpEmitter.emit(&ctx),
        php: php::PhpCurlEmitter.emit(&ctx),
    }
}
