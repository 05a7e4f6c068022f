//! API Snippets
//!
//! Turns an API request snapshot into runnable client code. A request is
//! first resolved against a variable map, then rendered as a snippet in each
//! supported target language.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - **models**: Request snapshots, resolved requests, and request documents
//! - **variables**: `{{variable}}` and `:pathParam` resolution, query merging
//! - **environment**: Named variable sets with a shared base and an active one
//! - **codegen**: Snippet emitters for cURL, JavaScript, Python, Go, and PHP
//! - **config**: Global settings that shape the generated output
//!
//! # Resolution
//!
//! Resolution is a single pass. `{{name}}` tokens are replaced by exact-name
//! lookup, then `:name` path tokens are replaced from the request's path
//! parameters, then enabled query parameters are merged into the URL.
//! Anything that cannot be resolved is left in place.
//!
//! # Usage
//!
//! ```
//! use api_snippets::models::{ApiRequest, HttpMethod, Param, VariableMap};
//! use api_snippets::{generate_all_snippets, resolve_request};
//!
//! let mut request = ApiRequest::new(HttpMethod::GET, "{{host}}/users/:id");
//! request.add_param(Param::path("id", "42"));
//! request.add_param(Param::query("verbose", "true"));
//!
//! let mut vars = VariableMap::new();
//! vars.insert("host".to_string(), "https://api.test".to_string());
//!
//! let resolved = resolve_request(&request, &vars);
//! assert_eq!(resolved.url, "https://api.test/users/42?verbose=true");
//!
//! let snippets = generate_all_snippets(&resolved);
//! assert!(snippets.curl.contains("'https://api.test/users/42?verbose=true'"));
//! ```

pub mod codegen;
pub mod config;
pub mod environment;
pub mod models;
pub mod variables;

pub use codegen::{
    generate_all_snippets, generate_all_snippets_with, generate_snippet, generate_snippet_with,
    CodeGenError, Language, Snippets,
};
pub use models::{ApiRequest, ResolvedRequest, SnippetDocument, VariableMap};
pub use variables::{resolve_all, resolve_headers, resolve_request, resolve_url};
