//! Data models for API requests.
//!
//! Request snapshots supplied by the request editor, the resolved requests
//! handed to the code generators, and documents that bundle a request with
//! its variables.

pub mod document;
pub mod request;

pub use document::{DocumentError, SnippetDocument};
pub use request::{
    ApiRequest, Header, HttpMethod, Param, ParamType, RequestBody, ResolvedRequest, VariableMap,
};
