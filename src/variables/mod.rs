//! Variable resolution for API requests.
//!
//! Resolves `{{variable}}` and `:pathParam` template tokens in a request's
//! URL, headers, and body, and rebuilds the URL with its query parameters.
//! Every function here is pure: inputs are borrowed, outputs are fresh values,
//! and unresolvable tokens are left in place rather than reported as errors.

pub mod request;
pub mod substitution;
pub mod system;
pub mod url;

pub use request::{resolve_body, resolve_headers, resolve_request, unresolved_request_variables};
pub use substitution::{
    find_variables, resolve_all, substitute_path_params, substitute_variables,
    unresolved_variables,
};
pub use system::{dynamic_variables, with_dynamic_variables};
pub use self::url::{resolve_url, QueryPairs, UrlError};
