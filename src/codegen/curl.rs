//! cURL command generation.
//!
//! Emits a shell command with the method, the single-quoted URL, one `-H`
//! flag per header, and the body as a `-d` flag:
//!
//! ```text
//! curl -X POST 'https://api.test/users' \
//!   -H 'Content-Type: application/json' \
//!   -d '{"name":"Ada"}'
//! ```

use super::escape::shell_single_quote;
use super::{EmitContext, Language, SnippetEmitter};
use crate::config::CurlStyle;

/// Emits a cURL command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlEmitter;

impl SnippetEmitter for CurlEmitter {
    fn language(&self) -> Language {
        Language::Curl
    }

    fn emit(&self, ctx: &EmitContext<'_>) -> String {
        let mut parts = vec![format!(
            "curl -X {} {}",
            ctx.method,
            shell_single_quote(ctx.url)
        )];

        for (key, value) in &ctx.headers {
            parts.push(format!(
                "-H {}",
                shell_single_quote(&format!("{}: {}", key, value))
            ));
        }

        if let Some(body) = ctx.body {
            parts.push(format!("-d {}", shell_single_quote(body)));
        }

        match ctx.config.curl_style {
            CurlStyle::Multiline => parts.join(" \\\n  "),
            CurlStyle::Compact => parts.join(" "),
        }
    }
}
