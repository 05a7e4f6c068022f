//! JavaScript `fetch()` code generation.
//!
//! The raw body is inserted verbatim as a JavaScript expression inside
//! `JSON.stringify(...)`; it is not re-serialized from parsed JSON, so
//! template-shaped bodies survive exactly as written.

use super::escape::{double_quoted, indent_continuation, pretty_object};
use super::{EmitContext, Language, SnippetEmitter};

/// Emits an async `fetch()` call that parses and logs the response.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchEmitter;

impl SnippetEmitter for FetchEmitter {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn emit(&self, ctx: &EmitContext<'_>) -> String {
        let indent = ctx.config.indent();
        let headers = pretty_object(&ctx.headers, &indent);

        let mut options = vec![
            format!("method: {}", double_quoted(&ctx.method)),
            format!("headers: {}", indent_continuation(&headers, &indent)),
        ];
        if let Some(body) = ctx.body {
            options.push(format!("body: JSON.stringify({})", body));
        }

        let mut code = String::new();
        code.push_str(&format!(
            "const response = await fetch({}, {{\n",
            double_quoted(ctx.url)
        ));
        code.push_str(&indent);
        code.push_str(&options.join(&format!(",\n{}", indent)));
        code.push_str("\n});\n\n");

        code.push_str("const data = await response.json();\n");
        code.push_str("console.log(data);\n");

        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SnippetConfig;
    use crate::models::ResolvedRequest;

    fn emit(request: &ResolvedRequest) -> String {
        FetchEmitter.emit(&EmitContext::new(request, &SnippetConfig::default()))
    }

    #[test]
    fn test_simple_get() {
        let request = ResolvedRequest::new("get", "https://api.example.com/users");

        assert_eq!(
            emit(&request),
            "const response = await fetch(\"https://api.example.com/users\", {\n    \
             method: \"GET\",\n    \
             headers: {}\n\
             });\n\
             \n\
             const data = await response.json();\n\
             console.log(data);\n"
        );
    }

    #[test]
    fn test_post_with_json_body() {
        let mut request = ResolvedRequest::new("POST", "https://api.test/users");
        request.add_header("Content-Type", "application/json");
        request.set_body(r#"{"name":"Ada"}"#);

        let code = emit(&request);
        assert!(code.contains(
            "    headers: {\n        \"Content-Type\": \"application/json\"\n    },\n"
        ));
        assert!(code.contains(r#"    body: JSON.stringify({"name":"Ada"})"#));
    }

    #[test]
    fn test_body_inserted_verbatim() {
        let mut request = ResolvedRequest::new("PATCH", "https://api.test/users/1");
        request.set_body("{ name: 'Ada', tags: [] }");

        let code = emit(&request);
        assert!(code.contains("body: JSON.stringify({ name: 'Ada', tags: [] })"));
    }

    #[test]
    fn test_response_logged_last() {
        let mut request = ResolvedRequest::new("POST", "https://api.test/users");
        request.set_body("{}");

        let code = emit(&request);
        let lines: Vec<&str> = code.lines().collect();
        assert_eq!(lines[lines.len() - 2], "const data = await response.json();");
        assert_eq!(lines[lines.len() - 1], "console.log(data);");
    }

    #[test]
    fn test_url_is_escaped() {
        let request = ResolvedRequest::new("GET", "https://api.test/q?name=\"x\"");
        let code = emit(&request);
        assert!(code.contains(r#"fetch("https://api.test/q?name=\"x\"", {"#));
    }
}
