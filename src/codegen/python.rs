//! Python `requests` code generation.
//!
//! The raw body is assumed to be a valid Python literal (JSON objects,
//! arrays, strings and numbers are). It is assigned to `payload` and passed
//! through the `json=` keyword.

use super::escape::{double_quoted, pretty_object};
use super::{EmitContext, Language, SnippetEmitter};

/// Emits a `requests.<method>(...)` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestsEmitter;

impl SnippetEmitter for RequestsEmitter {
    fn language(&self) -> Language {
        Language::Python
    }

    fn emit(&self, ctx: &EmitContext<'_>) -> String {
        let function = ctx.method.to_lowercase();
        let headers = pretty_object(&ctx.headers, &ctx.config.indent());

        let mut code = String::new();
        code.push_str("import requests\n\n");
        code.push_str(&format!("url = {}\n\n", double_quoted(ctx.url)));
        code.push_str(&format!("headers = {}\n\n", headers));

        match ctx.body {
            Some(body) => {
                code.push_str(&format!("payload = {}\n\n", body));
                code.push_str(&format!(
                    "response = requests.{}(url, headers=headers, json={})\n\n",
                    function, body
                ));
            }
            None => {
                code.push_str(&format!(
                    "response = requests.{}(url, headers=headers)\n\n",
                    function
                ));
            }
        }

        code.push_str("print(response.status_code)\n");
        code.push_str("print(response.text)\n");

        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SnippetConfig;
    use crate::models::ResolvedRequest;

    fn emit(request: &ResolvedRequest) -> String {
        RequestsEmitter.emit(&EmitContext::new(request, &SnippetConfig::default()))
    }

    #[test]
    fn test_simple_get() {
        let request = ResolvedRequest::new("GET", "https://api.example.com/data");

        assert_eq!(
            emit(&request),
            "import requests\n\
             \n\
             url = \"https://api.example.com/data\"\n\
             \n\
             headers = {}\n\
             \n\
             response = requests.get(url, headers=headers)\n\
             \n\
             print(response.status_code)\n\
             print(response.text)\n"
        );
    }

    #[test]
    fn test_post_with_payload() {
        let mut request = ResolvedRequest::new("post", "https://api.test/users/42");
        request.add_header("Authorization", "Bearer abc123");
        request.set_body(r#"{"name":"Ada"}"#);

        let code = emit(&request);
        assert!(code.contains("headers = {\n    \"Authorization\": \"Bearer abc123\"\n}\n"));

        let payload = code.find(r#"payload = {"name":"Ada"}"#).unwrap();
        let call = code
            .find(r#"requests.post(url, headers=headers, json={"name":"Ada"})"#)
            .unwrap();
        assert!(payload < call);
    }

    #[test]
    fn test_method_drives_function_name() {
        for (method, function) in [("PUT", "requests.put("), ("delete", "requests.delete("), ("Head", "requests.head(")] {
            let request = ResolvedRequest::new(method, "https://api.test");
            assert!(emit(&request).contains(function), "{} -> {}", method, function);
        }
    }

    #[test]
    fn test_no_payload_for_get_with_body() {
        let mut request = ResolvedRequest::new("GET", "https://api.test");
        request.set_body(r#"{"q":1}"#);

        let code = emit(&request);
        assert!(!code.contains("payload"));
        assert!(!code.contains("json="));
    }
}
