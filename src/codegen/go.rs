//! Go `net/http` code generation.

use super::escape::{double_quoted, go_raw_string};
use super::{EmitContext, Language, SnippetEmitter};

/// Emits a complete `main` package that builds, sends, and prints the
/// response of the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetHttpEmitter;

impl SnippetEmitter for NetHttpEmitter {
    fn language(&self) -> Language {
        Language::Go
    }

    fn emit(&self, ctx: &EmitContext<'_>) -> String {
        let mut code = String::new();

        code.push_str("package main\n\n");
        code.push_str("import (\n");
        code.push_str("\t\"fmt\"\n");
        code.push_str("\t\"io\"\n");
        code.push_str("\t\"net/http\"\n");
        if ctx.body.is_some() {
            code.push_str("\t\"strings\"\n");
        }
        code.push_str(")\n\n");

        code.push_str("func main() {\n");
        code.push_str(&format!("\turl := {}\n", double_quoted(ctx.url)));

        let reader = match ctx.body {
            Some(body) => {
                code.push_str(&format!(
                    "\tpayload := strings.NewReader({})\n",
                    go_raw_string(body)
                ));
                "payload"
            }
            None => "nil",
        };
        code.push('\n');

        code.push_str(&format!(
            "\treq, err := http.NewRequest({}, url, {})\n",
            double_quoted(&ctx.method),
            reader
        ));
        code.push_str("\tif err != nil {\n\t\tpanic(err)\n\t}\n");

        if !ctx.headers.is_empty() {
            code.push('\n');
            for (key, value) in &ctx.headers {
                code.push_str(&format!(
                    "\treq.Header.Add({}, {})\n",
                    double_quoted(key),
                    double_quoted(value)
                ));
            }
        }
        code.push('\n');

        code.push_str("\tres, err := http.DefaultClient.Do(req)\n");
        code.push_str("\tif err != nil {\n\t\tpanic(err)\n\t}\n");
        code.push_str("\tdefer res.Body.Close()\n\n");

        code.push_str("\tbody, err := io.ReadAll(res.Body)\n");
        code.push_str("\tif err != nil {\n\t\tpanic(err)\n\t}\n\n");

        code.push_str("\tfmt.Println(res.Status)\n");
        code.push_str("\tfmt.Println(string(body))\n");
        code.push_str("}\n");

        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SnippetConfig;
    use crate::models::ResolvedRequest;

    fn emit(request: &ResolvedRequest) -> String {
        NetHttpEmitter.emit(&EmitContext::new(request, &SnippetConfig::default()))
    }

    #[test]
    fn test_simple_get() {
        let request = ResolvedRequest::new("get", "https://api.example.com/users");
        let code = emit(&request);

        assert!(code.starts_with("package main\n\nimport (\n\t\"fmt\"\n\t\"io\"\n\t\"net/http\"\n)\n"));
        assert!(!code.contains("strings"));
        assert!(code.contains("\treq, err := http.NewRequest(\"GET\", url, nil)\n"));
        assert!(code.contains("\tres, err := http.DefaultClient.Do(req)\n"));
        assert!(code.contains("io.ReadAll(res.Body)"));
        assert_eq!(code.matches("panic(err)").count(), 3);
    }

    #[test]
    fn test_post_with_body_and_headers() {
        let mut request = ResolvedRequest::new("POST", "https://api.test/users");
        request.add_header("Content-Type", "application/json");
        request.add_header("Authorization", "Bearer abc123");
        request.set_body(r#"{"name":"Ada"}"#);

        let code = emit(&request);
        assert!(code.contains("\t\"strings\"\n"));
        assert!(code.contains("\tpayload := strings.NewReader(`{\"name\":\"Ada\"}`)\n"));
        assert!(code.contains("http.NewRequest(\"POST\", url, payload)"));

        let content_type = code
            .find("\treq.Header.Add(\"Content-Type\", \"application/json\")\n")
            .unwrap();
        let auth = code
            .find("\treq.Header.Add(\"Authorization\", \"Bearer abc123\")\n")
            .unwrap();
        let build = code.find("http.NewRequest").unwrap();
        assert!(build < content_type && content_type < auth);
    }

    #[test]
    fn test_backtick_in_body() {
        let mut request = ResolvedRequest::new("PUT", "https://api.test/md");
        request.set_body("use `code` here");

        let code = emit(&request);
        assert!(code.contains("strings.NewReader(`use ` + \"`\" + `code` + \"`\" + ` here`)"));
    }

    #[test]
    fn test_no_strings_import_for_delete_body() {
        let mut request = ResolvedRequest::new("DELETE", "https://api.test/items/1");
        request.set_body(r#"{"force":true}"#);

        let code = emit(&request);
        assert!(!code.contains("strings"));
        assert!(code.contains("http.NewRequest(\"DELETE\", url, nil)"));
    }
}
