//! PHP cURL extension code generation.

use super::escape::{php_double_quote, php_single_quote};
use super::{EmitContext, Language, SnippetEmitter};

/// Emits a `curl_init` / `curl_setopt_array` / `curl_exec` block that prints
/// either the error or the response.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpCurlEmitter;

impl SnippetEmitter for PhpCurlEmitter {
    fn language(&self) -> Language {
        Language::Php
    }

    fn emit(&self, ctx: &EmitContext<'_>) -> String {
        let mut options = vec![
            format!("CURLOPT_URL => {}", php_single_quote(ctx.url)),
            "CURLOPT_RETURNTRANSFER => true".to_string(),
            format!("CURLOPT_CUSTOMREQUEST => {}", php_single_quote(&ctx.method)),
        ];

        if !ctx.headers.is_empty() {
            let mut headers = String::from("CURLOPT_HTTPHEADER => [\n");
            for (key, value) in &ctx.headers {
                headers.push_str(&format!(
                    "        {},\n",
                    php_double_quote(&format!("{}: {}", key, value))
                ));
            }
            headers.push_str("    ]");
            options.push(headers);
        }

        if let Some(body) = ctx.body {
            options.push(format!("CURLOPT_POSTFIELDS => {}", php_single_quote(body)));
        }

        let mut code = String::new();
        code.push_str("<?php\n\n");
        code.push_str("$curl = curl_init();\n\n");
        code.push_str("curl_setopt_array($curl, [\n");
        for option in &options {
            code.push_str(&format!("    {},\n", option));
        }
        code.push_str("]);\n\n");

        code.push_str("$response = curl_exec($curl);\n");
        code.push_str("$err = curl_error($curl);\n\n");
        code.push_str("curl_close($curl);\n\n");

        code.push_str("if ($err) {\n");
        code.push_str("    echo \"cURL Error #:\" . $err;\n");
        code.push_str("} else {\n");
        code.push_str("    echo $response;\n");
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
        PhpCurlEmitter.emit(&EmitContext::new(request, &SnippetConfig::default()))
    }

    #[test]
    fn test_simple_get() {
        let request = ResolvedRequest::new("get", "https://api.example.com/users");

        assert_eq!(
            emit(&request),
            "<?php\n\
             \n\
             $curl = curl_init();\n\
             \n\
             curl_setopt_array($curl, [\n    \
             CURLOPT_URL => 'https://api.example.com/users',\n    \
             CURLOPT_RETURNTRANSFER => true,\n    \
             CURLOPT_CUSTOMREQUEST => 'GET',\n\
             ]);\n\
             \n\
             $response = curl_exec($curl);\n\
             $err = curl_error($curl);\n\
             \n\
             curl_close($curl);\n\
             \n\
             if ($err) {\n    \
             echo \"cURL Error #:\" . $err;\n\
             } else {\n    \
             echo $response;\n\
             }\n"
        );
    }

    #[test]
    fn test_post_with_headers_and_body() {
        let mut request = ResolvedRequest::new("POST", "https://api.test/users");
        request.add_header("Content-Type", "application/json");
        request.add_header("Authorization", "Bearer abc123");
        request.set_body(r#"{"name":"Ada"}"#);

        let code = emit(&request);
        assert!(code.contains(
            "    CURLOPT_HTTPHEADER => [\n        \
             \"Content-Type: application/json\",\n        \
             \"Authorization: Bearer abc123\",\n    \
             ],\n"
        ));
        assert!(code.contains(r#"    CURLOPT_POSTFIELDS => '{"name":"Ada"}',"#));
    }

    #[test]
    fn test_single_quote_in_body_escaped() {
        let mut request = ResolvedRequest::new("PATCH", "https://api.test/notes/1");
        request.set_body(r#"{"text":"it's"}"#);

        let code = emit(&request);
        assert!(code.contains(r#"CURLOPT_POSTFIELDS => '{"text":"it\'s"}',"#));
    }

    #[test]
    fn test_dollar_in_header_not_interpolated() {
        let mut request = ResolvedRequest::new("GET", "https://api.test");
        request.add_header("X-Price", "$10");

        let code = emit(&request);
        assert!(code.contains(r#""X-Price: \$10","#));
    }
}
