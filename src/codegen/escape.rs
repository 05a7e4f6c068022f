//! Literal quoting for the generated languages.
//!
//! Bodies are not reproduced byte-for-byte in every target. cURL closes and
//! reopens its single quotes around a quote (`'\''`), and PHP single-quoted
//! strings backslash-escape both `\` and `'`, so a body containing `\`
//! shows up as `\\` in the PHP snippet. Both evaluate back to the original
//! text. JavaScript and Python insert the body verbatim, and Go only splits
//! it around backticks.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

/// Wraps `s` in single quotes for a POSIX shell.
///
/// Embedded single quotes close the quoted string, emit an escaped quote,
/// and reopen it (`'\''`), so the shell reads them as literal text.
pub fn shell_single_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Double-quoted string literal valid in JavaScript, Python, and Go.
///
/// Uses JSON string escaping, which all three accept.
pub fn double_quoted(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

/// Single-quoted PHP string literal. Backslashes and single quotes are
/// backslash-escaped; nothing else is special inside single quotes.
pub fn php_single_quote(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Double-quoted PHP string literal with `\`, `"` and `$` escaped so no
/// interpolation happens.
pub fn php_double_quote(s: &str) -> String {
    let escaped: String = s
        .chars()
        .map(|c| match c {
            '\\' => "\\\\".to_string(),
            '"' => "\\\"".to_string(),
            '$' => "\\$".to_string(),
            '\n' => "\\n".to_string(),
            '\r' => "\\r".to_string(),
            '\t' => "\\t".to_string(),
            c => c.to_string(),
        })
        .collect();
    format!("\"{}\"", escaped)
}

/// Go raw string literal. Go raw strings cannot contain a backtick, so each
/// one is spliced in as an interpreted string: `` `a` + "`" + `b` ``.
pub fn go_raw_string(s: &str) -> String {
    s.split('`')
        .map(|part| format!("`{}`", part))
        .collect::<Vec<_>>()
        .join(" + \"`\" + ")
}

/// Pretty-prints headers as a JSON object with the given indent.
///
/// Later duplicates overwrite earlier values in place, the way assigning
/// into a JavaScript object or Python dict would. An empty list yields `{}`.
pub fn pretty_object(entries: &[(&str, &str)], indent: &str) -> String {
    let map: Map<String, Value> = entries
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect();

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    if map.serialize(&mut ser).is_err() {
        return "{}".to_string();
    }

    String::from_utf8(buf).unwrap_or_else(|_| "{}".to_string())
}

/// Prefixes every line after the first with `indent`, for nesting a
/// multi-line literal inside an indented block.
pub fn indent_continuation(text: &str, indent: &str) -> String {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 || line.is_empty() {
                line.to_string()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
