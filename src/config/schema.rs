//! Configuration schema.
//!
//! Defines the user-configurable settings and their validation.

use serde::{Deserialize, Serialize};

/// Settings for resolution diagnostics and snippet layout.
///
/// Missing settings fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetConfig {
    /// Layout of the generated cURL command. Defaults to multi-line.
    #[serde(default = "default_curl_style")]
    pub curl_style: CurlStyle,

    /// Whether unresolved `{{name}}` tokens are reported at debug level.
    /// Defaults to true.
    #[serde(default = "default_report_unresolved")]
    pub report_unresolved: bool,

    /// Indentation width used for header maps in the JavaScript and Python
    /// snippets. Defaults to 4; must be between 1 and 8.
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
}

/// Layout of the generated cURL command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurlStyle {
    /// One flag per line, joined with backslash continuations.
    Multiline,
    /// Everything on a single line.
    Compact,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            curl_style: default_curl_style(),
            report_unresolved: default_report_unresolved(),
            indent_width: default_indent_width(),
        }
    }
}

impl SnippetConfig {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// `Ok(())` if all settings are valid, or `Err` with a descriptive error message.
    pub fn validate(&self) -> Result<(), String> {
        if self.indent_width == 0 || self.indent_width > 8 {
            return Err("indentWidth must be between 1 and 8".to_string());
        }

        Ok(())
    }

    /// Indentation string for pretty-printed header maps.
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_width)
    }
}

fn default_curl_style() -> CurlStyle {
    CurlStyle::Multiline
}

fn default_report_unresolved() -> bool {
    true
}

fn default_indent_width() -> usize {
    4
}
