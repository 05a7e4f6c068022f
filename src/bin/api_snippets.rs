//! API Snippets command-line entry point.
//!
//! Reads a request document (from a file or stdin), resolves it, and prints
//! the generated snippets as JSON, a single snippet as plain text, or the
//! resolved request.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use api_snippets::codegen::{generate_all_snippets_with, generate_snippet_with, Language};
use api_snippets::config::{load_config, CurlStyle, SnippetConfig};
use api_snippets::models::SnippetDocument;
use api_snippets::variables::unresolved_request_variables;
use clap::Parser;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(
    name = "api-snippets",
    version,
    about = "Resolve an API request document and render it as client code"
)]
struct Cli {
    /// Request document; reads stdin when omitted or `-`
    file: Option<PathBuf>,

    /// Print a single snippet (curl, javascript, python, go, php)
    #[arg(short, long, value_parser = Language::from_str)]
    lang: Option<Language>,

    /// Print the resolved request instead of snippets
    #[arg(long, conflicts_with = "lang")]
    resolved: bool,

    /// Make $guid, $timestamp, $isoTimestamp and $randomInt available
    #[arg(long)]
    dynamic: bool,

    /// Resolve against this environment instead of the document's `$active`
    #[arg(short, long)]
    env: Option<String>,

    /// Settings file with an "api-snippets" section
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit cURL on a single line
    #[arg(long)]
    compact: bool,
}

impl Cli {
    fn input_path(&self) -> Option<&Path> {
        self.file.as_deref().filter(|p| *p != Path::new("-"))
    }
}

fn load_settings(cli: &Cli) -> Result<SnippetConfig, String> {
    let settings = match &cli.config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            let value: Value = serde_json::from_str(&content)
                .map_err(|e| format!("Invalid settings in {}: {}", path.display(), e))?;
            Some(value)
        }
        None => None,
    };

    let mut config = load_config(settings)?;
    if cli.compact {
        config.curl_style = CurlStyle::Compact;
    }
    Ok(config)
}

fn load_document(cli: &Cli) -> Result<SnippetDocument, String> {
    let mut document = match cli.input_path() {
        Some(path) => SnippetDocument::from_path(path).map_err(|e| e.to_string())?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            SnippetDocument::from_json(&input).map_err(|e| e.to_string())?
        }
    };

    if let Some(name) = &cli.env {
        document
            .environments
            .select(name)
            .map_err(|e| e.to_string())?;
    }

    Ok(document)
}

fn run(cli: &Cli) -> Result<String, String> {
    let config = load_settings(cli)?;
    let document = load_document(cli)?;

    let resolved = document.resolve(cli.dynamic);
    log::debug!("Resolved {} {}", resolved.method, resolved.url);

    if config.report_unresolved {
        let missing = unresolved_request_variables(&resolved);
        if !missing.is_empty() {
            log::debug!("Unresolved variables left verbatim: {}", missing.join(", "));
        }
    }

    if cli.resolved {
        return serde_json::to_string_pretty(&resolved).map_err(|e| e.to_string());
    }

    match cli.lang {
        Some(language) => Ok(generate_snippet_with(&resolved, language, &config)),
        None => serde_json::to_string_pretty(&generate_all_snippets_with(&resolved, &config))
            .map_err(|e| e.to_string()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("api-snippets: {}", e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_read_stdin() {
        let cli = Cli::try_parse_from(["api-snippets"]).unwrap();
        assert!(cli.input_path().is_none());
        assert!(cli.lang.is_none());
        assert!(!cli.resolved);

        let cli = Cli::try_parse_from(["api-snippets", "-"]).unwrap();
        assert!(cli.input_path().is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "api-snippets",
            "--lang",
            "py",
            "--dynamic",
            "--env",
            "prod",
            "request.json",
        ])
        .unwrap();

        assert_eq!(cli.lang, Some(Language::Python));
        assert!(cli.dynamic);
        assert_eq!(cli.env.as_deref(), Some("prod"));
        assert_eq!(cli.input_path(), Some(Path::new("request.json")));
    }

    #[test]
    fn test_rejected_arguments() {
        assert!(Cli::try_parse_from(["api-snippets", "--lang"]).is_err());
        assert!(Cli::try_parse_from(["api-snippets", "--lang", "rust"]).is_err());
        assert!(Cli::try_parse_from(["api-snippets", "--verbose"]).is_err());
        assert!(Cli::try_parse_from(["api-snippets", "a.json", "b.json"]).is_err());
        assert!(Cli::try_parse_from(["api-snippets", "--resolved", "--lang", "go"]).is_err());
    }

    #[test]
    fn test_run_single_language_with_env_override() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{
                "request": {"method": "GET", "url": "{{host}}/ping"},
                "environments": {
                    "$active": "dev",
                    "dev": {"host": "http://localhost:3000"},
                    "prod": {"host": "https://api.test"}
                }
            }"#,
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["api-snippets", "--lang", "curl", "--compact", "--env", "prod", path])
            .unwrap();
        assert_eq!(run(&cli).unwrap(), "curl -X GET 'https://api.test/ping'");

        let cli = Cli::try_parse_from(["api-snippets", "--env", "qa", path]).unwrap();
        assert!(run(&cli).unwrap_err().contains("'qa' does not exist"));
    }
}
