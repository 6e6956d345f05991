//! # Glint - Syntax Highlighting for Text Widgets
//!
//! Command-line front end: highlights one file and prints the tag ranges
//! a widget would receive.
//!
//! ## Quick Start
//!
//! ```bash
//! # Highlight a file, language picked from its extension
//! cargo run -- path/to/file.py
//!
//! # Force a language and print JSON
//! cargo run -- notes.txt --language sql --json
//!
//! # List available themes
//! cargo run -- --list-themes
//! ```

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glint_buffer::{Position, TextBuffer};
use glint_core::{Config, ThemeStore};
use glint_syntax::{Highlighter, HighlighterFactory, Language, PassKind};

/// Glint - incremental syntax highlighting
#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to highlight
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Language name, overriding the file extension
    #[arg(short, long, value_name = "NAME")]
    language: Option<String>,

    /// Theme name, overriding the config
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Config file (default: <config dir>/glint/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// List available themes and exit
    #[arg(long)]
    list_themes: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// What a highlight pass produced.
#[derive(Debug, Serialize)]
struct Report {
    language: String,
    pass: &'static str,
    theme: String,
    tags: BTreeMap<String, TagReport>,
}

#[derive(Debug, Serialize)]
struct TagReport {
    color: Option<String>,
    ranges: Vec<(Position, Position)>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Glint v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load(),
    };
    if let Some(theme) = &args.theme {
        config.theme.name = theme.clone();
    }
    let themes = ThemeStore::from_config(&config.theme);

    if args.list_themes {
        for name in themes.list() {
            println!("{name}");
        }
        return Ok(());
    }

    let file = args
        .file
        .as_deref()
        .context("No file given (see --help)")?;
    let buffer = TextBuffer::from_file(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let factory = HighlighterFactory::new(config.highlight.clone());
    let mut highlighter = match &args.language {
        Some(name) => {
            let language: Language = name.parse()?;
            factory.create_for_language(buffer, language)
        }
        None => factory.create(buffer, Some(file)),
    };
    let theme = themes.resolve(&config.theme.name);
    highlighter.set_theme(&theme);
    let pass = highlighter.highlight();

    let report = build_report(&highlighter, pass, &theme.name);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn build_report(highlighter: &Highlighter<TextBuffer>, pass: PassKind, theme: &str) -> Report {
    let buffer = highlighter.widget();
    let tags = buffer
        .tag_names()
        .into_iter()
        .filter_map(|tag| {
            let ranges = buffer.tag_ranges(&tag);
            if ranges.is_empty() {
                return None;
            }
            let color = highlighter.colors().get(&tag).map(|c| c.to_hex());
            Some((tag, TagReport { color, ranges }))
        })
        .collect();

    Report {
        language: highlighter.language().to_string(),
        pass: match pass {
            PassKind::Structured => "structured",
            PassKind::Fallback => "fallback",
        },
        theme: theme.to_string(),
        tags,
    }
}

fn print_report(report: &Report) {
    println!(
        "{} ({} pass, theme {})",
        report.language, report.pass, report.theme
    );
    for (tag, info) in &report.tags {
        let color = info.color.as_deref().unwrap_or("-");
        println!("{tag} {color}");
        for (start, end) in &info.ranges {
            println!("  {start} {end}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["glint"]);
        assert!(args.file.is_none());
        assert!(!args.json);
        assert!(!args.list_themes);
    }

    #[test]
    fn test_args_with_file() {
        let args = Args::parse_from(["glint", "test.rs", "-l", "rust", "-vv"]);
        assert_eq!(args.file, Some(PathBuf::from("test.rs")));
        assert_eq!(args.language.as_deref(), Some("rust"));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_report_lists_applied_tags() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("script.py");
        std::fs::write(&path, "import os\n").unwrap();

        let factory = HighlighterFactory::new(Default::default());
        let mut highlighter = factory.create(TextBuffer::from_file(&path).unwrap(), Some(&path));
        let pass = highlighter.highlight();
        let report = build_report(&highlighter, pass, "dark");

        assert_eq!(report.language, "python");
        assert_eq!(report.pass, "structured");
        let keyword = &report.tags["keyword"];
        assert_eq!(keyword.color.as_deref(), Some("#569CD6"));
        assert_eq!(
            keyword.ranges,
            vec![(Position::new(1, 0), Position::new(1, 6))]
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["tags"]["keyword"]["ranges"][0][0], "1.0");
    }
}
