//! CLI tool for turning markdown into standalone HTML slide decks.

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use slides_core::theme::theme_summaries;
use slides_core::{generate_with, DeckRenderer, GeneratedDeck, DEMO_MARKDOWN};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Convert markdown into a navigable HTML slide deck.
#[derive(Parser, Debug)]
#[command(name = "md-slides")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input markdown file (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Theme: professional, creative or minimal (unknown names use professional)
    #[arg(short, long, default_value = "professional")]
    theme: String,

    /// Output file or directory (default: <input>.html next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the document to stdout instead of writing a file
    #[arg(short, long)]
    print: bool,

    /// Print generation metadata as JSON
    #[arg(short, long)]
    json: bool,

    /// Document title
    #[arg(long)]
    title: Option<String>,

    /// Do not import webfonts in the stylesheet
    #[arg(long)]
    no_webfonts: bool,

    /// List the available themes and exit
    #[arg(long)]
    list_themes: bool,

    /// Use the built-in demo markdown as input
    #[arg(long, conflicts_with = "input")]
    demo: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Metadata printed with `--json`.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    theme_used: &'a str,
    slides_count: usize,
    titles: Vec<&'a str>,
    output: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if args.list_themes {
        return list_themes(args.json);
    }

    let markdown = read_input(&args)?;
    let renderer = build_renderer(&args);
    let deck = generate_with(&renderer, &markdown, &args.theme);

    log::info!(
        "Generated {} slides with the {} theme",
        deck.slides_count,
        deck.theme_used
    );

    let output_path = if args.print {
        print!("{}", deck.html);
        None
    } else {
        let path = get_output_path(args.input.as_deref(), args.output.as_deref())?;
        write_output(&path, &deck.html)?;
        if args.verbose {
            eprintln!("Written to: {}", path.display());
        }
        Some(path)
    };

    if args.json {
        print_summary(&deck, output_path.as_deref())?;
    }

    Ok(())
}

fn build_renderer(args: &Args) -> DeckRenderer {
    let renderer = DeckRenderer::new().with_webfonts(!args.no_webfonts);
    match &args.title {
        Some(title) => renderer.with_title(title.as_str()),
        None => renderer,
    }
}

/// Read the markdown source from the demo, a file, or stdin.
fn read_input(args: &Args) -> Result<String> {
    if args.demo {
        return Ok(DEMO_MARKDOWN.to_string());
    }

    match args.input.as_deref() {
        Some(path) if path != Path::new("-") => {
            if args.verbose {
                eprintln!("Processing: {}", path.display());
            }
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        _ => {
            let mut markdown = String::new();
            io::stdin()
                .read_to_string(&mut markdown)
                .context("Failed to read markdown from stdin")?;
            Ok(markdown)
        }
    }
}

/// Determine where the document is written.
///
/// An explicit output that is an existing directory receives `<stem>.html`;
/// any other explicit output is used as the file path.
fn get_output_path(input_path: Option<&Path>, output: Option<&Path>) -> Result<PathBuf> {
    let stem = input_path
        .filter(|p| *p != Path::new("-"))
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("slides");

    let output_filename = format!("{}.html", stem);

    let output_path = match output {
        Some(path) if path.is_dir() => path.join(output_filename),
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
            path.to_path_buf()
        }
        None => match input_path.filter(|p| *p != Path::new("-")) {
            Some(input) => match input.parent() {
                Some(parent) => parent.join(output_filename),
                None => PathBuf::from(output_filename),
            },
            None => bail!("Reading from stdin requires --output or --print"),
        },
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}

fn print_summary(deck: &GeneratedDeck, output: Option<&Path>) -> Result<()> {
    let summary = Summary {
        theme_used: &deck.theme_used,
        slides_count: deck.slides_count,
        titles: deck.slides.iter().map(|s| s.title.as_str()).collect(),
        output: output.map(|p| p.display().to_string()),
    };
    let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
    // The document already went to stdout with --print; keep it parseable.
    if output.is_none() {
        eprintln!("{}", json);
    } else {
        println!("{}", json);
    }
    Ok(())
}

fn list_themes(json: bool) -> Result<()> {
    let themes = theme_summaries();

    if json {
        let out = serde_json::to_string_pretty(&themes).context("Failed to serialize themes")?;
        println!("{}", out);
    } else {
        for theme in &themes {
            println!("{:<14} {:<14} {}", theme.id, theme.name, theme.description);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_next_to_input() {
        let path = get_output_path(Some(Path::new("talks/intro.md")), None).unwrap();
        assert_eq!(path, PathBuf::from("talks/intro.html"));
    }

    #[test]
    fn test_explicit_output_file() {
        let path =
            get_output_path(Some(Path::new("intro.md")), Some(Path::new("deck.html"))).unwrap();
        assert_eq!(path, PathBuf::from("deck.html"));
    }

    #[test]
    fn test_stdin_without_output_is_an_error() {
        assert!(get_output_path(None, None).is_err());
        assert!(get_output_path(Some(Path::new("-")), None).is_err());
    }

    #[test]
    fn test_stdin_into_directory_uses_default_name() {
        let dir = std::env::temp_dir();
        let path = get_output_path(None, Some(&dir)).unwrap();
        assert_eq!(path, dir.join("slides.html"));
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["md-slides", "notes.md"]);
        assert_eq!(args.theme, "professional");
        assert_eq!(args.input, Some(PathBuf::from("notes.md")));
        assert!(!args.print && !args.json && !args.no_webfonts);
    }

    #[test]
    fn test_demo_conflicts_with_input() {
        assert!(Args::try_parse_from(["md-slides", "--demo", "notes.md"]).is_err());
    }

    #[test]
    fn test_build_renderer_applies_flags() {
        let args = Args::parse_from(["md-slides", "--demo", "--no-webfonts", "--title", "Talk"]);
        let deck = generate_with(&build_renderer(&args), DEMO_MARKDOWN, "minimal");
        assert!(deck.html.contains("<title>Talk</title>"));
        assert!(!deck.html.contains("@import"));
    }
}
