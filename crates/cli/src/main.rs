//! Render a serialized graph document in compact form.
//!
//! Usage: adt-debug [--raw] [-v...] [PATH|-]

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use adt_debug::Document;
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Print the compact debug form of a JSON graph document.
#[derive(Debug, Parser)]
#[command(name = "adt-debug", version, about)]
struct Args {
    /// Document to read; `-` or nothing reads stdin.
    path: Option<PathBuf>,

    /// Print conjuncts instead of evaluated values.
    #[arg(long)]
    raw: bool,

    /// Increase log verbosity (repeatable). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_document(path: Option<&PathBuf>) -> Result<Document> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            tracing::debug!(path = %p.display(), "reading document");
            let file =
                File::open(p).with_context(|| format!("failed to open '{}'", p.display()))?;
            Document::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to load '{}'", p.display()))
        }
        _ => {
            tracing::debug!("reading document from stdin");
            Document::from_reader(io::stdin().lock()).context("failed to load stdin")
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let mut doc = load_document(args.path.as_ref())?;
    if args.raw {
        doc.config.raw = true;
    }
    tracing::info!(labels = doc.labels.len(), raw = doc.config.raw, "rendering");
    Ok(doc.render())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(out) => {
            println!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const DOC: &str = r#"{
        "labels": ["a"],
        "root": {
            "Vertex": {
                "value": "StructMarker",
                "arcs": [{
                    "label": { "kind": "String", "index": 0 },
                    "vertex": { "value": "Null" }
                }],
                "conjuncts": [{ "expr": "Top" }]
            }
        }
    }"#;

    fn write_doc(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_run_renders_file() {
        let file = write_doc(DOC);
        let args = Args::parse_from(["adt-debug", file.path().to_str().unwrap()]);
        assert_eq!(run(&args).unwrap(), "{a:null}");
    }

    #[test]
    fn test_run_raw_flag_overrides_config() {
        let file = write_doc(DOC);
        let args = Args::parse_from(["adt-debug", "--raw", file.path().to_str().unwrap()]);
        assert_eq!(run(&args).unwrap(), "_");
    }

    #[test]
    fn test_run_reports_missing_file() {
        let args = Args::parse_from(["adt-debug", "/nonexistent/graph.json"]);
        let err = run(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to open"));
    }

    #[test]
    fn test_run_reports_bad_json() {
        let file = write_doc("{\"root\": 1}");
        let args = Args::parse_from(["adt-debug", file.path().to_str().unwrap()]);
        let err = run(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid document"));
    }

    #[test]
    fn test_verbose_counts() {
        let args = Args::parse_from(["adt-debug", "-vv"]);
        assert_eq!(args.verbose, 2);
        assert!(args.path.is_none());
    }
}
