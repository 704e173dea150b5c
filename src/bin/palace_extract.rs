//! Command-line page extraction.
//!
//! Reads HTML from a file or stdin and prints the extraction as JSON, or as
//! the markdown body of a memory with `--memory`. Logs go to stderr so the
//! output stays machine-readable.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use palace_capture::memory::format_memory_content;
use palace_capture::{
    extract_page_bytes, ExtractOptions, SelectorSet, DEFAULT_MIN_CANDIDATE_LEN,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Extract the main content of a saved web page
#[derive(Parser, Debug)]
#[command(name = "palace-extract")]
#[command(version)]
#[command(about = "Extract readable content and metadata from an HTML page")]
struct Args {
    /// HTML file to read; stdin when omitted
    input: Option<PathBuf>,

    /// Location the page was loaded from
    #[arg(short, long, default_value = "")]
    url: String,

    /// JSON file with a custom selector set
    #[arg(short, long, conflicts_with = "compact")]
    selectors: Option<PathBuf>,

    /// Use the compact (version 1) selector set
    #[arg(long)]
    compact: bool,

    /// Minimum visible length for a content candidate
    #[arg(long, default_value_t = DEFAULT_MIN_CANDIDATE_LEN)]
    min_length: usize,

    /// Print the memory markdown instead of JSON
    #[arg(long)]
    memory: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "extraction failed");
            eprintln!("palace-extract: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> palace_capture::Result<String> {
    let options = ExtractOptions {
        selectors: load_selectors(args)?,
        min_candidate_len: args.min_length,
    };

    let html = read_input(args.input.as_ref())?;
    info!(bytes = html.len(), version = options.selectors.version, "extracting");

    let result = extract_page_bytes(&html, &args.url, &options);

    if args.memory {
        Ok(format_memory_content(&result))
    } else {
        Ok(serde_json::to_string_pretty(&result)?)
    }
}

fn load_selectors(args: &Args) -> palace_capture::Result<SelectorSet> {
    if let Some(path) = &args.selectors {
        return SelectorSet::from_reader(File::open(path)?);
    }
    if args.compact {
        return Ok(SelectorSet::compact());
    }
    Ok(SelectorSet::extended())
}

fn read_input(path: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    if let Some(path) = path {
        return fs::read(path);
    }

    let mut html = Vec::new();
    io::stdin().read_to_end(&mut html)?;
    Ok(html)
}
