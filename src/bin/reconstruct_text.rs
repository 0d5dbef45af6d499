//! Reconstruct reading-order text from a serialized fragment stream.
//!
//! Reads a JSON array of `{x, y, text}` records (a document decoder's
//! output) and prints the linearized text to stdout.
//!
//! Usage:
//!   cargo run --bin reconstruct_text -- fragments.json
//!   cargo run --bin reconstruct_text -- fragments.json --tolerance 0.5

use review_oxide::config::{GroupingStrategyType, ReconstructConfig};
use review_oxide::error::{Error, Result};
use review_oxide::fragment::TextFragment;
use review_oxide::reconstruct::reconstruct_text_with_config;
use review_oxide::report::ensure_extracted;
use std::fs;
use std::path::PathBuf;
use std::process;

struct Args {
    input: PathBuf,
    tolerance: Option<f64>,
}

impl Args {
    fn from_env() -> Option<Self> {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut tolerance = None;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--tolerance" => {
                    i += 1;
                    tolerance = args.get(i).and_then(|v| v.parse().ok());
                },
                path => {
                    input = Some(PathBuf::from(path));
                },
            }
            i += 1;
        }

        Some(Self {
            input: input?,
            tolerance,
        })
    }
}

fn run(args: &Args) -> Result<String> {
    let raw = fs::read_to_string(&args.input)?;
    let fragments: Vec<TextFragment> =
        serde_json::from_str(&raw).map_err(|e| Error::InvalidFragmentStream(e.to_string()))?;

    log::info!(
        "loaded {} fragments from {}",
        fragments.len(),
        args.input.display()
    );

    let grouping = match args.tolerance {
        Some(tolerance) => GroupingStrategyType::Banded(tolerance),
        None => GroupingStrategyType::Exact,
    };
    let config = ReconstructConfig::new().with_grouping(grouping);

    let reconstructed = reconstruct_text_with_config(fragments, &config);
    ensure_extracted(&reconstructed)?;

    Ok(reconstructed.text())
}

fn main() {
    env_logger::init();

    let Some(args) = Args::from_env() else {
        eprintln!("Usage: reconstruct_text <fragments.json> [--tolerance <f64>]");
        process::exit(2);
    };

    match run(&args) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        },
    }
}
