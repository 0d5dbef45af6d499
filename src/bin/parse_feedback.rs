//! Parse a narrative evaluation file into structured feedback JSON.
//!
//! Reads the narrative text from a file and prints the parsed record as
//! pretty-printed JSON to stdout.
//!
//! Usage:
//!   cargo run --bin parse_feedback -- narrative.txt

use review_oxide::error::Result;
use review_oxide::feedback::parse_feedback;
use std::fs;
use std::path::Path;
use std::process;

fn run(path: &Path) -> Result<String> {
    let narrative = fs::read_to_string(path)?;

    log::info!(
        "parsing {} bytes of narrative from {}",
        narrative.len(),
        path.display()
    );

    let record = parse_feedback(&narrative);

    // Serializing a plain record cannot fail
    Ok(serde_json::to_string_pretty(&record).unwrap_or_default())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("Usage: parse_feedback <narrative.txt>");
        process::exit(2);
    };

    match run(Path::new(path)) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        },
    }
}
