//! Dataset-building CLI.
//!
//! Parses a directory of downloaded match-history JSON files and writes
//! training examples as JSONL.
//!
//! Usage:
//!   cargo run --release --bin ingest -- [OPTIONS]
//!
//! Options:
//!   --dir PATH      Directory of match .json files (default: history)
//!   --output FILE   Output file path (default: stdout)
//!   --window N      Encoding window size (default: 50)
//!   --threads N     Number of parallel threads (default: 4)
//!   --quiet         Suppress per-file diagnostics

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use dynabot::dataset::{process_dir, IngestConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = IngestConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--dir" => {
                i += 1;
                config.dir = PathBuf::from(&args[i]);
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--window" => {
                i += 1;
                config.window_size = args[i].parse().expect("invalid --window value");
            }
            "--threads" => {
                i += 1;
                config.threads = args[i].parse().expect("invalid --threads value");
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if config.window_size == 0 {
        eprintln!("window size must be at least 1");
        std::process::exit(1);
    }

    if !config.quiet {
        eprintln!(
            "Ingest: {} (window {}, {} threads)",
            config.dir.display(),
            config.window_size,
            config.threads
        );
    }

    let start = Instant::now();
    let stats = match output_path {
        Some(path) => {
            let file = File::create(&path).expect("failed to create output file");
            let mut writer = BufWriter::new(file);
            process_dir(&config, &mut writer)
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            process_dir(&config, &mut writer)
        }
    }
    .expect("ingest failed");

    if !config.quiet {
        eprintln!(
            "Processed {} files in {:.1}s: {} examples, {} malformed",
            stats.files,
            start.elapsed().as_secs_f64(),
            stats.examples,
            stats.malformed
        );
    }
}

fn print_usage() {
    eprintln!("Usage: ingest [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --dir PATH      Directory of match .json files (default: history)");
    eprintln!("  --output FILE   Output file path (default: stdout)");
    eprintln!("  --window N      Encoding window size (default: 50)");
    eprintln!("  --threads N     Number of parallel threads (default: 4)");
    eprintln!("  --quiet         Suppress per-file diagnostics");
    eprintln!("  --help          Show this help");
}
