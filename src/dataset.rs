//! Training-data generation from finished match files.
//!
//! Walks a directory of match-history JSON files, folds each match through
//! the shared encoder, and emits one training example per labeled round:
//! the window the bot would have seen before the round, plus the move
//! player one actually played. Files are independent and processed in
//! parallel; rounds within one match are a strictly sequential fold and
//! are never reordered.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::encoder::{build_snapshots, encode_window, WINDOW_SIZE};
use crate::game::round::parse_match;
use crate::game::Round;

/// Configuration for dataset ingestion.
#[derive(Clone)]
pub struct IngestConfig {
    /// Directory of `.json` match files.
    pub dir: PathBuf,
    /// Number of recent rounds encoded per example.
    pub window_size: usize,
    /// Number of parallel worker threads.
    pub threads: usize,
    /// Suppress per-file diagnostics.
    pub quiet: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        IngestConfig {
            dir: PathBuf::from("history"),
            window_size: WINDOW_SIZE,
            threads: 4,
            quiet: false,
        }
    }
}

/// One training example: the model inputs for a round plus the move player
/// one played in that round, as a vocabulary index.
#[derive(Clone, Serialize)]
pub struct Example {
    pub history: Vec<f32>,
    pub state: Vec<f32>,
    pub label: usize,
}

/// Ingestion summary counts.
#[derive(Debug, Default, Clone)]
pub struct IngestStats {
    /// Match files found.
    pub files: usize,
    /// Files rejected at the parse boundary.
    pub malformed: usize,
    /// Examples written.
    pub examples: usize,
}

/// Builds the examples for one match.
///
/// Example `i` encodes the window over rounds `0..i` — exactly what the
/// live bot sees before round `i` — labeled with player one's move in
/// round `i`. A round whose player-one symbol is unknown carries no label
/// and is skipped; its state still feeds every later window.
pub fn match_examples(rounds: &[Round], window_size: usize) -> Vec<Example> {
    let snapshots = build_snapshots(rounds);
    let mut examples = Vec::with_capacity(rounds.len());

    for (i, round) in rounds.iter().enumerate() {
        let label = match round.p1 {
            Some(mv) => mv.index(),
            None => continue,
        };
        let window = encode_window(&snapshots[..i], window_size);
        examples.push(Example {
            history: window.history,
            state: window.state.to_vec(),
            label,
        });
    }
    examples
}

/// Processes every `.json` match file under `config.dir` in parallel and
/// writes the resulting examples to `writer` as JSONL.
///
/// Malformed files are counted and skipped, never fatal: one bad download
/// must not sink a multi-thousand-file ingest run. Files are worked
/// through in bounded batches, each written out before the next starts,
/// so memory stays proportional to the batch rather than the directory.
/// Output order follows the sorted file order so runs are reproducible.
pub fn process_dir<W: Write>(config: &IngestConfig, writer: &mut W) -> io::Result<IngestStats> {
    use rayon::prelude::*;

    let mut paths: Vec<PathBuf> = fs::read_dir(&config.dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "json"))
        .collect();
    paths.sort();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");

    let window_size = config.window_size;
    let batch = config.threads.max(1) * 4;
    let mut stats = IngestStats {
        files: paths.len(),
        ..IngestStats::default()
    };

    for chunk in paths.chunks(batch) {
        let results: Vec<Result<Vec<Example>, String>> = pool.install(|| {
            chunk
                .par_iter()
                .map(|path| {
                    let data = fs::read_to_string(path)
                        .map_err(|e| format!("{}: {}", path.display(), e))?;
                    let rounds =
                        parse_match(&data).map_err(|e| format!("{}: {}", path.display(), e))?;
                    Ok(match_examples(&rounds, window_size))
                })
                .collect()
        });

        for result in results {
            match result {
                Ok(examples) => {
                    stats.examples += examples.len();
                    write_jsonl(&examples, writer)?;
                }
                Err(msg) => {
                    stats.malformed += 1;
                    if !config.quiet {
                        eprintln!("skipping {}", msg);
                    }
                }
            }
        }
    }
    writer.flush()?;
    Ok(stats)
}

/// Writes examples as JSONL (one JSON object per line).
pub fn write_jsonl<W: Write>(examples: &[Example], out: &mut W) -> io::Result<()> {
    for example in examples {
        serde_json::to_writer(&mut *out, example)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        writeln!(out)?;
    }
    Ok(())
}
