//! dynabot -- a Dynamite bot speaking line-delimited JSON.
//!
//! Reads one gamestate per line from stdin (`{"rounds": [...]}`) and
//! writes the chosen move code to stdout, one character per line.
//! Malformed lines are logged to stderr and skipped.
//!
//! Options:
//!   --model PATH   ONNX model path (default: heuristic-only)
//!   --window N     Encoding window size (default: 50)
//!   --seed N       Fallback predictor seed, 0 for entropy (default: 0)

use std::env;
use std::io::{self, BufRead, Write};

use dynabot::bot::{Bot, BotConfig};
use dynabot::game::round::parse_gamestate_lenient;

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = BotConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--model" => {
                i += 1;
                config.model_path = Some(args[i].clone());
            }
            "--window" => {
                i += 1;
                config.window_size = args[i].parse().expect("invalid --window value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
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

    let mut bot = match Bot::new(&config) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let rounds = match parse_gamestate_lenient(&line) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("malformed gamestate: {}", e);
                continue;
            }
        };

        let mv = bot.make_move(&rounds);
        if writeln!(out, "{}", mv.code())
            .and_then(|_| out.flush())
            .is_err()
        {
            break;
        }
    }
}

fn print_usage() {
    eprintln!("Usage: dynabot [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --model PATH   ONNX model path (default: heuristic-only)");
    eprintln!("  --window N     Encoding window size (default: 50)");
    eprintln!("  --seed N       Fallback predictor seed, 0 for entropy (default: 0)");
    eprintln!("  --help         Show this help");
}
