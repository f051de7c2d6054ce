//! Online play adapter: in-progress history -> next move.
//!
//! A thin wrapper over the shared encoder: folds the visible rounds into
//! snapshots, encodes the last window, and asks the model for a move,
//! falling back to the frequency heuristic when no model is loaded. This
//! is the serving twin of [`crate::dataset::match_examples`]; both go
//! through the same fold and the same window assembly.

use thiserror::Error;

use crate::encoder::{build_snapshots, encode_window, WINDOW_SIZE};
use crate::game::{Move, Round};
use crate::predict::{FrequencyPredictor, NeuralPredictor};

/// Bot configuration.
#[derive(Clone)]
pub struct BotConfig {
    /// Path to the exported ONNX model. None runs heuristic-only.
    pub model_path: Option<String>,
    /// Number of recent rounds encoded per prediction.
    pub window_size: usize,
    /// Seed for the fallback predictor (0 = entropy).
    pub seed: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            model_path: None,
            window_size: WINDOW_SIZE,
            seed: 0,
        }
    }
}

/// Errors constructing a bot.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("window size must be at least 1")]
    ZeroWindow,
}

/// The playing bot: shared encoder plus a predictor pair.
pub struct Bot {
    neural: NeuralPredictor,
    fallback: FrequencyPredictor,
    window_size: usize,
}

impl Bot {
    /// Builds a bot from config. A zero window size is a configuration
    /// error, refused up front rather than producing mis-shaped tensors.
    pub fn new(config: &BotConfig) -> Result<Bot, BotError> {
        if config.window_size == 0 {
            return Err(BotError::ZeroWindow);
        }
        Ok(Bot {
            neural: NeuralPredictor::new(config.model_path.as_deref(), config.window_size),
            fallback: FrequencyPredictor::new(config.seed),
            window_size: config.window_size,
        })
    }

    /// Returns true if the ONNX model is loaded.
    pub fn has_model(&self) -> bool {
        self.neural.has_model()
    }

    /// Decides the next move for player one given the rounds played so
    /// far. One encode-then-predict pass, synchronous, valid from round
    /// zero (empty history encodes to an all-neutral window).
    pub fn make_move(&mut self, rounds: &[Round]) -> Move {
        let snapshots = build_snapshots(rounds);
        let window = encode_window(&snapshots, self.window_size);
        match self.neural.predict(&window) {
            Some(mv) => mv,
            None => self.fallback.predict(&snapshots),
        }
    }
}
