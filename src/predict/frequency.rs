//! Frequency-based fallback predictor.
//!
//! Counters the opponent's empirically most likely move. During a short
//! research phase it plays uniformly at random to gather tallies, then
//! picks a move that beats the opponent's modal move, breaking ties at
//! random. Dynamite is never selected once the caller's own stock is
//! depleted.
//!
//! The caller is always player one of the round history.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::encoder::{Snapshot, DYNAMITE_MAX};
use crate::game::{Move, ALL_MOVES, MOVE_COUNT};

/// Rounds of random play before the opponent tallies are trusted.
pub const RESEARCH_ROUNDS: usize = 30;

/// Predictor driven by the opponent's move tallies.
pub struct FrequencyPredictor {
    rng: SmallRng,
    research_rounds: usize,
}

impl FrequencyPredictor {
    /// Creates a predictor. `seed` 0 draws from entropy.
    pub fn new(seed: u64) -> Self {
        let rng = if seed != 0 {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_entropy()
        };
        FrequencyPredictor {
            rng,
            research_rounds: RESEARCH_ROUNDS,
        }
    }

    /// Picks the next move from the current snapshot sequence.
    pub fn predict(&mut self, snapshots: &[Snapshot]) -> Move {
        let last = snapshots.last();
        let own_stock = last.map_or(DYNAMITE_MAX, |s| s.p1.dynamite_left);

        let candidates: &[Move] = match last {
            Some(snap) if snapshots.len() >= self.research_rounds => {
                match modal_move(&snap.p2.move_probabilities()) {
                    Some(mv) => mv.beaten_by(),
                    None => &ALL_MOVES[..],
                }
            }
            _ => &ALL_MOVES[..],
        };

        let allowed: Vec<Move> = candidates
            .iter()
            .copied()
            .filter(|&m| m != Move::Dynamite || own_stock > 0)
            .collect();

        // Every beaten_by list contains a non-Dynamite move, so this only
        // falls through on an empty candidate set.
        *allowed.choose(&mut self.rng).unwrap_or(&Move::Rock)
    }
}

/// The most frequent move, or None if no move has been observed.
fn modal_move(probs: &[f32; MOVE_COUNT]) -> Option<Move> {
    let mut best: Option<usize> = None;
    for (i, &p) in probs.iter().enumerate() {
        if p > 0.0 && best.map_or(true, |b| p > probs[b]) {
            best = Some(i);
        }
    }
    best.and_then(Move::from_index)
}
