//! Running game state folded over a round sequence.
//!
//! `build_snapshots` is the single source of truth for the per-round
//! counters: dynamite stock, since-last-Dynamite/Water, move tallies, and
//! the shared rollover streak. Snapshot `i` depends only on snapshot `i-1`
//! and round `i`, so re-running the fold on a longer prefix of the same
//! match extends the earlier snapshot sequence without changing it.

use super::{DYNAMITE_MAX, ROLLOVER_CAP};
use crate::game::{Move, Round, MOVE_COUNT};

/// Per-player running counters, as they stand after a given round.
///
/// All counters start at zero (full dynamite stock aside), for a fresh
/// match and for the neutral padding snapshot alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    /// Dynamite sticks left. Floored at zero so depleted or adversarial
    /// logs keep folding instead of underflowing.
    pub dynamite_left: u32,
    /// Rounds since this player last played Dynamite.
    pub since_dynamite: u32,
    /// Rounds since this player last played Water.
    pub since_water: u32,
    /// Count of each move observed so far, in vocabulary order.
    pub move_counts: [u32; MOVE_COUNT],
}

impl PlayerState {
    fn initial() -> PlayerState {
        PlayerState {
            dynamite_left: DYNAMITE_MAX,
            since_dynamite: 0,
            since_water: 0,
            move_counts: [0; MOVE_COUNT],
        }
    }

    /// Advances the counters by one observed move. An unknown symbol
    /// leaves the tally untouched and advances both since-counters as a
    /// non-match; it never consumes dynamite.
    fn step(&self, mv: Option<Move>) -> PlayerState {
        let mut next = *self;
        if let Some(m) = mv {
            next.move_counts[m.index()] += 1;
        }
        if mv == Some(Move::Dynamite) {
            next.dynamite_left = next.dynamite_left.saturating_sub(1);
            next.since_dynamite = 0;
        } else {
            next.since_dynamite += 1;
        }
        if mv == Some(Move::Water) {
            next.since_water = 0;
        } else {
            next.since_water += 1;
        }
        next
    }

    /// Empirical move distribution from the tallies so far. All zero
    /// before any observed move.
    pub fn move_probabilities(&self) -> [f32; MOVE_COUNT] {
        let total: u32 = self.move_counts.iter().sum();
        let mut probs = [0.0; MOVE_COUNT];
        if total == 0 {
            return probs;
        }
        for (p, &count) in probs.iter_mut().zip(self.move_counts.iter()) {
            *p = count as f32 / total as f32;
        }
        probs
    }
}

/// Game state after one round: the moves played plus both players'
/// counters and the shared rollover streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Consecutive identical-move rounds ending at this one, clamped at
    /// [`ROLLOVER_CAP`].
    pub rollover: u32,
    pub p1_move: Option<Move>,
    pub p2_move: Option<Move>,
    pub p1: PlayerState,
    pub p2: PlayerState,
}

impl Snapshot {
    /// Sentinel used to left-pad histories shorter than the window: both
    /// players on Rock, full stock, every counter at zero. It flows
    /// through the same projection formulas as a real snapshot, and no
    /// real first round ever equals it (a played move always leaves a
    /// tally and a nonzero since-counter behind).
    pub fn neutral() -> Snapshot {
        Snapshot {
            rollover: 0,
            p1_move: Some(Move::Rock),
            p2_move: Some(Move::Rock),
            p1: PlayerState::initial(),
            p2: PlayerState::initial(),
        }
    }
}

/// Folds a round sequence into one snapshot per round.
///
/// A single left-to-right pass with O(1) work per round; no look-ahead and
/// no hidden state. Pure and deterministic: the same rounds always produce
/// the same snapshots, and a prefix of the rounds produces the matching
/// prefix of the snapshots. Empty input yields an empty sequence.
pub fn build_snapshots(rounds: &[Round]) -> Vec<Snapshot> {
    let mut snapshots = Vec::with_capacity(rounds.len());
    let mut p1 = PlayerState::initial();
    let mut p2 = PlayerState::initial();
    let mut rollover = 0u32;

    for round in rounds {
        p1 = p1.step(round.p1);
        p2 = p2.step(round.p2);
        // An unknown symbol never matches, not even another unknown.
        rollover = match (round.p1, round.p2) {
            (Some(a), Some(b)) if a == b => (rollover + 1).min(ROLLOVER_CAP),
            _ => 0,
        };
        snapshots.push(Snapshot {
            rollover,
            p1_move: round.p1,
            p2_move: round.p2,
            p1,
            p2,
        });
    }
    snapshots
}
