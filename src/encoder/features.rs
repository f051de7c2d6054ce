//! Snapshot -> fixed-dimension feature vectors.
//!
//! Every normalization constant here is a fixed system parameter, never
//! inferred from data, so a vector projected for one snapshot in isolation
//! at serving time is bit-identical to the same snapshot projected inside
//! a full-history training batch.
//!
//! Per-round layout (17 channels):
//!   [0]     rollover / ROLLOVER_CAP
//!   [1:3]   dynamite left / DYNAMITE_MAX      [p1, p2]
//!   [3:5]   since Dynamite / GAME_LENGTH_CAP  [p1, p2]
//!   [5:7]   since Water / GAME_LENGTH_CAP     [p1, p2]
//!   [7:12]  p1 move one-hot
//!   [12:17] p2 move one-hot
//!
//! All ratios are clamped to [0, 1]. An out-of-vocabulary move projects to
//! an all-zero one-hot block.

use super::snapshot::Snapshot;
use super::{DYNAMITE_MAX, GAME_LENGTH_CAP, ROLLOVER_CAP};
use crate::game::moves::one_hot_opt;
use crate::game::MOVE_COUNT;

/// Per-round feature vector width.
pub const FEATURE_SIZE: usize = 7 + 2 * MOVE_COUNT;

/// Compact match-state vector width.
pub const STATE_SIZE: usize = 3;

fn ratio(count: u32, cap: u32) -> f32 {
    (count as f32 / cap as f32).min(1.0)
}

/// Projects one snapshot into its per-round history row.
pub fn history_features(snap: &Snapshot) -> [f32; FEATURE_SIZE] {
    let mut out = [0.0f32; FEATURE_SIZE];
    out[0] = ratio(snap.rollover, ROLLOVER_CAP);
    out[1] = ratio(snap.p1.dynamite_left, DYNAMITE_MAX);
    out[2] = ratio(snap.p2.dynamite_left, DYNAMITE_MAX);
    out[3] = ratio(snap.p1.since_dynamite, GAME_LENGTH_CAP);
    out[4] = ratio(snap.p2.since_dynamite, GAME_LENGTH_CAP);
    out[5] = ratio(snap.p1.since_water, GAME_LENGTH_CAP);
    out[6] = ratio(snap.p2.since_water, GAME_LENGTH_CAP);
    out[7..7 + MOVE_COUNT].copy_from_slice(&one_hot_opt(snap.p1_move));
    out[7 + MOVE_COUNT..].copy_from_slice(&one_hot_opt(snap.p2_move));
    out
}

/// Projects the compact "where the match stands" vector fed to the model
/// alongside the windowed history.
pub fn state_features(snap: &Snapshot) -> [f32; STATE_SIZE] {
    [
        ratio(snap.p1.dynamite_left, DYNAMITE_MAX),
        ratio(snap.p2.dynamite_left, DYNAMITE_MAX),
        ratio(snap.rollover, ROLLOVER_CAP),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::build_snapshots;
    use crate::game::{Move, Round};

    #[test]
    fn neutral_row_values() {
        let row = history_features(&Snapshot::neutral());
        assert_eq!(row[0], 0.0);
        assert_eq!(row[1], 1.0);
        assert_eq!(row[2], 1.0);
        assert_eq!(&row[3..7], [0.0; 4]);
        // Both players on Rock.
        assert_eq!(&row[7..12], Move::Rock.one_hot());
        assert_eq!(&row[12..17], Move::Rock.one_hot());
    }

    #[test]
    fn neutral_state_values() {
        assert_eq!(state_features(&Snapshot::neutral()), [1.0, 1.0, 0.0]);
    }

    #[test]
    fn real_round_row() {
        let snaps = build_snapshots(&[Round::new(Move::Dynamite, Move::Water)]);
        let row = history_features(&snaps[0]);
        assert_eq!(row[0], 0.0);
        assert_eq!(row[1], 99.0 / 100.0);
        assert_eq!(row[2], 1.0);
        assert_eq!(row[3], 0.0);
        assert_eq!(row[4], 1.0 / 2500.0);
        assert_eq!(row[5], 1.0 / 2500.0);
        assert_eq!(row[6], 0.0);
        assert_eq!(&row[7..12], Move::Dynamite.one_hot());
        assert_eq!(&row[12..17], Move::Water.one_hot());
    }

    #[test]
    fn since_counters_clamped_to_one() {
        let mut snap = Snapshot::neutral();
        snap.p1.since_dynamite = GAME_LENGTH_CAP * 3;
        let row = history_features(&snap);
        assert_eq!(row[3], 1.0);
    }

    #[test]
    fn unknown_move_projects_zero_block() {
        let mut snap = Snapshot::neutral();
        snap.p1_move = None;
        let row = history_features(&snap);
        assert_eq!(&row[7..12], [0.0; 5]);
        assert_eq!(&row[12..17], Move::Rock.one_hot());
    }

    #[test]
    fn state_tracks_rollover_and_stock() {
        use Move::*;
        let snaps = build_snapshots(&[
            Round::new(Dynamite, Dynamite),
            Round::new(Dynamite, Dynamite),
        ]);
        let state = state_features(snaps.last().unwrap());
        assert_eq!(state[0], 98.0 / 100.0);
        assert_eq!(state[1], 98.0 / 100.0);
        assert_eq!(state[2], 2.0 / 1000.0);
    }
}
