//! Fixed-shape window assembly for model input.
//!
//! The model always receives exactly `window_size` history rows, whatever
//! the real match length: short histories are left-padded with the neutral
//! row, long ones are truncated to the most recent rounds. The fixed shape
//! is what lets one exported model serve matches of any length.

use super::features::{history_features, state_features, FEATURE_SIZE, STATE_SIZE};
use super::snapshot::Snapshot;

/// Default number of most-recent rounds fed to the model.
pub const WINDOW_SIZE: usize = 50;

/// Model input for one prediction: `window_size` history rows (row-major,
/// [`FEATURE_SIZE`] wide) plus one compact state vector.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedWindow {
    pub history: Vec<f32>,
    pub state: [f32; STATE_SIZE],
    pub window_size: usize,
}

impl EncodedWindow {
    /// History rows as `window_size` slices of [`FEATURE_SIZE`].
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.history.chunks_exact(FEATURE_SIZE)
    }
}

/// Encodes the last `window_size` snapshots as seen from the end of the
/// sequence.
///
/// Padding is always on the left (oldest position), so row
/// `window_size - 1` holds the most recent real round, or the neutral row
/// for an empty match. The state vector is projected from the most recent
/// real snapshot, never from padding. An empty sequence is valid
/// start-of-match input and produces an all-neutral window.
pub fn encode_window(snapshots: &[Snapshot], window_size: usize) -> EncodedWindow {
    let neutral = Snapshot::neutral();
    let neutral_row = history_features(&neutral);

    let real = &snapshots[snapshots.len().saturating_sub(window_size)..];
    let pad = window_size - real.len();

    let mut history = Vec::with_capacity(window_size * FEATURE_SIZE);
    for _ in 0..pad {
        history.extend_from_slice(&neutral_row);
    }
    for snap in real {
        history.extend_from_slice(&history_features(snap));
    }

    let state = state_features(snapshots.last().unwrap_or(&neutral));

    EncodedWindow {
        history,
        state,
        window_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::build_snapshots;
    use crate::game::{Move, Round};

    fn alternating(len: usize) -> Vec<Round> {
        (0..len)
            .map(|i| {
                if i % 2 == 0 {
                    Round::new(Move::Rock, Move::Paper)
                } else {
                    Round::new(Move::Scissors, Move::Water)
                }
            })
            .collect()
    }

    #[test]
    fn empty_history_is_all_neutral() {
        let window = encode_window(&[], 10);
        assert_eq!(window.history.len(), 10 * FEATURE_SIZE);

        let neutral_row = history_features(&Snapshot::neutral());
        for row in window.rows() {
            assert_eq!(row, neutral_row);
        }
        assert_eq!(window.state, state_features(&Snapshot::neutral()));
    }

    #[test]
    fn short_history_left_pads() {
        let snaps = build_snapshots(&alternating(3));
        let window = encode_window(&snaps, 8);

        let neutral_row = history_features(&Snapshot::neutral());
        let rows: Vec<&[f32]> = window.rows().collect();
        assert_eq!(rows.len(), 8);
        for row in &rows[..5] {
            assert_eq!(*row, neutral_row);
        }
        for (row, snap) in rows[5..].iter().zip(snaps.iter()) {
            assert_eq!(*row, history_features(snap));
        }
    }

    #[test]
    fn long_history_keeps_last_window() {
        let snaps = build_snapshots(&alternating(20));
        let window = encode_window(&snaps, 8);

        let rows: Vec<&[f32]> = window.rows().collect();
        assert_eq!(rows.len(), 8);
        for (row, snap) in rows.iter().zip(snaps[12..].iter()) {
            assert_eq!(*row, history_features(snap));
        }
    }

    #[test]
    fn last_row_is_most_recent_round() {
        let snaps = build_snapshots(&alternating(5));
        let window = encode_window(&snaps, 8);
        let rows: Vec<&[f32]> = window.rows().collect();
        assert_eq!(rows[7], history_features(&snaps[4]));
    }

    #[test]
    fn state_comes_from_last_real_snapshot() {
        let snaps = build_snapshots(&alternating(3));
        let window = encode_window(&snaps, 50);
        assert_eq!(window.state, state_features(&snaps[2]));
    }

    #[test]
    fn exact_fit_has_no_padding() {
        let snaps = build_snapshots(&alternating(8));
        let window = encode_window(&snaps, 8);
        for (row, snap) in window.rows().zip(snaps.iter()) {
            assert_eq!(row, history_features(snap));
        }
    }
}
