//! Match history -> tensor encoding for the move-prediction model.
//!
//! One shared implementation serves both call sites: the dataset builder
//! folds finished matches into per-round snapshots, and the live bot folds
//! the in-progress prefix. Both project the same snapshots through the
//! same feature formulas and the same window assembly, so training and
//! serving see bit-identical tensors for the same history.
//!
//! The normalization constants below are fixed system parameters shared
//! with every exported model; changing any of them invalidates previously
//! trained models.

pub mod features;
pub mod snapshot;
pub mod window;

pub use features::{history_features, state_features, FEATURE_SIZE, STATE_SIZE};
pub use snapshot::{build_snapshots, PlayerState, Snapshot};
pub use window::{encode_window, EncodedWindow, WINDOW_SIZE};

/// Starting dynamite stock per player.
pub const DYNAMITE_MAX: u32 = 100;

/// Rollover clamp, shared by accumulation and normalization.
pub const ROLLOVER_CAP: u32 = 1000;

/// Normalization cap for the since-last-move counters.
pub const GAME_LENGTH_CAP: u32 = 2500;
