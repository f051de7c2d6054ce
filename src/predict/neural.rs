//! Transformer inference via ONNX Runtime.
//!
//! Loads the exported move-prediction model and runs it on encoded windows
//! using the `ort` crate. The model takes a history tensor `[1, W, F]` and
//! a state tensor `[1, S]` (row-major f32) and returns one score per move
//! in vocabulary order. When compiled without the `neural` feature, or
//! when no model loads, prediction returns None and callers fall back to
//! the frequency heuristic.

#[cfg(feature = "neural")]
use ort::session::{builder::GraphOptimizationLevel, Session};
#[cfg(feature = "neural")]
use std::sync::Mutex;

use crate::encoder::EncodedWindow;
#[cfg(feature = "neural")]
use crate::encoder::{FEATURE_SIZE, STATE_SIZE};
use crate::game::{Move, MOVE_COUNT};

/// ONNX-backed move predictor.
pub struct NeuralPredictor {
    #[cfg(feature = "neural")]
    session: Option<Mutex<Session>>,
    #[allow(dead_code)]
    window_size: usize,
}

impl NeuralPredictor {
    /// Creates a predictor, loading the ONNX model from `path`.
    ///
    /// A missing or unloadable model leaves the predictor empty and is
    /// reported to stderr; inference then returns None. A model whose
    /// declared input shapes contradict the configured window size (or
    /// the feature and state widths) is rejected here, at load time,
    /// rather than failing on every prediction.
    pub fn new(path: Option<&str>, window_size: usize) -> Self {
        #[cfg(feature = "neural")]
        {
            let session = path
                .and_then(|p| load_session(p, window_size))
                .map(Mutex::new);
            if session.is_some() {
                eprintln!("info string Loaded ONNX move model");
            }
            NeuralPredictor {
                session,
                window_size,
            }
        }

        #[cfg(not(feature = "neural"))]
        {
            let _ = path;
            NeuralPredictor { window_size }
        }
    }

    /// Returns true if a model is loaded.
    pub fn has_model(&self) -> bool {
        #[cfg(feature = "neural")]
        {
            self.session.is_some()
        }
        #[cfg(not(feature = "neural"))]
        {
            false
        }
    }

    /// Runs the model on one encoded window and returns per-move scores in
    /// vocabulary order.
    ///
    /// Returns None if no model is loaded, the window was assembled for a
    /// different size than this predictor was configured with, or
    /// inference fails.
    pub fn scores(&self, window: &EncodedWindow) -> Option<[f32; MOVE_COUNT]> {
        #[cfg(feature = "neural")]
        {
            if window.window_size != self.window_size {
                return None;
            }
            let mutex = self.session.as_ref()?;
            let mut session = mutex.lock().ok()?;
            run_inference(&mut session, window)
        }

        #[cfg(not(feature = "neural"))]
        {
            let _ = window;
            None
        }
    }

    /// Runs the model and returns the arg-max move.
    pub fn predict(&self, window: &EncodedWindow) -> Option<Move> {
        let scores = self.scores(window)?;
        Move::from_index(arg_max(&scores))
    }
}

/// Index of the maximum score. Ties go to the lower index.
fn arg_max(scores: &[f32; MOVE_COUNT]) -> usize {
    let mut best = 0;
    for (i, &score) in scores.iter().enumerate() {
        if score > scores[best] {
            best = i;
        }
    }
    best
}

/// Loads an ONNX session from a file path and checks its declared input
/// shapes against the configured window. Returns None on failure.
#[cfg(feature = "neural")]
fn load_session(path: &str, window_size: usize) -> Option<Session> {
    let session = match Session::builder()
        .and_then(|b| b.with_optimization_level(GraphOptimizationLevel::Level3))
        .and_then(|b| b.with_intra_threads(4))
        .and_then(|b| b.commit_from_file(path))
    {
        Ok(session) => session,
        Err(e) => {
            eprintln!("info string Failed to load ONNX model {}: {}", path, e);
            return None;
        }
    };
    if !input_shapes_match(&session, window_size) {
        eprintln!(
            "info string Model {} input shapes do not match [1, {}, {}] / [1, {}]; ignoring it",
            path, window_size, FEATURE_SIZE, STATE_SIZE
        );
        return None;
    }
    Some(session)
}

/// Checks the session's declared inputs: a history tensor
/// `[batch, window, features]` and a state tensor `[batch, state]`.
#[cfg(feature = "neural")]
fn input_shapes_match(session: &Session, window_size: usize) -> bool {
    let inputs = session.inputs();
    if inputs.len() < 2 {
        return false;
    }
    let history_ok = inputs[0]
        .dtype()
        .tensor_shape()
        .map_or(false, |shape| {
            dims_match(&shape[..], &[1, window_size, FEATURE_SIZE])
        });
    let state_ok = inputs[1]
        .dtype()
        .tensor_shape()
        .map_or(false, |shape| dims_match(&shape[..], &[1, STATE_SIZE]));
    history_ok && state_ok
}

/// Compares declared ONNX dims against expected ones. A negative declared
/// dim is dynamic and matches anything.
#[cfg(feature = "neural")]
fn dims_match(declared: &[i64], expected: &[usize]) -> bool {
    declared.len() == expected.len()
        && declared
            .iter()
            .zip(expected)
            .all(|(&d, &e)| d < 0 || d as usize == e)
}

/// Runs single-window inference.
#[cfg(feature = "neural")]
fn run_inference(session: &mut Session, window: &EncodedWindow) -> Option<[f32; MOVE_COUNT]> {
    use ort::value::Value;

    let history_tensor = Value::from_array((
        [1, window.window_size, FEATURE_SIZE],
        window.history.clone(),
    ))
    .ok()?;
    let state_tensor = Value::from_array(([1, STATE_SIZE], window.state.to_vec())).ok()?;

    let outputs = session
        .run(ort::inputs![history_tensor, state_tensor])
        .ok()?;

    let (_shape, data) = outputs[0].try_extract_tensor::<f32>().ok()?;
    if data.len() < MOVE_COUNT {
        return None;
    }
    let mut scores = [0.0f32; MOVE_COUNT];
    scores.copy_from_slice(&data[..MOVE_COUNT]);
    Some(scores)
}
