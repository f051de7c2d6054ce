//! Next-move prediction.
//!
//! Two predictors share the encoder's output: the ONNX transformer
//! (compiled in with the `neural` feature) and a frequency heuristic used
//! whenever no model is available.

pub mod frequency;
pub mod neural;

pub use frequency::FrequencyPredictor;
pub use neural::NeuralPredictor;
