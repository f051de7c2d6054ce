//! Dynamite bot engine library.
//!
//! Exposes the move vocabulary, the shared history encoder, prediction,
//! and the online/offline adapters for use by integration tests and the
//! binary entry points.

pub mod bot;
pub mod dataset;
pub mod encoder;
pub mod game;
pub mod predict;
