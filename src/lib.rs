//! Health metrics and nutrition calculation engine.
//!
//! `core` holds the pure calculations, `models` the records they operate on,
//! and `output` the JSON envelope and human formatting used by the CLI.

pub mod core;
pub mod error;
pub mod models;
pub mod output;
