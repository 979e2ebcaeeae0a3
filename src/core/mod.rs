//! Core building blocks: filename derivation, code cleanup, and run parameters.
//! These are pure helpers consumed by the batch pass in the `api` module.
pub mod content;
pub mod filename;
pub mod params;
