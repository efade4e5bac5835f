//! Stable DTOs shared across the acknow workspace.
//!
//! This crate is intentionally boring:
//! - the normalized acknowledgement model every source decodes into
//! - the decoder trait that lets sources be composed
//! - serde/schemars derives so the model is the emitted JSON contract

#![forbid(unsafe_code)]

pub mod acknow;
pub mod decoder;

pub use acknow::{Acknow, AcknowList};
pub use decoder::AcknowDecoder;
