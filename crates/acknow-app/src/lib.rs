//! Use case orchestration for acknow.
//!
//! This crate provides the application layer: use cases that coordinate the decoder,
//! settings, and render layers. It is intentionally thin and performs no file IO.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod decode;
mod render;
mod schema;

pub use decode::{DecodeInput, DecodeOutput, LockSource, SourceSummary, aggregate, run_decode};
pub use render::{render_markdown, render_output, serialize_list, to_renderable};
pub use schema::list_schema_json;
