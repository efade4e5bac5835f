//! Rendering utilities for human-facing surfaces (Markdown).

#![forbid(unsafe_code)]

mod markdown;
mod model;

pub use markdown::render_markdown;
pub use model::{RenderableAcknow, RenderableList};
