//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::AcknowConfigV1;
pub use resolve::{EffectiveConfig, OutputFormat, Overrides, ResolvedConfig};

/// Stable schema identifier for `acknow.toml`.
pub const SCHEMA_CONFIG_V1: &str = "acknow.config.v1";

/// Parse `acknow.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<AcknowConfigV1> {
    let cfg: AcknowConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (defaults, then file values, then overrides).
pub fn resolve_config(cfg: AcknowConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
