use crate::{SCHEMA_CONFIG_V1, model::AcknowConfigV1};
use acknow_package::VersionCheck;
use anyhow::Context;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Markdown,
}

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub version_check: Option<String>,
    pub format: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub version_check: VersionCheck,
    pub format: OutputFormat,
    pub header_text: Option<String>,
    pub footer_text: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: AcknowConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let mut effective = EffectiveConfig::default();

    if let Some(v) = overrides.version_check.or(cfg.version_check) {
        effective.version_check = parse_version_check(&v).context("invalid version_check")?;
    }
    if let Some(f) = overrides.format.or(cfg.format) {
        effective.format = parse_format(&f).context("invalid format")?;
    }

    // Blank text counts as unset.
    effective.header_text = cfg.header.filter(|h| !h.trim().is_empty());
    effective.footer_text = cfg.footer.filter(|f| !f.trim().is_empty());

    Ok(ResolvedConfig { effective })
}

fn parse_version_check(v: &str) -> anyhow::Result<VersionCheck> {
    match v {
        "lenient" => Ok(VersionCheck::Lenient),
        "strict" => Ok(VersionCheck::Strict),
        other => anyhow::bail!("unknown version check: {other} (expected lenient|strict)"),
    }
}

fn parse_format(v: &str) -> anyhow::Result<OutputFormat> {
    match v {
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        other => anyhow::bail!("unknown format: {other} (expected json|markdown)"),
    }
}
