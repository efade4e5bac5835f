//! The `decode` use case: decode lock files and assemble one acknowledgement list.

use acknow_package::{LockSchema, PackageLockDecoder};
use acknow_settings::{Overrides, ResolvedConfig};
use acknow_types::AcknowList;
use anyhow::Context;

/// One lock file handed to the use case.
#[derive(Clone, Debug)]
pub struct LockSource {
    /// Human-readable origin (usually the file path), used in errors and logs.
    pub label: String,
    pub data: Vec<u8>,
}

/// Input for the decode use case.
#[derive(Clone, Debug)]
pub struct DecodeInput<'a> {
    /// Lock files, in output order.
    pub sources: Vec<LockSource>,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// What was recognized in one source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSummary {
    pub label: String,
    pub schema: LockSchema,
    pub version: i64,
    pub entries: usize,
}

/// Output from the decode use case.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pub list: AcknowList,
    pub sources: Vec<SourceSummary>,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the decode use case: resolve config, decode every source, aggregate.
///
/// The first source that fails to decode aborts the run; its label is in the error chain.
pub fn run_decode(input: DecodeInput<'_>) -> anyhow::Result<DecodeOutput> {
    let cfg = if input.config_text.trim().is_empty() {
        acknow_settings::AcknowConfigV1::default()
    } else {
        acknow_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved = acknow_settings::resolve_config(cfg, input.overrides).context("resolve config")?;

    let decoder = PackageLockDecoder::new().with_version_check(resolved.effective.version_check);

    let mut lists = Vec::with_capacity(input.sources.len());
    let mut sources = Vec::with_capacity(input.sources.len());
    for source in input.sources {
        let decoded = decoder
            .decode_detailed(&source.data)
            .with_context(|| format!("decode {}", source.label))?;
        tracing::info!(
            source = %source.label,
            schema = %decoded.schema,
            entries = decoded.list.len(),
            "decoded lock file"
        );
        sources.push(SourceSummary {
            label: source.label,
            schema: decoded.schema,
            version: decoded.version,
            entries: decoded.list.len(),
        });
        lists.push(decoded.list);
    }

    let list = aggregate(
        lists,
        resolved.effective.header_text.clone(),
        resolved.effective.footer_text.clone(),
    );

    Ok(DecodeOutput {
        list,
        sources,
        resolved_config: resolved,
    })
}

/// Concatenate lists in order and attach header/footer text.
///
/// Entries are kept as-is: duplicates across sources are not merged.
pub fn aggregate(
    lists: impl IntoIterator<Item = AcknowList>,
    header_text: Option<String>,
    footer_text: Option<String>,
) -> AcknowList {
    let acknowledgements = lists
        .into_iter()
        .flat_map(|list| list.acknowledgements)
        .collect();
    AcknowList {
        header_text,
        acknowledgements,
        footer_text,
    }
}
