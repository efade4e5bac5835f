use acknow_types::AcknowList;
use anyhow::Context;
use schemars::schema_for;

/// JSON schema of the emitted acknowledgement list, pretty-printed with a trailing newline.
pub fn list_schema_json() -> anyhow::Result<String> {
    let schema = schema_for!(AcknowList);
    let mut out = serde_json::to_string_pretty(&schema).context("serialize schema")?;
    out.push('\n');
    Ok(out)
}
