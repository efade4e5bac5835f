//! Render use cases: JSON and Markdown from an in-memory list.

use acknow_render::{RenderableAcknow, RenderableList};
use acknow_settings::OutputFormat;
use acknow_types::AcknowList;
use anyhow::Context;

pub fn to_renderable(list: &AcknowList) -> RenderableList {
    RenderableList {
        header_text: list.header_text.clone(),
        acknowledgements: list
            .acknowledgements
            .iter()
            .map(|a| RenderableAcknow {
                title: a.title.clone(),
                version: a.version.clone(),
                revision: a.revision.clone(),
                repository: a.repository.as_ref().map(|u| u.to_string()),
                license: a.license.clone(),
                text: a.text.clone(),
            })
            .collect(),
        footer_text: list.footer_text.clone(),
    }
}

pub fn render_markdown(list: &AcknowList) -> String {
    acknow_render::render_markdown(&to_renderable(list))
}

/// Pretty JSON with a trailing newline.
pub fn serialize_list(list: &AcknowList) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(list).context("serialize acknowledgements")?;
    out.push('\n');
    Ok(out)
}

pub fn render_output(list: &AcknowList, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => serialize_list(list),
        OutputFormat::Markdown => Ok(render_markdown(list)),
    }
}
