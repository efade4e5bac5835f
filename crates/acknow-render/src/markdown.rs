use crate::{RenderableAcknow, RenderableList};

pub fn render_markdown(list: &RenderableList) -> String {
    let mut out = String::new();

    out.push_str("# Acknowledgements\n\n");
    if let Some(header) = &list.header_text {
        out.push_str(&format!("{}\n\n", header.trim_end()));
    }

    if list.acknowledgements.is_empty() {
        out.push_str("No acknowledgements.\n");
    }

    for acknow in &list.acknowledgements {
        render_acknow(&mut out, acknow);
    }

    if let Some(footer) = &list.footer_text {
        out.push_str(&format!("\n---\n\n{}\n", footer.trim_end()));
    }

    out
}

fn render_acknow(out: &mut String, acknow: &RenderableAcknow) {
    out.push_str(&format!("## {}\n\n", acknow.title));

    let mut meta = Vec::new();
    if let Some(version) = &acknow.version {
        meta.push(format!("- Version: `{}`", version));
    }
    if let Some(revision) = &acknow.revision {
        meta.push(format!("- Revision: `{}`", revision));
    }
    if let Some(repository) = &acknow.repository {
        meta.push(format!("- Repository: <{}>", repository));
    }
    if let Some(license) = &acknow.license {
        meta.push(format!("- License: {}", license));
    }
    if !meta.is_empty() {
        out.push_str(&meta.join("\n"));
        out.push_str("\n\n");
    }

    if let Some(text) = &acknow.text {
        out.push_str(&format!("{}\n\n", text.trim_end()));
    }
}
