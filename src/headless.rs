//! Headless mode: one query or a full dump to stdout, no terminal UI.

use clap::ValueEnum;
use docseek_core::{render, writer, Matcher, Renderer, SearchIndex};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Run `query` and print the rendered groups. Zero matches is not an error.
pub fn search<W: Write>(
    index: &SearchIndex,
    matcher: &Matcher,
    renderer: &Renderer,
    query: &str,
    format: Format,
    mut out: W,
) -> anyhow::Result<()> {
    let hits = matcher.search(index, query);
    let groups = renderer.render(&hits);
    tracing::debug!(query, groups = groups.len(), "headless search");

    match format {
        Format::Text => out.write_all(render::to_text(&groups).as_bytes())?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &groups)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Write the loaded index back out, as `searchData` JS or as JSON.
pub fn dump<W: Write>(index: &SearchIndex, format: Format, mut out: W) -> anyhow::Result<()> {
    match format {
        Format::Text => writer::write_js(out, index.entries())?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &writer::to_json(index.entries()))?;
            writeln!(out)?;
            out.flush()?;
        }
    }
    Ok(())
}
