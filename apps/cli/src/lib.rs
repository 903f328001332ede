//! # Plume CLI
//!
//! Thin operator tool around the schema engine: renders the FALL3D document (with an
//! optional values file applied), lists sections and shows per-field form entries.
//! Command handlers write to any [`Write`] so they stay testable without a terminal.

pub mod args;
pub mod values;

use crate::args::{Command, RenderArgs};
use anyhow::{Context, Result};
use plume::domain::config::RenderConfig;
use plume::schema::{Catalog, ConfigurationDocument, FormEntry};
use std::io::Write;
use tracing::info;

/// Dispatches one parsed subcommand.
///
/// # Errors
/// Propagates I/O failures and rejected values or section tags.
pub fn run(command: Command, catalog: &Catalog, render: &RenderConfig, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Render(args) => render_document(catalog, render, &args, out),
        Command::Sections => list_sections(catalog, out),
        Command::Fields { tag, json } => list_fields(catalog, &tag, json, out),
    }
}

/// `plume render`.
///
/// # Errors
/// Fails on unreadable or rejected values, an unknown `--section` or a write error.
pub fn render_document(
    catalog: &Catalog,
    config: &RenderConfig,
    args: &RenderArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let mut document = ConfigurationDocument::create(catalog);
    if let Some(path) = &args.values {
        let values = values::load(path)?;
        values::apply(&mut document, &values).context("Rejected values")?;
    }

    let text = match &args.section {
        Some(tag) => document.render_section_with(tag, config)?,
        None => document.render_with(config),
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text).with_context(|| format!("Cannot write {}", path.display()))?;
            info!(path = %path.display(), bytes = text.len(), "input file written");
        },
        None => out.write_all(text.as_bytes())?,
    }
    Ok(())
}

/// `plume sections`.
///
/// # Errors
/// Fails only on write errors.
pub fn list_sections(catalog: &Catalog, out: &mut dyn Write) -> Result<()> {
    let width = catalog.entries().map(|e| e.tag().len()).max().unwrap_or_default();
    for entry in catalog {
        writeln!(out, "{:<width$}  {}", entry.tag(), entry.description())?;
    }
    Ok(())
}

/// `plume fields TAG`.
///
/// # Errors
/// Fails on an unknown tag or a write error.
pub fn list_fields(catalog: &Catalog, tag: &str, json: bool, out: &mut dyn Write) -> Result<()> {
    let section = catalog.entry(tag)?.instantiate();
    let entries: Vec<FormEntry> = section.form_entries().collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    for entry in &entries {
        let variable = match &entry.block {
            Some(block) => format!("{block}/{}", entry.variable),
            None => entry.variable.clone(),
        };
        write!(out, "{:<4} {variable} ({}) = {}", entry.key, entry.kind, entry.display)?;
        if !entry.choices.is_empty() {
            write!(out, " [{}]", entry.choices.join("|"))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
