//! TOML value files: one table per section tag, field keys mapped to form input.
//!
//! ```toml
//! [GRID]
//! f8 = true
//! f9 = 0.05
//!
//! [TIME_UTC]
//! f1 = 2021-09-19
//! ```

use anyhow::{Context, Result, bail};
use plume::schema::ConfigurationDocument;
use std::path::Path;
use tracing::debug;

/// Assignments for one section, as textual form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionValues {
    pub tag: String,
    pub entries: Vec<(String, String)>,
}

/// Parses a values document.
///
/// # Errors
/// Fails on malformed TOML, top-level keys outside a table, and arrays or nested tables
/// as field values.
pub fn parse(text: &str) -> Result<Vec<SectionValues>> {
    let table: toml::Table = text.parse().context("Values file is not valid TOML")?;

    let mut sections = Vec::with_capacity(table.len());
    for (tag, body) in table {
        let toml::Value::Table(body) = body else {
            bail!("`{tag}` must be a [SECTION] table");
        };
        let mut entries = Vec::with_capacity(body.len());
        for (key, value) in body {
            let text = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => format!("{f:?}"),
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Datetime(d) => d.to_string(),
                toml::Value::Array(_) | toml::Value::Table(_) => {
                    bail!("`{tag}.{key}` must be a scalar value");
                },
            };
            entries.push((key, text));
        }
        sections.push(SectionValues { tag, entries });
    }
    Ok(sections)
}

/// # Errors
/// Fails when the file cannot be read or parsed.
pub fn load(path: &Path) -> Result<Vec<SectionValues>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read values file {}", path.display()))?;
    parse(&text).with_context(|| format!("In {}", path.display()))
}

/// Feeds every entry through the section's text parser.
///
/// # Errors
/// Stops at the first unknown section or rejected value.
pub fn apply(document: &mut ConfigurationDocument, values: &[SectionValues]) -> Result<()> {
    for section in values {
        let target = document.section_mut(&section.tag)?;
        target.update_from(section.entries.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
        debug!(section = %section.tag, fields = section.entries.len(), "values applied");
    }
    Ok(())
}
