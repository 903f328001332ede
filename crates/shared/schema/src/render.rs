//! Namelist layout: composite variables become `VAR = ...` lines, top-level lines come
//! first and each block follows under its own header.

use crate::grouping::GroupKey;
use crate::section::Section;
use tracing::trace;

/// Indentation of top-level lines and block headers.
pub const INDENT: &str = "   ";
/// Indentation of lines inside a block.
pub const BLOCK_INDENT: &str = "      ";

/// Text of one composite variable, possibly spanning several lines.
///
/// The section's override rule for `key` wins when it yields non-empty text; otherwise
/// the member fields are formatted and joined by single spaces after `VAR = `.
///
/// # Panics
/// Panics when `key` has no fields in the section.
#[must_use]
pub fn compose(section: &Section, key: &GroupKey) -> String {
    if let Some(rule) = section.overrides().get(key) {
        match rule.apply(section, key) {
            Some(text) if !text.is_empty() => {
                trace!(section = section.tag(), variable = %key, rule = rule.name(), "override applied");
                return text;
            },
            _ => trace!(section = section.tag(), variable = %key, rule = rule.name(), "override fell through"),
        }
    }

    let values: Vec<String> = section.group(key).iter().map(|field| field.format()).collect();
    format!("{} = {}", key.variable(), values.join(" "))
}

pub(crate) fn render_section(section: &Section) -> String {
    let mut top = Vec::new();
    let mut blocks: Vec<(&str, Vec<String>)> = Vec::new();

    for group in section.schema().index() {
        let key = group.key();
        let text = compose(section, key);
        let (indent, sink) = match key.block() {
            None => (INDENT, &mut top),
            Some(name) => {
                let slot = match blocks.iter().position(|(b, _)| *b == name) {
                    Some(slot) => slot,
                    None => {
                        blocks.push((name, Vec::new()));
                        blocks.len() - 1
                    },
                };
                (BLOCK_INDENT, &mut blocks[slot].1)
            },
        };
        sink.extend(text.lines().map(|line| format!("{indent}{line}")));
    }

    let mut out = top;
    for (name, lines) in blocks {
        out.push(String::new());
        out.push(format!("{INDENT}{name}"));
        out.extend(lines);
    }
    out.join("\n")
}
