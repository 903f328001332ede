//! Configuration documents: one section per catalog entry, rendered in order.

use crate::catalog::Catalog;
use crate::error::SchemaError;
use crate::section::Section;
use plume_domain::config::RenderConfig;
use tracing::{debug, instrument};

/// Separator between rendered sections: one blank line.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// The full set of sections for one profile, in catalog order.
#[derive(Debug, Clone)]
pub struct ConfigurationDocument {
    sections: Vec<Section>,
}

impl ConfigurationDocument {
    /// One section per catalog entry, each at its defaults.
    #[must_use]
    pub fn create(catalog: &Catalog) -> Self {
        let sections: Vec<Section> = catalog.entries().map(|entry| entry.instantiate()).collect();
        debug!(sections = sections.len(), "configuration document created");
        Self { sections }
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(Section::tag)
    }

    /// # Errors
    /// Returns [`SchemaError::UnknownSection`] if the document has no section `tag`.
    pub fn section(&self, tag: &str) -> Result<&Section, SchemaError> {
        self.sections.iter().find(|s| s.tag() == tag).ok_or_else(|| unknown(tag))
    }

    /// # Errors
    /// Returns [`SchemaError::UnknownSection`] if the document has no section `tag`.
    pub fn section_mut(&mut self, tag: &str) -> Result<&mut Section, SchemaError> {
        self.sections.iter_mut().find(|s| s.tag() == tag).ok_or_else(|| unknown(tag))
    }

    /// The namelist text: every section rendered in order, separated by a blank line.
    #[must_use]
    #[instrument(level = "debug", skip_all, fields(sections = self.sections.len()))]
    pub fn render(&self) -> String {
        let text = self.sections.iter().map(Section::render).collect::<Vec<_>>().join(SECTION_SEPARATOR);
        debug!(bytes = text.len(), "document rendered");
        text
    }

    /// # Errors
    /// Returns [`SchemaError::UnknownSection`] if the document has no section `tag`.
    #[instrument(level = "debug", skip(self))]
    pub fn render_section(&self, tag: &str) -> Result<String, SchemaError> {
        self.section(tag).map(Section::render)
    }

    /// [`render`](Self::render) with the layout knobs of `config` applied: optional
    /// column-0 section headers and a final newline.
    #[must_use]
    pub fn render_with(&self, config: &RenderConfig) -> String {
        let text = if config.section_headers {
            self.sections.iter().map(headed).collect::<Vec<_>>().join(SECTION_SEPARATOR)
        } else {
            self.render()
        };
        finish(text, config)
    }

    /// [`render_section`](Self::render_section) with the layout knobs of `config` applied.
    ///
    /// # Errors
    /// Returns [`SchemaError::UnknownSection`] if the document has no section `tag`.
    pub fn render_section_with(&self, tag: &str, config: &RenderConfig) -> Result<String, SchemaError> {
        let section = self.section(tag)?;
        let text = if config.section_headers { headed(section) } else { section.render() };
        Ok(finish(text, config))
    }

    /// Restores every section to its defaults.
    pub fn reset(&mut self) {
        self.sections.iter_mut().for_each(Section::reset);
    }
}

fn headed(section: &Section) -> String {
    format!("{}\n{}", section.tag(), section.render())
}

fn finish(mut text: String, config: &RenderConfig) -> String {
    if config.trailing_newline && !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

fn unknown(tag: &str) -> SchemaError {
    SchemaError::UnknownSection { message: tag.to_owned().into(), context: Some("document".into()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldSpec;
    use crate::overrides::OverrideTable;
    use crate::schema::SectionSchema;

    fn catalog() -> Catalog {
        let a = SectionSchema::builder("A", "first")
            .field(FieldSpec::integer("f1", "N", 1))
            .build()
            .expect("valid schema");
        let b = SectionSchema::builder("B", "second")
            .field(FieldSpec::boolean("f1", "FLAG", true))
            .build()
            .expect("valid schema");
        Catalog::builder()
            .section(a, OverrideTable::builder())
            .and_then(|c| c.section(b, OverrideTable::builder()))
            .expect("valid catalog")
            .build()
    }

    #[test]
    fn sections_are_joined_by_a_blank_line() {
        let document = ConfigurationDocument::create(&catalog());
        assert_eq!(document.render(), "   N = 1\n\n   FLAG = ON");
    }

    #[test]
    fn render_config_adds_headers_and_newline() {
        let document = ConfigurationDocument::create(&catalog());
        let config = RenderConfig { section_headers: true, trailing_newline: true };
        assert_eq!(document.render_with(&config), "A\n   N = 1\n\nB\n   FLAG = ON\n");

        let plain = RenderConfig { section_headers: false, trailing_newline: false };
        assert_eq!(document.render_with(&plain), document.render());
    }

    #[test]
    fn single_section_honours_render_config() -> Result<(), SchemaError> {
        let document = ConfigurationDocument::create(&catalog());
        let config = RenderConfig { section_headers: true, trailing_newline: true };
        assert_eq!(document.render_section_with("B", &config)?, "B\n   FLAG = ON\n");

        let plain = RenderConfig { section_headers: false, trailing_newline: false };
        assert_eq!(document.render_section_with("B", &plain)?, document.render_section("B")?);
        assert!(document.render_section_with("GRID", &plain).is_err());
        Ok(())
    }

    #[test]
    fn edits_are_scoped_to_one_document() -> Result<(), SchemaError> {
        let catalog = catalog();
        let mut edited = ConfigurationDocument::create(&catalog);
        let pristine = ConfigurationDocument::create(&catalog);

        edited.section_mut("B")?.set("f1", false)?;
        assert_eq!(edited.render_section("B")?, "   FLAG = OFF");
        assert_eq!(pristine.render_section("B")?, "   FLAG = ON");

        edited.reset();
        assert_eq!(edited.render(), pristine.render());
        Ok(())
    }

    #[test]
    fn unknown_section_is_reported() {
        let document = ConfigurationDocument::create(&catalog());
        let err = document.render_section("GRID").expect_err("not in catalog");
        assert_eq!(err.to_string(), "Unknown section (document): GRID");
    }
}
