//! The ordered registry of section kinds a document is assembled from.

use crate::error::SchemaError;
use crate::overrides::{OverrideTable, OverrideTableBuilder};
use crate::schema::SectionSchema;
use crate::section::Section;
use std::sync::Arc;

/// One section kind: its schema and the override rules bound to it.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    schema: Arc<SectionSchema>,
    overrides: Arc<OverrideTable>,
}

impl CatalogEntry {
    #[must_use]
    pub fn tag(&self) -> &str {
        self.schema.tag()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        self.schema.description()
    }

    #[must_use]
    pub fn schema(&self) -> &Arc<SectionSchema> {
        &self.schema
    }

    #[must_use]
    pub fn overrides(&self) -> &Arc<OverrideTable> {
        &self.overrides
    }

    /// A fresh section of this kind at default values.
    #[must_use]
    pub fn instantiate(&self) -> Section {
        Section::new(Arc::clone(&self.schema), Arc::clone(&self.overrides))
    }
}

/// Fixed, ordered registry of section kinds.
///
/// Built once at startup and passed by reference; documents created from it share the
/// schemas and override tables.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn entries(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// # Errors
    /// Returns [`SchemaError::UnknownSection`] if no entry carries `tag`.
    pub fn entry(&self, tag: &str) -> Result<&CatalogEntry, SchemaError> {
        self.entries.iter().find(|e| e.tag() == tag).ok_or_else(|| SchemaError::UnknownSection {
            message: tag.to_owned().into(),
            context: Some("catalog".into()),
        })
    }
}

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: Vec<CatalogEntry>,
}

impl CatalogBuilder {
    /// Registers a section kind; registration order is document order.
    ///
    /// # Errors
    /// - [`SchemaError::DuplicateSection`] if the tag is already registered.
    /// - [`SchemaError::InvalidSchema`] if an override targets an undeclared variable.
    pub fn section(
        mut self,
        schema: SectionSchema,
        overrides: OverrideTableBuilder,
    ) -> Result<Self, SchemaError> {
        if self.entries.iter().any(|e| e.tag() == schema.tag()) {
            return Err(SchemaError::DuplicateSection {
                message: schema.tag().to_owned().into(),
                context: Some("catalog".into()),
            });
        }
        let overrides = overrides.build(&schema)?;
        self.entries.push(CatalogEntry { schema: Arc::new(schema), overrides: Arc::new(overrides) });
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> Catalog {
        Catalog { entries: self.entries }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldSpec;

    fn schema(tag: &'static str) -> SectionSchema {
        SectionSchema::builder(tag, "test")
            .field(FieldSpec::integer("f1", "N", 1))
            .build()
            .expect("valid schema")
    }

    #[test]
    fn keeps_registration_order() -> Result<(), SchemaError> {
        let catalog = Catalog::builder()
            .section(schema("B"), OverrideTable::builder())?
            .section(schema("A"), OverrideTable::builder())?
            .build();
        let tags: Vec<&str> = catalog.entries().map(CatalogEntry::tag).collect();
        assert_eq!(tags, ["B", "A"]);
        Ok(())
    }

    #[test]
    fn duplicate_tags_are_rejected() -> Result<(), SchemaError> {
        let err = Catalog::builder()
            .section(schema("GRID"), OverrideTable::builder())?
            .section(schema("GRID"), OverrideTable::builder())
            .expect_err("duplicate");
        assert!(matches!(err, SchemaError::DuplicateSection { .. }));
        Ok(())
    }

    #[test]
    fn unknown_tag_lookup_fails() {
        let catalog = Catalog::default();
        assert!(matches!(catalog.entry("GRID"), Err(SchemaError::UnknownSection { .. })));
    }
}
