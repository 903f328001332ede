//! Declarative section schemas and the namelist renderer.
//!
//! A [`SectionSchema`] is an ordered list of [`FieldSpec`]s. Fields sharing a
//! `(variable, block)` pair form one composite variable and are written on one line:
//!
//! ```rust
//! use plume_schema::prelude::*;
//! use std::sync::Arc;
//!
//! let schema = SectionSchema::builder("GRID", "computational domain")
//!     .field(FieldSpec::float("f3", "LONMIN", 14.0))
//!     .field(FieldSpec::float("f5", "LATMIN", 36.5))
//!     .field(FieldSpec::string("f1", "HORIZONTAL_MAPPING", "SPHERICAL").block("MAPPING"))
//!     .build()?;
//! let grid = Section::new(Arc::new(schema), Arc::new(OverrideTable::empty()));
//!
//! assert_eq!(
//!     grid.render(),
//!     "   LONMIN = 14.0\n   LATMIN = 36.5\n\n   MAPPING\n      HORIZONTAL_MAPPING = SPHERICAL"
//! );
//! # Ok::<(), SchemaError>(())
//! ```
//!
//! Per-kind formatting exceptions live in an [`OverrideTable`]; a [`Catalog`] binds each
//! schema to its table and a [`ConfigurationDocument`] instantiates the whole catalog.

pub mod catalog;
pub mod document;
pub mod error;
pub mod field;
pub mod grouping;
pub mod overrides;
pub mod render;
pub mod schema;
pub mod section;

pub use catalog::{Catalog, CatalogBuilder, CatalogEntry};
pub use document::ConfigurationDocument;
pub use error::{SchemaError, SchemaErrorExt};
pub use field::{FieldId, FieldKind, FieldRef, FieldSpec, FieldValue, FormEntry, NO_DATA};
pub use grouping::{Group, GroupKey, GroupingIndex};
pub use overrides::{OverrideRule, OverrideTable, OverrideTableBuilder, rules};
pub use schema::{SectionSchema, SectionSchemaBuilder};
pub use section::Section;

pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::document::ConfigurationDocument;
    pub use crate::error::{SchemaError, SchemaErrorExt};
    pub use crate::field::{FieldKind, FieldSpec, FieldValue};
    pub use crate::grouping::GroupKey;
    pub use crate::overrides::{OverrideRule, OverrideTable, rules};
    pub use crate::schema::SectionSchema;
    pub use crate::section::Section;
}
