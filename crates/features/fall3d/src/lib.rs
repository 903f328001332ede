//! # FALL3D input catalog
//!
//! The nine sections of a FALL3D `.inp` file, their documented defaults and the
//! formatting exceptions each section applies on top of the plain `VAR = value` line.
//!
//! ```rust
//! use plume_fall3d::{Fall3dSection, fall3d_catalog};
//! use plume_schema::ConfigurationDocument;
//!
//! let catalog = fall3d_catalog()?;
//! let mut document = ConfigurationDocument::create(&catalog);
//!
//! let grid = document.section_mut(Fall3dSection::Grid.tag())?;
//! grid.set("f8", true)?;
//! assert!(document.render().contains("   NX = RESOLUTION 0.1"));
//! # Ok::<(), plume_schema::SchemaError>(())
//! ```

mod sections;

use plume_schema::{Catalog, OverrideTable, OverrideTableBuilder, SchemaError, SectionSchema};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::debug;

/// Section kinds of a FALL3D input file, in file order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Fall3dSection {
    TimeUtc,
    MeteoData,
    Grid,
    Species,
    TephraTgsd,
    ParticleAggregation,
    Source,
    ModelPhysics,
    ModelOutput,
}

impl Fall3dSection {
    /// Block name used in the file and as the document lookup tag.
    #[must_use]
    pub fn tag(self) -> &'static str {
        self.into()
    }

    /// Field declarations of this section.
    ///
    /// # Errors
    /// Returns [`SchemaError::InvalidSchema`] only if the declarations are inconsistent.
    pub fn schema(self) -> Result<SectionSchema, SchemaError> {
        match self {
            Self::TimeUtc => sections::time_utc(),
            Self::MeteoData => sections::meteo_data(),
            Self::Grid => sections::grid(),
            Self::Species => sections::species(),
            Self::TephraTgsd => sections::tephra_tgsd(),
            Self::ParticleAggregation => sections::particle_aggregation(),
            Self::Source => sections::source(),
            Self::ModelPhysics => sections::model_physics(),
            Self::ModelOutput => sections::model_output(),
        }
    }

    /// Override rules bound to this section.
    #[must_use]
    pub fn overrides(self) -> OverrideTableBuilder {
        match self {
            Self::TimeUtc => sections::time_utc_overrides(),
            Self::Grid => sections::grid_overrides(),
            Self::ParticleAggregation => sections::particle_aggregation_overrides(),
            Self::Source => sections::source_overrides(),
            Self::ModelPhysics => sections::model_physics_overrides(),
            Self::ModelOutput => sections::model_output_overrides(),
            Self::MeteoData | Self::Species | Self::TephraTgsd => OverrideTable::builder(),
        }
    }
}

/// Builds the FALL3D catalog. Call once at startup and share the result by reference.
///
/// # Errors
/// Propagates schema or override-table validation failures.
pub fn fall3d_catalog() -> Result<Catalog, SchemaError> {
    let catalog = Fall3dSection::iter()
        .try_fold(Catalog::builder(), |builder, kind| builder.section(kind.schema()?, kind.overrides()))?
        .build();
    debug!(sections = catalog.len(), "fall3d catalog built");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn tags_are_screaming_snake_case() {
        assert_eq!(Fall3dSection::TimeUtc.tag(), "TIME_UTC");
        assert_eq!(Fall3dSection::TephraTgsd.to_string(), "TEPHRA_TGSD");
        assert_eq!(
            Fall3dSection::from_str("PARTICLE_AGGREGATION").ok(),
            Some(Fall3dSection::ParticleAggregation)
        );
        assert!(Fall3dSection::from_str("particle_aggregation").is_err());
    }

    #[test]
    fn catalog_follows_file_order() {
        let catalog = fall3d_catalog().expect("catalog builds");
        let tags: Vec<&str> = catalog.entries().map(|e| e.tag()).collect();
        let expected: Vec<&str> = Fall3dSection::iter().map(Fall3dSection::tag).collect();
        assert_eq!(tags, expected);
        assert_eq!(tags.len(), 9);
    }

    #[test]
    fn every_section_declares_fields() {
        for kind in Fall3dSection::iter() {
            let schema = kind.schema().expect("valid schema");
            assert_eq!(schema.tag(), kind.tag());
            assert!(!schema.fields().is_empty(), "{kind} has no fields");
            assert!(!schema.description().is_empty());
        }
    }
}
