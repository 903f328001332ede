//! Facade crate for Plume.
//! Re-exports the configuration types, the schema engine and the FALL3D catalog.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `plume` (the `profiles` feature is on by default).
//! - Call [`init`] once at startup and pass the catalog by reference from there on.

use std::sync::Arc;

pub use plume_domain as domain;
pub use plume_kernel as kernel;
pub use plume_schema as schema;

use plume_domain::config::PlumeConfig;
use plume_schema::{Catalog, SchemaError};

/// Feature crates and their build-time switches.
pub mod features {
    pub use plume_fall3d as fall3d;
    #[cfg(feature = "profiles")]
    pub use plume_profiles as profiles;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "fall3d",
        #[cfg(feature = "profiles")]
        "profiles",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Builds the section catalog shared by every document of this process.
///
/// # Errors
/// Returns an error if a section schema or override table is inconsistent.
pub fn init(config: &PlumeConfig) -> Result<Arc<Catalog>, SchemaError> {
    let catalog = features::fall3d::fall3d_catalog()?;
    tracing::info!(
        sections = catalog.len(),
        features = ?features::ENABLED,
        section_headers = config.render.section_headers,
        "plume initialized"
    );
    Ok(Arc::new(catalog))
}
