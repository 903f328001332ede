//! # Profiles
//!
//! A profile is a titled [`ConfigurationDocument`]: created from the catalog defaults,
//! edited in place through its store and dropped together with its document.
//!
//! [`ProfileStore`] is the seam towards persistence; [`MemoryProfileStore`] keeps
//! everything in process and serializes edits behind one lock. Stores also remember the
//! currently selected profile, the way an editing session does.

mod error;
mod memory;

pub use crate::error::{ProfileError, ProfileErrorExt};
pub use crate::memory::MemoryProfileStore;

use plume_schema::{ConfigurationDocument, SchemaError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, URL-safe profile identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    #[must_use]
    pub fn generate() -> Self {
        Self(plume_kernel::safe_nanoid!())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProfileId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Metadata submitted when a profile is created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewProfile {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewProfile {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), description: None }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A stored profile and its document.
#[derive(Debug, Clone)]
pub struct Profile {
    id: ProfileId,
    title: String,
    description: Option<String>,
    document: ConfigurationDocument,
}

impl Profile {
    #[must_use]
    pub const fn id(&self) -> &ProfileId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub const fn document(&self) -> &ConfigurationDocument {
        &self.document
    }

    #[must_use]
    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}

/// Listing row: a profile without its document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub id: ProfileId,
    pub title: String,
    pub description: Option<String>,
}

/// Persistence seam for profiles.
///
/// The trait is dyn-compatible, so a store can be shared as `Arc<dyn ProfileStore>`.
/// Implementations own the exclusive-access discipline: `apply` runs the edit with the
/// document borrowed mutably and nobody else observing it.
pub trait ProfileStore: Send + Sync {
    /// Creates a profile whose document holds the catalog defaults.
    ///
    /// # Errors
    /// [`ProfileError::Invalid`] for a blank title, [`ProfileError::DuplicateTitle`] when
    /// the title is taken.
    fn create(&self, profile: NewProfile) -> Result<ProfileId, ProfileError>;

    /// # Errors
    /// [`ProfileError::NotFound`] for an unknown id.
    fn get(&self, id: &ProfileId) -> Result<Profile, ProfileError>;

    /// Profiles in creation order.
    fn list(&self) -> Vec<ProfileSummary>;

    /// Runs `edit` once against the profile's document. The edit is all-or-nothing: when
    /// it fails the stored document is left untouched.
    ///
    /// # Errors
    /// [`ProfileError::NotFound`] for an unknown id, [`ProfileError::Schema`] when the edit
    /// fails.
    fn apply(&self, id: &ProfileId, edit: &mut EditFn<'_>) -> Result<(), ProfileError>;

    /// Typed front end to [`ProfileStore::apply`] that hands back the edit's result.
    ///
    /// # Errors
    /// Same as [`ProfileStore::apply`].
    fn update<R, F>(&self, id: &ProfileId, edit: F) -> Result<R, ProfileError>
    where
        Self: Sized,
        F: FnOnce(&mut ConfigurationDocument) -> Result<R, SchemaError>,
    {
        let mut edit = Some(edit);
        let mut output = None;
        self.apply(id, &mut |doc: &mut ConfigurationDocument| {
            let edit = edit.take().ok_or_else(|| SchemaError::from("profile edit ran twice"))?;
            output = Some(edit(doc)?);
            Ok(())
        })?;
        output.ok_or_else(|| ProfileError::from("profile edit did not run"))
    }

    /// Removes the profile and its document, clearing the selection if it pointed here.
    ///
    /// # Errors
    /// [`ProfileError::NotFound`] for an unknown id.
    fn delete(&self, id: &ProfileId) -> Result<Profile, ProfileError>;

    /// Namelist text of the profile's document.
    ///
    /// # Errors
    /// [`ProfileError::NotFound`] for an unknown id.
    fn render(&self, id: &ProfileId) -> Result<String, ProfileError>;

    /// Marks `id` as the current profile.
    ///
    /// # Errors
    /// [`ProfileError::NotFound`] for an unknown id.
    fn select(&self, id: &ProfileId) -> Result<(), ProfileError>;

    fn selected(&self) -> Option<ProfileId>;
}

/// Document edit accepted by [`ProfileStore::apply`].
pub type EditFn<'a> = dyn FnMut(&mut ConfigurationDocument) -> Result<(), SchemaError> + 'a;
