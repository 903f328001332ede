use crate::{EditFn, NewProfile, Profile, ProfileError, ProfileId, ProfileStore, ProfileSummary};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use plume_schema::{Catalog, ConfigurationDocument};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Default)]
struct Inner {
    profiles: FxHashMap<ProfileId, Profile>,
    order: Vec<ProfileId>,
    selected: Option<ProfileId>,
}

/// In-process [`ProfileStore`]: every profile lives behind one `RwLock`.
#[derive(Debug, Clone)]
pub struct MemoryProfileStore {
    catalog: Arc<Catalog>,
    inner: Arc<RwLock<Inner>>,
}

impl MemoryProfileStore {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog, inner: Arc::default() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().order.is_empty()
    }
}

fn not_found(id: &ProfileId) -> ProfileError {
    ProfileError::NotFound { message: id.to_string().into(), context: None }
}

impl ProfileStore for MemoryProfileStore {
    fn create(&self, profile: NewProfile) -> Result<ProfileId, ProfileError> {
        let title = profile.title.trim();
        if title.is_empty() {
            return Err(ProfileError::Invalid {
                message: "title cannot be empty".into(),
                context: Some("create".into()),
            });
        }

        let mut inner = self.inner.write();
        if inner.profiles.values().any(|p| p.title == title) {
            return Err(ProfileError::DuplicateTitle {
                message: title.to_owned().into(),
                context: Some("create".into()),
            });
        }

        let id = ProfileId::generate();
        let stored = Profile {
            id: id.clone(),
            title: title.to_owned(),
            description: profile.description.filter(|d| !d.trim().is_empty()),
            document: ConfigurationDocument::create(&self.catalog),
        };
        inner.profiles.insert(id.clone(), stored);
        inner.order.push(id.clone());

        info!(profile = %id, title, "profile created");
        Ok(id)
    }

    fn get(&self, id: &ProfileId) -> Result<Profile, ProfileError> {
        self.inner.read().profiles.get(id).cloned().ok_or_else(|| not_found(id))
    }

    fn list(&self) -> Vec<ProfileSummary> {
        let inner = self.inner.read();
        inner.order.iter().filter_map(|id| inner.profiles.get(id)).map(Profile::summary).collect()
    }

    fn apply(&self, id: &ProfileId, edit: &mut EditFn<'_>) -> Result<(), ProfileError> {
        let mut inner = self.inner.write();
        let profile = inner.profiles.get_mut(id).ok_or_else(|| not_found(id))?;

        let mut draft = profile.document.clone();
        edit(&mut draft).map_err(|source| ProfileError::Schema {
            source,
            context: Some(id.to_string().into()),
        })?;
        profile.document = draft;

        debug!(profile = %id, "profile document updated");
        Ok(())
    }

    fn delete(&self, id: &ProfileId) -> Result<Profile, ProfileError> {
        let mut inner = self.inner.write();
        let removed = inner.profiles.remove(id).ok_or_else(|| not_found(id))?;
        inner.order.retain(|other| other != id);
        if inner.selected.as_ref() == Some(id) {
            inner.selected = None;
        }

        info!(profile = %id, title = %removed.title, "profile deleted");
        Ok(removed)
    }

    fn render(&self, id: &ProfileId) -> Result<String, ProfileError> {
        let inner = self.inner.read();
        inner.profiles.get(id).map(|p| p.document.render()).ok_or_else(|| not_found(id))
    }

    fn select(&self, id: &ProfileId) -> Result<(), ProfileError> {
        let mut inner = self.inner.write();
        if !inner.profiles.contains_key(id) {
            return Err(not_found(id));
        }
        inner.selected = Some(id.clone());
        debug!(profile = %id, "profile selected");
        Ok(())
    }

    fn selected(&self) -> Option<ProfileId> {
        self.inner.read().selected.clone()
    }
}
