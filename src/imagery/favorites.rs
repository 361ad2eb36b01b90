use std::collections::{BTreeMap, BTreeSet};

use super::source::SourceId;
use crate::storage::{KeyValueStore, StorageKey, set_or_warn};

/// Source ids the user starred, persisted as `{"id": true}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: BTreeSet<SourceId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &SourceId) -> bool {
        self.ids.contains(id)
    }

    /// Flip membership; returns true when `id` is now a favorite.
    pub fn toggle(&mut self, id: &SourceId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceId> {
        self.ids.iter()
    }

    pub fn to_json(&self) -> String {
        let map: BTreeMap<&str, bool> = self.ids.iter().map(|id| (id.as_str(), true)).collect();
        serde_json::to_string(&map).unwrap_or_else(|_| "{}".to_string())
    }

    /// Entries mapped to `false` are dropped.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let map: BTreeMap<String, bool> = serde_json::from_str(json)?;
        Ok(Self {
            ids: map
                .into_iter()
                .filter(|(_, starred)| *starred)
                .map(|(id, _)| SourceId::from_string(id))
                .collect(),
        })
    }

    /// Read the stored set; a malformed payload yields an empty set.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let Some(raw) = store.get(StorageKey::BackgroundFavorites) else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(set) => set,
            Err(err) => {
                tracing::warn!("Ignoring malformed background favorites: {err}");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        set_or_warn(store, StorageKey::BackgroundFavorites, self.to_json());
    }
}
