use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Extent;

/// Identifier of a feature, shared by suggestion layers and the base dataset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(String);

impl FeatureId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FeatureId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Service that produced a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// Machine-learned roads and buildings.
    MlRoads,
    /// Esri open datasets.
    Esri,
}

impl Provider {
    /// Anything that is not explicitly Esri is served by the ML service.
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("esri") {
            Provider::Esri
        } else {
            Provider::MlRoads
        }
    }
}

/// A machine-suggested feature awaiting a decision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateFeature {
    pub id: FeatureId,
    /// Identifier assigned by the upstream provider.
    pub origin_id: String,
    pub provider: Provider,
    /// Dataset within the provider service, when it hosts more than one.
    #[serde(default)]
    pub dataset_id: Option<String>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    pub extent: Extent,
}

impl CandidateFeature {
    pub fn new(
        id: impl Into<FeatureId>,
        origin_id: impl Into<String>,
        provider: Provider,
        extent: Extent,
    ) -> Self {
        Self {
            id: id.into(),
            origin_id: origin_id.into(),
            provider,
            dataset_id: None,
            tags: BTreeMap::new(),
            extent,
        }
    }

    pub fn with_dataset(mut self, dataset_id: impl Into<String>) -> Self {
        self.dataset_id = Some(dataset_id.into());
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Declared `source` tag, used for changeset attribution.
    pub fn source_tag(&self) -> Option<&str> {
        self.tags.get("source").map(String::as_str)
    }

    /// Key/value rows for the picker's tag preview.
    pub fn tag_preview(&self) -> Vec<(&str, &str)> {
        self.tags
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect()
    }
}

impl From<String> for FeatureId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
