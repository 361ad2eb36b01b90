use serde::{Deserialize, Serialize};

use super::candidate::{CandidateFeature, FeatureId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationKind {
    Accept,
    Reject,
}

/// Audit record attached to one history entry.
///
/// Serialized with the rest of the undo state, so field names are stable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(rename = "type")]
    pub kind: AnnotationKind,
    pub description: String,
    #[serde(rename = "id")]
    pub feature_id: FeatureId,
    #[serde(rename = "origid")]
    pub origin_id: String,
}

impl Annotation {
    pub fn accept(candidate: &CandidateFeature) -> Self {
        Self {
            kind: AnnotationKind::Accept,
            description: "Accepted a suggested feature.".to_string(),
            feature_id: candidate.id.clone(),
            origin_id: candidate.origin_id.clone(),
        }
    }

    pub fn reject(candidate: &CandidateFeature) -> Self {
        Self {
            kind: AnnotationKind::Reject,
            description: "Rejected a suggested feature.".to_string(),
            feature_id: candidate.id.clone(),
            origin_id: candidate.origin_id.clone(),
        }
    }

    pub fn is_accept(&self) -> bool {
        self.kind == AnnotationKind::Accept
    }
}
