//! Candidate features and the accept/reject decision pipeline.

pub mod annotation;
pub mod candidate;
pub mod history;
pub mod workflow;

pub use annotation::{Annotation, AnnotationKind};
pub use candidate::{CandidateFeature, FeatureId, Provider};
pub use history::{EditHistory, EditOp, GraphHandle, HistoryEntry, HistoryError, HistoryLog};
pub use workflow::{
    Accepted, FeatureService, FeatureServices, ProviderService, ReviewEnv, ReviewError,
    ReviewQuota, ReviewWorkflow,
};
