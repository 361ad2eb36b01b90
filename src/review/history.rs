//! Annotated edit history with undo/redo.
//!
//! The review workflow only talks to [`HistoryLog`]; [`EditHistory`] is the
//! in-crate log used by the controller. Accept annotations are counted with
//! a running total so quota checks do not rescan the log, and accepts that
//! fall off the undo limit stay counted.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::annotation::{Annotation, AnnotationKind};
use super::candidate::{FeatureId, Provider};

/// Dataset scope for an edit, resolved from the candidate's provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphHandle {
    pub provider: Provider,
    pub dataset_id: Option<String>,
}

/// Dataset edit carried by a history entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    /// Copy the candidate from its source graph into the base dataset.
    AcceptFeature {
        feature_id: FeatureId,
        graph: GraphHandle,
    },
    /// Leaves the dataset untouched; only the annotation is recorded.
    Noop,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub op: EditOp,
    pub annotation: Annotation,
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Feature {0} is already part of the edit history")]
    AlreadyAccepted(FeatureId),
    #[error("Failed to serialize history: {0}")]
    Serialize(serde_json::Error),
    #[error("Invalid saved history: {0}")]
    Parse(serde_json::Error),
}

/// Append-only, undo-aware log of annotated edits.
pub trait HistoryLog {
    /// Apply `op` and record `annotation` as one undoable step.
    fn perform(&mut self, op: EditOp, annotation: Annotation) -> Result<(), HistoryError>;

    /// Annotations of the applied (not undone) steps, oldest first.
    fn annotations(&self) -> Vec<&Annotation>;

    fn count(&self, kind: AnnotationKind) -> usize {
        self.annotations()
            .iter()
            .filter(|annotation| annotation.kind == kind)
            .count()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SavedHistory {
    stack: Vec<HistoryEntry>,
    #[serde(default)]
    retired_accepts: usize,
}

pub struct EditHistory {
    undo: VecDeque<HistoryEntry>,
    redo: VecDeque<HistoryEntry>,
    limit: usize,
    live_accepts: usize,
    retired_accepts: usize,
}

impl EditHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: VecDeque::new(),
            limit: limit.max(1),
            live_accepts: 0,
            retired_accepts: 0,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Revert the newest step, returning its annotation.
    pub fn undo(&mut self) -> Option<Annotation> {
        let entry = self.undo.pop_back()?;
        if entry.annotation.is_accept() {
            self.live_accepts -= 1;
        }
        let annotation = entry.annotation.clone();
        self.redo.push_back(entry);
        Some(annotation)
    }

    /// Re-apply the most recently undone step.
    pub fn redo(&mut self) -> Option<Annotation> {
        let entry = self.redo.pop_back()?;
        let annotation = entry.annotation.clone();
        self.push_applied(entry);
        Some(annotation)
    }

    /// Features copied into the base dataset by applied steps.
    pub fn accepted_features(&self) -> Vec<&FeatureId> {
        self.undo
            .iter()
            .filter_map(|entry| match &entry.op {
                EditOp::AcceptFeature { feature_id, .. } => Some(feature_id),
                EditOp::Noop => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.undo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }

    /// Serialize applied steps; the redo branch is not kept.
    pub fn to_json(&self) -> Result<String, HistoryError> {
        let saved = SavedHistory {
            stack: self.undo.iter().cloned().collect(),
            retired_accepts: self.retired_accepts,
        };
        serde_json::to_string(&saved).map_err(HistoryError::Serialize)
    }

    pub fn from_json(json: &str, limit: usize) -> Result<Self, HistoryError> {
        let saved: SavedHistory = serde_json::from_str(json).map_err(HistoryError::Parse)?;
        let mut history = Self::new(limit);
        history.retired_accepts = saved.retired_accepts;
        for entry in saved.stack {
            history.push_applied(entry);
        }
        Ok(history)
    }

    fn push_applied(&mut self, entry: HistoryEntry) {
        if entry.annotation.is_accept() {
            self.live_accepts += 1;
        }
        self.undo.push_back(entry);
        while self.undo.len() > self.limit {
            if let Some(evicted) = self.undo.pop_front()
                && evicted.annotation.is_accept()
            {
                self.live_accepts -= 1;
                self.retired_accepts += 1;
            }
        }
    }
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new(crate::config::HistorySettings::default().undo_limit)
    }
}

impl HistoryLog for EditHistory {
    fn perform(&mut self, op: EditOp, annotation: Annotation) -> Result<(), HistoryError> {
        if let EditOp::AcceptFeature { feature_id, .. } = &op
            && self.accepted_features().contains(&feature_id)
        {
            return Err(HistoryError::AlreadyAccepted(feature_id.clone()));
        }
        self.redo.clear();
        self.push_applied(HistoryEntry { op, annotation });
        Ok(())
    }

    fn annotations(&self) -> Vec<&Annotation> {
        self.undo.iter().map(|entry| &entry.annotation).collect()
    }

    fn count(&self, kind: AnnotationKind) -> usize {
        match kind {
            AnnotationKind::Accept => self.live_accepts + self.retired_accepts,
            AnnotationKind::Reject => self
                .undo
                .iter()
                .filter(|entry| entry.annotation.kind == AnnotationKind::Reject)
                .count(),
        }
    }
}
