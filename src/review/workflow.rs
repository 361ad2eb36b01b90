//! Accept/reject decisions for a single candidate.

use thiserror::Error;

use super::annotation::{Annotation, AnnotationKind};
use super::candidate::{CandidateFeature, FeatureId, Provider};
use super::history::{EditOp, GraphHandle, HistoryError, HistoryLog};
use crate::config::QuotaSettings;
use crate::session::SessionState;

/// Source of suggestion graphs for one provider.
pub trait FeatureService {
    fn graph(&self, dataset_id: Option<&str>) -> GraphHandle;
}

/// Service that simply scopes edits to its provider and the requested dataset.
#[derive(Clone, Copy, Debug)]
pub struct ProviderService(pub Provider);

impl FeatureService for ProviderService {
    fn graph(&self, dataset_id: Option<&str>) -> GraphHandle {
        GraphHandle {
            provider: self.0,
            dataset_id: dataset_id.map(str::to_string),
        }
    }
}

/// The two suggestion services behind one capability.
pub struct FeatureServices {
    pub ml_roads: Box<dyn FeatureService>,
    pub esri: Box<dyn FeatureService>,
}

impl FeatureServices {
    pub fn for_provider(&self, provider: Provider) -> &dyn FeatureService {
        match provider {
            Provider::Esri => self.esri.as_ref(),
            Provider::MlRoads => self.ml_roads.as_ref(),
        }
    }
}

impl Default for FeatureServices {
    fn default() -> Self {
        Self {
            ml_roads: Box::new(ProviderService(Provider::MlRoads)),
            esri: Box::new(ProviderService(Provider::Esri)),
        }
    }
}

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("No candidate is selected")]
    NoCandidate,
    #[error("You can accept up to {limit} suggested features per session")]
    QuotaExceeded { limit: usize },
    #[error(transparent)]
    History(#[from] HistoryError),
}

/// Snapshot of the accept quota.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReviewQuota {
    pub accepted: usize,
    /// `None` in task mode.
    pub limit: Option<usize>,
}

impl ReviewQuota {
    pub fn is_exhausted(&self) -> bool {
        self.limit.is_some_and(|limit| self.accepted >= limit)
    }

    pub fn remaining(&self) -> Option<usize> {
        self.limit.map(|limit| limit.saturating_sub(self.accepted))
    }
}

/// Result of a successful accept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accepted {
    /// Feature to select in the base dataset.
    pub select: FeatureId,
    /// Show the first-edit advisory to an anonymous editor.
    pub first_edit_advisory: bool,
}

/// Collaborators a decision touches.
pub struct ReviewEnv<'a> {
    pub history: &'a mut dyn HistoryLog,
    pub services: &'a FeatureServices,
    pub session: &'a mut SessionState,
    pub authenticated: bool,
}

#[derive(Clone, Debug)]
pub struct ReviewWorkflow {
    limit: usize,
}

impl ReviewWorkflow {
    pub fn new(settings: &QuotaSettings) -> Self {
        Self {
            limit: settings.accept_limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Quota is read from the history at call time, never cached.
    pub fn quota(&self, history: &dyn HistoryLog, session: &SessionState) -> ReviewQuota {
        ReviewQuota {
            accepted: history.count(AnnotationKind::Accept),
            limit: (!session.task_mode).then_some(self.limit),
        }
    }

    pub fn accept_disabled(&self, history: &dyn HistoryLog, session: &SessionState) -> bool {
        self.quota(history, session).is_exhausted()
    }

    /// Tooltip for the accept control.
    pub fn accept_hint(&self, history: &dyn HistoryLog, session: &SessionState) -> String {
        if self.accept_disabled(history, session) {
            format!(
                "You have reached the limit of {} accepted features for this session.",
                self.limit
            )
        } else {
            "Add this feature to the map.".to_string()
        }
    }

    /// Copy the candidate into the base dataset.
    ///
    /// The quota check and the history append happen under the same
    /// exclusive borrow of the history.
    pub fn accept(
        &self,
        candidate: Option<&CandidateFeature>,
        env: &mut ReviewEnv<'_>,
    ) -> Result<Accepted, ReviewError> {
        let candidate = candidate.ok_or(ReviewError::NoCandidate)?;
        let quota = self.quota(&*env.history, env.session);
        if quota.is_exhausted() {
            tracing::info!(
                "Accept of {} blocked: {} of {} used",
                candidate.id,
                quota.accepted,
                self.limit
            );
            return Err(ReviewError::QuotaExceeded { limit: self.limit });
        }

        let graph = env
            .services
            .for_provider(candidate.provider)
            .graph(candidate.dataset_id.as_deref());
        env.history.perform(
            EditOp::AcceptFeature {
                feature_id: candidate.id.clone(),
                graph,
            },
            Annotation::accept(candidate),
        )?;
        tracing::info!(
            "Accepted {} (origin {}, {:?})",
            candidate.id,
            candidate.origin_id,
            candidate.provider
        );

        let mut accepted = Accepted {
            select: candidate.id.clone(),
            first_edit_advisory: false,
        };
        if env.session.in_intro {
            return Ok(accepted);
        }
        if let Some(source) = candidate.source_tag() {
            env.session.record_attribution(source);
        }
        accepted.first_edit_advisory = self.take_first_edit_advisory(env);
        Ok(accepted)
    }

    /// Record a rejection without touching the dataset. Never quota-limited.
    pub fn reject(
        &self,
        candidate: Option<&CandidateFeature>,
        env: &mut ReviewEnv<'_>,
    ) -> Result<(), ReviewError> {
        let candidate = candidate.ok_or(ReviewError::NoCandidate)?;
        env.history
            .perform(EditOp::Noop, Annotation::reject(candidate))?;
        tracing::info!("Rejected {} (origin {})", candidate.id, candidate.origin_id);
        Ok(())
    }

    fn take_first_edit_advisory(&self, env: &mut ReviewEnv<'_>) -> bool {
        env.session.acknowledge_login() && !env.authenticated
    }
}
