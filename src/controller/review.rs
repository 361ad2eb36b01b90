use super::ReviewController;
use crate::docs::{ClickAction, DocsError, TagDocs, TagQuery, TagReference};
use crate::mode::{ActiveMode, Presentation, Transition};
use crate::notices::StatusMessage;
use crate::review::{
    Accepted, Annotation, CandidateFeature, FeatureId, ReviewEnv, ReviewError, ReviewQuota,
};

impl<P: Presentation> ReviewController<P> {
    /// Start reviewing a candidate picked on the map. `None` is ignored.
    pub fn select_candidate(&mut self, candidate: Option<CandidateFeature>) -> bool {
        let id = candidate.as_ref().map(|candidate| candidate.id.clone());
        self.tag_references.clear();
        let entered = self.selection.enter(
            candidate,
            &mut self.presentation,
            &mut self.bus,
            &mut self.session,
        );
        if let Some(id) = id.filter(|_| entered) {
            self.mode = ActiveMode::SelectCandidate(id);
        }
        entered
    }

    /// The candidate under review, if any.
    pub fn candidate(&self) -> Option<&CandidateFeature> {
        self.selection.candidate()
    }

    pub fn selected_ids(&self) -> Vec<FeatureId> {
        match &self.mode {
            ActiveMode::SelectBase(ids) => ids.clone(),
            _ => self.selection.selected_ids(),
        }
    }

    pub fn quota(&self) -> ReviewQuota {
        self.workflow.quota(&self.history, &self.session)
    }

    pub fn accept_disabled(&self) -> bool {
        self.workflow.accept_disabled(&self.history, &self.session)
    }

    pub fn accept_hint(&self) -> String {
        self.workflow.accept_hint(&self.history, &self.session)
    }

    /// Accept the candidate under review.
    ///
    /// On success the accepted feature becomes the base-dataset selection.
    /// A blocked accept posts a notice and leaves every state untouched.
    pub fn accept_candidate(&mut self) -> Result<Accepted, ReviewError> {
        let mut env = ReviewEnv {
            history: &mut self.history,
            services: &self.services,
            session: &mut self.session,
            authenticated: self.authenticated,
        };
        let result = self.workflow.accept(self.selection.candidate(), &mut env);
        match &result {
            Ok(accepted) => {
                let select = accepted.select.clone();
                if accepted.first_edit_advisory {
                    self.notify(StatusMessage::FirstEditAdvisory);
                }
                self.apply_transition(Transition::SelectBase(select));
            }
            Err(ReviewError::QuotaExceeded { limit }) => {
                let limit = *limit;
                self.notify(StatusMessage::QuotaExceeded { limit });
            }
            Err(ReviewError::NoCandidate) => {}
            Err(err) => tracing::warn!("Accept failed: {err}"),
        }
        result
    }

    /// Reject the candidate under review and return to browsing.
    pub fn reject_candidate(&mut self) -> Result<(), ReviewError> {
        let mut env = ReviewEnv {
            history: &mut self.history,
            services: &self.services,
            session: &mut self.session,
            authenticated: self.authenticated,
        };
        let result = self.workflow.reject(self.selection.candidate(), &mut env);
        match &result {
            Ok(()) => self.apply_transition(Transition::Browse),
            Err(ReviewError::NoCandidate) => {}
            Err(err) => tracing::warn!("Reject failed: {err}"),
        }
        result
    }

    pub fn escape(&mut self) {
        let transition = self.selection.escape(&self.presentation);
        self.apply_transition(transition);
    }

    /// Leave whatever mode is active for browsing. Safe to repeat.
    pub fn exit_to_browse(&mut self) {
        self.apply_transition(Transition::Browse);
    }

    pub fn zoom_to_selection(&mut self) -> bool {
        self.selection.zoom_to_selected(&mut self.presentation)
    }

    /// Undo the last decision and return to browsing.
    pub fn undo(&mut self) -> Option<Annotation> {
        let annotation = self.history.undo()?;
        tracing::info!("Undid {:?} of {}", annotation.kind, annotation.feature_id);
        self.apply_transition(Transition::Browse);
        Some(annotation)
    }

    pub fn redo(&mut self) -> Option<Annotation> {
        let annotation = self.history.redo()?;
        tracing::info!("Redid {:?} of {}", annotation.kind, annotation.feature_id);
        self.apply_transition(Transition::Browse);
        Some(annotation)
    }

    /// Click on the info button next to a tag of the candidate.
    pub fn tag_reference_click(&mut self, key: &str) -> ClickAction {
        let Some(candidate) = self.selection.candidate() else {
            return ClickAction::None;
        };
        let value = candidate.tags.get(key).cloned();
        let available = self.docs_available;
        self.tag_references
            .entry(key.to_string())
            .or_insert_with(|| TagReference::new(TagQuery::new(key, value), available))
            .click()
    }

    pub fn tag_reference_complete(&mut self, key: &str, result: Result<Option<TagDocs>, DocsError>) {
        if let Some(reference) = self.tag_references.get_mut(key) {
            reference.complete(result);
        }
    }

    pub fn tag_reference_image_loaded(&mut self, key: &str) {
        if let Some(reference) = self.tag_references.get_mut(key) {
            reference.image_loaded();
        }
    }

    pub fn tag_reference_image_failed(&mut self, key: &str) {
        if let Some(reference) = self.tag_references.get_mut(key) {
            reference.image_failed();
        }
    }

    pub fn tag_reference(&self, key: &str) -> Option<&TagReference> {
        self.tag_references.get(key)
    }

    pub(super) fn apply_transition(&mut self, transition: Transition) {
        let next = match transition {
            Transition::Stay => return,
            Transition::Browse => ActiveMode::Browse,
            Transition::SelectBase(id) => ActiveMode::SelectBase(vec![id]),
        };
        self.selection.exit(&mut self.presentation, &mut self.bus);
        self.tag_references.clear();
        if self.mode != next {
            tracing::debug!("Mode {:?} -> {:?}", self.mode.kind(), next.kind());
        }
        self.mode = next;
    }
}
