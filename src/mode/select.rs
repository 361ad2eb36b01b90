use super::{Behavior, ModeKind, Presentation, Transition};
use crate::events::{EventBus, RedrawCause, Subscriber, SubscriptionId, Topic};
use crate::hotkeys;
use crate::review::{CandidateFeature, FeatureId};
use crate::session::SessionState;

#[derive(Debug)]
struct ActiveReview {
    candidate: CandidateFeature,
    redraw: SubscriptionId,
}

/// Lifecycle of reviewing one candidate feature.
#[derive(Debug, Default)]
pub struct SelectionMode {
    active: Option<ActiveReview>,
}

impl SelectionMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn candidate(&self) -> Option<&CandidateFeature> {
        self.active.as_ref().map(|review| &review.candidate)
    }

    pub fn selected_ids(&self) -> Vec<FeatureId> {
        self.candidate()
            .map(|candidate| vec![candidate.id.clone()])
            .unwrap_or_default()
    }

    /// Start reviewing `candidate`, replacing any review in progress.
    pub fn enter(
        &mut self,
        candidate: Option<CandidateFeature>,
        presentation: &mut dyn Presentation,
        bus: &mut EventBus,
        session: &mut SessionState,
    ) -> bool {
        let Some(candidate) = candidate else {
            return false;
        };
        self.exit(presentation, bus);

        for behavior in Behavior::REVIEW {
            presentation.install(behavior);
        }
        presentation.bind_keys(
            ModeKind::SelectCandidate,
            &hotkeys::mode_actions(ModeKind::SelectCandidate),
        );
        if presentation.is_rendered(&candidate.id) {
            presentation.set_selected(&candidate.id);
        }
        presentation.show_sidebar(&candidate);
        if !session.sidebar_expanded_once {
            session.sidebar_expanded_once = true;
            let avoid_obscuring = presentation.sidebar_intersects(&candidate.extent);
            presentation.expand_sidebar(avoid_obscuring);
        }
        let redraw = bus.subscribe(Topic::Redrawn, Subscriber::SelectionMode);
        tracing::debug!("Reviewing candidate {}", candidate.id);
        self.active = Some(ActiveReview { candidate, redraw });
        true
    }

    /// Re-apply selection styling after a redraw, or give up when the
    /// candidate was panned out of view.
    pub fn reconcile_visibility(
        &self,
        drawn: bool,
        cause: RedrawCause,
        presentation: &mut dyn Presentation,
    ) -> Transition {
        let Some(candidate) = self.candidate() else {
            return Transition::Stay;
        };
        if presentation.is_rendered(&candidate.id) {
            presentation.set_selected(&candidate.id);
            return Transition::Stay;
        }
        if drawn && cause.is_pan() {
            tracing::debug!("Candidate {} left the view", candidate.id);
            return Transition::Browse;
        }
        Transition::Stay
    }

    pub fn escape(&self, presentation: &dyn Presentation) -> Transition {
        if !self.is_active() || presentation.combobox_open() {
            return Transition::Stay;
        }
        Transition::Browse
    }

    /// Tear down everything `enter` set up. Safe to call repeatedly.
    pub fn exit(
        &mut self,
        presentation: &mut dyn Presentation,
        bus: &mut EventBus,
    ) -> Option<CandidateFeature> {
        let review = self.active.take()?;
        for behavior in Behavior::REVIEW {
            presentation.uninstall(behavior);
        }
        presentation.unbind_keys(ModeKind::SelectCandidate);
        presentation.clear_selected();
        bus.unsubscribe(review.redraw);
        presentation.hide_sidebar();
        tracing::debug!("Stopped reviewing {}", review.candidate.id);
        Some(review.candidate)
    }

    pub fn zoom_to_selected(&self, presentation: &mut dyn Presentation) -> bool {
        match self.candidate() {
            Some(candidate) => {
                presentation.zoom_to(&candidate.extent);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::test_support::{RecordingPresentation, candidate};
    use crate::events::PointerGesture;

    fn enter(
        mode: &mut SelectionMode,
        view: &mut RecordingPresentation,
        bus: &mut EventBus,
        session: &mut SessionState,
        id: &str,
    ) {
        assert!(mode.enter(Some(candidate(id)), view, bus, session));
    }

    #[test]
    fn entering_twice_keeps_one_review() {
        let (mut mode, mut view, mut bus, mut session) = setup();
        enter(&mut mode, &mut view, &mut bus, &mut session, "w1");
        enter(&mut mode, &mut view, &mut bus, &mut session, "w2");
        assert_eq!(mode.selected_ids(), vec![FeatureId::new("w2")]);
        assert_eq!(view.installed.len(), Behavior::REVIEW.len());
        assert_eq!(bus.subscription_count(Subscriber::SelectionMode), 1);
        assert_eq!(view.expand_calls, 1);
    }

    #[test]
    fn exit_is_idempotent() {
        let (mut mode, mut view, mut bus, mut session) = setup();
        enter(&mut mode, &mut view, &mut bus, &mut session, "w1");
        assert!(mode.exit(&mut view, &mut bus).is_some());
        assert!(mode.exit(&mut view, &mut bus).is_none());
        assert!(view.installed.is_empty());
        assert!(view.bound.is_empty());
        assert!(!view.sidebar_visible);
        assert_eq!(view.hide_calls, 1);
        assert_eq!(bus.subscription_count(Subscriber::SelectionMode), 0);
        assert!(mode.selected_ids().is_empty());
    }

    #[test]
    fn entering_nothing_is_noop() {
        let (mut mode, mut view, mut bus, mut session) = setup();
        assert!(!mode.enter(None, &mut view, &mut bus, &mut session));
        assert!(view.installed.is_empty());
        assert!(!session.sidebar_expanded_once);
    }

    #[test]
    fn pan_away_exits_but_generic_redraw_does_not() {
        let (mut mode, mut view, mut bus, mut session) = setup();
        enter(&mut mode, &mut view, &mut bus, &mut session, "w1");
        view.rendered.clear();
        assert_eq!(
            mode.reconcile_visibility(true, RedrawCause::Generic, &mut view),
            Transition::Stay
        );
        assert_eq!(
            mode.reconcile_visibility(
                true,
                RedrawCause::Gesture(PointerGesture::Wheel),
                &mut view
            ),
            Transition::Stay
        );
        assert_eq!(
            mode.reconcile_visibility(
                false,
                RedrawCause::Gesture(PointerGesture::MouseMove),
                &mut view
            ),
            Transition::Stay
        );
        assert_eq!(
            mode.reconcile_visibility(
                true,
                RedrawCause::Gesture(PointerGesture::TouchMove),
                &mut view
            ),
            Transition::Browse
        );
    }

    #[test]
    fn rendered_candidate_is_restyled() {
        let (mut mode, mut view, mut bus, mut session) = setup();
        enter(&mut mode, &mut view, &mut bus, &mut session, "w1");
        view.selected = None;
        mode.reconcile_visibility(true, RedrawCause::Generic, &mut view);
        assert_eq!(view.selected, Some(FeatureId::new("w1")));
    }

    #[test]
    fn escape_waits_for_open_combobox() {
        let (mut mode, mut view, mut bus, mut session) = setup();
        assert_eq!(mode.escape(&view), Transition::Stay);
        enter(&mut mode, &mut view, &mut bus, &mut session, "w1");
        view.combobox_open = true;
        assert_eq!(mode.escape(&view), Transition::Stay);
        view.combobox_open = false;
        assert_eq!(mode.escape(&view), Transition::Browse);
    }

    #[test]
    fn sidebar_expands_once_per_session() {
        let (mut mode, mut view, mut bus, mut session) = setup();
        view.sidebar_covers = true;
        enter(&mut mode, &mut view, &mut bus, &mut session, "w1");
        mode.exit(&mut view, &mut bus);
        enter(&mut mode, &mut view, &mut bus, &mut session, "w2");
        assert_eq!(view.expand_calls, 1);
        assert_eq!(view.last_expand_avoided, Some(true));
    }

    #[test]
    fn zoom_needs_active_review() {
        let (mut mode, mut view, mut bus, mut session) = setup();
        assert!(!mode.zoom_to_selected(&mut view));
        enter(&mut mode, &mut view, &mut bus, &mut session, "w1");
        assert!(mode.zoom_to_selected(&mut view));
        assert_eq!(view.zoomed.len(), 1);
    }

    fn setup() -> (SelectionMode, RecordingPresentation, EventBus, SessionState) {
        let mut view = RecordingPresentation::default();
        view.rendered.insert(FeatureId::new("w1"));
        view.rendered.insert(FeatureId::new("w2"));
        (
            SelectionMode::new(),
            view,
            EventBus::new(),
            SessionState::new(),
        )
    }
}
