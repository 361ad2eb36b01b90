use std::collections::{HashMap, HashSet};

use super::ReviewController;
use crate::config::ReviewSettings;
use crate::geometry::Extent;
use crate::hotkeys::HotkeyAction;
use crate::imagery::{Source, StaticCatalog};
use crate::mode::{Behavior, ModeKind, Presentation};
use crate::review::{CandidateFeature, FeatureId, Provider};
use crate::session::SessionState;
use crate::storage::MemoryStore;

/// Presentation double that records every call.
#[derive(Debug, Default)]
pub(crate) struct RecordingPresentation {
    pub rendered: HashSet<FeatureId>,
    pub selected: Option<FeatureId>,
    pub combobox_open: bool,
    pub installed: Vec<Behavior>,
    pub bound: HashMap<ModeKind, Vec<HotkeyAction>>,
    pub sidebar_visible: bool,
    pub sidebar_candidate: Option<FeatureId>,
    pub sidebar_covers: bool,
    pub hide_calls: usize,
    pub expand_calls: usize,
    pub last_expand_avoided: Option<bool>,
    pub zoomed: Vec<Extent>,
}

impl Presentation for RecordingPresentation {
    fn is_rendered(&self, id: &FeatureId) -> bool {
        self.rendered.contains(id)
    }

    fn set_selected(&mut self, id: &FeatureId) {
        self.selected = Some(id.clone());
    }

    fn clear_selected(&mut self) {
        self.selected = None;
    }

    fn combobox_open(&self) -> bool {
        self.combobox_open
    }

    fn install(&mut self, behavior: Behavior) {
        self.installed.push(behavior);
    }

    fn uninstall(&mut self, behavior: Behavior) {
        if let Some(index) = self.installed.iter().position(|b| *b == behavior) {
            self.installed.remove(index);
        }
    }

    fn bind_keys(&mut self, mode: ModeKind, actions: &[HotkeyAction]) {
        self.bound.insert(mode, actions.to_vec());
    }

    fn unbind_keys(&mut self, mode: ModeKind) {
        self.bound.remove(&mode);
    }

    fn show_sidebar(&mut self, candidate: &CandidateFeature) {
        self.sidebar_visible = true;
        self.sidebar_candidate = Some(candidate.id.clone());
    }

    fn hide_sidebar(&mut self) {
        self.sidebar_visible = false;
        self.sidebar_candidate = None;
        self.hide_calls += 1;
    }

    fn expand_sidebar(&mut self, avoid_obscuring: bool) {
        self.expand_calls += 1;
        self.last_expand_avoided = Some(avoid_obscuring);
    }

    fn sidebar_intersects(&self, _extent: &Extent) -> bool {
        self.sidebar_covers
    }

    fn zoom_to(&mut self, extent: &Extent) {
        self.zoomed.push(*extent);
    }
}

pub(crate) fn candidate(id: &str) -> CandidateFeature {
    CandidateFeature::new(
        id,
        format!("origin-{id}"),
        Provider::MlRoads,
        Extent::new([0.0, 0.0], [0.01, 0.01]),
    )
}

pub(crate) fn imagery() -> StaticCatalog {
    StaticCatalog::new(vec![
        Source::new("Bing", "Bing aerial").best().with_area(900.0),
        Source::new("Esri", "Esri World Imagery").with_area(800.0),
        Source::new("Mapbox", "Mapbox Satellite").with_area(700.0),
        Source::new("Labels", "Locator overlay").overlay(),
    ])
}

pub(crate) fn controller_with(
    settings: &ReviewSettings,
    session: SessionState,
) -> ReviewController<RecordingPresentation> {
    ReviewController::new(
        RecordingPresentation::default(),
        Box::new(imagery()),
        Box::new(MemoryStore::new()),
        settings,
        session,
    )
}

pub(crate) fn controller() -> ReviewController<RecordingPresentation> {
    controller_with(&ReviewSettings::default(), SessionState::new())
}

/// Controller reviewing a rendered candidate `id`.
pub(crate) fn reviewing(id: &str) -> ReviewController<RecordingPresentation> {
    let mut controller = controller();
    controller
        .presentation_mut()
        .rendered
        .insert(FeatureId::new(id));
    assert!(controller.select_candidate(Some(candidate(id))));
    controller
}
