use std::collections::HashSet;

use mapreview::geometry::{Extent, Viewport};
use mapreview::hotkeys::HotkeyAction;
use mapreview::imagery::{Source, StaticCatalog};
use mapreview::mode::{Behavior, ModeKind, Presentation};
use mapreview::review::{CandidateFeature, FeatureId, Provider};

/// Presentation without a surface: every candidate counts as drawn unless hidden.
#[derive(Debug, Default)]
pub struct HeadlessPresentation {
    pub hidden: HashSet<FeatureId>,
    pub selected: Option<FeatureId>,
    pub behaviors: Vec<Behavior>,
    pub bound_modes: Vec<ModeKind>,
    pub sidebar_open: bool,
    pub view: Option<Viewport>,
}

impl Presentation for HeadlessPresentation {
    fn is_rendered(&self, id: &FeatureId) -> bool {
        !self.hidden.contains(id)
    }

    fn set_selected(&mut self, id: &FeatureId) {
        self.selected = Some(id.clone());
    }

    fn clear_selected(&mut self) {
        self.selected = None;
    }

    fn combobox_open(&self) -> bool {
        false
    }

    fn install(&mut self, behavior: Behavior) {
        self.behaviors.push(behavior);
    }

    fn uninstall(&mut self, behavior: Behavior) {
        self.behaviors.retain(|installed| *installed != behavior);
    }

    fn bind_keys(&mut self, mode: ModeKind, _actions: &[HotkeyAction]) {
        self.bound_modes.push(mode);
    }

    fn unbind_keys(&mut self, mode: ModeKind) {
        self.bound_modes.retain(|bound| *bound != mode);
    }

    fn show_sidebar(&mut self, _candidate: &CandidateFeature) {
        self.sidebar_open = true;
    }

    fn hide_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    fn expand_sidebar(&mut self, _avoid_obscuring: bool) {}

    fn sidebar_intersects(&self, _extent: &Extent) -> bool {
        false
    }

    fn zoom_to(&mut self, extent: &Extent) {
        self.view = Some(Viewport::new(*extent, 18.0));
    }
}

pub fn road(id: &str, source: &str) -> CandidateFeature {
    CandidateFeature::new(
        id,
        format!("{id}-upstream"),
        Provider::from_tag(source),
        Extent::new([13.40, 52.51], [13.41, 52.52]),
    )
    .with_tag("highway", "residential")
    .with_tag("source", source)
}

pub fn catalog() -> StaticCatalog {
    StaticCatalog::new(vec![
        Source::new("Bing", "Bing aerial imagery").best().with_area(1000.0),
        Source::new("EsriWorldImagery", "Esri World Imagery").with_area(900.0),
        Source::new("Mapbox", "Mapbox Satellite").with_area(800.0),
        Source::new("OpenTopoMap", "OpenTopoMap").with_area(10.0),
        Source::new("Labels", "Locator overlay").overlay(),
    ])
}
