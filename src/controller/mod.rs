//! Owner of all review state and the single path through which it mutates.
//!
//! The host feeds input (candidate picks, hotkeys, map events, clock ticks)
//! into [`ReviewController`] and reads back rows, notices and the active
//! mode. Every mutation takes `&mut self`, so quota checks, history appends
//! and persisted background choices never interleave.

mod backgrounds;
mod dispatch;
mod layers;
mod review;

#[cfg(test)]
pub(crate) mod test_support;
#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::config::ReviewSettings;
use crate::debounce::Debouncer;
use crate::docs::TagReference;
use crate::events::{EventBus, Subscriber, Topic};
use crate::geometry::Viewport;
use crate::imagery::{BackgroundRow, BackgroundSelector, GridOptions, ListFilter, SourceCatalog};
use crate::layers::{LayerToggleController, ToggleRow};
use crate::mode::{ActiveMode, Presentation, SelectionMode};
use crate::notices::{Notice, NoticeBoard, StatusMessage};
use crate::review::{EditHistory, FeatureServices, ReviewWorkflow};
use crate::session::SessionState;
use crate::storage::KeyValueStore;

/// Rows shown by the background pane and layer panel.
#[derive(Clone, Debug, Default)]
pub struct PanelRows {
    pub backgrounds: Vec<BackgroundRow>,
    pub overlays: Vec<BackgroundRow>,
    pub layers: Vec<ToggleRow>,
}

pub struct ReviewController<P: Presentation> {
    presentation: P,
    store: Box<dyn KeyValueStore>,
    services: FeatureServices,
    history: EditHistory,
    session: SessionState,
    bus: EventBus,
    mode: ActiveMode,
    selection: SelectionMode,
    workflow: ReviewWorkflow,
    backgrounds: BackgroundSelector,
    layers: LayerToggleController,
    grid: GridOptions,
    notices: NoticeBoard,
    background_refresh: Debouncer,
    layer_refresh: Debouncer,
    rows: PanelRows,
    viewport: Viewport,
    background_pane_open: bool,
    custom_editor_open: bool,
    authenticated: bool,
    docs_available: bool,
    tag_references: BTreeMap<String, TagReference>,
}

impl<P: Presentation> ReviewController<P> {
    /// Build a controller and restore persisted background state from `store`.
    pub fn new(
        presentation: P,
        catalog: Box<dyn SourceCatalog>,
        store: Box<dyn KeyValueStore>,
        settings: &ReviewSettings,
        session: SessionState,
    ) -> Self {
        let mut backgrounds = BackgroundSelector::new(catalog);
        backgrounds.restore(&*store);

        let mut bus = EventBus::new();
        bus.subscribe(Topic::ViewportChanged, Subscriber::BackgroundPane);
        bus.subscribe(Topic::CatalogChanged, Subscriber::BackgroundPane);
        bus.subscribe(Topic::ViewportChanged, Subscriber::LayerPanel);
        bus.subscribe(Topic::TaskExtentSet, Subscriber::LayerPanel);

        let mut controller = Self {
            presentation,
            store,
            services: FeatureServices::default(),
            history: EditHistory::new(settings.history.undo_limit),
            session,
            bus,
            mode: ActiveMode::Browse,
            selection: SelectionMode::new(),
            workflow: ReviewWorkflow::new(&settings.review),
            backgrounds,
            layers: LayerToggleController::new(&settings.layers),
            grid: GridOptions::default(),
            notices: NoticeBoard::new(settings.review.notice_duration()),
            background_refresh: Debouncer::new(Duration::from_millis(
                settings.background.refresh_debounce_ms,
            )),
            layer_refresh: Debouncer::new(Duration::from_millis(
                settings.layers.refresh_debounce_ms,
            )),
            rows: PanelRows::default(),
            viewport: Viewport::default(),
            background_pane_open: false,
            custom_editor_open: false,
            authenticated: false,
            docs_available: true,
            tag_references: BTreeMap::new(),
        };
        controller.refresh_background_rows();
        controller.refresh_layer_rows();
        tracing::info!(
            "Review controller ready (task mode: {}, accept limit: {})",
            controller.session.task_mode,
            controller.workflow.limit()
        );
        controller
    }

    pub fn with_services(mut self, services: FeatureServices) -> Self {
        self.services = services;
        self
    }

    /// Seed the history, e.g. from a restored session.
    pub fn with_history(mut self, history: EditHistory) -> Self {
        self.history = history;
        self
    }

    pub fn set_authenticated(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
    }

    /// Whether tag documentation lookups can be issued at all.
    pub fn set_docs_available(&mut self, available: bool) {
        self.docs_available = available;
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    pub fn mode(&self) -> &ActiveMode {
        &self.mode
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        &*self.store
    }

    pub fn backgrounds(&self) -> &BackgroundSelector {
        &self.backgrounds
    }

    pub fn layers(&self) -> &LayerToggleController {
        &self.layers
    }

    pub fn grid(&self) -> &GridOptions {
        &self.grid
    }

    pub fn rows(&self) -> &PanelRows {
        &self.rows
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn background_pane_open(&self) -> bool {
        self.background_pane_open
    }

    pub fn custom_editor_open(&self) -> bool {
        self.custom_editor_open
    }

    pub fn close_custom_editor(&mut self) {
        self.custom_editor_open = false;
    }

    pub fn notice_at(&self, now: Instant) -> Option<&Notice> {
        self.notices.current_at(now)
    }

    fn notify(&mut self, message: StatusMessage) {
        self.notices.show(message);
    }

    fn refresh_background_rows(&mut self) {
        self.rows.backgrounds = self.backgrounds.rows(ListFilter::Base);
        self.rows.overlays = self.backgrounds.rows(ListFilter::Overlay);
    }

    fn refresh_layer_rows(&mut self) {
        self.rows.layers = self.layers.rows();
    }
}
