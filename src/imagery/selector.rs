use super::catalog::SourceCatalog;
use super::favorites::FavoriteSet;
use super::ranking::sort_sources;
use super::source::{Source, SourceId};
use crate::geometry::Viewport;
use crate::hotkeys::{HotkeyCommand, format_keypress, press_for};
use crate::storage::{KeyValueStore, StorageKey, remove_or_warn, set_or_warn};

/// Which half of the pane a list feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListFilter {
    Base,
    Overlay,
}

impl ListFilter {
    pub fn matches(self, source: &Source) -> bool {
        !source.hidden
            && match self {
                ListFilter::Base => !source.overlay,
                ListFilter::Overlay => source.overlay,
            }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Next,
    Previous,
}

/// Result of asking for a base layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChooseOutcome {
    Activated(SourceId),
    /// The custom source needs a template first; nothing was activated.
    OpenCustomEditor,
    /// Already active, or nothing to switch to.
    Unchanged,
    /// Not in the catalog, or an overlay.
    Ignored,
}

/// One entry of the background pane.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundRow {
    pub id: SourceId,
    pub name: String,
    pub active: bool,
    /// Target of the quick switch.
    pub switch_target: bool,
    pub best: bool,
    pub favorite: bool,
    pub custom: bool,
    pub tooltip: String,
}

/// Active base layer, overlays and favorites over a [`SourceCatalog`].
pub struct BackgroundSelector {
    catalog: Box<dyn SourceCatalog>,
    viewport: Viewport,
    base: Option<SourceId>,
    previous: Option<SourceId>,
    overlays: Vec<SourceId>,
    favorites: FavoriteSet,
}

impl BackgroundSelector {
    pub fn new(catalog: Box<dyn SourceCatalog>) -> Self {
        Self {
            catalog,
            viewport: Viewport::default(),
            base: None,
            previous: None,
            overlays: Vec::new(),
            favorites: FavoriteSet::new(),
        }
    }

    /// Load favorites and the last choices from `store`.
    ///
    /// Ids that are no longer pickable base sources are ignored; without a
    /// usable stored base the top-ranked base source is activated.
    pub fn restore(&mut self, store: &dyn KeyValueStore) {
        self.favorites = FavoriteSet::load(store);
        if let Some(template) = store
            .get(StorageKey::BackgroundCustomTemplate)
            .filter(|template| !template.trim().is_empty())
        {
            self.catalog.set_custom_template(Some(template));
        }
        self.previous = self.pickable(store.get(StorageKey::BackgroundLastUsedToggle));
        self.base = self
            .pickable(store.get(StorageKey::BackgroundLastUsed))
            .or_else(|| {
                self.list(ListFilter::Base)
                    .into_iter()
                    .find(|source| !source.is_unconfigured_custom())
                    .map(|source| source.id)
            });
        tracing::debug!(
            "Restored background {:?} (previous {:?}, {} favorites)",
            self.base,
            self.previous,
            self.favorites.len()
        );
    }

    fn pickable(&self, id: Option<String>) -> Option<SourceId> {
        id.map(SourceId::from_string).filter(|id| {
            self.catalog.find(id).is_some_and(|source| {
                ListFilter::Base.matches(&source) && !source.is_unconfigured_custom()
            })
        })
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn catalog(&self) -> &dyn SourceCatalog {
        self.catalog.as_ref()
    }

    pub fn base(&self) -> Option<&SourceId> {
        self.base.as_ref()
    }

    pub fn previous(&self) -> Option<&SourceId> {
        self.previous.as_ref()
    }

    pub fn overlays(&self) -> &[SourceId] {
        &self.overlays
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// Ranked sources for the current viewport, active ones always included.
    pub fn list(&self, filter: ListFilter) -> Vec<Source> {
        let mut sources = self.catalog.sources(&self.viewport);
        let active = self.base.iter().chain(self.overlays.iter());
        for id in active {
            if !sources.iter().any(|source| &source.id == id)
                && let Some(source) = self.catalog.find(id)
            {
                sources.push(source);
            }
        }
        sources.retain(|source| filter.matches(source));
        sort_sources(&mut sources, &self.favorites);
        sources
    }

    pub fn choose(&mut self, id: &SourceId, store: &mut dyn KeyValueStore) -> ChooseOutcome {
        let Some(source) = self.catalog.find(id) else {
            tracing::debug!("Ignoring unknown background {id}");
            return ChooseOutcome::Ignored;
        };
        if !ListFilter::Base.matches(&source) {
            return ChooseOutcome::Ignored;
        }
        if source.is_unconfigured_custom() {
            return ChooseOutcome::OpenCustomEditor;
        }
        if self.base.as_ref() == Some(id) {
            return ChooseOutcome::Unchanged;
        }
        self.previous = self.base.replace(id.clone());
        if let Some(previous) = &self.previous {
            set_or_warn(
                store,
                StorageKey::BackgroundLastUsedToggle,
                previous.to_string(),
            );
        }
        set_or_warn(store, StorageKey::BackgroundLastUsed, id.to_string());
        tracing::info!("Background set to {id}");
        ChooseOutcome::Activated(id.clone())
    }

    /// Returns the new state, or `None` when `id` is not an overlay.
    pub fn toggle_overlay(&mut self, id: &SourceId) -> Option<bool> {
        let source = self.catalog.find(id).filter(|source| source.overlay)?;
        if let Some(index) = self.overlays.iter().position(|active| active == id) {
            self.overlays.remove(index);
            tracing::debug!("Overlay {} off", source.id);
            Some(false)
        } else {
            self.overlays.push(source.id);
            tracing::debug!("Overlay {id} on");
            Some(true)
        }
    }

    /// Step through the ranked base list with wraparound.
    pub fn cycle(
        &mut self,
        direction: CycleDirection,
        store: &mut dyn KeyValueStore,
    ) -> ChooseOutcome {
        let sources = self.list(ListFilter::Base);
        let Some(target) = cycle_target(&sources, self.base.as_ref(), direction) else {
            return ChooseOutcome::Unchanged;
        };
        self.choose(&target, store)
    }

    /// Flip favorite state and persist the whole set.
    pub fn toggle_favorite(&mut self, id: &SourceId, store: &mut dyn KeyValueStore) -> bool {
        let starred = self.favorites.toggle(id);
        self.favorites.save(store);
        starred
    }

    /// Re-choose the previously active base layer.
    pub fn quick_switch(&mut self, store: &mut dyn KeyValueStore) -> ChooseOutcome {
        match self.previous.clone() {
            Some(previous) => self.choose(&previous, store),
            None => ChooseOutcome::Unchanged,
        }
    }

    /// Apply a template edit from the custom source dialog.
    pub fn custom_changed(&mut self, template: &str, store: &mut dyn KeyValueStore) -> ChooseOutcome {
        let template = template.trim();
        if template.is_empty() {
            self.catalog.set_custom_template(None);
            remove_or_warn(store, StorageKey::BackgroundCustomTemplate);
            return self.choose(&SourceId::none(), store);
        }
        self.catalog.set_custom_template(Some(template.to_string()));
        set_or_warn(
            store,
            StorageKey::BackgroundCustomTemplate,
            template.to_string(),
        );
        let custom = SourceId::custom();
        if self.base.as_ref() == Some(&custom) {
            return ChooseOutcome::Activated(custom);
        }
        self.choose(&custom, store)
    }

    /// Drop overlays that left the catalog.
    pub fn reconcile_catalog(&mut self) {
        let catalog = &self.catalog;
        self.overlays.retain(|id| catalog.find(id).is_some());
        if self
            .previous
            .as_ref()
            .is_some_and(|id| catalog.find(id).is_none())
        {
            self.previous = None;
        }
    }

    pub fn rows(&self, filter: ListFilter) -> Vec<BackgroundRow> {
        let switch_hint = press_for(HotkeyCommand::QuickSwitchBackground)
            .map(|press| format!("Switch back to this background ({})", format_keypress(&press)))
            .unwrap_or_else(|| "Switch back to this background".to_string());
        self.list(filter)
            .into_iter()
            .map(|source| {
                let active = match filter {
                    ListFilter::Base => self.base.as_ref() == Some(&source.id),
                    ListFilter::Overlay => self.overlays.contains(&source.id),
                };
                let switch_target =
                    filter == ListFilter::Base && self.previous.as_ref() == Some(&source.id);
                BackgroundRow {
                    favorite: self.favorites.contains(&source.id),
                    custom: source.is_custom(),
                    best: source.best,
                    tooltip: if switch_target {
                        switch_hint.clone()
                    } else {
                        source.description.clone()
                    },
                    active,
                    switch_target,
                    name: source.name,
                    id: source.id,
                }
            })
            .collect()
    }
}

/// Neighbor of `current` in `sources`, never an unconfigured custom source.
pub(crate) fn cycle_target(
    sources: &[Source],
    current: Option<&SourceId>,
    direction: CycleDirection,
) -> Option<SourceId> {
    let current = current?;
    let len = sources.len();
    let start = sources.iter().position(|source| &source.id == current)?;
    let step = |index: usize| match direction {
        CycleDirection::Next => (index + 1) % len,
        CycleDirection::Previous => (index + len - 1) % len,
    };
    let mut next = step(start);
    if sources[next].is_unconfigured_custom() {
        next = step(next);
    }
    (next != start && !sources[next].is_unconfigured_custom()).then(|| sources[next].id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Extent;
    use crate::imagery::catalog::StaticCatalog;
    use crate::storage::MemoryStore;

    fn catalog() -> StaticCatalog {
        StaticCatalog::new(vec![
            Source::new("Bing", "Bing").best().with_area(900.0),
            Source::new("Esri", "Esri World").with_area(800.0),
            Source::new("Mapbox", "Mapbox").with_area(700.0),
            Source::new("Labels", "Labels").overlay(),
            Source::new("Old", "Retired").hidden(),
        ])
    }

    fn selector() -> (BackgroundSelector, MemoryStore) {
        let mut store = MemoryStore::new();
        let mut selector = BackgroundSelector::new(Box::new(catalog()));
        selector.restore(&store);
        selector.choose(&SourceId::from("Bing"), &mut store);
        (selector, store)
    }

    fn ids(sources: &[Source]) -> Vec<&str> {
        sources.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn lists_split_base_and_overlay() {
        let (selector, _) = selector();
        assert_eq!(
            ids(&selector.list(ListFilter::Base)),
            vec!["Bing", "Esri", "Mapbox", "custom", "none"]
        );
        assert_eq!(ids(&selector.list(ListFilter::Overlay)), vec!["Labels"]);
    }

    #[test]
    fn active_source_stays_listed_outside_its_coverage() {
        let mut catalog = catalog();
        catalog.upsert(
            Source::new("Local", "Local")
                .with_area(1.0)
                .with_coverage(Extent::new([0.0, 0.0], [1.0, 1.0])),
        );
        let mut store = MemoryStore::new();
        let mut selector = BackgroundSelector::new(Box::new(catalog));
        selector.set_viewport(Viewport::new(Extent::new([0.2, 0.2], [0.3, 0.3]), 16.0));
        selector.choose(&SourceId::from("Local"), &mut store);
        selector.set_viewport(Viewport::new(Extent::new([40.0, 40.0], [41.0, 41.0]), 16.0));
        assert!(ids(&selector.list(ListFilter::Base)).contains(&"Local"));
    }

    #[test]
    fn choose_records_previous_and_persists() {
        let (mut selector, mut store) = selector();
        let outcome = selector.choose(&SourceId::from("Esri"), &mut store);
        assert_eq!(outcome, ChooseOutcome::Activated(SourceId::from("Esri")));
        assert_eq!(selector.previous(), Some(&SourceId::from("Bing")));
        assert_eq!(
            store.get(StorageKey::BackgroundLastUsedToggle).as_deref(),
            Some("Bing")
        );
        assert_eq!(
            store.get(StorageKey::BackgroundLastUsed).as_deref(),
            Some("Esri")
        );
        assert_eq!(
            selector.choose(&SourceId::from("Esri"), &mut store),
            ChooseOutcome::Unchanged
        );
    }

    #[test]
    fn unconfigured_custom_opens_editor() {
        let (mut selector, mut store) = selector();
        assert_eq!(
            selector.choose(&SourceId::custom(), &mut store),
            ChooseOutcome::OpenCustomEditor
        );
        assert_eq!(selector.base(), Some(&SourceId::from("Bing")));
    }

    #[test]
    fn cycle_wraps_and_skips_custom() {
        let (mut selector, mut store) = selector();
        selector.choose(&SourceId::none(), &mut store);
        // none -> (custom skipped) -> Mapbox going backwards
        assert_eq!(
            selector.cycle(CycleDirection::Previous, &mut store),
            ChooseOutcome::Activated(SourceId::from("Mapbox"))
        );
        selector.choose(&SourceId::none(), &mut store);
        assert_eq!(
            selector.cycle(CycleDirection::Next, &mut store),
            ChooseOutcome::Activated(SourceId::from("Bing"))
        );
        selector.choose(&SourceId::from("Mapbox"), &mut store);
        assert_eq!(
            selector.cycle(CycleDirection::Next, &mut store),
            ChooseOutcome::Activated(SourceId::none())
        );
    }

    #[test]
    fn cycle_without_current_is_noop() {
        let mut store = MemoryStore::new();
        let mut selector = BackgroundSelector::new(Box::new(catalog()));
        assert_eq!(
            selector.cycle(CycleDirection::Next, &mut store),
            ChooseOutcome::Unchanged
        );
        assert!(store.is_empty());
    }

    #[test]
    fn favorite_moves_source_to_top() {
        let (mut selector, mut store) = selector();
        assert!(selector.toggle_favorite(&SourceId::from("Mapbox"), &mut store));
        assert_eq!(selector.list(ListFilter::Base)[0].id.as_str(), "Mapbox");
        assert_eq!(
            store.get(StorageKey::BackgroundFavorites).as_deref(),
            Some(r#"{"Mapbox":true}"#)
        );
    }

    #[test]
    fn quick_switch_returns_to_previous() {
        let (mut selector, mut store) = selector();
        assert_eq!(selector.quick_switch(&mut store), ChooseOutcome::Unchanged);
        selector.choose(&SourceId::from("Esri"), &mut store);
        assert_eq!(
            selector.quick_switch(&mut store),
            ChooseOutcome::Activated(SourceId::from("Bing"))
        );
        assert_eq!(selector.previous(), Some(&SourceId::from("Esri")));
    }

    #[test]
    fn custom_template_edits_choose_custom_or_none() {
        let (mut selector, mut store) = selector();
        assert_eq!(
            selector.custom_changed("https://tiles/{z}/{x}/{y}.png", &mut store),
            ChooseOutcome::Activated(SourceId::custom())
        );
        assert_eq!(
            selector.custom_changed("   ", &mut store),
            ChooseOutcome::Activated(SourceId::none())
        );
        assert_eq!(
            selector.choose(&SourceId::custom(), &mut store),
            ChooseOutcome::OpenCustomEditor
        );
    }

    #[test]
    fn restore_reads_stored_choices() {
        let store = MemoryStore::new()
            .with(StorageKey::BackgroundLastUsed, "Esri")
            .with(StorageKey::BackgroundLastUsedToggle, "Mapbox")
            .with(StorageKey::BackgroundFavorites, r#"{"Mapbox":true}"#);
        let mut selector = BackgroundSelector::new(Box::new(catalog()));
        selector.restore(&store);
        assert_eq!(selector.base(), Some(&SourceId::from("Esri")));
        assert_eq!(selector.previous(), Some(&SourceId::from("Mapbox")));
        assert!(selector.favorites().contains(&SourceId::from("Mapbox")));
    }

    #[test]
    fn custom_template_is_restored_with_its_choice() {
        let (mut selector, mut store) = selector();
        selector.custom_changed("https://tiles/{z}/{x}/{y}.png", &mut store);
        assert_eq!(
            store.get(StorageKey::BackgroundCustomTemplate).as_deref(),
            Some("https://tiles/{z}/{x}/{y}.png")
        );

        let mut reopened = BackgroundSelector::new(Box::new(catalog()));
        reopened.restore(&store);
        assert_eq!(reopened.base(), Some(&SourceId::custom()));
        let custom = reopened.catalog().find(&SourceId::custom()).unwrap();
        assert_eq!(custom.template.as_deref(), Some("https://tiles/{z}/{x}/{y}.png"));

        reopened.custom_changed("", &mut store);
        assert_eq!(store.get(StorageKey::BackgroundCustomTemplate), None);
    }

    #[test]
    fn hidden_sources_are_never_activated() {
        let (mut selector, mut store) = selector();
        assert_eq!(
            selector.choose(&SourceId::from("Old"), &mut store),
            ChooseOutcome::Ignored
        );
        assert_eq!(selector.base(), Some(&SourceId::from("Bing")));

        let stale = MemoryStore::new()
            .with(StorageKey::BackgroundLastUsed, "Old")
            .with(StorageKey::BackgroundLastUsedToggle, "Old");
        let mut restored = BackgroundSelector::new(Box::new(catalog()));
        restored.restore(&stale);
        assert_eq!(restored.base(), Some(&SourceId::from("Bing")));
        assert_eq!(restored.previous(), None);
    }

    #[test]
    fn restore_falls_back_to_best_ranked() {
        let store = MemoryStore::new().with(StorageKey::BackgroundLastUsed, "Gone");
        let mut selector = BackgroundSelector::new(Box::new(catalog()));
        selector.restore(&store);
        assert_eq!(selector.base(), Some(&SourceId::from("Bing")));
    }

    #[test]
    fn overlay_toggle_only_accepts_overlays() {
        let (mut selector, _) = selector();
        assert_eq!(selector.toggle_overlay(&SourceId::from("Labels")), Some(true));
        assert_eq!(selector.overlays(), &[SourceId::from("Labels")]);
        assert_eq!(selector.toggle_overlay(&SourceId::from("Labels")), Some(false));
        assert_eq!(selector.toggle_overlay(&SourceId::from("Bing")), None);
    }

    #[test]
    fn rows_mark_switch_target_with_hint() {
        let (mut selector, mut store) = selector();
        selector.choose(&SourceId::from("Esri"), &mut store);
        let rows = selector.rows(ListFilter::Base);
        let bing = rows.iter().find(|row| row.id.as_str() == "Bing").unwrap();
        assert!(bing.switch_target && bing.best && !bing.active);
        assert!(bing.tooltip.contains("B)"));
        let esri = rows.iter().find(|row| row.id.as_str() == "Esri").unwrap();
        assert!(esri.active && !esri.switch_target);
        assert!(rows.iter().any(|row| row.custom));
    }
}
