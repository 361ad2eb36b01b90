//! Suggestion layer toggles with the cascading "show all" master switch.

use crate::config::LayerSettings;

/// Kinds of suggested content that can be shown or hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Roads,
    Buildings,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Roads, Category::Buildings];

    pub fn label(self) -> &'static str {
        match self {
            Category::Roads => "Roads",
            Category::Buildings => "Buildings",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct CategoryState {
    enabled: bool,
    provider: Option<String>,
    providers: Vec<String>,
}

/// Presentation of one checkbox in the layer panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleRow {
    /// `None` for the master row.
    pub category: Option<Category>,
    pub label: &'static str,
    pub checked: bool,
    pub disabled: bool,
    pub greyed: bool,
    pub provider: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerToggleController {
    show_all: bool,
    roads: CategoryState,
    buildings: CategoryState,
}

impl LayerToggleController {
    pub fn new(settings: &LayerSettings) -> Self {
        Self {
            show_all: settings.show_all,
            roads: CategoryState {
                enabled: settings.roads_enabled,
                provider: None,
                providers: Vec::new(),
            },
            buildings: CategoryState {
                enabled: settings.buildings_enabled,
                provider: settings.building_providers.first().cloned(),
                providers: settings.building_providers.clone(),
            },
        }
    }

    fn state(&self, category: Category) -> &CategoryState {
        match category {
            Category::Roads => &self.roads,
            Category::Buildings => &self.buildings,
        }
    }

    fn state_mut(&mut self, category: Category) -> &mut CategoryState {
        match category {
            Category::Roads => &mut self.roads,
            Category::Buildings => &mut self.buildings,
        }
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    /// Returns true when the value changed. Stored category values are untouched.
    pub fn set_show_all(&mut self, show_all: bool) -> bool {
        if self.show_all == show_all {
            return false;
        }
        self.show_all = show_all;
        tracing::debug!("Suggestions {}", if show_all { "shown" } else { "hidden" });
        true
    }

    pub fn toggle_show_all(&mut self) -> bool {
        self.set_show_all(!self.show_all);
        self.show_all
    }

    /// Stored value, regardless of the master switch.
    pub fn is_enabled(&self, category: Category) -> bool {
        self.state(category).enabled
    }

    /// Whether the category is actually drawn.
    pub fn is_visible(&self, category: Category) -> bool {
        self.show_all && self.is_enabled(category)
    }

    /// Flip a category. Locked while the master switch is off.
    pub fn toggle_category(&mut self, category: Category) -> Option<bool> {
        if !self.show_all {
            return None;
        }
        let state = self.state_mut(category);
        state.enabled = !state.enabled;
        Some(state.enabled)
    }

    pub fn providers(&self, category: Category) -> &[String] {
        &self.state(category).providers
    }

    pub fn provider(&self, category: Category) -> Option<&str> {
        self.state(category).provider.as_deref()
    }

    /// Record a provider choice and re-enable the category when unlocked.
    ///
    /// Providers the category does not offer are ignored.
    pub fn set_provider(&mut self, category: Category, provider: &str) -> bool {
        let show_all = self.show_all;
        let state = self.state_mut(category);
        if !state.providers.iter().any(|name| name == provider) {
            tracing::debug!("Ignoring unknown {} provider {provider}", category.label());
            return false;
        }
        state.provider = Some(provider.to_string());
        if show_all {
            state.enabled = true;
        }
        true
    }

    /// Master row first, then one row per category.
    pub fn rows(&self) -> Vec<ToggleRow> {
        let locked = !self.show_all;
        let mut rows = vec![ToggleRow {
            category: None,
            label: "Show all suggestions",
            checked: self.show_all,
            disabled: false,
            greyed: false,
            provider: None,
        }];
        rows.extend(Category::ALL.into_iter().map(|category| {
            let state = self.state(category);
            ToggleRow {
                category: Some(category),
                label: category.label(),
                checked: state.enabled,
                disabled: locked,
                greyed: locked,
                provider: state.provider.clone(),
            }
        }));
        rows
    }
}

impl Default for LayerToggleController {
    fn default() -> Self {
        Self::new(&LayerSettings::default())
    }
}
