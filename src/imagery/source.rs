use serde::{Deserialize, Serialize};

use crate::geometry::{Extent, Viewport};

/// Id of the user-configurable source.
pub const CUSTOM_SOURCE_ID: &str = "custom";
/// Id of the blank background.
pub const NONE_SOURCE_ID: &str = "none";

/// Identifier for a background or overlay source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    /// Rehydrate a source identifier from a stored string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn custom() -> Self {
        Self::from_string(CUSTOM_SOURCE_ID)
    }

    pub fn none() -> Self {
        Self::from_string(NONE_SOURCE_ID)
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(value: &str) -> Self {
        Self::from_string(value)
    }
}

/// Named imagery layer offered in the background pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: SourceId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Tile URL template; `None` or empty for an unconfigured custom source.
    #[serde(default)]
    pub template: Option<String>,
    /// Covered area, larger sorts first among equals.
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub best: bool,
    #[serde(default)]
    pub overlay: bool,
    #[serde(default)]
    pub hidden: bool,
    /// Where the imagery exists; `None` covers the world.
    #[serde(default)]
    pub coverage: Option<Extent>,
    /// Inclusive `[min, max]` zoom; `None` shows at every zoom.
    #[serde(default)]
    pub zoom_range: Option<[f64; 2]>,
}

impl Source {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: SourceId::from_string(id),
            name: name.into(),
            description: String::new(),
            template: None,
            area: 0.0,
            best: false,
            overlay: false,
            hidden: false,
            coverage: None,
            zoom_range: None,
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_area(mut self, area: f64) -> Self {
        self.area = area;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn best(mut self) -> Self {
        self.best = true;
        self
    }

    pub fn overlay(mut self) -> Self {
        self.overlay = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn with_coverage(mut self, coverage: Extent) -> Self {
        self.coverage = Some(coverage);
        self
    }

    pub fn with_zoom_range(mut self, min: f64, max: f64) -> Self {
        self.zoom_range = Some([min.min(max), min.max(max)]);
        self
    }

    pub fn is_custom(&self) -> bool {
        self.id.as_str() == CUSTOM_SOURCE_ID
    }

    /// The custom source before a template was entered.
    pub fn is_unconfigured_custom(&self) -> bool {
        self.is_custom() && self.template.as_deref().is_none_or(|t| t.trim().is_empty())
    }

    /// Whether the source has imagery for `viewport`.
    pub fn covers(&self, viewport: &Viewport) -> bool {
        let in_zoom = self
            .zoom_range
            .is_none_or(|[min, max]| (min..=max).contains(&viewport.zoom));
        let in_area = self
            .coverage
            .is_none_or(|coverage| coverage.intersects(&viewport.extent));
        in_zoom && in_area
    }
}
