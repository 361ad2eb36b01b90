use thiserror::Error;

use super::source::{CUSTOM_SOURCE_ID, NONE_SOURCE_ID, Source, SourceId};
use crate::geometry::Viewport;

/// Dynamic collection of imagery sources.
pub trait SourceCatalog {
    /// Sources with imagery for `viewport`, in catalog order.
    fn sources(&self, viewport: &Viewport) -> Vec<Source>;
    fn find(&self, id: &SourceId) -> Option<Source>;
    /// Configure (or clear, with `None`) the custom source's template.
    fn set_custom_template(&mut self, template: Option<String>);
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid imagery catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory catalog that always offers the `custom` and `none` sources.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    sources: Vec<Source>,
}

impl StaticCatalog {
    pub fn new(sources: Vec<Source>) -> Self {
        let mut catalog = Self { sources };
        if catalog.position(CUSTOM_SOURCE_ID).is_none() {
            catalog.sources.push(
                Source::new(CUSTOM_SOURCE_ID, "Custom")
                    .with_description("Choose a custom background template"),
            );
        }
        if catalog.position(NONE_SOURCE_ID).is_none() {
            catalog
                .sources
                .push(Source::new(NONE_SOURCE_ID, "None").with_description("No background"));
        }
        catalog
    }

    /// Parse a JSON array of sources.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let sources: Vec<Source> = serde_json::from_str(json)?;
        Ok(Self::new(sources))
    }

    /// Add or replace a source by id.
    pub fn upsert(&mut self, source: Source) {
        match self.position(source.id.as_str()) {
            Some(index) => self.sources[index] = source,
            None => self.sources.push(source),
        }
    }

    pub fn remove(&mut self, id: &SourceId) -> Option<Source> {
        let index = self.position(id.as_str())?;
        Some(self.sources.remove(index))
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.sources.iter().position(|source| source.id.as_str() == id)
    }
}

impl SourceCatalog for StaticCatalog {
    fn sources(&self, viewport: &Viewport) -> Vec<Source> {
        self.sources
            .iter()
            .filter(|source| source.covers(viewport))
            .cloned()
            .collect()
    }

    fn find(&self, id: &SourceId) -> Option<Source> {
        self.position(id.as_str()).map(|index| self.sources[index].clone())
    }

    fn set_custom_template(&mut self, template: Option<String>) {
        if let Some(index) = self.position(CUSTOM_SOURCE_ID) {
            self.sources[index].template = template.filter(|t| !t.trim().is_empty());
        }
    }
}
