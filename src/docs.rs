//! Tag documentation panel for the selected candidate.
//!
//! The lookup itself is performed by the host; [`TagReference`] tracks what
//! the panel shows and degrades to a fixed text when no documentation exists.

use thiserror::Error;

/// Body text when a lookup fails or returns nothing usable.
pub const NO_DOCUMENTATION: &str = "There is no documentation available for this tag";

/// Key (and optionally value) being documented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagQuery {
    pub key: String,
    pub value: Option<String>,
}

impl TagQuery {
    pub fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WikiLink {
    pub url: String,
    pub text: String,
}

/// Documentation record returned by the lookup service.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagDocs {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub edit_url: Option<String>,
    pub wiki: Option<WikiLink>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocsError {
    #[error("Documentation service unavailable")]
    Unavailable,
    #[error("Documentation lookup failed: {0}")]
    Lookup(String),
}

/// What the panel renders once loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocsBody {
    pub description: String,
    pub image_url: Option<String>,
    pub edit_url: Option<String>,
    pub wiki: Option<WikiLink>,
    /// Link to guidance on changeset comments.
    pub comment_guide: bool,
}

impl DocsBody {
    fn fallback() -> Self {
        Self {
            description: NO_DOCUMENTATION.to_string(),
            image_url: None,
            edit_url: None,
            wiki: None,
            comment_guide: false,
        }
    }
}

/// Side effect requested by a click on the info button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// Start a lookup and report back through [`TagReference::complete`].
    Load(TagQuery),
    Show,
    Hide,
    None,
}

#[derive(Clone, Debug)]
pub struct TagReference {
    tag: TagQuery,
    service_available: bool,
    loading: bool,
    loaded: bool,
    showing: bool,
    awaiting_image: bool,
    body: Option<DocsBody>,
}

impl TagReference {
    pub fn new(tag: TagQuery, service_available: bool) -> Self {
        Self {
            tag,
            service_available,
            loading: false,
            loaded: false,
            showing: false,
            awaiting_image: false,
            body: None,
        }
    }

    pub fn tag(&self) -> &TagQuery {
        &self.tag
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_showing(&self) -> bool {
        self.showing
    }

    pub fn body(&self) -> Option<&DocsBody> {
        self.body.as_ref()
    }

    /// Toggle the panel: hide when open, reopen when loaded, else load.
    pub fn click(&mut self) -> ClickAction {
        if self.showing {
            self.showing = false;
            return ClickAction::Hide;
        }
        if self.loaded {
            self.showing = true;
            return ClickAction::Show;
        }
        if self.loading || !self.service_available {
            return ClickAction::None;
        }
        self.loading = true;
        ClickAction::Load(self.tag.clone())
    }

    /// Deliver the lookup result. Ignored unless a lookup is in flight.
    pub fn complete(&mut self, result: Result<Option<TagDocs>, DocsError>) {
        if !self.loading || self.awaiting_image {
            return;
        }
        let docs = match result {
            Ok(Some(docs)) if docs.title.is_some() => docs,
            Ok(_) => {
                self.finish(DocsBody::fallback());
                return;
            }
            Err(err) => {
                tracing::debug!("Tag docs for {} unavailable: {err}", self.tag.key);
                self.finish(DocsBody::fallback());
                return;
            }
        };
        let body = DocsBody {
            description: docs
                .description
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| NO_DOCUMENTATION.to_string()),
            image_url: docs.image_url,
            edit_url: docs.edit_url,
            wiki: docs.wiki,
            comment_guide: self.tag.key == "comment",
        };
        if body.image_url.is_some() {
            self.body = Some(body);
            self.awaiting_image = true;
        } else {
            self.finish(body);
        }
    }

    pub fn image_loaded(&mut self) {
        if self.awaiting_image {
            self.awaiting_image = false;
            self.done();
        }
    }

    /// The image is dropped; the text stays.
    pub fn image_failed(&mut self) {
        if let Some(body) = self.body.as_mut() {
            body.image_url = None;
        }
        self.image_loaded();
    }

    fn finish(&mut self, body: DocsBody) {
        self.body = Some(body);
        self.done();
    }

    fn done(&mut self) {
        self.loading = false;
        self.loaded = true;
        self.showing = true;
    }
}
