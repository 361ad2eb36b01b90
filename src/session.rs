//! Per-process review session state.
//!
//! Lives for one running session and is handed to the controllers that read
//! or flip it, so tests can start from a clean session.

use std::collections::BTreeSet;

use url::Url;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// The sidebar was force-expanded on a first review.
    pub sidebar_expanded_once: bool,
    /// Running a task-manager assignment; the accept quota is off.
    pub task_mode: bool,
    /// The guided walkthrough is running; decisions are not attributed.
    pub in_intro: bool,
    /// `source` tags of accepted candidates, for changeset metadata.
    pub attribution_sources: BTreeSet<String>,
    /// The first-edit advisory was considered for this login session.
    pub login_acknowledged: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for the page at `url`, detecting task mode.
    pub fn from_url(url: &str) -> Self {
        Self {
            task_mode: task_mode_from_url(url),
            ..Self::default()
        }
    }

    pub fn record_attribution(&mut self, source: &str) -> bool {
        let source = source.trim();
        if source.is_empty() {
            return false;
        }
        self.attribution_sources.insert(source.to_string())
    }

    /// Mark the login advisory as handled. Returns `false` if it already was.
    pub fn acknowledge_login(&mut self) -> bool {
        !std::mem::replace(&mut self.login_acknowledged, true)
    }

    /// Attribution sources joined the way changeset tags expect them.
    pub fn attribution_tag(&self) -> Option<String> {
        if self.attribution_sources.is_empty() {
            return None;
        }
        Some(
            self.attribution_sources
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(";"),
        )
    }
}

/// A task is loaded when the hash parameters carry a non-empty `gpx` value.
pub fn task_mode_from_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        tracing::debug!("Ignoring unparsable session url {url:?}");
        return false;
    };
    let Some(fragment) = parsed.fragment() else {
        return false;
    };
    let query = fragment.trim_start_matches('?');
    url::form_urlencoded::parse(query.as_bytes())
        .any(|(key, value)| key == "gpx" && !value.trim().is_empty())
}
