//! Transient user-facing notices ("flash" messages).

use std::time::{Duration, Instant};

use egui::Color32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Warning,
    Error,
}

/// Badge label and color for a tone.
pub fn status_badge(tone: StatusTone) -> (&'static str, Color32) {
    match tone {
        StatusTone::Info => ("Info", Color32::from_rgb(64, 140, 112)),
        StatusTone::Warning => ("Warning", Color32::from_rgb(192, 138, 43)),
        StatusTone::Error => ("Error", Color32::from_rgb(192, 57, 43)),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusMessage {
    QuotaExceeded { limit: usize },
    FirstEditAdvisory,
    CustomTemplateRequired,
    SelectionLost,
    Custom { text: String, tone: StatusTone },
}

impl StatusMessage {
    pub fn custom(text: impl Into<String>, tone: StatusTone) -> Self {
        Self::Custom {
            text: text.into(),
            tone,
        }
    }

    pub fn into_text_and_tone(self) -> (String, StatusTone) {
        match self {
            StatusMessage::QuotaExceeded { limit } => (
                format!(
                    "You can only add {limit} suggested features per editing session. \
                     Save your edits to continue."
                ),
                StatusTone::Warning,
            ),
            StatusMessage::FirstEditAdvisory => (
                "Log in before saving so your edits can be attributed to you.".into(),
                StatusTone::Info,
            ),
            StatusMessage::CustomTemplateRequired => (
                "Enter a tile URL template to use a custom background.".into(),
                StatusTone::Info,
            ),
            StatusMessage::SelectionLost => {
                ("The suggested feature is no longer visible".into(), StatusTone::Info)
            }
            StatusMessage::Custom { text, tone } => (text, tone),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub tone: StatusTone,
    shown_at: Instant,
    duration: Duration,
}

impl Notice {
    pub fn expires_at(&self) -> Instant {
        self.shown_at + self.duration
    }
}

/// Holds at most one notice; a new one replaces the old.
#[derive(Clone, Debug)]
pub struct NoticeBoard {
    duration: Duration,
    current: Option<Notice>,
}

impl NoticeBoard {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
        }
    }

    pub fn show(&mut self, message: StatusMessage) {
        self.show_at(message, Instant::now());
    }

    pub fn show_at(&mut self, message: StatusMessage, now: Instant) {
        let (text, tone) = message.into_text_and_tone();
        tracing::debug!("Notice: {text}");
        self.current = Some(Notice {
            text,
            tone,
            shown_at: now,
            duration: self.duration,
        });
    }

    pub fn current_at(&self, now: Instant) -> Option<&Notice> {
        self.current
            .as_ref()
            .filter(|notice| now < notice.expires_at())
    }

    /// Drop an expired notice; returns true when one was removed.
    pub fn expire_at(&mut self, now: Instant) -> bool {
        if self.current.is_some() && self.current_at(now).is_none() {
            self.current = None;
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
