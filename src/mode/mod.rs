//! Editor modes and the presentation seam they drive.

mod select;

pub use select::SelectionMode;

use crate::geometry::Extent;
use crate::hotkeys::HotkeyAction;
use crate::review::{CandidateFeature, FeatureId};

/// Discriminant used for hotkey scoping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Browse,
    SelectCandidate,
    SelectBase,
}

/// Mode the editor is in after the last transition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ActiveMode {
    #[default]
    Browse,
    /// Reviewing a suggested feature.
    SelectCandidate(FeatureId),
    /// Features of the base dataset are selected, e.g. right after an accept.
    SelectBase(Vec<FeatureId>),
}

impl ActiveMode {
    pub fn kind(&self) -> ModeKind {
        match self {
            ActiveMode::Browse => ModeKind::Browse,
            ActiveMode::SelectCandidate(_) => ModeKind::SelectCandidate,
            ActiveMode::SelectBase(_) => ModeKind::SelectBase,
        }
    }
}

/// Requested follow-up after an input was handled by a mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Browse,
    SelectBase(FeatureId),
}

/// Map interactions installed while a candidate is under review.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Behavior {
    Breathe,
    Hover,
    Select,
    Lasso,
    DragNode,
    DragNote,
}

impl Behavior {
    pub const REVIEW: [Behavior; 6] = [
        Behavior::Breathe,
        Behavior::Hover,
        Behavior::Select,
        Behavior::Lasso,
        Behavior::DragNode,
        Behavior::DragNote,
    ];
}

/// Rendering surface, sidebar and input hooks owned by the host.
pub trait Presentation {
    /// Whether the feature is currently drawn on the surface.
    fn is_rendered(&self, id: &FeatureId) -> bool;
    fn set_selected(&mut self, id: &FeatureId);
    fn clear_selected(&mut self);
    /// A text combobox dropdown is open and owns the escape key.
    fn combobox_open(&self) -> bool;
    fn install(&mut self, behavior: Behavior);
    fn uninstall(&mut self, behavior: Behavior);
    fn bind_keys(&mut self, mode: ModeKind, actions: &[HotkeyAction]);
    fn unbind_keys(&mut self, mode: ModeKind);
    fn show_sidebar(&mut self, candidate: &CandidateFeature);
    fn hide_sidebar(&mut self);
    /// Open the sidebar; `avoid_obscuring` asks the map to shift out from under it.
    fn expand_sidebar(&mut self, avoid_obscuring: bool);
    fn sidebar_intersects(&self, extent: &Extent) -> bool;
    fn zoom_to(&mut self, extent: &Extent);
}
