use egui::Key;

use crate::mode::ModeKind;

/// Identifies when a hotkey action is live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HotkeyScope {
    Global,
    /// Bound while the given mode is active.
    Mode(ModeKind),
}

impl HotkeyScope {
    pub fn matches(self, mode: ModeKind) -> bool {
        match self {
            HotkeyScope::Global => true,
            HotkeyScope::Mode(target) => target == mode,
        }
    }
}

/// A single keypress plus modifier state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub command: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyPress {
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            command: false,
            shift: false,
            alt: false,
        }
    }

    pub const fn with_command(key: Key) -> Self {
        Self {
            key,
            command: true,
            shift: false,
            alt: false,
        }
    }

    pub const fn with_shift(key: Key) -> Self {
        Self {
            key,
            command: false,
            shift: true,
            alt: false,
        }
    }

    pub const fn with_command_shift(key: Key) -> Self {
        Self {
            key,
            command: true,
            shift: true,
            alt: false,
        }
    }

    /// Read a press from egui modifier state.
    pub fn from_modifiers(key: Key, modifiers: egui::Modifiers) -> Self {
        Self {
            key,
            command: modifiers.command,
            shift: modifiers.shift,
            alt: modifiers.alt,
        }
    }
}

/// Logical identifier for controller-dispatched commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HotkeyCommand {
    AcceptCandidate,
    RejectCandidate,
    ZoomToSelection,
    ExitSelection,
    ToggleBackgroundPane,
    QuickSwitchBackground,
    NextBackground,
    PreviousBackground,
    ToggleAllSuggestions,
    Undo,
    Redo,
}

/// Hotkey metadata surfaced to the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HotkeyAction {
    pub id: &'static str,
    pub label: &'static str,
    pub press: KeyPress,
    pub scope: HotkeyScope,
    pub command: HotkeyCommand,
}

impl HotkeyAction {
    pub fn is_active(&self, mode: ModeKind) -> bool {
        self.scope.matches(mode)
    }

    pub fn is_global(&self) -> bool {
        matches!(self.scope, HotkeyScope::Global)
    }
}
