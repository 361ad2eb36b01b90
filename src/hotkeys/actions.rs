use egui::Key;

use super::types::{HotkeyAction, HotkeyCommand, HotkeyScope, KeyPress};
use crate::mode::ModeKind;

const REVIEW: HotkeyScope = HotkeyScope::Mode(ModeKind::SelectCandidate);

pub(super) const HOTKEY_ACTIONS: &[HotkeyAction] = &[
    HotkeyAction {
        id: "accept-candidate",
        label: "Accept suggested feature",
        press: KeyPress::new(Key::A),
        scope: REVIEW,
        command: HotkeyCommand::AcceptCandidate,
    },
    HotkeyAction {
        id: "reject-candidate",
        label: "Reject suggested feature",
        press: KeyPress::new(Key::D),
        scope: REVIEW,
        command: HotkeyCommand::RejectCandidate,
    },
    HotkeyAction {
        id: "zoom-to-selection",
        label: "Zoom to suggested feature",
        press: KeyPress::new(Key::Z),
        scope: REVIEW,
        command: HotkeyCommand::ZoomToSelection,
    },
    HotkeyAction {
        id: "exit-selection",
        label: "Stop reviewing",
        press: KeyPress::new(Key::Escape),
        scope: REVIEW,
        command: HotkeyCommand::ExitSelection,
    },
    HotkeyAction {
        id: "toggle-background-pane",
        label: "Background settings",
        press: KeyPress::new(Key::B),
        scope: HotkeyScope::Global,
        command: HotkeyCommand::ToggleBackgroundPane,
    },
    HotkeyAction {
        id: "quick-switch-background",
        label: "Switch to previous background",
        press: KeyPress::with_command(Key::B),
        scope: HotkeyScope::Global,
        command: HotkeyCommand::QuickSwitchBackground,
    },
    HotkeyAction {
        id: "next-background",
        label: "Next background",
        press: KeyPress::with_command_shift(Key::CloseBracket),
        scope: HotkeyScope::Global,
        command: HotkeyCommand::NextBackground,
    },
    HotkeyAction {
        id: "previous-background",
        label: "Previous background",
        press: KeyPress::with_command_shift(Key::OpenBracket),
        scope: HotkeyScope::Global,
        command: HotkeyCommand::PreviousBackground,
    },
    HotkeyAction {
        id: "toggle-all-suggestions",
        label: "Show or hide all suggestions",
        press: KeyPress::with_shift(Key::R),
        scope: HotkeyScope::Global,
        command: HotkeyCommand::ToggleAllSuggestions,
    },
    HotkeyAction {
        id: "undo",
        label: "Undo",
        press: KeyPress::with_command(Key::Z),
        scope: HotkeyScope::Global,
        command: HotkeyCommand::Undo,
    },
    HotkeyAction {
        id: "redo",
        label: "Redo",
        press: KeyPress::with_command_shift(Key::Z),
        scope: HotkeyScope::Global,
        command: HotkeyCommand::Redo,
    },
];
