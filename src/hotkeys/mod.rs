//! Keybinding table for review, background and layer commands.
//!
//! Dispatch mechanics belong to the host; this module only knows which
//! press maps to which command in which mode.

mod actions;
mod format;
mod types;

pub use format::format_keypress;
pub use types::{HotkeyAction, HotkeyCommand, HotkeyScope, KeyPress};

use actions::HOTKEY_ACTIONS;

use crate::mode::ModeKind;

pub fn iter_actions() -> impl Iterator<Item = HotkeyAction> {
    HOTKEY_ACTIONS.iter().copied()
}

/// Actions bound only while `mode` is active.
pub fn mode_actions(mode: ModeKind) -> Vec<HotkeyAction> {
    HOTKEY_ACTIONS
        .iter()
        .copied()
        .filter(|action| !action.is_global() && action.is_active(mode))
        .collect()
}

pub fn global_actions() -> Vec<HotkeyAction> {
    HOTKEY_ACTIONS
        .iter()
        .copied()
        .filter(HotkeyAction::is_global)
        .collect()
}

/// Resolve a press, preferring bindings of the active mode over globals.
pub fn resolve(press: KeyPress, mode: ModeKind) -> Option<HotkeyAction> {
    mode_actions(mode)
        .into_iter()
        .chain(global_actions())
        .find(|action| action.press == press)
}

pub fn press_for(command: HotkeyCommand) -> Option<KeyPress> {
    HOTKEY_ACTIONS
        .iter()
        .find(|action| action.command == command)
        .map(|action| action.press)
}
