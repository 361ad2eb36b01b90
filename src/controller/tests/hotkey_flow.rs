use egui::Key;

use super::super::test_support::{controller, reviewing};
use crate::hotkeys::{HotkeyCommand, KeyPress};
use crate::mode::{ActiveMode, ModeKind};
use crate::review::{AnnotationKind, HistoryLog};

#[test]
fn review_keys_are_bound_only_while_reviewing() {
    let mut controller = reviewing("w1");
    let bound = &controller.presentation().bound[&ModeKind::SelectCandidate];
    assert!(
        bound
            .iter()
            .any(|action| action.command == HotkeyCommand::AcceptCandidate)
    );
    controller.escape();
    assert!(controller.presentation().bound.is_empty());
    assert_eq!(controller.handle_hotkey(KeyPress::new(Key::A)), None);
}

#[test]
fn accept_and_reject_keys_drive_decisions() {
    let mut controller = reviewing("w1");
    assert_eq!(
        controller.handle_hotkey(KeyPress::new(Key::D)),
        Some(HotkeyCommand::RejectCandidate)
    );
    assert_eq!(controller.mode(), &ActiveMode::Browse);
    assert_eq!(controller.history().count(AnnotationKind::Reject), 1);
}

#[test]
fn shift_toggle_flips_all_suggestions() {
    let mut controller = controller();
    assert!(controller.layers().show_all());
    controller.handle_hotkey(KeyPress::with_shift(Key::R));
    assert!(!controller.layers().show_all());
    assert!(controller.rows().layers[1..].iter().all(|row| row.greyed));
}

#[test]
fn background_shortcuts_cycle_and_switch() {
    let mut controller = controller();
    controller.handle_hotkey(KeyPress::with_command_shift(Key::CloseBracket));
    assert_eq!(
        controller.backgrounds().base().map(|id| id.as_str()),
        Some("Esri")
    );
    controller.handle_hotkey(KeyPress::with_command(Key::B));
    assert_eq!(
        controller.backgrounds().base().map(|id| id.as_str()),
        Some("Bing")
    );
    controller.handle_hotkey(KeyPress::new(Key::B));
    assert!(controller.background_pane_open());
}

#[test]
fn undo_shortcut_works_in_any_mode() {
    let mut controller = reviewing("w1");
    controller.handle_hotkey(KeyPress::new(Key::A));
    assert!(matches!(controller.mode(), ActiveMode::SelectBase(_)));
    assert_eq!(
        controller.handle_hotkey(KeyPress::with_command(Key::Z)),
        Some(HotkeyCommand::Undo)
    );
    assert!(!controller.history().can_undo());
    assert!(controller.history().can_redo());
    assert_eq!(controller.mode(), &ActiveMode::Browse);
}
