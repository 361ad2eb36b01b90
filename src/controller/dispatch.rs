use std::time::Instant;

use super::ReviewController;
use crate::events::{Event, Subscriber};
use crate::hotkeys::{self, HotkeyCommand, KeyPress};
use crate::imagery::CycleDirection;
use crate::mode::Presentation;

impl<P: Presentation> ReviewController<P> {
    /// Queue a map notification; it is handled on the next [`Self::pump`].
    pub fn publish(&mut self, event: Event) {
        self.bus.publish(event);
    }

    /// Deliver every queued event to its subscribers, in order.
    pub fn pump(&mut self, now: Instant) -> usize {
        let mut delivered = 0;
        while let Some(event) = self.bus.next_event() {
            for subscriber in self.bus.subscribers(event.topic()) {
                self.deliver(subscriber, &event, now);
                delivered += 1;
            }
        }
        delivered
    }

    /// Run trailing refreshes that came due and expire old notices.
    pub fn tick(&mut self, now: Instant) {
        if self.background_refresh.tick_at(now) {
            self.refresh_background_rows();
        }
        if self.layer_refresh.tick_at(now) {
            self.refresh_layer_rows();
        }
        self.notices.expire_at(now);
    }

    fn deliver(&mut self, subscriber: Subscriber, event: &Event, now: Instant) {
        match (subscriber, event) {
            (Subscriber::SelectionMode, Event::Redrawn { drawn, cause }) => {
                let transition =
                    self.selection
                        .reconcile_visibility(*drawn, *cause, &mut self.presentation);
                self.apply_transition(transition);
            }
            (Subscriber::BackgroundPane, Event::ViewportChanged(viewport)) => {
                self.viewport = *viewport;
                self.backgrounds.set_viewport(*viewport);
                if self.background_refresh.call_at(now) {
                    self.refresh_background_rows();
                }
            }
            (Subscriber::BackgroundPane, Event::CatalogChanged) => {
                self.backgrounds.reconcile_catalog();
                self.refresh_background_rows();
            }
            (Subscriber::LayerPanel, Event::ViewportChanged(viewport)) => {
                self.viewport = *viewport;
                if self.layer_refresh.call_at(now) {
                    self.refresh_layer_rows();
                }
            }
            (Subscriber::LayerPanel, Event::TaskExtentSet { rectangular }) => {
                self.grid.set_task_extent(*rectangular);
            }
            (subscriber, event) => {
                tracing::trace!("{subscriber:?} ignores {:?}", event.topic());
            }
        }
    }

    /// Resolve a keypress against the active mode and run its command.
    pub fn handle_hotkey(&mut self, press: KeyPress) -> Option<HotkeyCommand> {
        let action = hotkeys::resolve(press, self.mode.kind())?;
        tracing::debug!("Hotkey {}", action.id);
        self.run_command(action.command);
        Some(action.command)
    }

    pub fn run_command(&mut self, command: HotkeyCommand) {
        match command {
            HotkeyCommand::AcceptCandidate => {
                let _ = self.accept_candidate();
            }
            HotkeyCommand::RejectCandidate => {
                let _ = self.reject_candidate();
            }
            HotkeyCommand::ZoomToSelection => {
                self.zoom_to_selection();
            }
            HotkeyCommand::ExitSelection => self.escape(),
            HotkeyCommand::ToggleBackgroundPane => {
                self.toggle_background_pane();
            }
            HotkeyCommand::QuickSwitchBackground => {
                self.quick_switch_background();
            }
            HotkeyCommand::NextBackground => {
                self.cycle_background(CycleDirection::Next);
            }
            HotkeyCommand::PreviousBackground => {
                self.cycle_background(CycleDirection::Previous);
            }
            HotkeyCommand::ToggleAllSuggestions => {
                self.toggle_show_all();
            }
            HotkeyCommand::Undo => {
                self.undo();
            }
            HotkeyCommand::Redo => {
                self.redo();
            }
        }
    }
}
