use super::ReviewController;
use crate::imagery::{ChooseOutcome, CycleDirection, SourceId};
use crate::mode::Presentation;

impl<P: Presentation> ReviewController<P> {
    pub fn toggle_background_pane(&mut self) -> bool {
        self.background_pane_open = !self.background_pane_open;
        if self.background_pane_open {
            self.refresh_background_rows();
        }
        self.background_pane_open
    }

    pub fn choose_background(&mut self, id: &SourceId) -> ChooseOutcome {
        let outcome = self.backgrounds.choose(id, &mut *self.store);
        self.after_choose(&outcome);
        outcome
    }

    pub fn cycle_background(&mut self, direction: CycleDirection) -> ChooseOutcome {
        let outcome = self.backgrounds.cycle(direction, &mut *self.store);
        self.after_choose(&outcome);
        outcome
    }

    pub fn quick_switch_background(&mut self) -> ChooseOutcome {
        let outcome = self.backgrounds.quick_switch(&mut *self.store);
        self.after_choose(&outcome);
        outcome
    }

    /// Template edit from the custom background dialog.
    pub fn custom_template_changed(&mut self, template: &str) -> ChooseOutcome {
        let outcome = self.backgrounds.custom_changed(template, &mut *self.store);
        self.custom_editor_open = false;
        self.after_choose(&outcome);
        outcome
    }

    pub fn toggle_overlay(&mut self, id: &SourceId) -> Option<bool> {
        let active = self.backgrounds.toggle_overlay(id);
        if active.is_some() {
            self.refresh_background_rows();
        }
        active
    }

    pub fn toggle_favorite(&mut self, id: &SourceId) -> bool {
        let starred = self.backgrounds.toggle_favorite(id, &mut *self.store);
        self.refresh_background_rows();
        starred
    }

    fn after_choose(&mut self, outcome: &ChooseOutcome) {
        match outcome {
            ChooseOutcome::Activated(_) => self.refresh_background_rows(),
            ChooseOutcome::OpenCustomEditor => self.custom_editor_open = true,
            ChooseOutcome::Unchanged | ChooseOutcome::Ignored => {}
        }
    }
}
