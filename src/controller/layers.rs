use super::ReviewController;
use crate::layers::Category;
use crate::mode::Presentation;

impl<P: Presentation> ReviewController<P> {
    pub fn toggle_show_all(&mut self) -> bool {
        let shown = self.layers.toggle_show_all();
        self.refresh_layer_rows();
        shown
    }

    pub fn set_show_all(&mut self, show_all: bool) {
        if self.layers.set_show_all(show_all) {
            self.refresh_layer_rows();
        }
    }

    pub fn toggle_category(&mut self, category: Category) -> Option<bool> {
        let enabled = self.layers.toggle_category(category);
        if enabled.is_some() {
            self.refresh_layer_rows();
        }
        enabled
    }

    pub fn set_provider(&mut self, category: Category, provider: &str) -> bool {
        let recorded = self.layers.set_provider(category, provider);
        if recorded {
            self.refresh_layer_rows();
        }
        recorded
    }

    /// Returns false when the split count is not offered for the current task.
    pub fn set_grid_splits(&mut self, splits: u8) -> bool {
        self.grid.set_splits(splits)
    }
}
