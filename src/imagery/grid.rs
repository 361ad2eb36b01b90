/// Grid split counts offered over a task area; `0` hides the grid.
pub const GRID_SPLITS: [u8; 6] = [0, 2, 3, 4, 5, 6];

/// Task-area grid overlay settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridOptions {
    rectangular_task: bool,
    splits: u8,
}

impl GridOptions {
    /// Only rectangular task extents can be gridded; anything else resets to 0.
    pub fn set_task_extent(&mut self, rectangular: bool) {
        self.rectangular_task = rectangular;
        if !rectangular {
            self.splits = 0;
        }
    }

    pub fn options(&self) -> &'static [u8] {
        if self.rectangular_task { &GRID_SPLITS } else { &[] }
    }

    pub fn is_visible(&self) -> bool {
        self.rectangular_task
    }

    pub fn splits(&self) -> u8 {
        self.splits
    }

    /// Returns false when `splits` is not an offered value.
    pub fn set_splits(&mut self, splits: u8) -> bool {
        if !self.options().contains(&splits) {
            return false;
        }
        self.splits = splits;
        true
    }
}
