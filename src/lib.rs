//! Review of machine-suggested map features with background imagery control.
/// App directory resolution.
pub mod app_dirs;
/// TOML-backed review settings.
pub mod config;
/// Controller owning all review state.
pub mod controller;
/// Leading+trailing refresh coalescing.
pub mod debounce;
/// Tag documentation panel state.
pub mod docs;
/// Map notifications and their subscribers.
pub mod events;
/// Lon/lat extents and the viewport.
pub mod geometry;
/// Keybinding table.
pub mod hotkeys;
/// Background and overlay imagery.
pub mod imagery;
/// Suggestion layer toggles.
pub mod layers;
/// Tracing setup.
pub mod logging;
/// Editor modes and the presentation seam.
pub mod mode;
/// Transient status notices.
pub mod notices;
/// Candidates, annotations, history and decisions.
pub mod review;
/// Per-session flags.
pub mod session;
/// Key/value persistence.
pub mod storage;

pub use controller::{PanelRows, ReviewController};
