//! Terminal user interface for qv.
//!
//! ## Entry points
//!
//! - [`picker::run_picker_tui`] — dual-pane environment/file selection.
//! - [`explorer::run_explorer_tui`] — operation explorer with the filter
//!   grammar and endpoint picker.

pub mod explorer;
pub mod keymap;
pub mod picker;
pub mod theme;
