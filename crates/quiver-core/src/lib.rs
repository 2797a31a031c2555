//! quiver-core: the selection engine behind quiver's terminal UI.
//!
//! Everything in this crate is a synchronous, in-memory state machine:
//! candidate sets go in once per session, discrete [`event::InputEvent`]s
//! drive transitions, and plain data (display rows, selections) comes back
//! out. No I/O, no terminal calls, no network — those belong to the cli
//! crate that hosts these components.
//!
//! # Conventions
//!
//! - **Errors**: core operations are total; "nothing selected" is `None`,
//!   cancellation is a normal terminal outcome, never an error.
//! - **Logging**: `tracing` macros (`debug!`, `trace!`) at mode
//!   transitions only.

pub mod cursor;
pub mod event;
pub mod explorer;
pub mod list;
pub mod picker;
pub mod viewport;
