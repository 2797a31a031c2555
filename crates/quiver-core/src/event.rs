//! Input vocabulary the selection engine reacts to.
//!
//! The terminal front end translates raw key events into this enum; the
//! core never depends on a concrete event source, which keeps every state
//! machine drivable from tests.

/// One discrete input event, processed to completion before the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Printable character appended to the focused filter string.
    Char(char),
    /// Delete the last character of the focused filter string.
    Backspace,
    /// Delete the trailing word of the focused filter string (Ctrl+W).
    DeleteWord,
    /// Clear the focused filter string (Ctrl+U).
    ClearLine,
    Up,
    Down,
    /// Focus transfer between panes.
    Tab,
    Enter,
    /// Toggle membership under the cursor (endpoint picker only).
    Space,
    /// Escape: clear the focused filter first, then back out.
    Cancel,
    /// Unconditional session cancel, regardless of focus or filter state.
    Quit,
    /// Terminal geometry change; height feeds viewport recomputation.
    Resize { width: u16, height: u16 },
}
