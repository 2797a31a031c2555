//! Cursor math shared by every selectable list.
//!
//! All functions are total over their inputs: out-of-range cursors are
//! bounded, and an empty list leaves the cursor for the caller to clamp.

/// Move the cursor up one row, stopping at the top.
#[must_use]
pub const fn move_up(cursor: usize) -> usize {
    cursor.saturating_sub(1)
}

/// Move the cursor down one row, stopping at the last index of a list with
/// `len` entries. An empty list returns `cursor` unchanged; callers clamp
/// separately via [`clamp`].
#[must_use]
pub const fn move_down(cursor: usize, len: usize) -> usize {
    if len == 0 {
        cursor
    } else if cursor + 1 >= len {
        len - 1
    } else {
        cursor + 1
    }
}

/// Bound a cursor to `[0, len)`, collapsing to 0 for an empty list.
#[must_use]
pub const fn clamp(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if cursor >= len {
        len - 1
    } else {
        cursor
    }
}
