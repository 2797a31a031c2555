//! Scroll-offset synchronization for a cursor inside a fixed-height window.

/// Lines kept visible between the cursor and the window edges.
pub const DEFAULT_SCROLL_MARGIN: usize = 3;

/// Visible window onto rendered list content.
///
/// The offset follows the cursor with hysteresis rather than recentering:
/// a cursor that is already comfortably visible never causes a scroll jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    height: usize,
    offset: usize,
    margin: usize,
}

impl Viewport {
    #[must_use]
    pub const fn new(height: usize) -> Self {
        Self::with_margin(height, DEFAULT_SCROLL_MARGIN)
    }

    #[must_use]
    pub const fn with_margin(height: usize, margin: usize) -> Self {
        Self {
            height,
            offset: 0,
            margin,
        }
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Replace the window height (terminal resize) and re-sync immediately.
    pub fn resize(&mut self, height: usize, cursor_line: usize) {
        self.height = height;
        self.sync(cursor_line);
    }

    /// Follow the cursor line with the two-branch hysteresis policy.
    ///
    /// Above the window: scroll up to one line before the cursor. Within
    /// `margin` of the bottom edge or past it: scroll down just far enough
    /// to restore the margin. Otherwise the offset is left alone. The
    /// intermediate arithmetic is signed; the result is guarded at zero.
    pub fn sync(&mut self, cursor_line: usize) {
        let line = isize::try_from(cursor_line).unwrap_or(isize::MAX);
        let offset = isize::try_from(self.offset).unwrap_or(isize::MAX);
        let height = isize::try_from(self.height).unwrap_or(isize::MAX);
        let margin = isize::try_from(self.margin).unwrap_or(0);

        if line < offset {
            self.offset = usize::try_from((line - 1).max(0)).unwrap_or(0);
        } else if line + margin >= offset + height {
            self.offset = usize::try_from((line - height + 1 + margin).max(0)).unwrap_or(0);
        }
    }
}
