//! Filterable candidate list with a clamped cursor.

use crate::cursor;

/// Whether an empty filter shows the full candidate set or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gate {
    /// Empty filter shows every candidate.
    #[default]
    Eager,
    /// Nothing is shown until at least one character is typed.
    Gated,
}

/// One selection session over an immutable, ordered candidate set.
///
/// The filtered view is an order-preserving subset of the candidates;
/// the cursor always satisfies `cursor < filtered.len()` while the view
/// is non-empty, and every filter edit re-clamps it.
#[derive(Debug, Clone)]
pub struct FilterableList {
    candidates: Vec<String>,
    filter: String,
    filtered: Vec<usize>,
    cursor: usize,
    gate: Gate,
}

impl FilterableList {
    #[must_use]
    pub fn new(candidates: Vec<String>, gate: Gate) -> Self {
        let mut list = Self {
            candidates,
            filter: String::new(),
            filtered: Vec::new(),
            cursor: 0,
            gate,
        };
        list.refilter();
        list
    }

    /// Replace the whole filter string and recompute the filtered view.
    pub fn apply_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
        self.refilter();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.refilter();
    }

    pub fn push_char(&mut self, c: char) {
        self.filter.push(c);
        self.refilter();
    }

    pub fn pop_char(&mut self) {
        self.filter.pop();
        self.refilter();
    }

    pub fn delete_word(&mut self) {
        delete_trailing_word(&mut self.filter);
        self.refilter();
    }

    pub fn select_next(&mut self) {
        self.cursor = cursor::move_down(self.cursor, self.filtered.len());
    }

    pub fn select_prev(&mut self) {
        self.cursor = cursor::move_up(self.cursor);
    }

    /// Candidate under the cursor, `None` when the view is empty or the
    /// cursor is stale (defensive; the invariant prevents the latter).
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.filtered
            .get(self.cursor)
            .map(|&i| self.candidates[i].as_str())
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.filtered.len()
    }

    /// Iterate the filtered view in candidate order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.filtered.iter().map(|&i| self.candidates[i].as_str())
    }

    fn refilter(&mut self) {
        self.filtered.clear();
        if self.filter.is_empty() {
            match self.gate {
                Gate::Eager => self.filtered.extend(0..self.candidates.len()),
                Gate::Gated => {}
            }
        } else {
            let needle = self.filter.to_lowercase();
            self.filtered.extend(
                self.candidates
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| c.to_lowercase().contains(&needle))
                    .map(|(i, _)| i),
            );
        }
        self.cursor = cursor::clamp(self.cursor, self.filtered.len());
    }
}

/// Remove the trailing word (and any trailing spaces) from `value`.
pub fn delete_trailing_word(value: &mut String) {
    while value.ends_with(' ') {
        value.pop();
    }
    while let Some(c) = value.chars().last() {
        if c == ' ' {
            break;
        }
        value.pop();
    }
}
