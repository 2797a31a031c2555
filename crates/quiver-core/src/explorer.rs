//! GraphQL operation explorer.
//!
//! A single filter line drives everything: an optional `q:`/`m:`/`s:` kind
//! prefix, free text matched against operation names, and a trailing `e:`
//! that opens a multi-select endpoint picker when the catalog spans more
//! than one endpoint. The endpoint picker edits a draft set; the live
//! filter only changes on commit.

use std::collections::BTreeSet;

use crate::cursor;
use crate::event::InputEvent;
use tracing::debug;

/// Operation kind, ordered the way results are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// Group rank used for the stable kind sort.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Query => 0,
            Self::Mutation => 1,
            Self::Subscription => 2,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }

    /// Map a filter prefix character to a kind. The grammar is closed:
    /// anything but `q`, `m`, `s` is not a kind prefix.
    #[must_use]
    pub const fn from_prefix(c: char) -> Option<Self> {
        match c {
            'q' => Some(Self::Query),
            'm' => Some(Self::Mutation),
            's' => Some(Self::Subscription),
            _ => None,
        }
    }
}

/// One named argument of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub type_name: String,
}

/// One catalog entry. The lowercased name is cached because it is compared
/// on every keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    name: String,
    name_lower: String,
    pub description: Option<String>,
    pub kind: OperationKind,
    pub endpoint: String,
    pub endpoint_short: String,
    pub args: Vec<Argument>,
    pub return_type: Option<String>,
}

impl Operation {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: OperationKind, endpoint: impl Into<String>) -> Self {
        let name = name.into();
        let endpoint = endpoint.into();
        Self {
            name_lower: name.to_lowercase(),
            name,
            description: None,
            kind,
            endpoint_short: shorten_endpoint(&endpoint),
            endpoint,
            args: Vec::new(),
            return_type: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn name_lower(&self) -> &str {
        &self.name_lower
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.name_lower = self.name.to_lowercase();
    }
}

/// Compact display form of an endpoint URL: host plus trailing path
/// segment, enough to tell endpoints apart in a narrow column.
#[must_use]
pub fn shorten_endpoint(endpoint: &str) -> String {
    let trimmed = endpoint
        .strip_prefix("https://")
        .or_else(|| endpoint.strip_prefix("http://"))
        .unwrap_or(endpoint);
    let mut parts = trimmed.split('/').filter(|p| !p.is_empty());
    let host = parts.next().unwrap_or(trimmed);
    match parts.last() {
        Some(tail) if tail != host => format!("{host}/{tail}"),
        _ => host.to_string(),
    }
}

/// Parsed form of the filter line: optional kind restriction plus a
/// lowercased free-text term.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterQuery {
    pub kind: Option<OperationKind>,
    pub term: String,
}

impl FilterQuery {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut chars = raw.chars();
        if let (Some(c), Some(':')) = (chars.next(), chars.next()) {
            if let Some(kind) = OperationKind::from_prefix(c.to_ascii_lowercase()) {
                let rest = &raw[c.len_utf8() + 1..];
                return Self {
                    kind: Some(kind),
                    term: rest.trim().to_lowercase(),
                };
            }
        }
        Self {
            kind: None,
            term: raw.trim().to_lowercase(),
        }
    }
}

/// One renderable row of the grouped result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRow {
    /// Group heading for a kind that has at least one visible operation.
    Header(OperationKind),
    /// Index into the catalog's operation vector.
    Operation(usize),
}

/// What the caller must do after feeding one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerStep {
    Continue,
    Selected(Operation),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Filtering,
    EndpointPicker {
        cursor: usize,
        pending: BTreeSet<String>,
    },
}

/// Interactive explorer over an operation catalog.
pub struct OperationExplorer {
    operations: Vec<Operation>,
    endpoints: Vec<String>,
    filter: String,
    filtered: Vec<usize>,
    cursor: usize,
    active_endpoints: BTreeSet<String>,
    mode: Mode,
}

impl OperationExplorer {
    #[must_use]
    pub fn new(mut operations: Vec<Operation>) -> Self {
        // Stable sort: kind groups in rank order, ingestion order within.
        operations.sort_by_key(|op| op.kind.rank());
        let endpoints: BTreeSet<String> =
            operations.iter().map(|op| op.endpoint.clone()).collect();
        let mut explorer = Self {
            operations,
            endpoints: endpoints.into_iter().collect(),
            filter: String::new(),
            filtered: Vec::new(),
            cursor: 0,
            active_endpoints: BTreeSet::new(),
            mode: Mode::Filtering,
        };
        explorer.refilter();
        explorer
    }

    /// Seed the filter line (e.g. from a command-line flag). Does not
    /// evaluate the endpoint-picker trigger.
    pub fn apply_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
        self.refilter();
    }

    pub fn handle_event(&mut self, event: InputEvent) -> ExplorerStep {
        if matches!(event, InputEvent::Quit) {
            return ExplorerStep::Cancelled;
        }
        match self.mode {
            Mode::Filtering => self.handle_filtering(event),
            Mode::EndpointPicker { .. } => self.handle_picker(event),
        }
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Visible operations in display order.
    pub fn filtered_operations(&self) -> impl Iterator<Item = &Operation> {
        self.filtered.iter().map(|&i| &self.operations[i])
    }

    #[must_use]
    pub fn selected_operation(&self) -> Option<&Operation> {
        self.filtered.get(self.cursor).map(|&i| &self.operations[i])
    }

    #[must_use]
    pub const fn in_endpoint_picker(&self) -> bool {
        matches!(self.mode, Mode::EndpointPicker { .. })
    }

    #[must_use]
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    #[must_use]
    pub const fn active_endpoints(&self) -> &BTreeSet<String> {
        &self.active_endpoints
    }

    /// Draft-set membership of the endpoint at `index` (picker mode only).
    #[must_use]
    pub fn pending_contains(&self, index: usize) -> bool {
        match &self.mode {
            Mode::EndpointPicker { pending, .. } => self
                .endpoints
                .get(index)
                .is_some_and(|e| pending.contains(e)),
            Mode::Filtering => false,
        }
    }

    #[must_use]
    pub fn picker_cursor(&self) -> Option<usize> {
        match self.mode {
            Mode::EndpointPicker { cursor, .. } => Some(cursor),
            Mode::Filtering => None,
        }
    }

    /// Grouped result rows: a header per kind that has visible operations,
    /// each followed by its operations in catalog order.
    #[must_use]
    pub fn display_rows(&self) -> Vec<DisplayRow> {
        let mut rows = Vec::with_capacity(self.filtered.len() + 3);
        let mut current: Option<OperationKind> = None;
        for &i in &self.filtered {
            let kind = self.operations[i].kind;
            if current != Some(kind) {
                rows.push(DisplayRow::Header(kind));
                current = Some(kind);
            }
            rows.push(DisplayRow::Operation(i));
        }
        rows
    }

    /// Row index of the cursor inside [`Self::display_rows`], accounting
    /// for the headers interleaved above it.
    #[must_use]
    pub fn cursor_line(&self) -> usize {
        let Some(&target) = self.filtered.get(self.cursor) else {
            return 0;
        };
        self.display_rows()
            .iter()
            .position(|row| *row == DisplayRow::Operation(target))
            .unwrap_or(0)
    }

    fn handle_filtering(&mut self, event: InputEvent) -> ExplorerStep {
        match event {
            InputEvent::Char(c) => {
                self.filter.push(c);
                self.after_edit();
                ExplorerStep::Continue
            }
            InputEvent::Backspace => {
                self.filter.pop();
                self.after_edit();
                ExplorerStep::Continue
            }
            InputEvent::DeleteWord => {
                crate::list::delete_trailing_word(&mut self.filter);
                self.after_edit();
                ExplorerStep::Continue
            }
            InputEvent::ClearLine => {
                self.filter.clear();
                self.refilter();
                ExplorerStep::Continue
            }
            InputEvent::Up => {
                self.cursor = cursor::move_up(self.cursor);
                ExplorerStep::Continue
            }
            InputEvent::Down => {
                self.cursor = cursor::move_down(self.cursor, self.filtered.len());
                ExplorerStep::Continue
            }
            InputEvent::Enter => match self.selected_operation() {
                Some(op) => ExplorerStep::Selected(op.clone()),
                None => ExplorerStep::Continue,
            },
            InputEvent::Cancel => {
                if self.filter.is_empty() {
                    ExplorerStep::Cancelled
                } else {
                    self.filter.clear();
                    self.refilter();
                    ExplorerStep::Continue
                }
            }
            InputEvent::Space => {
                self.filter.push(' ');
                self.after_edit();
                ExplorerStep::Continue
            }
            InputEvent::Tab | InputEvent::Resize { .. } | InputEvent::Quit => {
                ExplorerStep::Continue
            }
        }
    }

    fn handle_picker(&mut self, event: InputEvent) -> ExplorerStep {
        let Mode::EndpointPicker { cursor, pending } = &mut self.mode else {
            return ExplorerStep::Continue;
        };
        match event {
            InputEvent::Up => {
                *cursor = cursor::move_up(*cursor);
            }
            InputEvent::Down => {
                *cursor = cursor::move_down(*cursor, self.endpoints.len());
            }
            InputEvent::Space | InputEvent::Char(' ') => {
                if let Some(endpoint) = self.endpoints.get(*cursor) {
                    if !pending.remove(endpoint) {
                        pending.insert(endpoint.clone());
                    }
                }
            }
            InputEvent::Enter => {
                self.active_endpoints = pending.clone();
                debug!(active = self.active_endpoints.len(), "endpoint set committed");
                self.leave_picker();
            }
            InputEvent::Cancel => {
                // Draft discarded; the active set is untouched.
                self.leave_picker();
            }
            _ => {}
        }
        ExplorerStep::Continue
    }

    /// Re-run after every filter edit: first check the endpoint-picker
    /// trigger, then recompute the visible set.
    fn after_edit(&mut self) {
        if self.endpoint_trigger() {
            self.mode = Mode::EndpointPicker {
                cursor: 0,
                pending: self.active_endpoints.clone(),
            };
            return;
        }
        self.refilter();
    }

    /// A trailing `e:` opens the picker only when there is a real choice
    /// to make, i.e. more than one distinct endpoint.
    fn endpoint_trigger(&self) -> bool {
        self.filter.to_lowercase().ends_with("e:") && self.endpoints.len() > 1
    }

    /// Drop the trailing `e:` trigger and return to filtering.
    fn leave_picker(&mut self) {
        if self.filter.to_lowercase().ends_with("e:") {
            self.filter.truncate(self.filter.len() - 2);
        }
        self.mode = Mode::Filtering;
        self.refilter();
    }

    fn refilter(&mut self) {
        let query = FilterQuery::parse(&self.filter);
        self.filtered.clear();
        self.filtered.extend(
            self.operations
                .iter()
                .enumerate()
                .filter(|(_, op)| {
                    query.kind.is_none_or(|k| op.kind == k)
                        && (self.active_endpoints.is_empty()
                            || self.active_endpoints.contains(&op.endpoint))
                        && (query.term.is_empty() || op.name_lower.contains(&query.term))
                })
                .map(|(i, _)| i),
        );
        self.cursor = cursor::clamp(self.cursor, self.filtered.len());
    }
}
