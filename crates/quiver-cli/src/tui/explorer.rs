//! Operation explorer view.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use quiver_core::event::InputEvent;
use quiver_core::explorer::{DisplayRow, ExplorerStep, Operation, OperationExplorer};
use quiver_core::viewport::Viewport;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::keymap::map_key;
use super::theme::Theme;

/// Explorer state plus the viewport that follows its cursor.
struct ExplorerView {
    explorer: OperationExplorer,
    viewport: Viewport,
}

impl ExplorerView {
    fn new(explorer: OperationExplorer) -> Self {
        Self {
            explorer,
            viewport: Viewport::new(0),
        }
    }
}

/// Run the explorer session to completion. `None` means cancelled.
pub fn run_explorer_tui(
    explorer: OperationExplorer,
    theme: &Theme,
) -> Result<Option<Operation>> {
    let mut terminal = ratatui::init();
    let mut view = ExplorerView::new(explorer);
    let result = event_loop(&mut terminal, &mut view, theme);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    view: &mut ExplorerView,
    theme: &Theme,
) -> Result<Option<Operation>> {
    loop {
        terminal.draw(|frame| render(frame, view, theme))?;
        let step = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match map_key(key, view.explorer.in_endpoint_picker()) {
                    Some(ev) => view.explorer.handle_event(ev),
                    None => ExplorerStep::Continue,
                }
            }
            Event::Resize(width, height) => {
                view.explorer.handle_event(InputEvent::Resize { width, height })
            }
            _ => ExplorerStep::Continue,
        };
        match step {
            ExplorerStep::Continue => {}
            ExplorerStep::Selected(op) => return Ok(Some(op)),
            ExplorerStep::Cancelled => return Ok(None),
        }
    }
}

fn render(frame: &mut Frame<'_>, view: &mut ExplorerView, theme: &Theme) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let filter_line = Line::from(vec![
        Span::styled("filter: ", theme.dim),
        Span::styled(view.explorer.filter().to_string(), theme.filter),
    ]);
    frame.render_widget(Paragraph::new(filter_line), sections[0]);

    render_rows(frame, view, theme, sections[1]);
    render_detail(frame, &view.explorer, theme, sections[2]);

    if view.explorer.in_endpoint_picker() {
        render_endpoint_picker(frame, &view.explorer, theme);
    }
}

fn render_rows(frame: &mut Frame<'_>, view: &mut ExplorerView, theme: &Theme, area: Rect) {
    view.viewport
        .resize(area.height as usize, view.explorer.cursor_line());

    let rows = view.explorer.display_rows();
    let cursor_line = view.explorer.cursor_line();
    let offset = view.viewport.offset();

    let lines: Vec<Line<'_>> = rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(view.viewport.height())
        .map(|(line_no, row)| match row {
            DisplayRow::Header(kind) => Line::styled(kind.label().to_string(), theme.header),
            DisplayRow::Operation(i) => {
                let op = &view.explorer.operations()[*i];
                let style = if line_no == cursor_line {
                    theme.highlight
                } else {
                    ratatui::style::Style::default()
                };
                Line::from(vec![
                    Span::styled(format!("  {}", op.name()), style),
                    Span::styled(format!("  {}", op.endpoint_short), theme.dim),
                ])
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_detail(
    frame: &mut Frame<'_>,
    explorer: &OperationExplorer,
    theme: &Theme,
    area: Rect,
) {
    let block = Block::default().borders(Borders::TOP).border_style(theme.border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(op) = explorer.selected_operation() else {
        frame.render_widget(Paragraph::new(Span::styled("no match", theme.dim)), inner);
        return;
    };
    let args = op
        .args
        .iter()
        .map(|a| format!("{}: {}", a.name, a.type_name))
        .collect::<Vec<_>>()
        .join(", ");
    let signature = match &op.return_type {
        Some(ret) => format!("{}({args}) -> {ret}", op.name()),
        None => format!("{}({args})", op.name()),
    };
    let mut lines = vec![Line::from(vec![
        Span::styled(op.kind.label(), theme.header),
        Span::raw(" "),
        Span::styled(signature, theme.title),
        Span::raw("  "),
        Span::styled(op.endpoint.clone(), theme.dim),
    ])];
    if let Some(desc) = &op.description {
        lines.push(Line::styled(desc.clone(), theme.dim));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_endpoint_picker(frame: &mut Frame<'_>, explorer: &OperationExplorer, theme: &Theme) {
    let area = centered_rect(frame.area(), 60, explorer.endpoints().len() as u16 + 2);
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused)
        .title(Span::styled(" endpoints ", theme.title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cursor = explorer.picker_cursor().unwrap_or(0);
    let lines: Vec<Line<'_>> = explorer
        .endpoints()
        .iter()
        .enumerate()
        .map(|(i, endpoint)| {
            let mark = if explorer.pending_contains(i) { "[x]" } else { "[ ]" };
            let style = if i == cursor {
                theme.highlight
            } else {
                ratatui::style::Style::default()
            };
            Line::styled(format!("{mark} {endpoint}"), style)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn centered_rect(area: Rect, width_percent: u16, height: u16) -> Rect {
    let width = area.width * width_percent / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height: height.min(area.height),
    }
}
