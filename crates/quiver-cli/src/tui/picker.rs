//! Dual-pane environment/file picker view.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use quiver_core::event::InputEvent;
use quiver_core::picker::{DualPaneCoordinator, PaneFocus, PickerStep, Selection};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::keymap::map_key;
use super::theme::Theme;
use crate::workspace::Workspace;

/// Run the picker session to completion. `None` means cancelled.
pub fn run_picker_tui(
    mut coordinator: DualPaneCoordinator,
    workspace: &Workspace,
    theme: &Theme,
) -> Result<Option<Selection>> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut coordinator, workspace, theme);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    coordinator: &mut DualPaneCoordinator,
    workspace: &Workspace,
    theme: &Theme,
) -> Result<Option<Selection>> {
    loop {
        terminal.draw(|frame| render(frame, coordinator, theme))?;
        let step = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match map_key(key, false) {
                    Some(ev) => coordinator.handle_event(ev),
                    None => PickerStep::Continue,
                }
            }
            Event::Resize(width, height) => {
                coordinator.handle_event(InputEvent::Resize { width, height })
            }
            _ => PickerStep::Continue,
        };
        match step {
            PickerStep::Continue => {}
            PickerStep::EnvChosen(env) => {
                let files = workspace.request_files(&env)?;
                coordinator.load_files(files);
            }
            PickerStep::Finished(selection) => return Ok(Some(selection)),
            PickerStep::Cancelled => return Ok(None),
        }
    }
}

fn render(frame: &mut Frame<'_>, coordinator: &DualPaneCoordinator, theme: &Theme) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(frame.area());

    render_pane(
        frame,
        coordinator,
        theme,
        panes[0],
        PaneFocus::Env,
        "environment",
    );
    render_pane(frame, coordinator, theme, panes[1], PaneFocus::File, "file");
}

fn render_pane(
    frame: &mut Frame<'_>,
    coordinator: &DualPaneCoordinator,
    theme: &Theme,
    area: Rect,
    pane: PaneFocus,
    title: &str,
) {
    let focused = coordinator.focus() == pane;
    let list = match pane {
        PaneFocus::Env => coordinator.env_pane(),
        PaneFocus::File => coordinator.file_pane(),
    };
    let border = if focused {
        theme.border_focused
    } else {
        theme.border
    };
    let locked = pane == PaneFocus::Env && coordinator.env_locked();
    let heading = if locked {
        format!(" {title} (locked) ")
    } else {
        format!(" {title} ")
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(heading, theme.title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let filter_line = Line::from(vec![
        Span::styled("> ", theme.dim),
        Span::styled(list.filter().to_string(), theme.filter),
    ]);
    frame.render_widget(Paragraph::new(filter_line), rows[0]);

    let items: Vec<ListItem<'_>> = list.iter().map(|c| ListItem::new(c.to_string())).collect();
    let mut state = ListState::default();
    if !list.is_empty() && focused {
        state.select(Some(list.cursor()));
    }
    let widget = List::new(items).highlight_style(theme.highlight);
    frame.render_stateful_widget(widget, rows[1], &mut state);
}
