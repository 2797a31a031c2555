//! Dual-pane environment/file selection.
//!
//! Sequences two dependent selections: pick an environment, then a request
//! file that belongs to it. The lifecycle is an explicit state machine so
//! the redirect-on-premature-enter transition stays visible and testable.

use crate::event::InputEvent;
use crate::list::{FilterableList, Gate};
use tracing::debug;

/// Which pane receives input. Exactly one pane is focused at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneFocus {
    Env,
    File,
}

/// Lifecycle phase of one picker session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingEnv,
    AwaitingFile,
    Done,
    Cancelled,
}

/// Committed result of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub env: String,
    pub file: String,
}

/// What the caller must do after feeding one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerStep {
    /// Keep feeding events.
    Continue,
    /// An environment was committed; answer with
    /// [`DualPaneCoordinator::load_files`] before the next event.
    EnvChosen(String),
    Finished(Selection),
    Cancelled,
}

/// Two [`FilterableList`] panes plus a focus flag and the env lock.
pub struct DualPaneCoordinator {
    env_list: FilterableList,
    file_list: FilterableList,
    focus: PaneFocus,
    env_locked: bool,
    selected_env: Option<String>,
    phase: Phase,
}

impl DualPaneCoordinator {
    #[must_use]
    pub fn new(envs: Vec<String>) -> Self {
        Self {
            env_list: FilterableList::new(envs, Gate::Eager),
            file_list: FilterableList::new(Vec::new(), Gate::Eager),
            focus: PaneFocus::Env,
            env_locked: false,
            selected_env: None,
            phase: Phase::AwaitingEnv,
        }
    }

    /// Build a session whose environment was supplied externally. The env
    /// pane is display-only and focus starts (and stays) on the file pane.
    #[must_use]
    pub fn with_locked_env(env: impl Into<String>) -> Self {
        let env = env.into();
        Self {
            env_list: FilterableList::new(vec![env.clone()], Gate::Eager),
            file_list: FilterableList::new(Vec::new(), Gate::Eager),
            focus: PaneFocus::File,
            env_locked: true,
            selected_env: Some(env),
            phase: Phase::AwaitingFile,
        }
    }

    /// Replace the file pane's candidates after an environment commit.
    pub fn load_files(&mut self, files: Vec<String>) {
        self.file_list = FilterableList::new(files, Gate::Eager);
    }

    pub fn handle_event(&mut self, event: InputEvent) -> PickerStep {
        if matches!(self.phase, Phase::Done | Phase::Cancelled) {
            return PickerStep::Continue;
        }
        match event {
            InputEvent::Quit => {
                self.phase = Phase::Cancelled;
                PickerStep::Cancelled
            }
            InputEvent::Tab => {
                if !self.env_locked {
                    self.transfer_focus(match self.focus {
                        PaneFocus::Env => PaneFocus::File,
                        PaneFocus::File => PaneFocus::Env,
                    });
                }
                PickerStep::Continue
            }
            InputEvent::Up => {
                self.focused_list_mut().select_prev();
                PickerStep::Continue
            }
            InputEvent::Down => {
                self.focused_list_mut().select_next();
                PickerStep::Continue
            }
            InputEvent::Char(c) => {
                self.focused_list_mut().push_char(c);
                PickerStep::Continue
            }
            InputEvent::Space => {
                self.focused_list_mut().push_char(' ');
                PickerStep::Continue
            }
            InputEvent::Backspace => {
                self.focused_list_mut().pop_char();
                PickerStep::Continue
            }
            InputEvent::DeleteWord => {
                self.focused_list_mut().delete_word();
                PickerStep::Continue
            }
            InputEvent::ClearLine => {
                self.focused_list_mut().clear_filter();
                PickerStep::Continue
            }
            InputEvent::Enter => self.commit(),
            InputEvent::Cancel => self.cancel_step(),
            InputEvent::Resize { .. } => PickerStep::Continue,
        }
    }

    #[must_use]
    pub const fn env_pane(&self) -> &FilterableList {
        &self.env_list
    }

    #[must_use]
    pub const fn file_pane(&self) -> &FilterableList {
        &self.file_list
    }

    #[must_use]
    pub const fn focus(&self) -> PaneFocus {
        self.focus
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn env_locked(&self) -> bool {
        self.env_locked
    }

    #[must_use]
    pub fn selected_env(&self) -> Option<&str> {
        self.selected_env.as_deref()
    }

    fn focused_list_mut(&mut self) -> &mut FilterableList {
        match self.focus {
            PaneFocus::Env => &mut self.env_list,
            PaneFocus::File => &mut self.file_list,
        }
    }

    fn transfer_focus(&mut self, to: PaneFocus) {
        self.focus = to;
        self.phase = match to {
            PaneFocus::Env => Phase::AwaitingEnv,
            PaneFocus::File => Phase::AwaitingFile,
        };
    }

    fn commit(&mut self) -> PickerStep {
        match self.focus {
            PaneFocus::Env => {
                if self.env_locked {
                    // Locked value stands; enter is only a focus move.
                    self.transfer_focus(PaneFocus::File);
                    return PickerStep::Continue;
                }
                match self.env_list.selected() {
                    Some(env) => {
                        let env = env.to_string();
                        debug!(env = %env, "environment committed");
                        self.selected_env = Some(env.clone());
                        self.transfer_focus(PaneFocus::File);
                        PickerStep::EnvChosen(env)
                    }
                    None => PickerStep::Continue,
                }
            }
            PaneFocus::File => {
                let Some(env) = self.selected_env.clone() else {
                    // Dependent selection guard: a file cannot be committed
                    // before its environment exists.
                    self.transfer_focus(PaneFocus::Env);
                    return PickerStep::Continue;
                };
                match self.file_list.selected() {
                    Some(file) => {
                        let selection = Selection {
                            env,
                            file: file.to_string(),
                        };
                        self.phase = Phase::Done;
                        PickerStep::Finished(selection)
                    }
                    None => PickerStep::Continue,
                }
            }
        }
    }

    fn cancel_step(&mut self) -> PickerStep {
        if !self.focused_list_mut().filter().is_empty() {
            self.focused_list_mut().clear_filter();
            return PickerStep::Continue;
        }
        match self.focus {
            PaneFocus::File if !self.env_locked => {
                self.transfer_focus(PaneFocus::Env);
                PickerStep::Continue
            }
            _ => {
                self.phase = Phase::Cancelled;
                PickerStep::Cancelled
            }
        }
    }
}
