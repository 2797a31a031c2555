//! `qv pick` — dual-pane environment/file selection.

use anyhow::Result;
use clap::Args;
use quiver_core::picker::DualPaneCoordinator;
use std::process::ExitCode;
use tracing::info;

use crate::tui::{picker::run_picker_tui, theme::Theme};
use crate::workspace::{Workspace, WorkspaceError};

#[derive(Args, Debug)]
pub struct PickArgs {
    /// Pre-lock the environment pane to this environment.
    #[arg(long)]
    pub env: Option<String>,
}

pub fn run_pick(args: &PickArgs, workspace: &Workspace) -> Result<ExitCode> {
    let environments = workspace.environments()?;
    let coordinator = match &args.env {
        Some(env) => {
            if !environments.iter().any(|e| e == env) {
                return Err(WorkspaceError::UnknownEnvironment(env.clone()).into());
            }
            let mut c = DualPaneCoordinator::with_locked_env(env.clone());
            c.load_files(workspace.request_files(env)?);
            c
        }
        None => DualPaneCoordinator::new(environments),
    };

    let theme = Theme::default();
    match run_picker_tui(coordinator, workspace, &theme)? {
        Some(selection) => {
            info!(env = %selection.env, file = %selection.file, "selection committed");
            println!("{}\t{}", selection.env, selection.file);
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}
