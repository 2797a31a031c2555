//! `qv ops` — operation explorer.

use anyhow::Result;
use clap::Args;
use quiver_core::explorer::{Operation, OperationExplorer};
use std::process::ExitCode;

use crate::ingest;
use crate::tui::{explorer::run_explorer_tui, theme::Theme};
use crate::workspace::Workspace;

#[derive(Args, Debug)]
pub struct OpsArgs {
    /// Seed the filter line (e.g. "q:user").
    #[arg(long)]
    pub filter: Option<String>,

    /// Print matching operations instead of opening the explorer.
    #[arg(long)]
    pub print: bool,
}

pub fn run_ops(args: &OpsArgs, workspace: &Workspace) -> Result<ExitCode> {
    let operations = ingest::load_operations(&workspace.operations_path()?)?;
    let mut explorer = OperationExplorer::new(operations);
    if let Some(filter) = &args.filter {
        explorer.apply_filter(filter);
    }

    if args.print {
        for op in explorer.filtered_operations() {
            print_operation(op);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let theme = Theme::default();
    match run_explorer_tui(explorer, &theme)? {
        Some(op) => {
            print_operation(&op);
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}

fn print_operation(op: &Operation) {
    println!("{}\t{}\t{}", op.kind.label(), op.name(), op.endpoint);
}
