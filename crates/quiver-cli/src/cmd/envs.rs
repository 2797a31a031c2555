//! `qv envs` — non-interactive environment listing.

use anyhow::Result;

use crate::workspace::Workspace;

pub fn run_envs(workspace: &Workspace) -> Result<()> {
    for env in workspace.environments()? {
        println!("{env}");
    }
    Ok(())
}
