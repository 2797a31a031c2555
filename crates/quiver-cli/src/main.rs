#![forbid(unsafe_code)]

mod cmd;
mod config;
mod ingest;
mod tui;
mod workspace;

use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use workspace::Workspace;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "qv: terminal picker and operation explorer for GraphQL workspaces",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Workspace directory (defaults to the current directory).
    #[arg(long, global = true)]
    workspace: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Pick an environment and request file",
        long_about = "Open the dual-pane picker: choose an environment, then a request file.",
        after_help = "EXAMPLES:\n    # Pick interactively\n    qv pick\n\n    # Lock the environment, pick only the file\n    qv pick --env staging"
    )]
    Pick(cmd::pick::PickArgs),

    #[command(
        about = "Explore GraphQL operations",
        long_about = "Open the operation explorer over the workspace's operation catalog.",
        after_help = "EXAMPLES:\n    # Explore interactively\n    qv ops\n\n    # Seed the filter with a kind prefix\n    qv ops --filter q:user\n\n    # Print matches for scripting\n    qv ops --filter m: --print"
    )]
    Ops(cmd::ops::OpsArgs),

    #[command(
        about = "List discovered environments",
        after_help = "EXAMPLES:\n    # One environment name per line\n    qv envs"
    )]
    Envs,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("QUIVER_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "quiver=debug,info"
        } else {
            "quiver=info,warn"
        })
    });

    let format = env::var("QUIVER_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let root = match cli.workspace {
        Some(ref dir) => dir.clone(),
        None => env::current_dir()?,
    };
    let workspace = Workspace::discover(&root)?;

    match cli.command {
        Commands::Pick(ref args) => cmd::pick::run_pick(args, &workspace),
        Commands::Ops(ref args) => cmd::ops::run_ops(args, &workspace),
        Commands::Envs => {
            cmd::envs::run_envs(&workspace)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_subcommand_parses() {
        let cli = Cli::parse_from(["qv", "pick"]);
        assert!(matches!(cli.command, Commands::Pick(_)));
    }

    #[test]
    fn pick_env_flag_parses() {
        let cli = Cli::parse_from(["qv", "pick", "--env", "staging"]);
        match cli.command {
            Commands::Pick(args) => assert_eq!(args.env.as_deref(), Some("staging")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn ops_filter_and_print_flags_parse() {
        let cli = Cli::parse_from(["qv", "ops", "--filter", "q:user", "--print"]);
        match cli.command {
            Commands::Ops(args) => {
                assert_eq!(args.filter.as_deref(), Some("q:user"));
                assert!(args.print);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn workspace_flag_is_global() {
        let cli = Cli::parse_from(["qv", "envs", "--workspace", "/tmp/ws"]);
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/ws")));
        assert!(matches!(cli.command, Commands::Envs));
    }

    #[test]
    fn quiet_flag_parsed() {
        let cli = Cli::parse_from(["qv", "-q", "envs"]);
        assert!(cli.quiet);
    }

    #[test]
    fn all_subcommands_listed() {
        let subcommands = [
            vec!["qv", "pick"],
            vec!["qv", "ops"],
            vec!["qv", "envs"],
        ];
        for args in &subcommands {
            let result = Cli::try_parse_from(args.iter());
            assert!(
                result.is_ok(),
                "Failed to parse: {:?} — error: {:?}",
                args,
                result.err()
            );
        }
    }
}
