//! nex - Nimble Executor CLI

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use nex_cli::ui::output::{TerminalReporter, print_error};
use nex_cli::{Cli, Commands, cmd};
use nex_core::{Context, NexPaths};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let default_directive = if cli.verbose {
        "nex_core=debug,nex_cli=debug"
    } else {
        "error"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match dispatch(cli.command).await {
        Ok(code) => code,
        Err(e) => {
            print_error(&format!("{e}"));
            ExitCode::FAILURE
        }
    }
}

async fn dispatch(command: Commands) -> Result<ExitCode> {
    if let Commands::Completions { shell } = command {
        cmd::completions::completions(shell);
        return Ok(ExitCode::SUCCESS);
    }

    let paths = NexPaths::discover()?;
    paths.ensure_directories()?;
    let ctx = Context::new(paths, Arc::new(TerminalReporter))?;

    match command {
        Commands::Install { package } => cmd::install::install(&ctx, &package).await?,
        Commands::Run { package, args } => {
            let code = cmd::run::run(&ctx, &package, &args).await?;
            return Ok(ExitCode::from(cmd::run::exit_byte(code)));
        }
        Commands::Remove { package } => cmd::remove::remove(&ctx, &package).await?,
        Commands::List => cmd::list::list(&ctx),
        Commands::Search { query } => cmd::search::search(&ctx, &query).await?,
        Commands::Info { package } => cmd::info::info(&ctx, &package).await?,
        Commands::Alias {
            remove,
            short,
            package,
        } => cmd::alias::alias(&ctx, remove, short.as_deref(), package.as_deref()).await?,
        Commands::Config { unset, key, value } => {
            cmd::config::config(&ctx, unset, key.as_deref(), value.as_deref())?;
        }
        Commands::Update { package, force } => {
            cmd::update::update(&ctx, package.as_deref(), force).await?;
        }
        Commands::Doctor => cmd::doctor::doctor(&ctx).await,
        Commands::Completions { .. } => {}
    }
    Ok(ExitCode::SUCCESS)
}
