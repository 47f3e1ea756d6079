//! nex - Nimble Executor
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_panics_doc)]
//!
//! Install and run developer tools straight from their git repositories.
//!
//! # Overview
//!
//! A registry publishes one manifest per package describing where the
//! package lives, which runtime it needs, and the commands it exposes.
//! `nex install` clones the repository into `~/.nex/packages/<id>/`;
//! `nex run` resolves the package (installing it on first use) and runs one
//! of its commands inside that directory.
//!
//! # Directory Layout
//!
//! ```text
//! ~/.nex/
//! ├── config.json     # user settings
//! ├── aliases.json    # shortcuts
//! ├── installed.json  # install records
//! └── packages/       # one working tree per package
//! ```

pub mod cmd;
pub mod ui;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "nex")]
#[command(author, version, about = "nex - Nimble Executor package manager")]
pub struct Cli {
    /// Log engine activity (fetched URLs, spawned commands) to stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install a package
    Install {
        /// Alias, short name, or full id (author.name)
        package: String,
    },
    /// Run a package command, installing the package first if needed
    ///
    /// Everything after the package is handed to the command untouched,
    /// `--help` included.
    #[command(disable_help_flag = true)]
    Run {
        /// Alias, short name, or full id (author.name)
        package: String,
        /// Command name (default: "default") followed by its arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Remove an installed package
    #[command(visible_alias = "uninstall")]
    Remove {
        /// Alias, installed short name, or full id
        package: String,
    },
    /// List installed packages
    List,
    /// Search the registry
    Search {
        /// Text matched against ids, names, descriptions and keywords
        query: String,
    },
    /// Show package details from the registry
    Info {
        /// Alias, short name, or full id (author.name)
        package: String,
    },
    /// Manage package aliases
    Alias {
        /// Remove the alias instead of showing or setting it
        #[arg(short, long)]
        remove: bool,
        /// Alias name
        short: Option<String>,
        /// Package the alias points to
        #[arg(conflicts_with = "remove")]
        package: Option<String>,
    },
    /// Show or change configuration
    Config {
        /// Remove the key instead of showing or setting it
        #[arg(long)]
        unset: bool,
        /// Configuration key
        key: Option<String>,
        /// New value (`true`/`false` are stored as booleans)
        #[arg(conflicts_with = "unset")]
        value: Option<String>,
    },
    /// Re-install packages whose registry version changed
    Update {
        /// Package to update (all installed packages if omitted)
        package: Option<String>,
        /// Re-install even when the version is unchanged
        #[arg(short, long)]
        force: bool,
    },
    /// Check which runtimes are available
    Doctor,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_forwards_hyphenated_args() {
        let cli = Cli::parse_from(["nex", "run", "hello", "--flag", "x"]);
        match cli.command {
            Commands::Run { package, args } => {
                assert_eq!(package, "hello");
                assert_eq!(args, vec!["--flag", "x"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_run_forwards_nex_flags_to_the_command() {
        let cli = Cli::parse_from(["nex", "run", "hello", "-v", "--help", "x"]);
        assert!(!cli.verbose);
        match cli.command {
            Commands::Run { package, args } => {
                assert_eq!(package, "hello");
                assert_eq!(args, vec!["-v", "--help", "x"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_verbose_before_subcommand() {
        let cli = Cli::parse_from(["nex", "-v", "run", "hello", "build"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Run { args, .. } if args == ["build"]));
    }

    #[test]
    fn test_alias_remove_flag() {
        let cli = Cli::parse_from(["nex", "alias", "-r", "pp"]);
        assert!(matches!(
            cli.command,
            Commands::Alias { remove: true, short: Some(s), package: None } if s == "pp"
        ));
    }
}
