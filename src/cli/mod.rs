//! Command-line interface for GitGate
//!
//! This module provides the main CLI structure and command handling for
//! GitGate. It uses clap for argument parsing and keeps each subcommand in
//! its own module.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Output;

/// GitGate - pluggable git hooks engine
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run a hook with git-supplied arguments
    Run(commands::run::RunArgs),
    /// Install hook shims into .git/hooks
    Install(commands::install::InstallArgs),
    /// Remove gitgate-managed hooks from .git/hooks
    Uninstall(commands::uninstall::UninstallArgs),
    /// Inspect registered plugins
    #[command(subcommand)]
    Plugins(PluginsCommands),
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Show version information
    Version,
}

/// Plugin subcommands
#[derive(Subcommand)]
pub enum PluginsCommands {
    /// List registered plugins and their run order
    List {
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write the default configuration to gitgate.toml
    Init {
        /// Overwrite an existing gitgate.toml
        #[arg(long)]
        force: bool,
    },
    /// Validate the resolved configuration
    Validate,
    /// Show the resolved configuration
    Show,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let output = Output::new(self.verbose, self.quiet);
        let config_path = self.config.as_deref();

        match self.command {
            Some(Commands::Run(args)) => commands::run::execute(args, config_path, &output),
            Some(Commands::Install(args)) => commands::install::execute(args, &output),
            Some(Commands::Uninstall(args)) => commands::uninstall::execute(args, &output),
            Some(Commands::Plugins(cmd)) => commands::plugins::execute(cmd, config_path, &output),
            Some(Commands::Config(cmd)) => commands::config::execute(cmd, config_path, &output),
            Some(Commands::Version) => commands::version::execute(&output),
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}
