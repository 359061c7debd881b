//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse override arguments at parse time so bad syntax never reaches the loader.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build the resolution context (see `config_context` module).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::formatters::OutputFormat;
use crate::overrides::{ConfigOverride, parse_override};

#[derive(Parser)]
#[command(name = "kiln-config")]
#[command(about = "Inspect kiln's layered configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  kiln-config show\n  kiln-config show core\n  kiln-config get core.threads\n  kiln-config -c core.threads=8 get core.threads\n  kiln-config --no-global-config -o json show\n  kiln-config sources\n"
)]
pub struct Cli {
    /// Project root whose .kilnconfig files are read (defaults to the current directory)
    #[arg(
        long,
        global = true,
        env = "KILN_PROJECT_ROOT",
        value_name = "DIR",
        conflicts_with = "no_project"
    )]
    pub project_root: Option<PathBuf>,

    /// Do not read any project-level configuration
    #[arg(long, global = true)]
    pub no_project: bool,

    /// Skip the system-wide and per-user configuration
    #[arg(long, global = true)]
    pub no_global_config: bool,

    /// Directory holding `kilnconfig` and `kilnconfig.d` instead of /etc
    #[arg(
        long,
        global = true,
        hide = true,
        env = "KILN_SYSTEM_CONFIG_DIR",
        value_name = "DIR"
    )]
    pub system_config_dir: Option<PathBuf>,

    /// Override a value, applied after every file (repeatable)
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "SECTION.KEY=VALUE",
        value_parser = parse_override
    )]
    pub overrides: Vec<ConfigOverride>,

    /// Output format (text, json)
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the resolved configuration
    Show {
        /// Only print this section
        section: Option<String>,
    },

    /// Print a single value
    #[command(after_help = "Exits with code 4 when the key is not set.")]
    Get {
        /// Key to look up, as section.key
        key: String,
    },

    /// List the layers that were applied, lowest precedence first
    Sources,
}
