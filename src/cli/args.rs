//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// In-memory course catalog: ordered listing and exact-name lookup
#[derive(Parser, Debug)]
#[command(name = "coursecat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Catalog source file (falls back to config, then courses.csv)
    #[arg(
        short = 'f',
        long,
        global = true,
        env = "COURSECAT_CATALOG",
        value_hint = ValueHint::FilePath
    )]
    pub catalog: Option<PathBuf>,

    /// Raise log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Defaults to the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print all courses in name order
    List,

    /// Show one course with its prerequisites
    Show {
        /// Course name, any case
        course: String,
    },

    /// Interactive numbered menu (load, list, look up)
    Menu,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config file path
    Path,
}
