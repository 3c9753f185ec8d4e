pub mod info;
pub mod msf;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use prim_common::config::{self, Config};

#[derive(Parser)]
#[command(name = "prim")]
#[command(version, about = "Minimum spanning forests of weighted graphs.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output: -q hides headers and progress, -qq hides warnings
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Args)]
pub struct GraphFile {
    /// Distance file with one `from,to,weight` record per line
    pub file: PathBuf,

    /// Field separator of the distance file
    #[arg(short, long, default_value_t = config::DEFAULT_DELIMITER)]
    pub delimiter: char,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the minimum spanning forest of a distance file
    #[command(alias = "m")]
    Msf {
        #[command(flatten)]
        input: GraphFile,

        /// Unit printed after the total weight
        #[arg(short, long, default_value = config::DEFAULT_UNIT)]
        unit: String,

        /// Print only the totals, not every edge
        #[arg(short, long)]
        summary_only: bool,
    },
    /// Show the size of the graph described by a distance file
    #[command(alias = "i")]
    Info {
        #[command(flatten)]
        input: GraphFile,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let mut cfg = Config {
            quiet: self.quiet,
            ..Config::default()
        };

        match &self.command {
            Commands::Msf {
                input,
                unit,
                summary_only,
            } => {
                cfg.delimiter = input.delimiter;
                cfg.unit = unit.clone();
                cfg.summary_only = *summary_only;
            }
            Commands::Info { input } => {
                cfg.delimiter = input.delimiter;
            }
        }

        cfg
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
