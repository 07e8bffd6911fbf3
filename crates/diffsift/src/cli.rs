use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "diffsift",
    version,
    about = "Strip line-ending and whitespace-only noise from unified diffs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Specify configuration file path
    #[arg(long, env = "DIFFSIFT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "DIFFSIFT_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Clean a unified diff read from stdin or a file
    Clean {
        /// Read the diff from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Clean each file section separately and drop files left empty
        #[arg(long)]
        per_file: bool,

        /// Print a JSON report instead of the cleaned diff
        #[arg(long)]
        json: bool,
    },

    /// Exit 0 when the diff only changes line endings, 1 otherwise
    Check {
        /// Read the diff from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Convert CRLF and CR line endings to LF
    Normalize {
        /// Read text from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print the diff unless both files match after line-ending normalization
    Compare {
        /// Original file content
        #[arg(long)]
        original: PathBuf,

        /// Modified file content
        #[arg(long)]
        modified: PathBuf,

        /// Read the diff from this file instead of stdin
        #[arg(long)]
        diff: Option<PathBuf>,
    },
}
