use clap::{Parser, Subcommand};
use rulesync_types::ToolTarget;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rulesync")]
#[command(about = "Keep one canonical set of AI assistant rules and project them into every tool's native config format", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Project root to operate on (defaults to the current directory)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the .rulesync directory with a starter rule
    Init,

    /// Render canonical rules into every tool's native configuration
    Generate {
        /// Comma-separated subset of tools to generate for
        /// (claudecode, cursor, copilot, cline, roo, geminicli, kiro)
        #[arg(long, value_delimiter = ',')]
        tools: Option<Vec<ToolTarget>>,

        /// Delete existing output directories before generating
        #[arg(long)]
        delete: bool,

        #[arg(long, short)]
        verbose: bool,
    },

    /// Convert one tool's existing configuration into other tools' formats
    Convert {
        /// Tool whose configuration to read
        #[arg(long)]
        from: ToolTarget,

        /// Comma-separated tools to generate for
        #[arg(long, value_delimiter = ',', required = true)]
        to: Vec<ToolTarget>,

        #[arg(long, short)]
        verbose: bool,
    },

    /// Watch the .rulesync directory and regenerate on change
    Watch,
}
