//! Command-line surface of the `plume` binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "plume")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Render FALL3D input files from typed section schemas")]
pub struct Cli {
    /// Configuration file (TOML); `plume.toml` in the working directory is used if present
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the default document, optionally with values applied
    Render(RenderArgs),
    /// List section tags in file order
    Sections,
    /// Show the fields of one section
    Fields {
        /// Section tag, e.g. GRID
        tag: String,
        /// Print the entries as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Default, Args)]
pub struct RenderArgs {
    /// TOML file of `[SECTION]` tables holding `key = value` pairs
    #[arg(long)]
    pub values: Option<PathBuf>,
    /// Render only this section
    #[arg(long)]
    pub section: Option<String>,
    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
