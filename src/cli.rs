use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::i18n::Locale;

/// treeview - an editable, collapsible tree view for the terminal
#[derive(Parser, Debug)]
#[command(name = "treeview")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH", env = "TREEVIEW_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Launch the interactive tree editor
    Tui(TuiArgs),

    /// Print the starting tree and its pre-order traversal
    Show(ShowArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct TuiArgs {
    /// Start with a bare root instead of the demo tree
    #[arg(long)]
    pub empty: bool,

    /// Interface language
    #[arg(long, value_enum, value_name = "LANG")]
    pub locale: Option<Locale>,

    /// Don't capture the mouse
    #[arg(long)]
    pub no_mouse: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Start with a bare root instead of the demo tree
    #[arg(long)]
    pub empty: bool,

    /// Spaces per tree level
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=8))]
    pub indent: Option<u8>,

    /// Draw the tree with box-drawing guides
    #[arg(long)]
    pub outline: bool,

    /// Also print the pre-order traversal
    #[arg(long)]
    pub order: bool,
}
