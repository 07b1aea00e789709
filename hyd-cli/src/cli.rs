use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use hyd_core::Swipe;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hyd")]
#[command(about = "Compose, archive and export front-matter markdown notes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the archive and drafts lists
    #[arg(long, global = true, env = "HYD_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Settings file (defaults to ~/.config/hyd/settings.json)
    #[arg(long, global = true, env = "HYD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a note and save it to the archive, keep it as a draft, or export it
    New(NewArgs),

    /// Saved and exported documents
    Archive {
        #[command(subcommand)]
        cmd: ListCommands,
    },

    /// Unfinished entries
    Drafts {
        #[command(subcommand)]
        cmd: ListCommands,
    },

    /// Show or change preferences
    Settings {
        #[command(subcommand)]
        cmd: SettingsCommands,
    },
}

#[derive(Args)]
pub struct NewArgs {
    /// Note title; a leading yyyy-mm-dd- keeps that date in the filename
    #[arg(short, long)]
    pub title: Option<String>,

    /// Markdown body; read from --body-file or stdin if omitted
    #[arg(short, long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the markdown body from a file
    #[arg(long)]
    pub body_file: Option<PathBuf>,

    #[arg(long)]
    pub link: Option<String>,

    /// Citation, written as `cited:`
    #[arg(long)]
    pub cite: Option<String>,

    /// Author for this note (overrides the default author)
    #[arg(long)]
    pub author: Option<String>,

    /// Comma-separated tags (override the default tags)
    #[arg(long)]
    pub tags: Option<String>,

    /// Start from the draft at this index; saving as a draft updates it
    #[arg(long, conflicts_with = "from_archive")]
    pub from_draft: Option<usize>,

    /// Start from the archived document at this index (body and title only)
    #[arg(long)]
    pub from_archive: Option<usize>,

    /// Keep the note as a draft instead of archiving it
    #[arg(long, conflicts_with = "export")]
    pub draft: bool,

    /// Export the note as a markdown file and record it in the archive
    #[arg(long)]
    pub export: bool,

    /// Destination directory for --export (defaults to the current directory)
    #[arg(long, requires = "export")]
    pub out: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ListCommands {
    /// List items, newest first
    List,

    /// Print the markdown of one item
    Show { index: usize },

    /// Render one item's body to HTML
    Preview { index: usize },

    /// Print the fields recovered from one item
    Restore { index: usize },

    /// Write one item as a markdown file
    Export {
        index: usize,

        /// Destination directory (defaults to the current directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Remove one item
    Delete { index: usize },

    /// Run the action bound to a swipe gesture (left-short, left-long, right-short, right-long)
    Swipe {
        gesture: Swipe,

        index: usize,

        /// Destination directory when the bound action is export
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Print all settings
    Show,

    /// Print one setting
    Get { key: String },

    /// Change one setting
    Set { key: String, value: String },

    /// Restore all defaults
    Reset,

    /// Print the settings file location
    Path,
}
