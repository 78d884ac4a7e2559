use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for breaktracker
#[derive(Parser)]
#[command(
    name = "breaktracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Time associates' breaks: one command starts or stops a break, overtime is flagged, the sheet can be exported",
    long_about = None
)]
pub struct Cli {
    /// Override the store path (useful for tests or a shared store)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pin the clock to a timestamp (RFC 3339 or YYYY-MM-DDTHH:MM:SS local time)
    #[arg(global = true, long = "at", hide = true)]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Start a break for NAME, or end it if one is already running
    Record {
        /// Associate name (words are joined with spaces)
        name: Vec<String>,
    },

    /// Start a break for NAME
    Start {
        /// Associate name (words are joined with spaces)
        name: Vec<String>,
    },

    /// End the running break of NAME
    End {
        /// Associate name (words are joined with spaces)
        name: Vec<String>,
    },

    /// Set the reason of a break record (empty text clears it)
    Reason {
        /// Record id, or an unambiguous prefix of it
        id: String,
        /// Free text
        text: Vec<String>,
    },

    /// Delete one break record
    Del {
        /// Record id, or an unambiguous prefix of it
        id: String,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Delete all break records
    Clear {
        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show the break table and today's figures
    List,

    /// Live view: refresh the clock and the table every second
    Watch {
        /// Stop after this many refreshes (runs until interrupted otherwise)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        ticks: Option<u64>,
    },

    /// Interactive mode: type a name and press Enter to start/stop a break
    Session,

    /// Copy the table to the clipboard as tab-separated text
    Copy {
        /// Print the text instead of using the clipboard
        #[arg(long = "stdout")]
        stdout: bool,
    },

    /// Export the break table
    Export {
        /// Export format
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        /// Output file (default: break_times_<date>.<ext> in the export directory)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import break records from a JSON array (same layout as the store)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Print the internal log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
