use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "libman", bin_name = "libman", version)]
#[command(about = "Manage a small library's books, members and loans", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Library data file (overrides the configured one)
    #[arg(
        long,
        global = true,
        env = "LIBMAN_DATA_FILE",
        value_name = "PATH",
        help_heading = "Options"
    )]
    pub data_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Create the data file if it does not exist yet
    Init,

    /// Check books, members and loans for inconsistencies
    Doctor {
        /// Repair what can be repaired and save
        #[arg(long)]
        fix: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
