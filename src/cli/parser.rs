use crate::export::{ExportFormat, ExportTarget};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rFaithlog
/// CLI application to log Bible readings, Rosary prayers and confessions with SQLite
#[derive(Parser)]
#[command(
    name = "rfaithlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple devotional logger: Bible readings, Rosary prayers and a sin/confession journal using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
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

    /// Manage the database (integrity checks, statistics, etc.)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Bible reading tracker
    Bible {
        #[command(subcommand)]
        action: BibleAction,
    },

    /// Rosary prayer tracker
    Rosary {
        #[command(subcommand)]
        action: RosaryAction,
    },

    /// Sin log & confession tracker
    Sins {
        #[command(subcommand)]
        action: SinsAction,
    },

    /// Export one log to a file
    Export {
        #[arg(long, value_enum)]
        what: ExportTarget,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum BibleAction {
    /// Add a new Bible reading (stamped with the current time)
    Add {
        /// Book name (e.g. Genesis)
        book: String,

        /// Chapter number
        chapter: i64,

        #[arg(long = "start", help = "First verse read")]
        start_verse: Option<i64>,

        #[arg(long = "end", help = "Last verse read")]
        end_verse: Option<i64>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List readings, most recent first
    List {
        #[arg(long, short = 'n', help = "Show only the latest N readings")]
        limit: Option<usize>,
    },
}

#[derive(Subcommand)]
pub enum RosaryAction {
    /// Log a Rosary prayer session
    Log {
        #[arg(long, help = "Date of prayer (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long, help = "Mysteries prayed (e.g. Joyful, Sorrowful)")]
        mysteries: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Show prayer history, most recent first
    History {
        #[arg(long, short = 'n', help = "Show only the latest N prayers")]
        limit: Option<usize>,
    },
}

#[derive(Subcommand)]
pub enum SinsAction {
    /// Add a new sin entry (not confessed)
    Add {
        description: String,

        #[arg(long, help = "Occurrence date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Mark an entry as confessed
    Confess {
        id: i64,

        #[arg(long, help = "Confession date (YYYY-MM-DD, default: today)")]
        date: Option<String>,
    },

    /// List entries, most recently logged first
    List {
        #[arg(long, conflicts_with = "unconfessed", help = "Only confessed entries")]
        confessed: bool,

        #[arg(long, help = "Only entries not yet confessed")]
        unconfessed: bool,

        #[arg(long, short = 'n', help = "Show only the latest N entries")]
        limit: Option<usize>,
    },
}
