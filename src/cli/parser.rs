use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for gigboard
/// CLI application for a hyper-local job marketplace with SQLite
#[derive(Parser)]
#[command(
    name = "gigboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A hyper-local job marketplace CLI: post gigs, apply, hire - backed by SQLite",
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
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print rows from the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Start a session as a Worker or an Employer
    Login {
        /// Display name of the actor
        #[arg(long = "name")]
        name: String,

        /// Role: worker (alias: jobseeker) or employer
        #[arg(long = "role")]
        role: String,
    },

    /// End the current session
    Logout,

    /// Show the current session
    Whoami,

    /// Post a new job (Employer only)
    Post {
        /// Job title
        title: String,

        /// Category (Household Chores, Tutoring, Errands, Carpentry, ...)
        #[arg(long = "category")]
        category: Option<String>,

        /// Pay, free text (e.g. "₱500" or "₱350/hr")
        #[arg(long = "pay")]
        pay: String,

        /// Location (e.g. "Zone 1")
        #[arg(long = "location")]
        location: String,
    },

    /// Apply to a job (Worker only)
    Apply {
        /// Id of the job to apply to
        job_id: String,
    },

    /// Accept an applicant (Employer only)
    Accept {
        /// Id of the application to accept
        application_id: String,
    },

    /// List jobs, optionally filtered
    Jobs {
        #[arg(long, short, help = "Case-insensitive search on title or category")]
        search: Option<String>,

        #[arg(long = "mine", help = "Only jobs posted by the current session")]
        mine: bool,
    },

    /// List the current Worker's applications with their jobs
    Applications,

    /// List applicants for one job
    Applicants {
        /// Id of the job
        job_id: String,
    },

    /// List notifications for the current session's role
    Notifications,

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup file")]
        force: bool,
    },

    /// Export jobs or applications
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Export the current Worker's applications instead of jobs")]
        applications: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
