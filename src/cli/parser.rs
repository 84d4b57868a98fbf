use crate::export::ExportFormat;
use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for rTimecard
/// Weekly employee timecards with clock in/out, breaks and pay, on SQLite
#[derive(Parser)]
#[command(
    name = "rtimecard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A weekly timecard CLI: clock in/out, track breaks and compute pay using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the organization timezone (IANA name, e.g. America/Chicago)
    #[arg(global = true, long = "tz")]
    pub tz: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Employee the command acts on
    #[arg(global = true, long = "employee", short = 'e', default_value = "")]
    pub employee: String,

    /// Company the employee works for
    #[arg(global = true, long = "company", short = 'c', default_value = "")]
    pub company: String,

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
            help = "Edit the configuration file (default editor: $VISUAL, $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Clock in for today
    In {
        #[arg(long = "at", help = "Clock-in time (HH:MM today, or RFC 3339)")]
        at: Option<String>,
    },

    /// Clock out for today
    Out {
        #[arg(long = "at", help = "Clock-out time (HH:MM today, or RFC 3339)")]
        at: Option<String>,
    },

    /// Start or end a break
    #[command(group(ArgGroup::new("action").required(true).args(["start", "end"])))]
    Break {
        #[arg(long = "start", help = "Start a break")]
        start: bool,

        #[arg(long = "end", help = "End the running break")]
        end: bool,

        #[arg(long = "at", help = "Break time (HH:MM today, or RFC 3339)")]
        at: Option<String>,
    },

    /// Show today's clock state
    Status,

    /// Show a week's timecard
    Week {
        #[arg(
            long = "date",
            help = "Any date of the week (YYYY-MM-DD); default: the current week"
        )]
        date: Option<String>,
    },

    /// List all weeks, newest first
    Weeks,

    /// Correct or clear the times of one day
    Correct {
        /// Day to correct (YYYY-MM-DD or `today`)
        date: String,

        #[arg(long = "in", help = "Corrected clock-in (HH:MM on that day, or RFC 3339)")]
        clock_in: Option<String>,

        #[arg(long = "out", help = "Corrected clock-out (HH:MM on that day, or RFC 3339)")]
        clock_out: Option<String>,

        #[arg(
            long = "clear",
            conflicts_with_all = ["clock_in", "clock_out"],
            help = "Reset the day to not started"
        )]
        clear: bool,
    },

    /// Delete the week containing a date
    Del {
        /// Any date of the week to delete
        date: String,

        #[arg(long = "force", short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Show or set the employee's hourly rate
    Rate {
        #[arg(long = "set", value_name = "RATE", help = "New hourly rate")]
        set: Option<f64>,
    },

    /// Export a week's timecard
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "date", help = "Any date of the week; default: the current week")]
        date: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
