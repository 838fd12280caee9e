use crate::core::merge::TieBreak;
use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rClassCal
#[derive(Parser)]
#[command(
    name = "rclasscal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Build a Tuesday/Thursday class schedule from a registrar's academic calendar",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or several courses)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Only print warnings and errors
    #[arg(global = true, long, short = 'q')]
    pub quiet: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output options shared by every table-producing command.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output file; the table is printed to stdout when omitted
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "md")]
    pub format: ExportFormat,

    /// Overwrite output file without confirmation
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Calendar input options shared by `calendar` and `schedule`.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Registrar calendar as CSV: first column date range, second column event
    #[arg(long, short = 'i', value_name = "CSV")]
    pub input: String,

    /// Year combined with the registrar's month/day text
    #[arg(long, value_name = "YYYY")]
    pub year: Option<i32>,

    /// The CSV file has no header row
    #[arg(long = "no-headers")]
    pub no_headers: bool,

    /// Skip rows whose date text cannot be parsed instead of aborting
    #[arg(long = "skip-invalid")]
    pub skip_invalid: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor", requires = "edit_config")]
        editor: Option<String>,
    },

    /// List the Tuesday/Thursday meeting days of the term
    Meetings {
        /// First day of the term (YYYY-MM-DD); defaults to config
        #[arg(long, value_name = "DATE")]
        start: Option<String>,

        /// Last day of the term (YYYY-MM-DD); defaults to config
        #[arg(long, value_name = "DATE")]
        end: Option<String>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Expand the registrar calendar into one row per day
    Calendar {
        #[command(flatten)]
        input: InputArgs,

        /// First day of the term (YYYY-MM-DD); its year is the default reference year
        #[arg(long, value_name = "DATE")]
        start: Option<String>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Build the class schedule annotated with academic calendar events
    Schedule {
        #[command(flatten)]
        input: InputArgs,

        /// First day of the term (YYYY-MM-DD); defaults to config
        #[arg(long, value_name = "DATE")]
        start: Option<String>,

        /// Last day of the term (YYYY-MM-DD); defaults to config
        #[arg(long, value_name = "DATE")]
        end: Option<String>,

        /// Which label wins when several events fall on one meeting day
        #[arg(long = "tie-break", value_enum)]
        tie_break: Option<TieBreak>,

        #[command(flatten)]
        out: OutputArgs,
    },
}
