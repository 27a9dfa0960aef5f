use crate::export::ExportFormat;
use crate::models::outcome::Outcome;
use crate::models::posture::Posture;
use clap::{Parser, Subcommand};

/// Command-line interface definition for dogposture
/// CLI application to validate dog postures with SQLite
#[derive(Parser)]
#[command(
    name = "dogposture",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate dog postures by rotating reference clips and counting successful detections",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print results as JSON instead of text
    #[arg(global = true, long = "json")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Register and inspect dogs
    Dog {
        #[command(subcommand)]
        action: DogCommand,
    },

    /// Register reference clips found in a directory
    Seed {
        /// Clip directory (defaults to `clips_dir` from the configuration)
        #[arg(long = "dir")]
        dir: Option<String>,
    },

    /// List reference clips
    Clips {
        #[arg(long, value_enum, help = "Only clips for this posture")]
        posture: Option<Posture>,
    },

    /// Start or list validation sessions
    Session {
        #[command(subcommand)]
        action: SessionCommand,
    },

    /// Record the outcome of showing a clip during a session
    Attempt {
        #[arg(long)]
        session: i64,

        #[arg(long)]
        clip: i64,

        #[arg(long, value_enum, required_unless_present = "report", conflicts_with = "report")]
        outcome: Option<Outcome>,

        #[arg(
            long,
            required_unless_present = "report",
            conflicts_with = "report",
            help = "Detector confidence in [0, 1]"
        )]
        confidence: Option<f64>,

        #[arg(long = "processing-ms", conflicts_with = "report")]
        processing_ms: Option<i64>,

        #[arg(long = "frames", conflicts_with = "report")]
        frames: Option<i64>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Detector JSON report; outcome is derived with `min_confidence`"
        )]
        report: Option<String>,
    },

    /// Pick the next reference clips to show, unused ones first
    Next {
        #[arg(long)]
        session: i64,

        #[arg(long, help = "Number of clips (defaults to `default_clip_count`)")]
        count: Option<usize>,
    },

    /// Show the status of a session
    Status {
        #[arg(long)]
        session: i64,

        #[arg(long = "attempts", help = "Also list every attempt")]
        attempts: bool,
    },

    /// List postures validated for a dog
    Validated {
        #[arg(long)]
        dog: i64,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export recorded attempts
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Only attempts of this session")]
        session: Option<i64>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum DogCommand {
    /// Register a new dog
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        breed: Option<String>,

        #[arg(long)]
        owner: Option<String>,
    },

    /// List dogs
    List {
        #[arg(long, default_value_t = 0)]
        skip: usize,

        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Show a dog and its sessions
    Show { id: i64 },
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Start a validation session for a dog and a posture
    Start {
        #[arg(long)]
        dog: i64,

        #[arg(long, value_enum)]
        posture: Posture,
    },

    /// List sessions
    List {
        #[arg(long)]
        dog: Option<i64>,
    },
}
