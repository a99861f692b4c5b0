//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "habitual")]
#[command(about = "Break habits into small timed steps and track them", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by commands that produce a breakdown
#[derive(Args, Debug)]
pub struct BreakdownArgs {
    /// Habit to break down (e.g., "Clean my room")
    pub name: String,

    /// How you feel: energetic, neutral, tired (default from config)
    #[arg(short, long)]
    pub mood: Option<String>,

    /// Preferred time, HH:MM (default from config)
    #[arg(short, long, conflicts_with = "no_time")]
    pub time: Option<String>,

    /// Do not add a schedule line
    #[arg(long)]
    pub no_time: bool,

    /// Skip the remote endpoint and use the built-in generator
    #[arg(long)]
    pub local: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new habit workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Break down a habit and add it to your list
    Build(BreakdownArgs),

    /// Show the breakdown for a habit without saving it
    Breakdown(BreakdownArgs),

    /// List habits
    List {
        /// Show each habit's sub-tasks
        #[arg(short, long)]
        details: bool,
    },

    /// Show habit statistics
    Analytics,

    /// Tell the coach how you feel
    Checkin {
        /// Free-text description of your mood
        text: String,
    },

    /// Show the daily coach message
    Coach {
        /// Persona to use instead of the configured one
        #[arg(short, long)]
        persona: Option<String>,
    },

    /// Preview a daily schedule around your wake and bed times
    Schedule {
        /// Wake-up time, HH:MM
        #[arg(short, long, default_value = "07:00")]
        wake: String,

        /// Bedtime, HH:MM
        #[arg(short, long, default_value = "23:00")]
        bed: String,
    },

    /// Split a one-off task into micro-steps
    Split {
        /// Task to split (e.g., "Write the quarterly report")
        task: String,

        /// Mark a step (1-based) as done; may be repeated
        #[arg(short, long)]
        done: Vec<usize>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Run the AI breakdown proxy server
    Serve {
        /// Port to listen on (default: $PORT or 3001)
        #[arg(short, long)]
        port: Option<u16>,
    },
}
