use changelog::config::{DEFAULT_CHANGELOG_PATH, DEFAULT_TIMEZONE};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "changy")]
#[command(author, version, about = "Keep a date based changelog without the busywork")]
pub struct Cli {
    /// Print debug logging to stderr
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize changy in a project
    Init {
        /// The project directory
        #[clap(short, long, default_value = ".")]
        cwd: PathBuf,

        /// The IANA time zone used to date entries
        #[clap(long, visible_alias = "tz", default_value = DEFAULT_TIMEZONE)]
        timezone: String,

        /// The path to the changelog file, relative to the project directory
        #[clap(long, default_value = DEFAULT_CHANGELOG_PATH)]
        path: String,

        /// The types of changes, in the order they are listed
        #[clap(long, num_args = 1..)]
        change_categories: Option<Vec<String>>,
    },

    /// Add a change to the changelog
    Add {
        /// Change to add to the changelog
        change: Option<String>,

        /// The project directory
        #[clap(short, long, default_value = ".")]
        cwd: PathBuf,

        /// Category of the change, prompted for when omitted
        #[clap(long)]
        category: Option<String>,

        /// Write without asking for confirmation
        #[clap(short, long, default_value_t = false)]
        yes: bool,
    },

    /// Print the latest changelog entry
    Latest {
        /// The project directory
        #[clap(short, long, default_value = ".")]
        cwd: PathBuf,

        /// Only return today's entry
        #[clap(long, default_value_t = false)]
        today: bool,

        /// The specific date to get, formatted as year.month.day
        #[clap(long)]
        date: Option<String>,

        /// Output the entry as JSON
        #[clap(long, default_value_t = false)]
        json: bool,
    },

    /// Sort and tidy the changelog
    Format {
        /// The project directory
        #[clap(short, long, default_value = ".")]
        cwd: PathBuf,
    },
}
