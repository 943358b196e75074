use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.4.2" for releases, "0.4.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "notz", version = get_version())]
#[command(about = "A small note keeper for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the note collection file (defaults to the user data directory)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new note
    #[command(alias = "a")]
    Add {
        /// Title of the note
        title: String,

        /// Priority (free-form integer, used for filtering)
        #[arg(short, long, default_value_t = 1)]
        priority: i32,

        /// Category label
        #[arg(short, long, default_value = "General")]
        category: String,
    },

    /// List notes
    #[command(alias = "ls")]
    List {
        /// Only archived notes
        #[arg(long, conflicts_with = "active")]
        archived: bool,

        /// Only active (non-archived) notes
        #[arg(long)]
        active: bool,

        /// Only notes with this priority
        #[arg(short, long, conflicts_with_all = ["archived", "active"])]
        priority: Option<i32>,
    },

    /// Delete a note by index
    #[command(alias = "rm")]
    Delete {
        /// Index of the note (as shown by list)
        index: usize,
    },

    /// Replace title, priority, and category of a note
    Update {
        /// Index of the note (as shown by list)
        index: usize,

        /// New title
        title: String,

        /// New priority
        #[arg(short, long)]
        priority: i32,

        /// New category
        #[arg(short, long)]
        category: String,
    },

    /// Archive a note by index (one-way)
    Archive {
        /// Index of the note (as shown by list)
        index: usize,
    },

    /// Search note titles (case-insensitive)
    Search { term: String },

    /// Show note counts
    Count {
        /// Count notes with this priority instead
        #[arg(short, long)]
        priority: Option<i32>,
    },
}
