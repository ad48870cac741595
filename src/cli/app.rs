use clap::{Parser, Subcommand};

/// Learn With Us: in-memory catalog of learning materials
#[derive(Parser)]
#[command(name = "learnwithus")]
#[command(version = "0.1.0")]
#[command(about = "In-memory catalog and search engine for learning materials")]
#[command(
    long_about = "Loads the reference catalog (books, videos and courses) and runs the named search operations against it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub format: String,

    /// Log filter for diagnostics on stderr (e.g. "debug", "learnwithus=trace")
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the full catalog in title order, then the author registry
    Show,

    /// Materials labelled with a topic, in title order
    Topic {
        /// Topic tag (e.g. python, java, software_engineering)
        topic: String,
    },

    /// Materials whose title contains a fragment, sorted by title
    Title {
        /// Case-insensitive title fragment
        fragment: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = 5)]
        limit: usize,
    },

    /// Materials within a rating range, best rating first
    Rating {
        /// Minimum rating, inclusive
        min: i32,

        /// Maximum rating, inclusive
        max: i32,

        /// Maximum number of results; omit for no cap
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Materials published strictly between two DD-MM-YYYY dates
    Dates {
        /// Start bound, exclusive
        start: String,

        /// End bound, exclusive
        end: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = 3)]
        limit: usize,
    },

    /// Materials of one kind whose author name contains a fragment
    Author {
        /// Material kind (book, video, course)
        kind: String,

        /// Case-insensitive author-name fragment
        fragment: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = 3)]
        limit: usize,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Show => "show",
            Commands::Topic { .. } => "topic",
            Commands::Title { .. } => "title",
            Commands::Rating { .. } => "rating",
            Commands::Dates { .. } => "dates",
            Commands::Author { .. } => "author",
        }
    }
}
