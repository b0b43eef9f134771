//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "book-catalog")]
#[command(about = "Browse and edit a personal book catalog", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file to use instead of the default location
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Number of cards per row
    #[arg(long, global = true)]
    pub columns: Option<usize>,

    /// YAML seed file (or directory of seed files) to load at startup
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// Start without the built-in sample books
    #[arg(long, global = true)]
    pub no_samples: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filters for the list command. All given filters must match.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct ListFilterArgs {
    /// Only books owned by this user id
    #[arg(long)]
    pub owner: Option<Uuid>,

    /// Only books in this genre (case-insensitive)
    #[arg(short, long)]
    pub genre: Option<String>,

    /// Only books rated at least this high
    #[arg(short = 'r', long)]
    pub min_rating: Option<f64>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show books as a card grid
    List {
        #[command(flatten)]
        filters: ListFilterArgs,
    },

    /// Search titles, authors, and genres (blank shows everything)
    Search {
        /// Keyword to look for
        #[arg(default_value = "")]
        keyword: String,
    },

    /// Show every field of one book
    Show {
        /// Book id or a unique prefix of it
        id: String,
    },

    /// List the distinct genres in the catalog
    Genres,

    /// Show catalog statistics
    Stats,

    /// Show the highest-rated books
    Top {
        /// How many books to show
        #[arg(default_value_t = 5)]
        limit: usize,
    },

    /// Start an interactive session where books can be added and edited
    Shell,

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the settings file path
    Path,

    /// Show the effective settings
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_filters() {
        let cli = Cli::try_parse_from([
            "book-catalog",
            "list",
            "--genre",
            "Fantasy",
            "--min-rating",
            "4.5",
        ])
        .unwrap();
        match cli.command {
            Commands::List { filters } => {
                assert_eq!(filters.genre.as_deref(), Some("Fantasy"));
                assert_eq!(filters.min_rating, Some(4.5));
                assert!(filters.owner.is_none());
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn search_keyword_defaults_to_blank() {
        let cli = Cli::try_parse_from(["book-catalog", "search"]).unwrap();
        match cli.command {
            Commands::Search { keyword } => assert!(keyword.is_empty()),
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn top_defaults_to_five() {
        let cli = Cli::try_parse_from(["book-catalog", "top"]).unwrap();
        assert!(matches!(cli.command, Commands::Top { limit: 5 }));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["book-catalog", "genres", "--columns", "2", "--no-samples"])
            .unwrap();
        assert_eq!(cli.columns, Some(2));
        assert!(cli.no_samples);
    }

    #[test]
    fn owner_must_be_a_uuid() {
        assert!(Cli::try_parse_from(["book-catalog", "list", "--owner", "bob"]).is_err());
    }
}
