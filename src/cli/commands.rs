//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "miniblog")]
#[command(about = "Local post manager with search, categories and export", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new blog store
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Create a post
    Add {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,

        /// News, Tips, Tutorial, Opinion, Announcement or Other
        #[arg(long)]
        category: Option<String>,
    },

    /// Replace title, content and category of a post
    Edit {
        id: i64,

        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,

        #[arg(long)]
        category: Option<String>,
    },

    /// Show a single post
    Show {
        /// Post id, or an address like post.html?id=<ID>
        #[arg(value_name = "POST")]
        post: String,
    },

    /// Delete a post
    Delete {
        id: i64,

        /// Confirm deletion
        #[arg(short, long)]
        yes: bool,
    },

    /// List posts
    List {
        /// Case-insensitive text to find in title, content or category
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only posts with exactly this category
        #[arg(long, default_value = "")]
        category: String,

        /// newest, oldest, title-asc or title-desc (default: config default_sort)
        #[arg(long)]
        sort: Option<String>,

        /// Show long posts in full
        #[arg(long)]
        full: bool,
    },

    /// List categories available for filtering
    Categories,

    /// Export all posts as pretty-printed JSON
    Export {
        /// Output file (default: config export_file); use - for stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace all posts with the contents of a JSON export
    Import {
        file: PathBuf,
    },

    /// Delete all posts
    Clear {
        /// Confirm clearing every post
        #[arg(short, long)]
        yes: bool,
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
}
