//! Application layer - Use cases and orchestration

pub mod init;
pub mod list_posts;
pub mod manage_config;
pub mod manage_posts;
pub mod migrate_legacy;
pub mod transfer;

pub use list_posts::{category_options, list_posts};
pub use manage_config::ConfigService;
pub use manage_posts::{PostService, UpdateOutcome};
pub use migrate_legacy::{migrate_legacy, MigrationOutcome};
pub use transfer::parse_import;
