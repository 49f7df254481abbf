use chrono::Utc;
use clap::Parser;
use miniblog::application::{
    category_options, init::init, list_posts, migrate_legacy, ConfigService, PostService,
    UpdateOutcome,
};
use miniblog::cli::{
    format_category_list, format_post_detail, format_post_list, Cli, Commands,
};
use miniblog::domain::{parse_post_ref, PostDraft, PostQuery, SortMode};
use miniblog::error::BlogError;
use miniblog::infrastructure::{Config, FileSystemStore, PostRepository};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("MINIBLOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Discover the store, run the legacy migration once, and hand back the service
fn open_blog() -> Result<(Config, PostService<FileSystemStore>), BlogError> {
    let store = FileSystemStore::discover()?;
    let config = store.load_config()?;
    let repository = PostRepository::new(store);

    migrate_legacy(&repository, Utc::now())?;

    Ok((config, PostService::new(repository)))
}

fn run(cli: Cli) -> Result<(), BlogError> {
    let Some(command) = cli.command else {
        println!("miniblog - Local post manager");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized miniblog at {}", path.display());
            Ok(())
        }
        Commands::Add {
            title,
            content,
            category,
        } => {
            let (_, service) = open_blog()?;
            let draft = PostDraft::new(&title, &content, category.as_deref());

            match service.create(&draft, Utc::now())? {
                Some(post) => println!("Created post {}", post.id),
                None => println!("Title and content are required. Nothing saved."),
            }
            Ok(())
        }
        Commands::Edit {
            id,
            title,
            content,
            category,
        } => {
            let (_, service) = open_blog()?;
            let draft = PostDraft::new(&title, &content, category.as_deref());

            match service.update(id, &draft)? {
                UpdateOutcome::Updated => println!("Updated post {}", id),
                UpdateOutcome::NotFound => println!("No post with id {}. Nothing changed.", id),
                UpdateOutcome::Rejected => {
                    println!("Title and content are required. Nothing changed.")
                }
            }
            Ok(())
        }
        Commands::Show { post } => {
            let (_, service) = open_blog()?;
            let found = parse_post_ref(&post).and_then(|id| service.find(id));

            match found {
                Some(p) => {
                    print!("{}", format_post_detail(&p));
                    Ok(())
                }
                None => Err(BlogError::PostNotFound(post)),
            }
        }
        Commands::Delete { id, yes } => {
            if !yes {
                println!(
                    "Refusing to delete without --yes. Re-run with --yes to delete post {}.",
                    id
                );
                return Ok(());
            }

            let (_, service) = open_blog()?;
            if service.delete(id)? {
                println!("Deleted post {}", id);
            } else {
                println!("No post with id {}. Nothing changed.", id);
            }
            Ok(())
        }
        Commands::List {
            search,
            category,
            sort,
            full,
        } => {
            let (config, service) = open_blog()?;
            let sort = sort
                .as_deref()
                .map(SortMode::parse_lenient)
                .unwrap_or(config.default_sort);
            let query = PostQuery::new(&search, &category, sort);

            let posts = list_posts(service.repository(), &query);
            println!(
                "{}",
                format_post_list(&posts, config.preview_chars, full).trim_end()
            );
            Ok(())
        }
        Commands::Categories => {
            let (_, service) = open_blog()?;
            let options = category_options(&service.repository().load());
            print!("{}", format_category_list(&options));
            Ok(())
        }
        Commands::Export { output } => {
            let (config, service) = open_blog()?;
            let path = output.unwrap_or_else(|| PathBuf::from(&config.export_file));

            if path == Path::new("-") {
                println!("{}", service.export_json()?);
            } else {
                let count = service.export_to(&path)?;
                println!("Exported {} posts to {}", count, path.display());
            }
            Ok(())
        }
        Commands::Import { file } => {
            let (_, service) = open_blog()?;
            let count = service.import_from(&file)?;
            println!("Import successful. {} posts imported.", count);
            Ok(())
        }
        Commands::Clear { yes } => {
            if !yes {
                println!("Refusing to clear all posts without --yes. This cannot be undone.");
                return Ok(());
            }

            let (_, service) = open_blog()?;
            let removed = service.clear_all()?;
            println!("Cleared {} posts", removed);
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let store = FileSystemStore::discover()?;
            let service = ConfigService::new(store);

            if list {
                let config = service.list()?;
                println!("default_sort = {}", config.default_sort);
                println!("export_file = {}", config.export_file);
                println!("preview_chars = {}", config.preview_chars);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: miniblog config [--list | <key> [<value>]]");
                println!("Valid keys: default_sort, export_file, preview_chars, created");
                Ok(())
            }
        }
    }
}
