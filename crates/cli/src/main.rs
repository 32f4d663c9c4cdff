use std::{
    fs::{self, File},
    path::PathBuf,
    sync::{Arc, Mutex},
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use foodtuck_api::{ContentSource, FileContentSource, SanityClient};
use foodtuck_catalog::{filter_catalog, spawn_catalog_fetch};
use foodtuck_tui::NavContext;
use foodtuck_types::{CatalogItem, Msg};
use foodtuck_util::{FileLocalStorage, FoodtuckConfig, LocalStorage, path_from_env, read_cart_count};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_PATH_ENV: &str = "FOODTUCK_LOG_PATH";

/// Foodtuck navigation bar. Runs the terminal UI when no subcommand is given.
#[derive(Debug, Parser)]
#[command(name = "foodtuck", version, about)]
struct Cli {
    /// Read the catalog from a JSON file instead of the content API
    #[arg(long, global = true, value_name = "PATH")]
    catalog_file: Option<PathBuf>,

    /// Local storage file holding the `cart` entry
    #[arg(long, global = true, value_name = "PATH")]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch the catalog once and print the products matching QUERY
    Search { query: String },
    /// Print the number of distinct products in the stored cart
    Cart,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        None => init_file_tracing()?,
        Some(_) => init_stderr_tracing(),
    }

    let mut config = FoodtuckConfig::load().context("failed to load configuration")?;
    if let Some(storage) = &cli.storage {
        config.storage_path = Some(storage.clone());
    }

    match &cli.command {
        None => {
            let context = NavContext {
                content: content_source(&cli, &config)?,
                storage: storage(&config),
                cart_poll_interval: config.cart_poll_interval(),
            };
            foodtuck_tui::run(context).await
        }
        Some(Command::Search { query }) => run_search(content_source(&cli, &config)?, query).await,
        Some(Command::Cart) => {
            println!("{}", read_cart_count(storage(&config).as_ref()));
            Ok(())
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// The terminal UI owns the screen, so its logs go to a file.
fn init_file_tracing() -> Result<()> {
    let path = log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

fn log_path() -> PathBuf {
    path_from_env(LOG_PATH_ENV).unwrap_or_else(|| {
        dirs_next::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("foodtuck")
            .join("foodtuck.log")
    })
}

fn content_source(cli: &Cli, config: &FoodtuckConfig) -> Result<Arc<dyn ContentSource>> {
    if let Some(path) = &cli.catalog_file {
        return Ok(Arc::new(FileContentSource::new(path.clone())));
    }
    let client = SanityClient::new_from_config(&config.content).context(
        "no content source configured; pass --catalog-file or set FOODTUCK_SANITY_PROJECT_ID / FOODTUCK_CONTENT_BASE",
    )?;
    Ok(Arc::new(client))
}

fn storage(config: &FoodtuckConfig) -> Arc<dyn LocalStorage> {
    Arc::new(FileLocalStorage::new(config.resolved_storage_path()))
}

async fn run_search(source: Arc<dyn ContentSource>, query: &str) -> Result<()> {
    let catalog = match spawn_catalog_fetch(source).await {
        Msg::CatalogLoaded(items) => items,
        Msg::CatalogFailed(reason) => bail!("failed to fetch the product catalog: {reason}"),
        other => bail!("unexpected catalog fetch outcome: {other:?}"),
    };
    let results = filter_catalog(&catalog, query);
    debug!(query, catalog = catalog.len(), matches = results.len(), "search complete");
    if results.is_empty() {
        if !query.is_empty() {
            println!("No products found");
        }
        return Ok(());
    }
    for item in &results {
        println!("{}", format_result_line(item));
    }
    Ok(())
}

fn format_result_line(item: &CatalogItem) -> String {
    format!("{}\t{}\t{}", item.name, item.category, item.detail_route())
}
