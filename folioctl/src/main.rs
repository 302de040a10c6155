//! `folioctl`: query and update a Folio catalog snapshot from the shell.

mod store;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use folio_config::{CatalogConfig, ConfigLoader};
use folio_core::{
    CatalogService, FavoriteCountDelta,
    counter::CounterOutcome,
    query::{PagedResult, SortDirection},
};
use folio_model::CatalogRecord;
use serde::Serialize;
use store::JsonFileStore;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "folioctl", about = "Folio catalog query tool")]
struct Cli {
    /// JSON array of catalog records
    #[arg(long)]
    catalog: PathBuf,
    /// Config file; skips the FOLIO_CONFIG_* lookup chain
    #[arg(long)]
    config: Option<PathBuf>,
    /// Read variables from this file instead of ./.env
    #[arg(long)]
    env_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Free-text search over the whole catalog, newest first
    List {
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Free-text search, newest first, one page at a time
    Page {
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Defaults to catalog.default_page_size
        #[arg(long)]
        size: Option<usize>,
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Title/author/category search
    Advanced {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        size: Option<usize>,
    },
    /// Free-text search ranked by favorite count, paged
    Ranked {
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        size: Option<usize>,
        #[arg(long, short)]
        query: Option<String>,
        /// "asc" for ascending; anything else ranks descending
        #[arg(long)]
        order: Option<String>,
    },
    /// Free-text search ranked by favorite count, unpaged
    RankedAll {
        #[arg(long, short)]
        query: Option<String>,
        #[arg(long)]
        order: Option<String>,
    },
    /// Show one record with display defaults applied
    Detail {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Bump a favorite counter and write the snapshot back when it changed
    Favorite {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        #[arg(long, value_enum)]
        delta: DeltaArg,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum DeltaArg {
    Inc,
    Dec,
}

impl From<DeltaArg> for FavoriteCountDelta {
    fn from(value: DeltaArg) -> Self {
        match value {
            DeltaArg::Inc => FavoriteCountDelta::Increment,
            DeltaArg::Dec => FavoriteCountDelta::Decrement,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageView {
    records: Vec<CatalogRecord>,
    page: usize,
    size: usize,
    total: usize,
    total_pages: usize,
}

impl From<PagedResult<CatalogRecord>> for PageView {
    fn from(result: PagedResult<CatalogRecord>) -> Self {
        let total_pages = result.total_pages();
        Self {
            records: result.records,
            page: result.page,
            size: result.size,
            total: result.total,
            total_pages,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FavoriteView {
    id: i64,
    success: bool,
    outcome: Option<CounterOutcome>,
    favorite_count: Option<u32>,
}

fn init_tracing(config: &CatalogConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(value).context("failed to render output")?;
    println!("{rendered}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &cli.env_file {
        loader = loader.with_env_file(path);
    }
    let load = loader.load().context("failed to load configuration")?;

    init_tracing(&load.config);
    for warning in &load.warnings.items {
        warn!(hint = ?warning.hint, "{}", warning.message);
    }
    info!(
        source = ?load.source,
        catalog = %cli.catalog.display(),
        "folioctl starting"
    );

    let store = JsonFileStore::open(&cli.catalog).await.with_context(|| {
        format!("failed to open catalog snapshot {}", cli.catalog.display())
    })?;
    let settings = load.config.catalog;
    let default_size = settings.default_page_size;
    let service = CatalogService::new(store, settings);

    match cli.command {
        Command::List { query } => {
            print_json(&service.list_all(query.as_deref()).await?)?;
        }
        Command::Page { page, size, query } => {
            let size = size.unwrap_or(default_size);
            let result =
                service.list_paged(page, size, query.as_deref()).await?;
            print_json(&PageView::from(result))?;
        }
        Command::Advanced {
            title,
            author,
            category,
            page,
            size,
        } => {
            let result = service
                .advanced_search(
                    title.as_deref(),
                    author.as_deref(),
                    category.as_deref(),
                    page,
                    size.unwrap_or(default_size),
                )
                .await?;
            print_json(&PageView::from(result))?;
        }
        Command::Ranked {
            page,
            size,
            query,
            order,
        } => {
            let result = service
                .search_ranked_by_favorites(
                    page,
                    size.unwrap_or(default_size),
                    query.as_deref(),
                    SortDirection::parse_lenient(order.as_deref()),
                )
                .await?;
            print_json(&PageView::from(result))?;
        }
        Command::RankedAll { query, order } => {
            let ranked = service
                .list_all_ranked_by_favorites(
                    query.as_deref(),
                    SortDirection::parse_lenient(order.as_deref()),
                )
                .await?;
            print_json(&ranked)?;
        }
        Command::Detail { id } => {
            print_json(&service.get_detail(Some(id)).await?)?;
        }
        Command::Favorite { id, delta } => {
            let outcome = service
                .apply_favorite_delta(Some(id), delta.into())
                .await
                .with_context(|| {
                    let path = service.store().path();
                    format!("failed to write {}", path.display())
                })?;
            let favorite_count = match outcome {
                Some(_) => service
                    .get_detail(Some(id))
                    .await?
                    .and_then(|record| record.favorite_count),
                None => None,
            };
            print_json(&FavoriteView {
                id,
                success: outcome.is_some_and(|outcome| outcome.is_success()),
                outcome,
                favorite_count,
            })?;
        }
    }

    Ok(())
}
