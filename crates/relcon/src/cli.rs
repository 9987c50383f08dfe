//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `embeddings` | Embed items from a JSON Lines file without relinking |
//! | `rebuild` | Embed and relink items, inline or through the sync queue |
//! | `search` | Free-text similarity search over stored embeddings |
//! | `related` | Neighbors of one item through either link direction |
//! | `providers` | Registered embedding providers |
//! | `stats` | Stored embedding and link counts |
//!
//! Per-item failures in bulk runs are logged and counted; the process
//! still exits 0. Configuration failures exit 2, other fatal errors 1.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::error;

use relcon_application::{
    BulkMode, BulkOptions, BulkReport, BulkRunner, DEFAULT_CHUNK_SIZE, QueueStats,
    list_embedding_providers,
};
use relcon_domain::ContentRef;
use relcon_domain::constants::DEFAULT_SEARCH_LIMIT;
use relcon_domain::error::Result;
use relcon_infrastructure::logging::init_logging;
use relcon_infrastructure::{ConfigLoader, RelconContext};
use relcon_providers::JsonlContentSource;

/// Command line interface for relcon
#[derive(Parser, Debug)]
#[command(name = "relcon")]
#[command(about = "Related content through embedding similarity")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Item selection shared by the bulk commands
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct BulkArgs {
    /// Content type to process (default: similarity.candidate_types)
    pub content_type: Option<String>,

    /// Also process items that already have an embedding
    #[arg(long)]
    pub force: bool,

    /// Items per chunk
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk: usize,

    /// JSON Lines file of `{"type", "id", "fields"}` items
    #[arg(short, long)]
    pub input: PathBuf,
}

impl BulkArgs {
    fn options(&self, mode: BulkMode) -> BulkOptions {
        BulkOptions {
            types: self.content_type.iter().cloned().collect(),
            force: self.force,
            chunk_size: self.chunk,
            mode,
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate embeddings without touching links
    Embeddings(BulkArgs),

    /// Embed and relink every selected item
    Rebuild {
        #[command(flatten)]
        bulk: BulkArgs,

        /// Hand items to the background sync queue and wait for it to drain
        #[arg(long)]
        queue: bool,
    },

    /// Free-text similarity search
    Search {
        /// Query text
        query: String,

        /// Restrict to a content type (repeatable)
        #[arg(long = "type")]
        types: Vec<String>,

        /// Maximum results
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },

    /// Items related to one item
    Related {
        /// Content type of the item
        content_type: String,

        /// Identifier of the item
        id: String,

        /// Only neighbors of this type
        #[arg(long)]
        of_type: Option<String>,

        /// Maximum results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List registered embedding providers
    Providers,

    /// Show stored embedding and link counts
    Stats,
}

/// Run a parsed command line and map the outcome to an exit code
pub async fn run(cli: Cli) -> ExitCode {
    match try_run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "relcon failed");
            eprintln!("error: {e}");
            if e.is_config() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

async fn try_run(cli: Cli) -> Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load()?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    init_logging(&config.logging)?;

    let mut stdout = std::io::stdout();
    if cli.command == Commands::Providers {
        return list_providers(cli.json, &mut stdout);
    }

    let context = RelconContext::build(config).await?;
    execute(cli.command, &context, cli.json, &mut stdout).await
}

/// Run one command against a built context, writing results to `out`
pub async fn execute(
    command: Commands,
    context: &RelconContext,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let service = context.service();
    match command {
        Commands::Embeddings(bulk) => {
            let source = JsonlContentSource::new(&bulk.input);
            let report = BulkRunner::new(service)
                .run(&source, &bulk.options(BulkMode::EmbedOnly))
                .await?;
            write_report(out, json, &report, None)
        }
        Commands::Rebuild { bulk, queue: false } => {
            let source = JsonlContentSource::new(&bulk.input);
            let report = BulkRunner::new(service)
                .run(&source, &bulk.options(BulkMode::Sync))
                .await?;
            write_report(out, json, &report, None)
        }
        Commands::Rebuild { bulk, queue: true } => {
            let source = JsonlContentSource::new(&bulk.input);
            let queue = context.start_queue();
            let report = BulkRunner::new(service)
                .with_queue(queue.clone())
                .run(&source, &bulk.options(BulkMode::Enqueue))
                .await;
            // Drain even when the run failed part-way
            let stats = queue.shutdown().await?;
            write_report(out, json, &report?, Some(&stats))
        }
        Commands::Search {
            query,
            types,
            limit,
        } => {
            let hits = service.search(&query, &types, limit).await?;
            if json {
                return write_json(out, &hits);
            }
            for hit in &hits {
                writeln!(out, "{:.4}\t{}", hit.similarity, hit.content)?;
            }
            Ok(())
        }
        Commands::Related {
            content_type,
            id,
            of_type,
            limit,
        } => {
            let item = ContentRef::new(content_type, id);
            let related = match of_type {
                Some(t) => service.get_related_of_type(&item, &t, limit).await?,
                None => service.get_related(&item, limit).await?,
            };
            if json {
                return write_json(out, &related);
            }
            for r in &related {
                writeln!(out, "{:.4}\t{}", r.similarity, r.content)?;
            }
            Ok(())
        }
        Commands::Providers => list_providers(json, out),
        Commands::Stats => {
            let stats = service.stats().await?;
            if json {
                return write_json(out, &stats);
            }
            writeln!(out, "embeddings: {}", stats.embeddings)?;
            writeln!(out, "links: {}", stats.links)?;
            Ok(())
        }
    }
}

fn list_providers(json: bool, out: &mut dyn Write) -> Result<()> {
    let mut providers = list_embedding_providers();
    providers.sort_unstable();
    if json {
        let entries: Vec<serde_json::Value> = providers
            .iter()
            .map(|(name, description)| {
                serde_json::json!({ "name": name, "description": description })
            })
            .collect();
        return write_json(out, &entries);
    }
    for (name, description) in providers {
        writeln!(out, "{name}\t{description}")?;
    }
    Ok(())
}

fn write_report(
    out: &mut dyn Write,
    json: bool,
    report: &BulkReport,
    queue: Option<&QueueStats>,
) -> Result<()> {
    if json {
        return write_json(out, &serde_json::json!({ "report": report, "queue": queue }));
    }
    writeln!(out, "processed: {}", report.processed)?;
    writeln!(out, "skipped: {}", report.skipped)?;
    writeln!(out, "errored: {}", report.errored)?;
    if let Some(stats) = queue {
        writeln!(
            out,
            "queue: succeeded={} failed={} retries={}",
            stats.succeeded, stats.failed, stats.retries
        )?;
    }
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
