//! Waste Tracker CLI
//!
//! One-shot commands against the waste collection:
//! - Show today's entries or the overview
//! - Log an item
//! - Render a static HTML snapshot
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use waste_tracker::*;

#[derive(Parser)]
#[command(name = "waste-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line access to your waste log")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server hosting the waste collection (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show today's entries, newest first
    Today,

    /// Show every entry with the total count
    Overview,

    /// Log a waste item
    Add {
        /// Item text (words are joined with spaces)
        #[arg(required = true)]
        item: Vec<String>,
    },

    /// Render both views as a standalone HTML page
    Render {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url.clone() {
        config.remote.base_url = url;
    }
    waste_tracker::logging::init_logging(&config.logging);

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    match cli.command {
        Commands::Today => {
            let store = load_store(&config).await?;
            let view = TodayView::build(&store, clock.today());

            match cli.format {
                OutputFormat::Json => {
                    let mut entries = store.on_day(view.date);
                    waste_tracker::entry::sort_newest_first(&mut entries);
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                }
                OutputFormat::Table => {
                    println!("{}", PlainMarkup.date_display(view.date));
                    println!("{}", PlainMarkup.today_list(&view));
                }
            }
        }

        Commands::Overview => {
            let store = load_store(&config).await?;
            let view = OverviewView::build(&store);

            match cli.format {
                OutputFormat::Json => {
                    let body = serde_json::json!({
                        "total": view.total,
                        "entries": store.newest_first(),
                    });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                OutputFormat::Table => {
                    println!("{}", PlainMarkup.total_count(view.total));
                    println!("{}", PlainMarkup.overview_list(&view));
                }
            }
        }

        Commands::Add { item } => {
            let text = item.join(" ");
            let source = RemoteSyncAdapter::new(config.remote.clone())?;
            let entry = source
                .create(&text)
                .await
                .context("Failed to add waste item")?;

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entry)?),
                OutputFormat::Table => {
                    println!("Added \"{}\" to your waste list (#{})", entry.item, entry.id)
                }
            }
        }

        Commands::Render { output } => {
            let store = load_store(&config).await?;
            let renderer = ViewRenderer::new(Arc::new(HtmlMarkup), clock);
            let mut surfaces = MemorySurfaces::all();

            renderer.render_date(&mut surfaces)?;
            renderer.render_today(&store, &mut surfaces)?;
            renderer.render_overview(&store, &mut surfaces)?;

            let page = html_page(
                surfaces.content(SurfaceId::DateDisplay).unwrap_or_default(),
                surfaces.content(SurfaceId::TodayList).unwrap_or_default(),
                surfaces.content(SurfaceId::TotalCount).unwrap_or_default(),
                surfaces.content(SurfaceId::AllEntries).unwrap_or_default(),
            );

            match output {
                Some(path) => {
                    std::fs::write(&path, page)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Snapshot written to {}", path.display());
                }
                None => print!("{}", page),
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, content)?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Fetch the remote collection into a fresh store
async fn load_store(config: &Config) -> anyhow::Result<EntryStore> {
    let source = RemoteSyncAdapter::new(config.remote.clone())?;
    let entries = source
        .load_all()
        .await
        .context("Failed to load waste entries")?;

    let mut store = EntryStore::new();
    store.replace_all(entries);
    Ok(store)
}
