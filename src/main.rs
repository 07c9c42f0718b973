//! Waste Tracker
//!
//! Interactive session: loads the collection, then logs one item per line.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use waste_tracker::logging::init_logging;
use waste_tracker::terminal::{print_notices, HELP};
use waste_tracker::*;

#[derive(Parser)]
#[command(name = "waste-tracker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Track what you throw away, one item at a time")]
struct Args {
    /// Config file (default: search the usual locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server hosting the waste collection
    #[arg(long)]
    api_url: Option<String>,

    /// Keep entries in memory for this session only
    #[arg(long)]
    local: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = args.api_url {
        config.remote.base_url = url;
    }
    if args.local {
        config.remote.mode = SyncMode::Local;
    }

    init_logging(&config.logging);
    tracing::info!("Waste Tracker v{}", env!("CARGO_PKG_VERSION"));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let source = build_source(&config.remote, clock.clone())?;
    let renderer = ViewRenderer::new(Arc::new(PlainMarkup), clock);
    let notices = NotificationCenter::new(config.notifications.clone());

    let printer = tokio::spawn(print_notices(notices.subscribe(), std::io::stdout()));

    let mut tracker = Tracker::new(
        source,
        renderer,
        notices,
        TerminalSurfaces::new(std::io::stdout()),
    );

    println!("{}\n", HELP);
    tracker.init().await;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run_session(&mut tracker, stdin, std::io::stdout()).await?;

    printer.abort();
    tracing::info!("Session ended with {} entries", tracker.store().len());
    Ok(())
}
