//! # Waste Tracker
//!
//! Log discarded items, see what was thrown away today, and review every
//! entry with a running total.
//!
//! ## Modules
//!
//! - [`entry`]: entry types and the in-memory entry store
//! - [`sync`]: entry sources (remote HTTP endpoint or session-local)
//! - [`render`]: view models, markup and display surfaces
//! - [`notify`]: stacked, auto-dismissing notices
//! - [`controller`]: the `Tracker` that ties everything to user actions
//! - [`terminal`]: terminal surfaces and the interactive session
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use waste_tracker::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let clock: Arc<dyn Clock> = Arc::new(SystemClock);
//!
//!     let source = build_source(&config.remote, clock.clone())?;
//!     let renderer = ViewRenderer::new(Arc::new(HtmlMarkup), clock);
//!     let notices = NotificationCenter::new(config.notifications.clone());
//!
//!     let mut tracker = Tracker::new(source, renderer, notices, MemorySurfaces::all());
//!     tracker.init().await;
//!     tracker.submit("banana peel").await;
//!
//!     println!("{}", tracker.surfaces().content(SurfaceId::TodayList).unwrap_or(""));
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod controller;
pub mod entry;
pub mod logging;
pub mod notify;
pub mod render;
pub mod sync;
pub mod terminal;

// Re-export top-level types for convenience
pub use clock::{Clock, FixedClock, SystemClock};

pub use config::{
    generate_default_config, Config, ConfigError, LoggingConfig, NotificationConfig, RemoteConfig,
    SyncMode,
};

pub use controller::{Answer, Confirm, SubmitOutcome, Tab, Tracker, CLEAR_ALL_PROMPT};

pub use entry::{EntryId, EntryStore, WasteEntry};

pub use notify::{Notice, NoticeEvent, NoticeId, NotificationCenter, PlacedNotice, Severity};

pub use render::{
    escape_html, html_page, HtmlMarkup, Markup, MemorySurfaces, OverviewView, PlainMarkup,
    RenderError, SurfaceId, Surfaces, TodayView, ViewRenderer,
};

pub use sync::{build_source, EntrySource, LocalEntrySource, RemoteSyncAdapter, SyncError};

pub use terminal::{run_session, SessionCommand, TerminalSurfaces};
