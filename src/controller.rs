//! Input controller
//!
//! `Tracker` owns the session: the entry store, the entry source, the
//! renderer, the notification center and the display surfaces. Every user
//! action goes through one of its methods; failures degrade to a notice or a
//! log line and never abort the session.

use crate::entry::{EntryId, EntryStore, WasteEntry};
use crate::notify::{NotificationCenter, Severity};
use crate::render::{RenderResult, SurfaceId, Surfaces, ViewRenderer};
use crate::sync::EntrySource;
use async_trait::async_trait;
use std::sync::Arc;

/// Question asked before every entry is removed
pub const CLEAR_ALL_PROMPT: &str =
    "Are you sure you want to delete all waste entries? This cannot be undone.";

const MSG_EMPTY_INPUT: &str = "Please enter a waste item";
const MSG_ADD_FAILED: &str = "Failed to add waste item";
const MSG_LOAD_FAILED: &str = "Failed to load waste entries";
const MSG_DELETED: &str = "Entry deleted successfully";
const MSG_CLEARED: &str = "All entries cleared";

/// Asks the user a yes/no question
#[async_trait]
pub trait Confirm: Send {
    async fn confirm(&mut self, prompt: &str) -> bool;
}

/// A fixed answer
#[derive(Debug, Clone, Copy)]
pub struct Answer(pub bool);

#[async_trait]
impl Confirm for Answer {
    async fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

/// Which view is in front
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Today's activity
    #[default]
    Track,
    /// All entries with the total
    Overview,
}

/// What became of a submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Entry created and stored
    Added(WasteEntry),
    /// Created, but its id was already in the store
    Duplicate(WasteEntry),
    /// Input was blank
    Rejected,
    /// The entry source failed
    Failed,
    /// The input surface is missing
    Aborted,
}

pub struct Tracker<S: Surfaces> {
    store: EntryStore,
    source: Arc<dyn EntrySource>,
    renderer: ViewRenderer,
    notices: NotificationCenter,
    surfaces: S,
    tab: Tab,
}

impl<S: Surfaces> Tracker<S> {
    pub fn new(
        source: Arc<dyn EntrySource>,
        renderer: ViewRenderer,
        notices: NotificationCenter,
        surfaces: S,
    ) -> Self {
        Self {
            store: EntryStore::new(),
            source,
            renderer,
            notices,
            surfaces,
            tab: Tab::default(),
        }
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn surfaces(&self) -> &S {
        &self.surfaces
    }

    pub fn surfaces_mut(&mut self) -> &mut S {
        &mut self.surfaces
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notices
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Session start: date banner, initial load, submit control state
    pub async fn init(&mut self) {
        log_render(self.renderer.render_date(&mut self.surfaces));
        self.load().await;
        self.render_all();
        self.update_submit_affordance();
        tracing::info!("Waste tracker initialized ({})", self.source.describe());
    }

    /// Replace the store with the source's collection
    pub async fn load(&mut self) -> bool {
        match self.source.load_all().await {
            Ok(entries) => {
                self.store.replace_all(entries);
                self.render_all();
                tracing::info!("Loaded waste entries: {}", self.store.len());
                true
            }
            Err(e) => {
                tracing::error!("Error loading waste entries: {}", e);
                self.notices.show(MSG_LOAD_FAILED, Severity::Error).await;
                false
            }
        }
    }

    /// Track the input value and enable submission iff it has content
    pub fn on_input(&mut self, text: &str) {
        if let Err(e) = self.surfaces.write(SurfaceId::Input, text) {
            tracing::error!("{}", e);
            return;
        }
        self.update_submit_affordance();
    }

    /// Enable the submit control iff the trimmed input is non-empty
    pub fn update_submit_affordance(&mut self) {
        let Ok(value) = self.surfaces.read(SurfaceId::Input) else {
            return;
        };
        let enabled = !value.trim().is_empty();
        if let Err(e) = self.surfaces.set_enabled(SurfaceId::SubmitButton, enabled) {
            tracing::trace!("{}", e);
        }
    }

    /// Create an entry from raw input text
    pub async fn submit(&mut self, raw: &str) -> SubmitOutcome {
        if let Err(e) = self.surfaces.require(&[SurfaceId::Input]) {
            tracing::error!("{}", e);
            return SubmitOutcome::Aborted;
        }

        let item = raw.trim();
        if item.is_empty() {
            self.notices.show(MSG_EMPTY_INPUT, Severity::Error).await;
            return SubmitOutcome::Rejected;
        }

        let entry = match self.source.create(item).await {
            Ok(entry) => entry,
            Err(e) => {
                tracing::error!("Error adding waste: {}", e);
                self.notices.show(MSG_ADD_FAILED, Severity::Error).await;
                return SubmitOutcome::Failed;
            }
        };

        let appended = self.store.append(entry.clone());

        self.on_input("");
        log_render(self.renderer.render_today(&self.store, &mut self.surfaces));
        if self.tab == Tab::Overview {
            log_render(self.renderer.render_overview(&self.store, &mut self.surfaces));
        }

        if !appended {
            tracing::warn!(id = %entry.id, "Created entry reuses an existing id");
            return SubmitOutcome::Duplicate(entry);
        }

        self.notices
            .show(format!("Added \"{}\" to your waste list", entry.item), Severity::Success)
            .await;
        tracing::info!(id = %entry.id, item = %entry.item, "Added waste item");
        SubmitOutcome::Added(entry)
    }

    /// Delete one entry by id
    pub async fn delete(&mut self, id: &EntryId) -> bool {
        let Some(removed) = self.store.remove_by_id(id) else {
            tracing::error!("Entry not found: {}", id);
            return false;
        };

        self.render_all();
        self.notices.show(MSG_DELETED, Severity::Success).await;
        tracing::info!(id = %removed.id, item = %removed.item, "Deleted waste item");
        true
    }

    /// Delete every entry, after confirmation
    pub async fn clear_all(&mut self, confirm: &mut dyn Confirm) -> bool {
        if !confirm.confirm(CLEAR_ALL_PROMPT).await {
            tracing::debug!("Clear all cancelled");
            return false;
        }

        let removed = self.store.clear();
        self.render_all();
        self.notices.show(MSG_CLEARED, Severity::Success).await;
        tracing::info!("All entries cleared ({} removed)", removed);
        true
    }

    /// Bring a view to the front; the overview is refreshed on the way in
    pub fn switch_tab(&mut self, tab: Tab) {
        if tab == Tab::Overview {
            log_render(self.renderer.render_overview(&self.store, &mut self.surfaces));
        }
        self.tab = tab;
    }

    /// Re-render both views
    pub fn render_all(&mut self) {
        log_render(self.renderer.render_today(&self.store, &mut self.surfaces));
        log_render(self.renderer.render_overview(&self.store, &mut self.surfaces));
    }
}

fn log_render<T>(result: RenderResult<T>) {
    if let Err(e) = result {
        tracing::error!("{}", e);
    }
}
