//! View renderer
//!
//! Writes the date banner, today's list and the overview into display
//! surfaces. Every operation is a function of the store contents and the
//! clock; rendering twice with nothing changed writes identical content.

use super::error::RenderResult;
use super::markup::Markup;
use super::surface::{SurfaceId, Surfaces};
use super::view::{OverviewView, TodayView};
use crate::clock::Clock;
use crate::entry::EntryStore;
use std::sync::Arc;

pub struct ViewRenderer {
    markup: Arc<dyn Markup>,
    clock: Arc<dyn Clock>,
}

impl ViewRenderer {
    pub fn new(markup: Arc<dyn Markup>, clock: Arc<dyn Clock>) -> Self {
        Self { markup, clock }
    }

    /// "Today is ..." banner
    pub fn render_date(&self, surfaces: &mut dyn Surfaces) -> RenderResult<()> {
        let text = self.markup.date_display(self.clock.today());
        surfaces.write(SurfaceId::DateDisplay, &text)
    }

    /// Today's entries, newest first
    pub fn render_today(&self, store: &EntryStore, surfaces: &mut dyn Surfaces) -> RenderResult<TodayView> {
        surfaces.require(&[SurfaceId::TodayList])?;

        let view = TodayView::build(store, self.clock.today());
        surfaces.write(SurfaceId::TodayList, &self.markup.today_list(&view))?;

        tracing::trace!(rows = view.rows.len(), "Rendered today list");
        Ok(view)
    }

    /// Every entry with the total count
    pub fn render_overview(&self, store: &EntryStore, surfaces: &mut dyn Surfaces) -> RenderResult<OverviewView> {
        surfaces.require(&[SurfaceId::AllEntries, SurfaceId::TotalCount])?;

        let view = OverviewView::build(store);
        surfaces.write(SurfaceId::TotalCount, &self.markup.total_count(view.total))?;
        surfaces.write(SurfaceId::AllEntries, &self.markup.overview_list(&view))?;

        tracing::trace!(total = view.total, "Rendered overview");
        Ok(view)
    }
}
