//! Rendering
//!
//! Derives the two presentations of the entry store and writes them into
//! display surfaces.
//!
//! ## Architecture
//!
//! - **view**: pure view models (`TodayView`, `OverviewView`)
//! - **markup**: how view models become text (`HtmlMarkup`, `PlainMarkup`)
//! - **surface**: named sinks (`Surfaces`, `MemorySurfaces`)
//! - **renderer**: `ViewRenderer`, tying the three together with a clock

mod error;
mod markup;
mod renderer;
mod surface;
mod view;

pub use error::{RenderError, RenderResult};
pub use markup::{
    date_label, escape_html, html_page, total_label, HtmlMarkup, Markup, PlainMarkup,
    OVERVIEW_EMPTY, TODAY_EMPTY,
};
pub use renderer::ViewRenderer;
pub use surface::{MemorySurfaces, SurfaceId, Surfaces};
pub use view::{EntryRow, OverviewView, TodayView};
