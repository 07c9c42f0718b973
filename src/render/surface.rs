//! Display surfaces
//!
//! Named sinks the renderer and controller write into. What a surface looks
//! like (a DOM node, a terminal section, a string in memory) is up to the
//! implementation.

use super::error::{RenderError, RenderResult};
use std::collections::HashMap;

/// Handle of a display surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceId {
    /// "Today is ..." banner
    DateDisplay,
    /// Today's entries
    TodayList,
    /// Every entry
    AllEntries,
    /// Aggregate count
    TotalCount,
    /// Free-text input value
    Input,
    /// Submit control; only its enabled flag is used
    SubmitButton,
}

impl SurfaceId {
    pub fn all() -> &'static [SurfaceId] {
        &[
            SurfaceId::DateDisplay,
            SurfaceId::TodayList,
            SurfaceId::AllEntries,
            SurfaceId::TotalCount,
            SurfaceId::Input,
            SurfaceId::SubmitButton,
        ]
    }
}

impl std::fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SurfaceId::DateDisplay => "dateDisplay",
            SurfaceId::TodayList => "todayWasteList",
            SurfaceId::AllEntries => "allWasteList",
            SurfaceId::TotalCount => "totalStats",
            SurfaceId::Input => "wasteInput",
            SurfaceId::SubmitButton => "addButton",
        };
        f.write_str(name)
    }
}

/// A set of named display surfaces
pub trait Surfaces {
    /// Whether the surface exists
    fn has(&self, id: SurfaceId) -> bool;

    /// Replace the content of a surface
    fn write(&mut self, id: SurfaceId, content: &str) -> RenderResult<()>;

    /// Current content of a surface
    fn read(&self, id: SurfaceId) -> RenderResult<String>;

    /// Enable or disable an interactive surface
    fn set_enabled(&mut self, id: SurfaceId, enabled: bool) -> RenderResult<()>;

    /// Fail with the first missing surface, if any
    fn require(&self, ids: &[SurfaceId]) -> RenderResult<()> {
        match ids.iter().find(|id| !self.has(**id)) {
            Some(id) => Err(RenderError::MissingSurface(*id)),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Slot {
    content: String,
    enabled: bool,
}

/// Surfaces held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySurfaces {
    slots: HashMap<SurfaceId, Slot>,
}

impl MemorySurfaces {
    /// Every surface present
    pub fn all() -> Self {
        Self::with(SurfaceId::all())
    }

    /// Only the listed surfaces present
    pub fn with(ids: &[SurfaceId]) -> Self {
        Self {
            slots: ids.iter().map(|id| (*id, Slot::default())).collect(),
        }
    }

    pub fn content(&self, id: SurfaceId) -> Option<&str> {
        self.slots.get(&id).map(|slot| slot.content.as_str())
    }

    pub fn is_enabled(&self, id: SurfaceId) -> Option<bool> {
        self.slots.get(&id).map(|slot| slot.enabled)
    }

    fn slot_mut(&mut self, id: SurfaceId) -> RenderResult<&mut Slot> {
        self.slots.get_mut(&id).ok_or(RenderError::MissingSurface(id))
    }
}

impl Surfaces for MemorySurfaces {
    fn has(&self, id: SurfaceId) -> bool {
        self.slots.contains_key(&id)
    }

    fn write(&mut self, id: SurfaceId, content: &str) -> RenderResult<()> {
        self.slot_mut(id)?.content = content.to_string();
        Ok(())
    }

    fn read(&self, id: SurfaceId) -> RenderResult<String> {
        self.content(id)
            .map(str::to_string)
            .ok_or(RenderError::MissingSurface(id))
    }

    fn set_enabled(&mut self, id: SurfaceId, enabled: bool) -> RenderResult<()> {
        self.slot_mut(id)?.enabled = enabled;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_read() {
        let mut surfaces = MemorySurfaces::all();
        surfaces.write(SurfaceId::TotalCount, "TOTAL ENTRIES: 2").unwrap();
        assert_eq!(surfaces.read(SurfaceId::TotalCount).unwrap(), "TOTAL ENTRIES: 2");
    }

    #[test]
    fn test_missing_surface() {
        let mut surfaces = MemorySurfaces::with(&[SurfaceId::TodayList]);

        assert_eq!(
            surfaces.write(SurfaceId::AllEntries, "x"),
            Err(RenderError::MissingSurface(SurfaceId::AllEntries))
        );
        assert_eq!(
            surfaces.require(&[SurfaceId::TodayList, SurfaceId::TotalCount]),
            Err(RenderError::MissingSurface(SurfaceId::TotalCount))
        );
        assert!(surfaces.require(&[SurfaceId::TodayList]).is_ok());
    }

    #[test]
    fn test_enabled_flag() {
        let mut surfaces = MemorySurfaces::all();
        assert_eq!(surfaces.is_enabled(SurfaceId::SubmitButton), Some(false));
        surfaces.set_enabled(SurfaceId::SubmitButton, true).unwrap();
        assert_eq!(surfaces.is_enabled(SurfaceId::SubmitButton), Some(true));
    }

    #[test]
    fn test_surface_names() {
        assert_eq!(SurfaceId::TodayList.to_string(), "todayWasteList");
        assert_eq!(
            RenderError::MissingSurface(SurfaceId::Input).to_string(),
            "Display surface not found: wasteInput"
        );
    }
}
