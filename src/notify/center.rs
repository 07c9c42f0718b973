//! Notification center
//!
//! Keeps the live set of notices. Each notice owns an independent timer task
//! that removes it after `dismiss_after_ms`. Stack offsets are never stored:
//! they are computed from the live set whenever someone asks, so removing a
//! notice closes its gap without adjusting anybody else.

use crate::config::NotificationConfig;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};
use tokio::task::JoinHandle;

/// How a notice should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Identity of a notice, increasing in creation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(u64);

impl std::fmt::Display for NoticeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A transient status message
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
    pub severity: Severity,
    /// Rendered extent along the stacking axis
    pub extent: u32,
}

/// A notice with its current distance from the stacking base
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNotice {
    pub notice: Notice,
    pub offset: u32,
}

/// Changes to the live set, for front ends that draw notices
#[derive(Debug, Clone)]
pub enum NoticeEvent {
    Shown(PlacedNotice),
    Dismissed(NoticeId),
}

struct LiveNotice {
    notice: Notice,
    timer: Option<JoinHandle<()>>,
}

#[derive(Default)]
struct Stack {
    next_id: u64,
    live: Vec<LiveNotice>,
}

/// Stacked, auto-dismissing notices
#[derive(Clone)]
pub struct NotificationCenter {
    stack: Arc<RwLock<Stack>>,
    events: broadcast::Sender<NoticeEvent>,
    config: NotificationConfig,
}

impl NotificationCenter {
    pub fn new(config: NotificationConfig) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            stack: Arc::new(RwLock::new(Stack::default())),
            events,
            config,
        }
    }

    /// Subscribe to shown/dismissed events
    pub fn subscribe(&self) -> broadcast::Receiver<NoticeEvent> {
        self.events.subscribe()
    }

    /// Show a notice after every live one; it removes itself once its time is up
    pub async fn show(&self, message: impl Into<String>, severity: Severity) -> NoticeId {
        let message = message.into();

        let placed = {
            let mut stack = self.stack.write().await;
            stack.next_id += 1;
            let id = NoticeId(stack.next_id);

            let notice = Notice {
                id,
                message,
                severity,
                extent: self.config.notice_height,
            };
            let offset = self.offset_after(stack.live.iter().map(|l| l.notice.extent));

            stack.live.push(LiveNotice {
                notice: notice.clone(),
                timer: Some(self.schedule_expiry(id)),
            });

            PlacedNotice { notice, offset }
        };

        tracing::debug!(
            id = %placed.notice.id,
            severity = %placed.notice.severity,
            offset = placed.offset,
            "{}",
            placed.notice.message
        );

        let id = placed.notice.id;
        let _ = self.events.send(NoticeEvent::Shown(placed));
        id
    }

    /// Remove a notice before its timer fires
    pub async fn dismiss(&self, id: NoticeId) -> bool {
        self.remove(id, true).await
    }

    /// Report the measured extent of a notice
    pub async fn set_extent(&self, id: NoticeId, extent: u32) -> bool {
        let mut stack = self.stack.write().await;
        match stack.live.iter_mut().find(|l| l.notice.id == id) {
            Some(live) => {
                live.notice.extent = extent;
                true
            }
            None => false,
        }
    }

    /// Live notices in creation order with their current offsets
    pub async fn layout(&self) -> Vec<PlacedNotice> {
        let stack = self.stack.read().await;
        let mut offset = self.config.base_offset;
        stack
            .live
            .iter()
            .map(|live| {
                let placed = PlacedNotice {
                    notice: live.notice.clone(),
                    offset,
                };
                offset = offset
                    .saturating_add(live.notice.extent)
                    .saturating_add(self.config.margin);
                placed
            })
            .collect()
    }

    pub async fn visible_count(&self) -> usize {
        self.stack.read().await.live.len()
    }

    fn offset_after(&self, extents: impl Iterator<Item = u32>) -> u32 {
        extents.fold(self.config.base_offset, |offset, extent| {
            offset.saturating_add(extent).saturating_add(self.config.margin)
        })
    }

    fn schedule_expiry(&self, id: NoticeId) -> JoinHandle<()> {
        let center = self.clone();
        let delay = Duration::from_millis(self.config.dismiss_after_ms);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            center.remove(id, false).await;
        })
    }

    async fn remove(&self, id: NoticeId, cancel_timer: bool) -> bool {
        let removed = {
            let mut stack = self.stack.write().await;
            match stack.live.iter().position(|l| l.notice.id == id) {
                Some(index) => Some(stack.live.remove(index)),
                None => None,
            }
        };

        let Some(live) = removed else {
            return false;
        };

        if cancel_timer {
            if let Some(timer) = live.timer {
                timer.abort();
            }
        }

        tracing::trace!(id = %id, "Notice dismissed");
        let _ = self.events.send(NoticeEvent::Dismissed(id));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    fn center() -> NotificationCenter {
        NotificationCenter::new(NotificationConfig::default())
    }

    async fn offsets(center: &NotificationCenter) -> Vec<(String, u32)> {
        center
            .layout()
            .await
            .into_iter()
            .map(|p| (p.notice.message, p.offset))
            .collect()
    }

    fn pairs(items: &[(&str, u32)]) -> Vec<(String, u32)> {
        items.iter().map(|(m, o)| (m.to_string(), *o)).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_five_notices_stack_then_dismiss_in_order() {
        let center = center();
        for i in 0..5 {
            center.show(format!("n{}", i), Severity::Info).await;
            sleep(Duration::from_millis(100)).await;
        }

        // t = 500ms
        assert_eq!(
            offsets(&center).await,
            pairs(&[("n0", 20), ("n1", 90), ("n2", 160), ("n3", 230), ("n4", 300)])
        );

        // t = 3050ms: n0 expired at 3000
        sleep(Duration::from_millis(2550)).await;
        assert_eq!(
            offsets(&center).await,
            pairs(&[("n1", 20), ("n2", 90), ("n3", 160), ("n4", 230)])
        );

        // t = 3150ms
        sleep(Duration::from_millis(100)).await;
        assert_eq!(
            offsets(&center).await,
            pairs(&[("n2", 20), ("n3", 90), ("n4", 160)])
        );

        sleep(Duration::from_millis(1000)).await;
        assert_eq!(center.visible_count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_notice_goes_after_live_ones() {
        let center = center();
        center.show("first", Severity::Success).await;
        sleep(Duration::from_millis(3100)).await;
        center.show("second", Severity::Error).await;

        assert_eq!(offsets(&center).await, pairs(&[("second", 20)]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_measured_extent_shifts_later_notices() {
        let center = center();
        let tall = center.show("tall", Severity::Info).await;
        center.show("next", Severity::Info).await;

        assert!(center.set_extent(tall, 100).await);
        assert_eq!(offsets(&center).await, pairs(&[("tall", 20), ("next", 130)]));

        assert!(center.dismiss(tall).await);
        assert_eq!(offsets(&center).await, pairs(&[("next", 20)]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_huge_extent_pins_offsets_at_max() {
        let center = center();
        let huge = center.show("a", Severity::Info).await;
        center.show("b", Severity::Info).await;

        assert!(center.set_extent(huge, u32::MAX).await);
        assert_eq!(offsets(&center).await, pairs(&[("a", 20), ("b", u32::MAX)]));

        let mut events = center.subscribe();
        center.show("c", Severity::Info).await;
        match events.try_recv() {
            Ok(NoticeEvent::Shown(placed)) => assert_eq!(placed.offset, u32::MAX),
            other => panic!("expected a shown event, got {:?}", other),
        }
        assert_eq!(center.visible_count().await, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_cancels_timer() {
        let center = center();
        let mut events = center.subscribe();

        let early = center.show("early", Severity::Info).await;
        center.show("late", Severity::Info).await;
        assert!(center.dismiss(early).await);
        assert!(!center.dismiss(early).await);

        sleep(Duration::from_millis(3100)).await;
        assert_eq!(center.visible_count().await, 0);

        let mut dismissed = Vec::new();
        while let Ok(event) = events.try_recv() {
            if let NoticeEvent::Dismissed(id) = event {
                dismissed.push(id);
            }
        }
        assert_eq!(dismissed.len(), 2);
        assert_eq!(dismissed[0], early);
    }

    #[tokio::test(start_paused = true)]
    async fn test_identical_messages_are_not_merged() {
        let center = center();
        center.show("same", Severity::Info).await;
        center.show("same", Severity::Info).await;
        assert_eq!(center.visible_count().await, 2);
    }

    #[tokio::test]
    async fn test_shown_event_carries_offset() {
        let center = center();
        let mut events = center.subscribe();
        center.show("a", Severity::Info).await;
        center.show("b", Severity::Warning).await;

        let mut shown = Vec::new();
        while let Ok(NoticeEvent::Shown(placed)) = events.try_recv() {
            shown.push((placed.notice.message, placed.offset));
        }
        assert_eq!(shown, pairs(&[("a", 20), ("b", 90)]));
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Success.to_string(), "success");
        assert_eq!(Severity::Error.to_string(), "error");
    }
}
