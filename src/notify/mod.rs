//! Transient status notices

mod center;

pub use center::{Notice, NoticeEvent, NoticeId, NotificationCenter, PlacedNotice, Severity};
