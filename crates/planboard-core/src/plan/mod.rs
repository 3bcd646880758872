//! Plan data model: board rows and items, calendar events, and the
//! document that holds them.

mod document;
mod event;
mod item;
mod tag;

pub use document::{ItemPatch, PlanDocument, RowLayout, SEED_ROWS};
pub use event::{events_in_month, CalendarEvent, EventDraft};
pub use item::{TimelineItem, TimelineRow};
pub use tag::{EventColor, Tag};

/// Fresh opaque record id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
