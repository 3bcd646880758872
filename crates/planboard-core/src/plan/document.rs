//! The persisted plan and the edits the dashboard performs on it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::event::{events_in_month, CalendarEvent, EventDraft};
use super::item::{TimelineItem, TimelineRow};
use super::new_id;
use super::tag::Tag;
use crate::error::{CoreError, Result, ValidationError};
use crate::layout::{assign_lanes, LaneAssignment};
use crate::selection::Selection;

/// Rows created for a plan that has never been saved.
pub const SEED_ROWS: usize = 3;

/// Everything the dashboard persists.
///
/// Missing keys load as empty so older or partial documents still open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanDocument {
    pub slogan: String,
    pub rows: Vec<TimelineRow>,
    pub items: Vec<TimelineItem>,
    pub calendar_events: Vec<CalendarEvent>,
}

/// Title/tag edit for an existing item; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub tag: Option<Tag>,
}

/// One row's items with their lane assignment. Indices in `lanes` refer to `items`.
#[derive(Debug, Clone)]
pub struct RowLayout<'a> {
    pub row: &'a TimelineRow,
    pub items: Vec<&'a TimelineItem>,
    pub lanes: LaneAssignment,
}

impl PlanDocument {
    /// Fresh plan with [`SEED_ROWS`] empty rows.
    pub fn seeded() -> Self {
        Self {
            rows: (0..SEED_ROWS).map(|_| TimelineRow::new(new_id())).collect(),
            ..Self::default()
        }
    }

    /// Check every record invariant. Called on load so bad data is rejected at the boundary.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        for item in &self.items {
            item.validate()?;
        }
        for event in &self.calendar_events {
            event.validate()?;
        }
        Ok(())
    }

    pub fn set_slogan(&mut self, slogan: impl Into<String>) {
        self.slogan = slogan.into();
    }

    // --- rows ---

    pub fn add_row(&mut self) -> &TimelineRow {
        self.rows.push(TimelineRow::new(new_id()));
        &self.rows[self.rows.len() - 1]
    }

    pub fn row(&self, id: &str) -> Option<&TimelineRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Remove a row together with its items.
    pub fn remove_row(&mut self, id: &str) -> Result<TimelineRow> {
        let pos = self
            .rows
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| CoreError::not_found("row", id))?;
        self.items.retain(|i| i.row_id != id);
        Ok(self.rows.remove(pos))
    }

    // --- items ---

    pub fn item(&self, id: &str) -> Option<&TimelineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Items on one row, in insertion order.
    pub fn items_in_row(&self, row_id: &str) -> Vec<&TimelineItem> {
        self.items.iter().filter(|i| i.row_id == row_id).collect()
    }

    /// Create an item from a resolved board selection (context = row id).
    pub fn create_item(
        &mut self,
        selection: &Selection<String>,
        title: impl Into<String>,
        tag: Tag,
    ) -> Result<&TimelineItem> {
        if self.row(&selection.context).is_none() {
            return Err(CoreError::not_found("row", selection.context.clone()));
        }
        let item = TimelineItem::try_new(
            new_id(),
            selection.context.clone(),
            title,
            tag,
            selection.start,
            selection.end,
        )?;
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Edit title and/or tag. The month range is fixed once created.
    pub fn update_item(&mut self, id: &str, patch: ItemPatch) -> Result<&TimelineItem> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CoreError::not_found("item", id))?;

        let mut updated = item.clone();
        if let Some(title) = patch.title {
            updated.title = title;
        }
        if let Some(tag) = patch.tag {
            updated.tag = tag;
        }
        updated.validate()?;
        *item = updated;
        Ok(item)
    }

    pub fn delete_item(&mut self, id: &str) -> Result<TimelineItem> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| CoreError::not_found("item", id))?;
        Ok(self.items.remove(pos))
    }

    /// Lane layout of one row.
    pub fn row_layout(&self, row_id: &str) -> Result<RowLayout<'_>> {
        let row = self
            .row(row_id)
            .ok_or_else(|| CoreError::not_found("row", row_id))?;
        Ok(Self::layout_for(row, self.items_in_row(row_id)))
    }

    /// Lane layouts for every row, in row order.
    pub fn board_layout(&self) -> Vec<RowLayout<'_>> {
        self.rows
            .iter()
            .map(|row| Self::layout_for(row, self.items_in_row(&row.id)))
            .collect()
    }

    fn layout_for<'a>(row: &'a TimelineRow, items: Vec<&'a TimelineItem>) -> RowLayout<'a> {
        let lanes = assign_lanes(&items);
        RowLayout { row, items, lanes }
    }

    // --- calendar events ---

    pub fn event(&self, id: &str) -> Option<&CalendarEvent> {
        self.calendar_events.iter().find(|e| e.id == id)
    }

    pub fn create_event(&mut self, draft: EventDraft) -> Result<&CalendarEvent> {
        let event = CalendarEvent::from_draft(new_id(), draft)?;
        self.calendar_events.push(event);
        Ok(&self.calendar_events[self.calendar_events.len() - 1])
    }

    /// Replace every editable field of an event.
    pub fn update_event(&mut self, id: &str, draft: EventDraft) -> Result<&CalendarEvent> {
        let event = self
            .calendar_events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CoreError::not_found("event", id))?;
        *event = CalendarEvent::from_draft(id, draft)?;
        Ok(event)
    }

    pub fn delete_event(&mut self, id: &str) -> Result<CalendarEvent> {
        let pos = self
            .calendar_events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CoreError::not_found("event", id))?;
        Ok(self.calendar_events.remove(pos))
    }

    pub fn events_in_month(&self, year: i32, month: u32) -> Result<Vec<&CalendarEvent>> {
        Ok(events_in_month(&self.calendar_events, year, month)?)
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        self.calendar_events
            .iter()
            .filter(|e| e.occurs_on(date))
            .collect()
    }
}
