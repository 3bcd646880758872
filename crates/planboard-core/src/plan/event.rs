//! Day-level calendar events.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::tag::EventColor;
use crate::calendar::{check_month, month_bounds};
use crate::error::ValidationError;
use crate::layout::Span;

/// An event spanning whole days, serialized with `YYYY-MM-DD` dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub color: EventColor,
}

/// Editable fields of an event; everything but the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub color: EventColor,
}

impl EventDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.start_date > self.end_date {
            return Err(ValidationError::InvertedDates {
                start: self.start_date.to_string(),
                end: self.end_date.to_string(),
            });
        }
        Ok(())
    }
}

impl CalendarEvent {
    pub fn from_draft(id: impl Into<String>, draft: EventDraft) -> Result<Self, ValidationError> {
        draft.validate()?;
        Ok(Self {
            id: id.into(),
            title: draft.title,
            start_date: draft.start_date,
            end_date: draft.end_date,
            color: draft.color,
        })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.to_draft().validate()
    }

    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            color: self.color,
        }
    }

    /// Inclusive day test.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Whether any day of the event falls in the given month.
    pub fn touches_month(&self, year: i32, month: u32) -> bool {
        match month_bounds(year, month) {
            Ok((first, last)) => self.start_date <= last && first <= self.end_date,
            Err(_) => false,
        }
    }

    /// Day-of-month span of this event clipped to the given month.
    pub fn day_span(&self, year: i32, month: u32) -> Option<Span> {
        let (first, last) = month_bounds(year, month).ok()?;
        if !self.touches_month(year, month) {
            return None;
        }
        let start = self.start_date.max(first).day();
        let end = self.end_date.min(last).day();
        Span::new(self.id.clone(), start, end).ok()
    }
}

/// Events with at least one day in the given month, in input order.
///
/// # Errors
/// Returns [`ValidationError::InvalidMonth`] when `month` is outside 1-12.
pub fn events_in_month(
    events: &[CalendarEvent],
    year: i32,
    month: u32,
) -> Result<Vec<&CalendarEvent>, ValidationError> {
    check_month(month)?;
    Ok(events
        .iter()
        .filter(|e| e.touches_month(year, month))
        .collect())
}
