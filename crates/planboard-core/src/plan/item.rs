//! Board rows and the month-range items placed on them.

use serde::{Deserialize, Serialize};

use super::tag::Tag;
use crate::calendar::check_month;
use crate::error::ValidationError;
use crate::layout::Interval;

/// A horizontal track on the annual board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineRow {
    pub id: String,
}

impl TimelineRow {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A tagged item spanning whole months on one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    pub id: String,
    pub row_id: String,
    pub title: String,
    pub tag: Tag,
    /// 1-12, inclusive
    pub start_month: u32,
    /// 1-12, inclusive
    pub end_month: u32,
}

impl TimelineItem {
    /// Create an item, returning a Result
    ///
    /// # Errors
    /// Returns an error if either month is outside 1-12, the range is
    /// inverted, or the title is blank.
    pub fn try_new(
        id: impl Into<String>,
        row_id: impl Into<String>,
        title: impl Into<String>,
        tag: Tag,
        start_month: u32,
        end_month: u32,
    ) -> Result<Self, ValidationError> {
        let item = Self {
            id: id.into(),
            row_id: row_id.into(),
            title: title.into(),
            tag,
            start_month,
            end_month,
        };
        item.validate()?;
        Ok(item)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_month(self.start_month)?;
        check_month(self.end_month)?;
        if self.start_month > self.end_month {
            return Err(ValidationError::InvertedRange {
                start: self.start_month,
                end: self.end_month,
            });
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// `"3"` for a single month, `"3-5"` otherwise.
    pub fn month_label(&self) -> String {
        if self.start_month == self.end_month {
            self.start_month.to_string()
        } else {
            format!("{}-{}", self.start_month, self.end_month)
        }
    }
}

impl Interval for TimelineItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn start(&self) -> u32 {
        self.start_month
    }

    fn end(&self) -> u32 {
        self.end_month
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_months() {
        assert_eq!(
            TimelineItem::try_new("i", "r", "Kickoff", Tag::Plan, 0, 3),
            Err(ValidationError::InvalidMonth(0))
        );
        assert_eq!(
            TimelineItem::try_new("i", "r", "Kickoff", Tag::Plan, 2, 13),
            Err(ValidationError::InvalidMonth(13))
        );
    }

    #[test]
    fn rejects_inverted_and_blank() {
        assert!(matches!(
            TimelineItem::try_new("i", "r", "Kickoff", Tag::Plan, 6, 2),
            Err(ValidationError::InvertedRange { start: 6, end: 2 })
        ));
        assert_eq!(
            TimelineItem::try_new("i", "r", "   ", Tag::Plan, 2, 6),
            Err(ValidationError::EmptyTitle)
        );
    }

    #[test]
    fn uses_camel_case_on_the_wire() {
        let item = TimelineItem::try_new("i1", "r1", "Launch v2", Tag::Launch, 3, 4).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["rowId"], "r1");
        assert_eq!(json["startMonth"], 3);
        assert_eq!(json["endMonth"], 4);
        assert_eq!(json["tag"], "Launch");
    }

    #[test]
    fn month_label() {
        let one = TimelineItem::try_new("a", "r", "x", Tag::Work, 5, 5).unwrap();
        let many = TimelineItem::try_new("b", "r", "x", Tag::Work, 5, 8).unwrap();
        assert_eq!(one.month_label(), "5");
        assert_eq!(many.month_label(), "5-8");
        assert_eq!(many.width(), 4);
    }
}
