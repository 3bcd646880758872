//! Inclusive integer intervals on a shared ordinal axis.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Anything that occupies an inclusive `[start, end]` range on an axis
/// (months 1-12 on the board, days of month in the calendar).
///
/// Implementors must uphold `start() <= end()`.
pub trait Interval {
    fn id(&self) -> &str;
    fn start(&self) -> u32;
    fn end(&self) -> u32;

    /// Inclusive-inclusive overlap: `[1, 3]` and `[3, 5]` overlap, `[1, 3]` and `[4, 5]` do not.
    fn overlaps(&self, other: &dyn Interval) -> bool {
        self.start() <= other.end() && other.start() <= self.end()
    }

    /// Number of axis units covered; 0 for an inverted interval.
    fn width(&self) -> u64 {
        (u64::from(self.end()) + 1).saturating_sub(u64::from(self.start()))
    }

    fn contains(&self, position: u32) -> bool {
        self.start() <= position && position <= self.end()
    }
}

/// A plain identified interval.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    id: String,
    start: u32,
    end: u32,
}

impl Span {
    /// Create a span, rejecting `start > end`.
    pub fn new(id: impl Into<String>, start: u32, end: u32) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvertedRange { start, end });
        }
        Ok(Self {
            id: id.into(),
            start,
            end,
        })
    }
}

impl Interval for Span {
    fn id(&self) -> &str {
        &self.id
    }

    fn start(&self) -> u32 {
        self.start
    }

    fn end(&self) -> u32 {
        self.end
    }
}

impl<T: Interval + ?Sized> Interval for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn start(&self) -> u32 {
        (**self).start()
    }

    fn end(&self) -> u32 {
        (**self).end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_span() {
        assert_eq!(
            Span::new("x", 5, 2),
            Err(ValidationError::InvertedRange { start: 5, end: 2 })
        );
        assert!(Span::new("x", 4, 4).is_ok());
    }

    #[test]
    fn overlap_is_inclusive() {
        let a = Span::new("a", 1, 3).unwrap();
        let b = Span::new("b", 3, 5).unwrap();
        let c = Span::new("c", 4, 6).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn width_and_contains() {
        let s = Span::new("s", 2, 5).unwrap();
        assert_eq!(s.width(), 4);
        assert!(s.contains(2));
        assert!(s.contains(5));
        assert!(!s.contains(6));
    }

    #[test]
    fn width_spans_the_whole_axis() {
        let s = Span::new("x", 0, u32::MAX).unwrap();
        assert_eq!(s.width(), u64::from(u32::MAX) + 1);
        assert_eq!(Span::new("p", u32::MAX, u32::MAX).unwrap().width(), 1);
    }
}
