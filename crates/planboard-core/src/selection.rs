//! Drag-to-select range tracking.
//!
//! A [`RangeSelection`] turns pointer events over a discrete axis (months on
//! the board, days in the month view) into one normalized inclusive range:
//!
//! - `begin` on pointer-down starts a session scoped to a context (a row id)
//! - `extend` on pointer-enter moves the live end, only within the same context
//! - `resolve` on a global pointer-up emits `(context, lo, hi)` and clears
//!
//! `resolve` must be wired to a release signal that fires anywhere, not just
//! over the surface; otherwise a release outside leaves the session dangling.
//! There is no cancel: a new `begin` replaces an unresolved session.

use serde::Serialize;

/// In-progress drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession<C> {
    pub context: C,
    pub anchor: u32,
    pub current: u32,
}

impl<C> DragSession<C> {
    /// `(min, max)` of anchor and current.
    pub fn bounds(&self) -> (u32, u32) {
        (
            self.anchor.min(self.current),
            self.anchor.max(self.current),
        )
    }

    pub fn into_selection(self) -> Selection<C> {
        let (start, end) = self.bounds();
        Selection {
            context: self.context,
            start,
            end,
        }
    }
}

/// A resolved, normalized range (`start <= end`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection<C> {
    pub context: C,
    pub start: u32,
    pub end: u32,
}

impl<C> Selection<C> {
    /// Units covered, inclusive of both ends.
    pub fn width(&self) -> u64 {
        (u64::from(self.end) + 1).saturating_sub(u64::from(self.start))
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }
}

/// Owned drag-session state for one interactive surface.
#[derive(Debug, Clone)]
pub struct RangeSelection<C> {
    session: Option<DragSession<C>>,
}

impl<C: PartialEq> RangeSelection<C> {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Pointer-down at `position` within `context`. Replaces any unresolved session.
    pub fn begin(&mut self, context: C, position: u32) {
        self.session = Some(DragSession {
            context,
            anchor: position,
            current: position,
        });
    }

    /// Pointer-enter at `position`. Ignored unless a session is active in the same context.
    pub fn extend(&mut self, context: &C, position: u32) {
        if let Some(session) = self.session.as_mut() {
            if session.context == *context {
                session.current = position;
            }
        }
    }

    /// Pointer-up anywhere. Emits the normalized range and clears the session.
    pub fn resolve(&mut self) -> Option<Selection<C>> {
        self.session.take().map(DragSession::into_selection)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession<C>> {
        self.session.as_ref()
    }

    /// Context of the live session.
    pub fn context(&self) -> Option<&C> {
        self.session.as_ref().map(|s| &s.context)
    }

    /// Normalized range of the live session, for highlighting while dragging.
    pub fn preview(&self) -> Option<(&C, u32, u32)> {
        self.session.as_ref().map(|s| {
            let (lo, hi) = s.bounds();
            (&s.context, lo, hi)
        })
    }

    /// Whether the cell at `position` in `context` lies inside the live selection.
    pub fn contains(&self, context: &C, position: u32) -> bool {
        match self.preview() {
            Some((ctx, lo, hi)) => ctx == context && lo <= position && position <= hi,
            None => false,
        }
    }
}

impl<C: PartialEq> Default for RangeSelection<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a drag whose endpoints arrive together (e.g. from arguments).
pub fn select_range<C>(context: C, from: u32, to: u32) -> Selection<C> {
    DragSession {
        context,
        anchor: from,
        current: to,
    }
    .into_selection()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_click_resolves_to_one_unit() {
        let mut sel = RangeSelection::new();
        sel.begin("row-1", 3);
        let out = sel.resolve().unwrap();
        assert_eq!((out.context, out.start, out.end), ("row-1", 3, 3));
        assert!(out.is_single());
        assert!(!sel.is_active());
    }

    #[test]
    fn backward_drag_is_normalized() {
        let mut sel = RangeSelection::new();
        sel.begin("row-1", 5);
        sel.extend(&"row-1", 2);
        let out = sel.resolve().unwrap();
        assert_eq!((out.start, out.end), (2, 5));
        assert_eq!(out.width(), 4);
    }

    #[test]
    fn full_axis_selection_width() {
        let out = select_range("row", u32::MAX, 0);
        assert_eq!((out.start, out.end), (0, u32::MAX));
        assert_eq!(out.width(), u64::from(u32::MAX) + 1);
    }

    #[test]
    fn extend_in_other_context_is_ignored() {
        let mut sel = RangeSelection::new();
        sel.begin("a", 1);
        sel.extend(&"b", 4);
        let out = sel.resolve().unwrap();
        assert_eq!((out.context, out.start, out.end), ("a", 1, 1));
    }

    #[test]
    fn resolve_without_session_is_noop() {
        let mut sel: RangeSelection<&str> = RangeSelection::new();
        assert!(sel.resolve().is_none());
        sel.extend(&"a", 4);
        assert!(!sel.is_active());
    }

    #[test]
    fn second_resolve_emits_nothing() {
        let mut sel = RangeSelection::new();
        sel.begin(1u32, 7);
        assert!(sel.resolve().is_some());
        assert!(sel.resolve().is_none());
    }

    #[test]
    fn begin_replaces_unresolved_session() {
        let mut sel = RangeSelection::new();
        sel.begin("a", 2);
        sel.extend(&"a", 6);
        sel.begin("b", 9);
        assert_eq!(sel.context(), Some(&"b"));
        let out = sel.resolve().unwrap();
        assert!(sel.context().is_none());
        assert_eq!((out.context, out.start, out.end), ("b", 9, 9));
    }

    #[test]
    fn last_extend_wins() {
        let mut sel = RangeSelection::new();
        sel.begin("a", 4);
        sel.extend(&"a", 10);
        sel.extend(&"a", 1);
        let out = sel.resolve().unwrap();
        assert_eq!((out.start, out.end), (1, 4));
    }

    #[test]
    fn preview_and_contains_track_live_range() {
        let mut sel = RangeSelection::new();
        assert!(sel.preview().is_none());
        sel.begin("a", 8);
        sel.extend(&"a", 6);
        assert_eq!(sel.preview(), Some((&"a", 6, 8)));
        assert!(sel.contains(&"a", 7));
        assert!(!sel.contains(&"a", 9));
        assert!(!sel.contains(&"b", 7));
    }

    #[test]
    fn select_range_normalizes() {
        let out = select_range("r", 11, 3);
        assert_eq!((out.start, out.end), (3, 11));
    }
}
