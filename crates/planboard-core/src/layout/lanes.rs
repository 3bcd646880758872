//! First-fit lane assignment for overlapping intervals.
//!
//! Intervals are placed in ascending `start` order (ties keep input order)
//! into the first lane where they overlap nothing already placed. For
//! interval graphs this greedy order is optimal: the resulting lane count
//! equals the largest number of intervals sharing a single axis position.

use std::collections::HashMap;

use serde::Serialize;

use super::interval::Interval;

/// Lane placement of one input interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub id: String,
    /// Position of the interval in the input slice.
    pub index: usize,
    pub lane: usize,
}

/// Result of [`assign_lanes`]: a lane index per interval plus the lane count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LaneAssignment {
    /// One entry per input interval, in input order.
    placements: Vec<Placement>,
    /// Input indices per lane, in placement order.
    #[serde(skip)]
    lanes: Vec<Vec<usize>>,
    #[serde(skip)]
    by_id: HashMap<String, usize>,
}

impl LaneAssignment {
    /// Total lanes used (`max lane + 1`, or 0 for no input).
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Number of intervals assigned.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Lane of the interval with the given id.
    pub fn lane_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).map(|&i| self.placements[i].lane)
    }

    /// Lane of the interval at `index` in the input slice.
    pub fn lane_at(&self, index: usize) -> Option<usize> {
        self.placements.get(index).map(|p| p.lane)
    }

    /// Placements in input order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Input indices held by `lane`, in placement order.
    pub fn lane(&self, lane: usize) -> &[usize] {
        self.lanes.get(lane).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate lanes as slices of input indices.
    pub fn lanes(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.lanes.iter().map(Vec::as_slice)
    }

    /// Id to lane mapping.
    pub fn to_map(&self) -> HashMap<String, usize> {
        self.placements
            .iter()
            .map(|p| (p.id.clone(), p.lane))
            .collect()
    }
}

/// Assign every interval to a lane so that no two intervals in the same lane overlap.
///
/// Deterministic: ordering is `(start, input index)`, lanes are scanned from 0,
/// and a new lane is opened only when no existing lane admits the interval.
///
/// Intervals with `start > end` are not expected here; validate at construction.
pub fn assign_lanes<I: Interval>(intervals: &[I]) -> LaneAssignment {
    let mut order: Vec<usize> = (0..intervals.len()).collect();
    order.sort_by_key(|&i| (intervals[i].start(), i));

    let mut lanes: Vec<Vec<usize>> = Vec::new();
    let mut lane_of = vec![0usize; intervals.len()];

    for idx in order {
        let item = &intervals[idx];
        let free = lanes
            .iter()
            .position(|lane| lane.iter().all(|&other| !item.overlaps(&intervals[other])));

        let lane = match free {
            Some(lane) => lane,
            None => {
                lanes.push(Vec::new());
                lanes.len() - 1
            }
        };
        lanes[lane].push(idx);
        lane_of[idx] = lane;
    }

    let placements: Vec<Placement> = intervals
        .iter()
        .zip(lane_of)
        .enumerate()
        .map(|(index, (item, lane))| Placement {
            id: item.id().to_string(),
            index,
            lane,
        })
        .collect();

    let by_id = placements
        .iter()
        .enumerate()
        .map(|(i, p)| (p.id.clone(), i))
        .collect();

    LaneAssignment {
        placements,
        lanes,
        by_id,
    }
}

/// Largest number of intervals covering one axis position.
///
/// Lower bound for any lane assignment; [`assign_lanes`] meets it exactly.
pub fn max_overlap<I: Interval>(intervals: &[I]) -> usize {
    // (position, delta); closing edges sort before opening edges at the same position
    let mut edges: Vec<(u64, i32)> = Vec::with_capacity(intervals.len() * 2);
    for iv in intervals {
        edges.push((u64::from(iv.start()), 1));
        edges.push((u64::from(iv.end()) + 1, -1));
    }
    edges.sort_unstable();

    let mut depth = 0i32;
    let mut best = 0i32;
    for (_, delta) in edges {
        depth += delta;
        best = best.max(depth);
    }
    best as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Span;

    fn span(id: &str, start: u32, end: u32) -> Span {
        Span::new(id, start, end).unwrap()
    }

    #[test]
    fn empty_input_has_no_lanes() {
        let a = assign_lanes::<Span>(&[]);
        assert_eq!(a.lane_count(), 0);
        assert!(a.is_empty());
        assert_eq!(max_overlap::<Span>(&[]), 0);
    }

    #[test]
    fn staggered_example() {
        let items = vec![span("A", 1, 3), span("B", 2, 5), span("C", 4, 6)];
        let a = assign_lanes(&items);

        assert_eq!(a.lane_of("A"), Some(0));
        assert_eq!(a.lane_of("B"), Some(1));
        assert_eq!(a.lane_of("C"), Some(0));
        assert_eq!(a.lane_count(), 2);
        assert_eq!(a.lane(0), &[0, 2]);
        assert_eq!(a.lane(1), &[1]);
    }

    #[test]
    fn touching_endpoints_overlap() {
        let items = vec![span("a", 1, 3), span("b", 3, 4)];
        let a = assign_lanes(&items);
        assert_eq!(a.lane_count(), 2);
    }

    #[test]
    fn sorts_by_start_before_placing() {
        // input order is reversed; placement must follow start order
        let items = vec![span("late", 7, 9), span("mid", 4, 6), span("early", 1, 3)];
        let a = assign_lanes(&items);
        assert_eq!(a.lane_count(), 1);
        assert_eq!(a.lane(0), &[2, 1, 0]);
    }

    #[test]
    fn ties_keep_input_order() {
        let items = vec![span("x", 2, 4), span("y", 2, 2), span("z", 2, 8)];
        let a = assign_lanes(&items);
        assert_eq!(a.lane_of("x"), Some(0));
        assert_eq!(a.lane_of("y"), Some(1));
        assert_eq!(a.lane_of("z"), Some(2));
    }

    #[test]
    fn reuses_lowest_free_lane() {
        let items = vec![
            span("a", 1, 12),
            span("b", 1, 2),
            span("c", 1, 5),
            span("d", 3, 4),
        ];
        let a = assign_lanes(&items);
        assert_eq!(a.lane_at(0), Some(0));
        assert_eq!(a.lane_at(1), Some(1));
        assert_eq!(a.lane_at(2), Some(2));
        // lane 1 frees up after month 2
        assert_eq!(a.lane_at(3), Some(1));
        assert_eq!(a.lane_count(), 3);
    }

    #[test]
    fn deterministic_across_runs() {
        let items = vec![
            span("a", 3, 7),
            span("b", 1, 2),
            span("c", 3, 3),
            span("d", 2, 9),
            span("e", 8, 12),
        ];
        assert_eq!(assign_lanes(&items), assign_lanes(&items));
    }

    #[test]
    fn max_overlap_counts_inclusive_ends() {
        let items = vec![span("a", 1, 3), span("b", 3, 5), span("c", 5, 6)];
        assert_eq!(max_overlap(&items), 2);
        assert_eq!(max_overlap(&[span("a", u32::MAX, u32::MAX)]), 1);
    }

    #[test]
    fn to_map_covers_every_id() {
        let items = vec![span("a", 1, 1), span("b", 1, 1)];
        let map = assign_lanes(&items).to_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], 0);
        assert_eq!(map["b"], 1);
    }
}
