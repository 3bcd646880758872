//! Property tests for lane assignment and the overflow filter.

use planboard_core::layout::{assign_lanes, Interval, LaneView, Span};
use proptest::prelude::*;

fn spans() -> impl Strategy<Value = Vec<Span>> {
    prop::collection::vec((1u32..=31, 0u32..=10), 0..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (start, len))| Span::new(format!("s{i}"), start, (start + len).min(31)).unwrap())
            .collect()
    })
}

/// Brute force: most intervals covering any single position.
fn brute_force_clique(spans: &[Span]) -> usize {
    (1..=31)
        .map(|p| spans.iter().filter(|s| s.contains(p)).count())
        .max()
        .unwrap_or(0)
}

proptest! {
    #[test]
    fn same_lane_never_overlaps(spans in spans()) {
        let assignment = assign_lanes(&spans);
        for lane in assignment.lanes() {
            for (i, &a) in lane.iter().enumerate() {
                for &b in &lane[i + 1..] {
                    let (x, y) = (&spans[a], &spans[b]);
                    prop_assert!(!(x.start() <= y.end() && y.start() <= x.end()),
                        "{:?} and {:?} share a lane", x, y);
                }
            }
        }
    }

    #[test]
    fn lane_count_matches_max_clique(spans in spans()) {
        let assignment = assign_lanes(&spans);
        prop_assert_eq!(assignment.lane_count(), brute_force_clique(&spans));
        prop_assert_eq!(assignment.lane_count(), planboard_core::layout::max_overlap(&spans));
    }

    #[test]
    fn every_interval_gets_one_lane(spans in spans()) {
        let assignment = assign_lanes(&spans);
        prop_assert_eq!(assignment.len(), spans.len());
        let placed: usize = assignment.lanes().map(|l| l.len()).sum();
        prop_assert_eq!(placed, spans.len());
        for (i, span) in spans.iter().enumerate() {
            prop_assert_eq!(assignment.lane_of(span.id()), assignment.lane_at(i));
        }
    }

    #[test]
    fn assignment_is_deterministic(spans in spans()) {
        prop_assert_eq!(assign_lanes(&spans), assign_lanes(&spans));
    }

    #[test]
    fn collapsed_view_hides_exactly_the_high_lanes(spans in spans(), visible in 0usize..4) {
        let assignment = assign_lanes(&spans);
        let view = LaneView::collapsed(visible).apply(&assignment);
        let expected_hidden = if assignment.lane_count() > visible {
            assignment.placements().iter().filter(|p| p.lane >= visible).count()
        } else {
            0
        };
        prop_assert_eq!(view.hidden_count, expected_hidden);
        prop_assert_eq!(view.visible.len() + view.hidden_count, spans.len());

        let expanded = LaneView::expanded(visible).apply(&assignment);
        prop_assert_eq!(expanded.visible.len(), spans.len());
    }
}
