//! Collapsed/expanded display filter over a lane assignment.

use serde::{Deserialize, Serialize};

use super::lanes::LaneAssignment;

/// Display policy: how many lanes to show while collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneView {
    pub visible_lanes: usize,
    pub expanded: bool,
}

impl LaneView {
    pub fn collapsed(visible_lanes: usize) -> Self {
        Self {
            visible_lanes,
            expanded: false,
        }
    }

    pub fn expanded(visible_lanes: usize) -> Self {
        Self {
            visible_lanes,
            expanded: true,
        }
    }

    /// Whether the assignment has more lanes than fit while collapsed,
    /// i.e. whether a "show more / show less" toggle is meaningful.
    pub fn overflows(&self, assignment: &LaneAssignment) -> bool {
        assignment.lane_count() > self.visible_lanes
    }

    /// Filter an assignment down to what should be rendered.
    ///
    /// Never alters the assignment itself; lane indices stay as assigned.
    pub fn apply(&self, assignment: &LaneAssignment) -> VisibleLanes {
        let limit = if self.expanded || !self.overflows(assignment) {
            assignment.lane_count()
        } else {
            self.visible_lanes
        };

        let mut visible = Vec::new();
        let mut hidden_count = 0;
        for placement in assignment.placements() {
            if placement.lane < limit {
                visible.push(placement.index);
            } else {
                hidden_count += 1;
            }
        }

        VisibleLanes {
            visible,
            shown_lanes: limit,
            hidden_count,
            hidden_lanes: assignment.lane_count() - limit,
        }
    }
}

impl Default for LaneView {
    fn default() -> Self {
        Self::collapsed(2)
    }
}

/// Output of [`LaneView::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleLanes {
    /// Input indices to render, in input order.
    pub visible: Vec<usize>,
    /// Lanes `0..shown_lanes` are rendered.
    pub shown_lanes: usize,
    /// Intervals excluded from rendering, for a "+N more" indicator.
    pub hidden_count: usize,
    pub hidden_lanes: usize,
}

impl VisibleLanes {
    pub fn has_overflow(&self) -> bool {
        self.hidden_count > 0
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }
}
