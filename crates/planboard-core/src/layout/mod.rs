//! Overlap-aware layout for timeline items.
//!
//! - [`Interval`]: inclusive `[start, end]` ranges on a shared axis
//! - [`assign_lanes`]: first-fit lane assignment so overlapping ranges never share a lane
//! - [`LaneView`]: collapsed/expanded filter with a hidden-item count

mod interval;
mod lanes;
mod overflow;

pub use interval::{Interval, Span};
pub use lanes::{assign_lanes, max_overlap, LaneAssignment, Placement};
pub use overflow::{LaneView, VisibleLanes};
