//! # Planboard Core Library
//!
//! Business logic for the Planboard annual planning dashboard: a year-long
//! board of tagged month-range items on rows, and a day-level calendar per
//! month. Front ends (the `planboard` CLI) stay thin layers over this crate.
//!
//! ## Architecture
//!
//! - **Selection**: drag-to-select tracking that turns pointer events into a
//!   normalized inclusive range
//! - **Layout**: first-fit lane assignment so overlapping items never share a
//!   lane, plus a collapsed/expanded overflow filter
//! - **Calendar**: Gregorian month math and the padded month grid
//! - **Plan**: the persisted document and its edit operations
//! - **Storage**: local JSON file or remote plan row, TOML configuration
//! - **Sync**: immediate or debounced save scheduling
//!
//! ## Key Components
//!
//! - [`RangeSelection`]: drag session state machine
//! - [`assign_lanes`]: lane assignment engine
//! - [`PlanDocument`]: rows, items and calendar events
//! - [`PlanStore`]: configured persistence backend
//! - [`SaveScheduler`]: decides when to write

pub mod calendar;
pub mod error;
pub mod layout;
pub mod plan;
pub mod selection;
pub mod storage;
pub mod sync;

pub use calendar::{days_in_month, first_weekday, grid_len, GridCell, MonthGrid};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use layout::{assign_lanes, Interval, LaneAssignment, LaneView, Span, VisibleLanes};
pub use plan::{
    CalendarEvent, EventColor, EventDraft, ItemPatch, PlanDocument, RowLayout, Tag, TimelineItem,
    TimelineRow,
};
pub use selection::{select_range, RangeSelection, Selection};
pub use storage::{Config, LocalStore, PlanStore, RemoteStore};
pub use sync::{SavePolicy, SaveScheduler, SyncMode};
