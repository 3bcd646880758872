//! End-to-end: drag on the board, create items, lay out, persist.

use chrono::{Duration, Utc};
use planboard_core::{
    calendar, EventColor, EventDraft, LaneView, LocalStore, PlanDocument, RangeSelection,
    SavePolicy, SaveScheduler, Tag,
};
use tempfile::TempDir;

#[test]
fn drag_create_layout_and_persist() {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::new(dir.path().join("plan.json"));
    let mut doc = store.load().unwrap().unwrap_or_else(PlanDocument::seeded);
    let row = doc.rows[0].id.clone();
    let other_row = doc.rows[1].id.clone();

    let mut drag = RangeSelection::new();

    // A: 1-3
    drag.begin(row.clone(), 1);
    drag.extend(&row, 3);
    let a = drag.resolve().unwrap();
    doc.create_item(&a, "Research", Tag::Plan).unwrap();

    // B: dragged right-to-left 5 -> 2, hovering another row on the way
    drag.begin(row.clone(), 5);
    drag.extend(&other_row, 9);
    drag.extend(&row, 2);
    let b = drag.resolve().unwrap();
    assert_eq!((b.start, b.end), (2, 5));
    doc.create_item(&b, "Build", Tag::Work).unwrap();

    // C: 4-6
    drag.begin(row.clone(), 4);
    drag.extend(&row, 6);
    doc.create_item(&drag.resolve().unwrap(), "Launch", Tag::Launch)
        .unwrap();

    // release with nothing active does nothing
    assert!(drag.resolve().is_none());

    let layout = doc.row_layout(&row).unwrap();
    let lanes: Vec<usize> = (0..layout.items.len())
        .map(|i| layout.lanes.lane_at(i).unwrap())
        .collect();
    assert_eq!(lanes, vec![0, 1, 0]);
    assert_eq!(layout.lanes.lane_count(), 2);

    store.save(&doc).unwrap();
    let reloaded = store.load().unwrap().unwrap();
    assert_eq!(reloaded, doc);
    assert_eq!(reloaded.row_layout(&row).unwrap().lanes, layout.lanes);
}

#[test]
fn overflow_reports_hidden_items() {
    let mut doc = PlanDocument::seeded();
    let row = doc.rows[0].id.clone();
    for i in 0..5 {
        let sel = planboard_core::select_range(row.clone(), 1, 12 - i);
        doc.create_item(&sel, format!("Stream {i}"), Tag::Focus).unwrap();
    }

    let layout = doc.row_layout(&row).unwrap();
    assert_eq!(layout.lanes.lane_count(), 5);

    let collapsed = LaneView::collapsed(2).apply(&layout.lanes);
    assert_eq!(collapsed.visible.len(), 2);
    assert_eq!(collapsed.hidden_count, 3);

    let expanded = LaneView::expanded(2).apply(&layout.lanes);
    assert_eq!(expanded.visible.len(), 5);
}

#[test]
fn month_drag_becomes_calendar_event() {
    let mut doc = PlanDocument::default();
    let month = 3u32;

    let mut drag = RangeSelection::new();
    drag.begin(month, 12);
    drag.extend(&month, 10);
    let sel = drag.resolve().unwrap();

    let (start, end) = calendar::day_range(2026, sel.context, sel.start, sel.end).unwrap();
    assert_eq!(start.to_string(), "2026-03-10");
    assert_eq!(end.to_string(), "2026-03-12");

    doc.create_event(EventDraft {
        title: "Sprint review".into(),
        start_date: start,
        end_date: end,
        color: EventColor::default(),
    })
    .unwrap();

    let grid = planboard_core::MonthGrid::new(2026, month).unwrap();
    let busy: Vec<u32> = grid
        .cells()
        .iter()
        .filter_map(|c| c.day())
        .filter(|&d| !doc.events_on(grid.date_of(d).unwrap()).is_empty())
        .collect();
    assert_eq!(busy, vec![10, 11, 12]);
}

#[test]
fn debounced_saves_coalesce_edits() {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::new(dir.path().join("plan.json"));
    let mut scheduler = SaveScheduler::new(SavePolicy::debounced_ms(1000));
    let mut doc = PlanDocument::seeded();
    let t0 = Utc::now();

    let mut writes = 0;
    for (i, slogan) in ["One", "Two", "Three"].into_iter().enumerate() {
        doc.set_slogan(slogan);
        let now = t0 + Duration::milliseconds(300 * i as i64);
        scheduler.mark_dirty(&doc, now);
        if let Some(snapshot) = scheduler.take_due(now) {
            store.save(&snapshot).unwrap();
            writes += 1;
        }
    }
    assert_eq!(writes, 0);
    assert!(store.load().unwrap().is_none());

    let later = t0 + Duration::seconds(5);
    let snapshot = scheduler.take_due(later).unwrap();
    store.save(&snapshot).unwrap();
    assert_eq!(store.load().unwrap().unwrap().slogan, "Three");
}
