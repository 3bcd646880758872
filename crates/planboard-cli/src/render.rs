//! Plain-text rendering of the board and the month grid.

use planboard_core::calendar::{MONTH_LABELS, WEEKDAYS};
use planboard_core::{
    assign_lanes, CalendarEvent, GridCell, Interval, LaneView, MonthGrid, PlanDocument, RowLayout,
    Span,
};

/// Characters per month column on the board.
const MONTH_WIDTH: usize = 5;
/// Characters per day cell in the month grid.
const DAY_WIDTH: usize = 4;
const GUTTER: usize = 8;

pub fn board(doc: &PlanDocument, view: LaneView) -> String {
    let mut out = String::new();
    if !doc.slogan.is_empty() {
        out.push_str(&format!("\"{}\"\n\n", doc.slogan));
    }

    out.push_str(&" ".repeat(GUTTER));
    for label in MONTH_LABELS {
        out.push_str(&format!("{label:<MONTH_WIDTH$}"));
    }
    out.push('\n');

    for (n, layout) in doc.board_layout().iter().enumerate() {
        out.push_str(&row_block(n + 1, layout, view));
    }
    out
}

fn row_block(position: usize, layout: &RowLayout<'_>, view: LaneView) -> String {
    let short_id: String = layout.row.id.chars().take(8).collect();
    let mut out = format!("row {position} ({short_id})\n");

    let shown = view.apply(&layout.lanes);
    for lane in 0..shown.shown_lanes {
        let line = lane_line(layout, layout.lanes.lane(lane));
        out.push_str(&format!("{:<GUTTER$}{}\n", format!("  L{lane}"), line.trim_end()));
    }
    if shown.has_overflow() {
        out.push_str(&format!("  +{} more\n", shown.hidden_count));
    }
    out
}

/// One lane as a 12-month strip; each item is drawn as `[G title]` over its months.
fn lane_line(layout: &RowLayout<'_>, indices: &[usize]) -> String {
    let mut cells = vec![' '; MONTH_LABELS.len() * MONTH_WIDTH];
    for &i in indices {
        let item = layout.items[i];
        let from = (item.start_month as usize - 1) * MONTH_WIDTH;
        let to = item.end_month as usize * MONTH_WIDTH - 1;
        let label: Vec<char> = format!("[{} {}", item.tag.glyph(), item.title)
            .chars()
            .collect();

        for (k, slot) in cells[from..to].iter_mut().enumerate() {
            *slot = if from + k == to - 1 {
                ']'
            } else {
                label.get(k).copied().unwrap_or('-')
            };
        }
    }
    cells.into_iter().collect()
}

pub fn month(grid: &MonthGrid, events: &[&CalendarEvent]) -> String {
    let mut out = format!(
        "{} {}\n",
        MONTH_LABELS[grid.month as usize - 1],
        grid.year
    );
    for label in WEEKDAYS {
        out.push_str(&format!("{label:>DAY_WIDTH$}"));
    }
    out.push('\n');

    for week in grid.weeks() {
        for cell in week {
            match cell {
                GridCell::Blank => out.push_str(&" ".repeat(DAY_WIDTH)),
                GridCell::Day(day) => {
                    let busy = grid
                        .date_of(*day)
                        .map(|date| events.iter().any(|e| e.occurs_on(date)))
                        .unwrap_or(false);
                    let mark = if busy { '*' } else { ' ' };
                    out.push_str(&format!("{day:>3}{mark}"));
                }
            }
        }
        out.push('\n');
    }

    // Multi-day events stacked on the day axis so overlapping ones get separate lanes.
    let spans: Vec<Span> = events
        .iter()
        .filter_map(|e| e.day_span(grid.year, grid.month))
        .collect();
    let lanes = assign_lanes(&spans);
    if !spans.is_empty() {
        out.push('\n');
    }
    for (lane, indices) in lanes.lanes().enumerate() {
        for &i in indices {
            let span = &spans[i];
            let Some(event) = events.iter().find(|e| e.id == span.id()) else {
                continue;
            };
            out.push_str(&format!(
                "  L{lane} {:>2}-{:<2} {} ({})\n",
                span.start(),
                span.end(),
                event.title,
                event.color
            ));
        }
    }
    out
}

pub fn event_line(event: &CalendarEvent) -> String {
    let dates = if event.start_date == event.end_date {
        event.start_date.to_string()
    } else {
        format!("{}..{}", event.start_date, event.end_date)
    };
    format!(
        "{}  {:<22}  {} ({} {})",
        event.id,
        dates,
        event.title,
        event.color,
        event.color.swatch()
    )
}
