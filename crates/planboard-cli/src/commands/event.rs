use chrono::{Datelike, Local, NaiveDate};
use clap::Subcommand;
use planboard_core::calendar::{day_range, parse_date};
use planboard_core::{CalendarEvent, EventColor, EventDraft, RangeSelection};

use crate::render;
use crate::session::{CliResult, Session};

#[derive(Subcommand)]
pub enum EventAction {
    /// Create an event from a day drag in one month, or from explicit dates
    Add {
        #[arg(long)]
        title: String,
        /// Day where the drag started
        #[arg(long, requires = "to", conflicts_with_all = ["start_date", "end_date"])]
        from: Option<u32>,
        /// Day where the drag was released
        #[arg(long, requires = "from")]
        to: Option<u32>,
        /// Month the days refer to; defaults to the current month
        #[arg(long)]
        month: Option<u32>,
        /// First day as YYYY-MM-DD
        #[arg(long, requires = "end_date")]
        start_date: Option<String>,
        /// Last day as YYYY-MM-DD
        #[arg(long, requires = "start_date")]
        end_date: Option<String>,
        /// red, blue, green, purple or amber
        #[arg(long, default_value_t = EventColor::Blue)]
        color: EventColor,
    },
    /// Change an event
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
        #[arg(long)]
        color: Option<EventColor>,
    },
    /// Delete an event
    Remove { id: String },
    /// List events
    List {
        /// Only events touching this month of plan.year
        #[arg(long)]
        month: Option<u32>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: EventAction) -> CliResult {
    let mut session = Session::open()?;
    let year = session.year();

    match action {
        EventAction::Add {
            title,
            from,
            to,
            month,
            start_date,
            end_date,
            color,
        } => {
            let (start_date, end_date) = match (from, to, start_date, end_date) {
                (Some(from), Some(to), _, _) => {
                    let month = month.unwrap_or_else(|| Local::now().month());
                    let mut drag = RangeSelection::new();
                    drag.begin(month, from);
                    drag.extend(&month, to);
                    let selection = drag.resolve().ok_or("no active selection")?;
                    day_range(year, selection.context, selection.start, selection.end)?
                }
                (_, _, Some(start), Some(end)) => (parse_date(&start)?, parse_date(&end)?),
                _ => return Err("either --from/--to or --start-date/--end-date is required".into()),
            };

            let event = session.doc.create_event(EventDraft {
                title,
                start_date,
                end_date,
                color,
            })?;
            println!("Event created: {}", event.id);
            println!("{}", render::event_line(event));
            session.commit()?;
        }
        EventAction::Edit {
            id,
            title,
            start_date,
            end_date,
            color,
        } => {
            let mut draft = session
                .doc
                .event(&id)
                .map(CalendarEvent::to_draft)
                .ok_or_else(|| format!("event not found: {id}"))?;
            if let Some(title) = title {
                draft.title = title;
            }
            draft.start_date = parse_or(start_date, draft.start_date)?;
            draft.end_date = parse_or(end_date, draft.end_date)?;
            if let Some(color) = color {
                draft.color = color;
            }

            let event = session.doc.update_event(&id, draft)?;
            println!("Event updated: {}", event.id);
            println!("{}", render::event_line(event));
            session.commit()?;
        }
        EventAction::Remove { id } => {
            session.doc.delete_event(&id)?;
            session.commit()?;
            println!("Event removed: {id}");
        }
        EventAction::List { month, json } => {
            let events: Vec<&CalendarEvent> = match month {
                Some(month) => session.doc.events_in_month(year, month)?,
                None => session.doc.calendar_events.iter().collect(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else {
                for event in events {
                    println!("{}", render::event_line(event));
                }
            }
        }
    }
    session.close()
}

fn parse_or(value: Option<String>, current: NaiveDate) -> CliResult<NaiveDate> {
    match value {
        Some(s) => Ok(parse_date(&s)?),
        None => Ok(current),
    }
}
