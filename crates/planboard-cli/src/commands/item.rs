use clap::Subcommand;
use planboard_core::{ItemPatch, RangeSelection, Tag, TimelineItem};

use crate::session::{resolve_row, CliResult, Session};

#[derive(Subcommand)]
pub enum ItemAction {
    /// Create an item spanning a month range on a row
    Add {
        /// Row position (1-based) or id
        #[arg(long)]
        row: String,
        /// Month where the drag started (1-12)
        #[arg(long)]
        from: u32,
        /// Month where the drag was released (1-12)
        #[arg(long)]
        to: u32,
        #[arg(long)]
        title: String,
        /// Launch, Sales, Plan, Focus or Work
        #[arg(long, default_value_t = Tag::Launch)]
        tag: Tag,
    },
    /// Change an item's title or tag
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        tag: Option<Tag>,
    },
    /// Delete an item
    Remove { id: String },
    /// List items
    List {
        /// Only items on this row (position or id)
        #[arg(long)]
        row: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ItemAction) -> CliResult {
    let mut session = Session::open()?;

    match action {
        ItemAction::Add {
            row,
            from,
            to,
            title,
            tag,
        } => {
            let row_id = resolve_row(&session.doc, &row)?;

            let mut drag = RangeSelection::new();
            drag.begin(row_id.clone(), from);
            drag.extend(&row_id, to);
            let selection = drag.resolve().ok_or("no active selection")?;

            let id = session.doc.create_item(&selection, title, tag)?.id.clone();
            let lane = session.doc.row_layout(&row_id)?.lanes.lane_of(&id);
            session.commit()?;

            println!("Item created: {id}");
            if let Some(lane) = lane {
                println!("Months: {}-{}  Lane: {lane}", selection.start, selection.end);
            }
        }
        ItemAction::Edit { id, title, tag } => {
            let item = session.doc.update_item(&id, ItemPatch { title, tag })?;
            println!("Item updated: {}", item.id);
            println!("{}", serde_json::to_string_pretty(item)?);
            session.commit()?;
        }
        ItemAction::Remove { id } => {
            session.doc.delete_item(&id)?;
            session.commit()?;
            println!("Item removed: {id}");
        }
        ItemAction::List { row, json } => {
            let items: Vec<&TimelineItem> = match row {
                Some(row) => {
                    let row_id = resolve_row(&session.doc, &row)?;
                    session.doc.items_in_row(&row_id)
                }
                None => session.doc.items.iter().collect(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                for item in items {
                    println!(
                        "{}\t{}\t{}\t{}",
                        item.id,
                        item.month_label(),
                        item.tag,
                        item.title
                    );
                }
            }
        }
    }
    session.close()
}
