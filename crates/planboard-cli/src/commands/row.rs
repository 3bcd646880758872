use clap::Subcommand;

use crate::session::{resolve_row, CliResult, Session};

#[derive(Subcommand)]
pub enum RowAction {
    /// Append an empty row
    Add,
    /// List rows with their item counts
    List,
    /// Remove a row and every item on it
    Remove {
        /// Row position (1-based) or id
        row: String,
    },
}

pub fn run(action: RowAction) -> CliResult {
    let mut session = Session::open()?;

    match action {
        RowAction::Add => {
            let id = session.doc.add_row().id.clone();
            session.commit()?;
            println!("Row added: {id}");
        }
        RowAction::List => {
            for (n, row) in session.doc.rows.iter().enumerate() {
                let count = session.doc.items_in_row(&row.id).len();
                println!("{}\t{}\t{} item(s)", n + 1, row.id, count);
            }
        }
        RowAction::Remove { row } => {
            let id = resolve_row(&session.doc, &row)?;
            let before = session.doc.items.len();
            session.doc.remove_row(&id)?;
            let dropped = before - session.doc.items.len();
            session.commit()?;
            println!("Row removed: {id} ({dropped} item(s) dropped)");
        }
    }
    session.close()
}
