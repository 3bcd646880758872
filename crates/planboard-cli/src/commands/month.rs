use clap::Args;
use planboard_core::MonthGrid;

use crate::render;
use crate::session::{CliResult, Session};

#[derive(Args)]
pub struct MonthArgs {
    /// Month number (1-12)
    month: u32,
    /// Year; defaults to plan.year
    #[arg(long)]
    year: Option<i32>,
}

pub fn run(args: MonthArgs) -> CliResult {
    let session = Session::open()?;
    let year = args.year.unwrap_or(session.year());

    let grid = MonthGrid::new(year, args.month)?;
    let events = session.doc.events_in_month(year, args.month)?;
    print!("{}", render::month(&grid, &events));
    session.close()
}
