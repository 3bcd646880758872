use clap::Args;
use planboard_core::LaneView;

use crate::render;
use crate::session::{CliResult, Session};

#[derive(Args)]
pub struct BoardArgs {
    /// Show every lane instead of collapsing overflow
    #[arg(long)]
    expand: bool,
    /// Lanes shown per row while collapsed
    #[arg(long)]
    visible: Option<usize>,
}

pub fn run(args: BoardArgs) -> CliResult {
    let session = Session::open()?;
    let configured = session.config().lane_view();
    let view = LaneView {
        visible_lanes: args.visible.unwrap_or(configured.visible_lanes),
        expanded: args.expand || configured.expanded,
    };

    print!("{}", render::board(&session.doc, view));
    session.close()
}
