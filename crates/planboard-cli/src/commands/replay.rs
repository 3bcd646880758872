//! Feed a recorded pointer stream through the board's drag tracker.
//!
//! One event per line:
//!
//! ```text
//! down  <row> <month>    press on a month cell
//! enter <row> <month>    pointer moved over a cell
//! up    <title...>       release; creates an item when a drag is active
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Rows are 1-based
//! positions or ids.

use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use clap::Args;
use planboard_core::{RangeSelection, Tag};

use crate::session::{resolve_row, CliResult, Session};

#[derive(Args)]
pub struct ReplayArgs {
    /// Event file; reads stdin when omitted
    file: Option<PathBuf>,
    /// Tag for created items
    #[arg(long, default_value_t = Tag::Launch)]
    tag: Tag,
}

#[derive(Debug, PartialEq, Eq)]
enum Pointer {
    Down { row: String, month: u32 },
    Enter { row: String, month: u32 },
    Up { title: String },
}

fn parse_line(line: &str) -> Result<Option<Pointer>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let kind = parts.next().unwrap_or_default();
    let mut cell = || -> Result<(String, u32), String> {
        let row = parts.next().ok_or("missing row")?.to_string();
        let month = parts
            .next()
            .ok_or("missing month")?
            .parse::<u32>()
            .map_err(|e| format!("bad month: {e}"))?;
        Ok((row, month))
    };

    match kind {
        "down" => {
            let (row, month) = cell()?;
            Ok(Some(Pointer::Down { row, month }))
        }
        "enter" => {
            let (row, month) = cell()?;
            Ok(Some(Pointer::Enter { row, month }))
        }
        "up" => {
            let title = line["up".len()..].trim().to_string();
            Ok(Some(Pointer::Up { title }))
        }
        other => Err(format!("unknown event '{other}'")),
    }
}

pub fn run(args: ReplayArgs) -> CliResult {
    let reader: Box<dyn BufRead> = match &args.file {
        Some(path) => Box::new(BufReader::new(std::fs::File::open(path)?)),
        None => Box::new(BufReader::new(std::io::stdin())),
    };

    let mut session = Session::open()?;
    let mut drag: RangeSelection<String> = RangeSelection::new();
    let mut created = 0;

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let event = parse_line(&line).map_err(|e| format!("line {}: {e}", n + 1))?;
        match event {
            None => {}
            Some(Pointer::Down { row, month }) => {
                let row_id = resolve_row(&session.doc, &row)?;
                drag.begin(row_id, month);
            }
            Some(Pointer::Enter { row, month }) => {
                let row_id = resolve_row(&session.doc, &row)?;
                drag.extend(&row_id, month);
            }
            Some(Pointer::Up { title }) => {
                let Some(selection) = drag.resolve() else {
                    continue;
                };
                let item = session.doc.create_item(&selection, title, args.tag)?;
                println!("{}\t{}\t{}", item.id, item.month_label(), item.title);
                created += 1;
                session.commit()?;
            }
        }
    }

    println!("{created} item(s) created");
    session.close()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pointer_lines() {
        assert_eq!(
            parse_line("down 1 5").unwrap(),
            Some(Pointer::Down {
                row: "1".into(),
                month: 5
            })
        );
        assert_eq!(
            parse_line("  enter abc 2 ").unwrap(),
            Some(Pointer::Enter {
                row: "abc".into(),
                month: 2
            })
        );
        assert_eq!(
            parse_line("up Launch  party").unwrap(),
            Some(Pointer::Up {
                title: "Launch  party".into()
            })
        );
    }

    #[test]
    fn skips_comments_and_blanks() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("# drag one").unwrap(), None);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_line("down 1").is_err());
        assert!(parse_line("enter 1 x").is_err());
        assert!(parse_line("click 1 2").is_err());
    }
}
