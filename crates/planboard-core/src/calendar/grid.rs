use chrono::NaiveDate;
use serde::Serialize;

use super::{date_of, days_in_month, first_weekday, grid_len};
use crate::error::ValidationError;

pub const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GridCell {
    /// Padding before day 1 or after the last day
    Blank,
    Day(u32),
}

impl GridCell {
    pub fn day(&self) -> Option<u32> {
        match self {
            Self::Blank => None,
            Self::Day(d) => Some(*d),
        }
    }
}

/// Fixed-row grid for one month, Sunday first.
#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    pub first_weekday: u32,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        let days = days_in_month(year, month)?;
        let offset = first_weekday(year, month)?;
        let cells = (0..grid_len(days, offset))
            .map(|slot| {
                // day number of this slot; <= 0 or past the end is padding
                let day = slot as i64 - offset as i64 + 1;
                if (1..=days as i64).contains(&day) {
                    GridCell::Day(day as u32)
                } else {
                    GridCell::Blank
                }
            })
            .collect();

        Ok(Self {
            year,
            month,
            days_in_month: days,
            first_weekday: offset,
            cells,
        })
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Rows of seven cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> + '_ {
        self.cells.chunks(7)
    }

    pub fn week_count(&self) -> usize {
        self.cells.len() / 7
    }

    pub fn date_of(&self, day: u32) -> Result<NaiveDate, ValidationError> {
        date_of(self.year, self.month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn january_2026_layout() {
        let grid = MonthGrid::new(2026, 1).unwrap();
        assert_eq!(grid.cells().len(), 35);
        assert_eq!(grid.week_count(), 5);
        // Thursday start: four leading blanks
        assert!(grid.cells()[..4].iter().all(|c| *c == GridCell::Blank));
        assert_eq!(grid.cells()[4], GridCell::Day(1));
        assert_eq!(grid.cells()[34], GridCell::Day(31));
    }

    #[test]
    fn trailing_blanks_fill_last_week() {
        let grid = MonthGrid::new(2026, 4).unwrap();
        // April 2026 starts Wednesday: 3 + 30 = 33 -> 35 cells
        assert_eq!(grid.first_weekday, 3);
        assert_eq!(grid.cells().len(), 35);
        assert_eq!(grid.cells()[33], GridCell::Blank);
        assert_eq!(grid.cells()[34], GridCell::Blank);
    }

    #[test]
    fn every_day_appears_once() {
        let grid = MonthGrid::new(2024, 2).unwrap();
        let days: Vec<u32> = grid.cells().iter().filter_map(GridCell::day).collect();
        assert_eq!(days, (1..=29).collect::<Vec<_>>());
        assert!(grid.weeks().all(|w| w.len() == 7));
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(MonthGrid::new(2026, 0).is_err());
    }
}
