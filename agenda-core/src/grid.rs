//! Month grid generation.
//!
//! A month view is always rendered as a fixed 6×7 grid (Sunday-first), with
//! leading and trailing cells borrowed from the adjacent months so the
//! layout height never changes. Six weeks suffice for any combination of
//! month length and starting weekday.

use chrono::{Datelike, Duration, NaiveDate};

/// Total number of cells in a month view: 6 rows × 7 columns.
pub const GRID_CELLS: usize = 42;

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCell {
    pub date: NaiveDate,
    /// False for padding days borrowed from adjacent months.
    pub is_current_month: bool,
}

/// Compute the 42-cell grid for the month containing `reference`.
///
/// Cells run Sunday-first: the grid starts on the Sunday on or before the
/// 1st of the month and continues day by day until all 42 cells are filled.
/// The output is a fresh sequence on every call; nothing is cached.
pub fn month_grid(reference: NaiveDate) -> Vec<MonthCell> {
    let first = reference.with_day(1).unwrap();
    let offset = first.weekday().num_days_from_sunday() as i64;

    let mut day = first - Duration::days(offset);
    let mut cells = Vec::with_capacity(GRID_CELLS);

    while cells.len() < GRID_CELLS {
        cells.push(MonthCell {
            date: day,
            is_current_month: day.month() == reference.month() && day.year() == reference.year(),
        });
        day += Duration::days(1);
    }

    cells
}

/// Number of days in the month containing `reference`.
pub fn days_in_month(reference: NaiveDate) -> u32 {
    let first = reference.with_day(1).unwrap();
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1).unwrap()
    };
    (next_month - first).num_days() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // --- cell count ---

    #[test]
    fn grid_always_has_42_cells() {
        // A spread of shapes: leap February, 28-day February starting on
        // Sunday (no leading padding), 31-day months, year boundaries.
        for reference in [
            date(2024, 2, 15),
            date(2026, 2, 1),
            date(2024, 3, 1),
            date(2024, 12, 31),
            date(2025, 1, 1),
            date(1999, 7, 20),
        ] {
            assert_eq!(month_grid(reference).len(), GRID_CELLS);
        }
    }

    // --- layout ---

    #[test]
    fn first_of_month_sits_at_its_weekday_offset() {
        // 2024-03-01 is a Friday, so index 5 with Sunday-first columns.
        let reference = date(2024, 3, 1);
        assert_eq!(reference.weekday(), Weekday::Fri);

        let grid = month_grid(reference);
        assert_eq!(grid[5].date, reference);
        assert!(grid[5].is_current_month);

        // Cells 0..5 are February padding.
        for cell in &grid[..5] {
            assert_eq!(cell.date.month(), 2);
            assert!(!cell.is_current_month);
        }
    }

    #[test]
    fn current_month_cells_form_a_contiguous_run() {
        for reference in [date(2024, 2, 10), date(2025, 8, 1), date(2026, 12, 25)] {
            let grid = month_grid(reference);
            let first = grid.iter().position(|c| c.is_current_month).unwrap();
            let count = grid.iter().filter(|c| c.is_current_month).count();

            assert_eq!(count as u32, days_in_month(reference));
            for (i, cell) in grid.iter().enumerate() {
                let in_run = i >= first && i < first + count;
                assert_eq!(cell.is_current_month, in_run);
            }
        }
    }

    #[test]
    fn grid_runs_day_by_day_without_gaps() {
        let grid = month_grid(date(2024, 3, 15));
        for pair in grid.windows(2) {
            assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
        }
    }

    #[test]
    fn grid_starts_on_a_sunday() {
        for reference in [date(2024, 3, 1), date(2025, 6, 30), date(2026, 2, 14)] {
            let grid = month_grid(reference);
            assert_eq!(grid[0].date.weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn trailing_padding_comes_from_the_next_month() {
        let grid = month_grid(date(2024, 4, 1));
        let last_current = grid.iter().rposition(|c| c.is_current_month).unwrap();
        for cell in &grid[last_current + 1..] {
            assert_eq!(cell.date.month(), 5);
            assert!(!cell.is_current_month);
        }
    }

    // --- days_in_month ---

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(date(2024, 2, 10)), 29);
        assert_eq!(days_in_month(date(2023, 2, 10)), 28);
        assert_eq!(days_in_month(date(2024, 12, 5)), 31);
        assert_eq!(days_in_month(date(2024, 4, 5)), 30);
    }
}
