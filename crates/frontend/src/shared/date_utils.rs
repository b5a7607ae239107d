/// Utilities for date formatting and calendar layout
///
/// Provides consistent date handling across the dashboard
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

/// Current wall-clock time, read fresh on every call
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Move a month start by `delta` months
pub fn shift_month(start: NaiveDate, delta: i32) -> NaiveDate {
    let months = start.year() * 12 + start.month0() as i32 + delta;
    let (year, month0) = (months.div_euclid(12), months.rem_euclid(12) as u32);
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap_or(start)
}

/// Calendar grid for a month, Monday first. Leading/trailing cells outside
/// the month are `None`; the grid length is a multiple of 7.
pub fn month_grid(start: NaiveDate) -> Vec<Option<NaiveDate>> {
    let first = month_start(start);
    let lead = first.weekday().num_days_from_monday() as usize;
    let mut cells: Vec<Option<NaiveDate>> = vec![None; lead];
    cells.extend(
        first
            .iter_days()
            .take_while(|d| d.month() == first.month())
            .map(Some),
    );
    while cells.len() % 7 != 0 {
        cells.push(None);
    }
    cells
}

/// Header like "March 2024"
pub fn month_title(start: NaiveDate) -> String {
    start.format("%B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_shift_month_across_years() {
        assert_eq!(shift_month(d(2024, 12, 1), 1), d(2025, 1, 1));
        assert_eq!(shift_month(d(2024, 1, 1), -1), d(2023, 12, 1));
        assert_eq!(shift_month(d(2024, 3, 1), 0), d(2024, 3, 1));
    }

    #[test]
    fn test_month_grid_march_2024() {
        // 2024-03-01 is a Friday
        let grid = month_grid(d(2024, 3, 9));
        assert_eq!(grid.len() % 7, 0);
        assert_eq!(&grid[..4], &[None, None, None, None]);
        assert_eq!(grid[4], Some(d(2024, 3, 1)));
        assert_eq!(grid.iter().flatten().count(), 31);
        assert_eq!(grid.iter().flatten().last(), Some(&d(2024, 3, 31)));
    }

    #[test]
    fn test_month_title() {
        assert_eq!(month_title(d(2024, 3, 1)), "March 2024");
    }
}
