use crate::cmd::session::{load_view, save_view};
use anyhow::Result;
use scrollcal::data::{month_name, persistence::get_data_dir};
use scrollcal::CalendarDate;
use std::io::Write;
use std::path::Path;
use tracing::warn;

pub fn run(date: CalendarDate) -> Result<()> {
    let dir = get_data_dir()?;
    run_in_dir(&dir, CalendarDate::today(), date, &mut std::io::stdout())
}

/// Moves the displayed month to `date`. Months outside the bounds are
/// reported and nothing is saved.
pub(crate) fn run_in_dir<W: Write>(
    dir: &Path,
    today: CalendarDate,
    date: CalendarDate,
    out: &mut W,
) -> Result<()> {
    let mut view = load_view(dir, today)?;
    match view.move_to_date(date) {
        Some(position) => {
            writeln!(
                out,
                "Showing {} {} at position {}",
                month_name(date.month()),
                date.year(),
                position
            )?;
            save_view(&view, dir)
        }
        None => {
            warn!(%date, "month is outside the calendar bounds");
            writeln!(out, "{date} is outside the calendar bounds")?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollcal::data::{CalendarConfig, Persistable, SavedState};
    use tempfile::TempDir;

    fn d(y: i32, m: u32, day: u32) -> CalendarDate {
        CalendarDate::new(y, m, day).unwrap()
    }

    fn bounded_dir() -> TempDir {
        let tmp = TempDir::new().unwrap();
        CalendarConfig {
            initial_date: Some(d(2024, 6, 15)),
            min_date: Some(d(2024, 1, 1)),
            max_date: Some(d(2024, 12, 31)),
            ..CalendarConfig::default()
        }
        .save_to(tmp.path())
        .unwrap();
        tmp
    }

    #[test]
    fn test_goto_saves_displayed_date() {
        let tmp = bounded_dir();
        let mut buf = Vec::new();
        run_in_dir(tmp.path(), d(2024, 6, 15), d(2024, 9, 20), &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("Showing September 2024"));
        let state = SavedState::load_from(tmp.path()).unwrap();
        assert_eq!(state.displayed_date, Some(d(2024, 9, 20)));
    }

    #[test]
    fn test_goto_outside_bounds_saves_nothing() {
        let tmp = bounded_dir();
        let mut buf = Vec::new();
        run_in_dir(tmp.path(), d(2024, 6, 15), d(2023, 1, 1), &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("outside the calendar bounds"));
        assert!(!tmp.path().join("state.json").exists());
    }
}
