use crate::cmd::session::{load_view, save_view, write_selection};
use anyhow::Result;
use scrollcal::data::persistence::get_data_dir;
use scrollcal::{CalendarDate, SelectionMode};
use std::io::Write;
use std::path::Path;

pub fn click(dates: &[CalendarDate]) -> Result<()> {
    let dir = get_data_dir()?;
    click_in_dir(&dir, CalendarDate::today(), dates, &mut std::io::stdout())
}

/// Clicks each date in order, reporting the cells each click redrew.
pub(crate) fn click_in_dir<W: Write>(
    dir: &Path,
    today: CalendarDate,
    dates: &[CalendarDate],
    out: &mut W,
) -> Result<()> {
    let mut view = load_view(dir, today)?;
    for &date in dates {
        let positions = view.on_date_clicked(date);
        if positions.is_empty() && !view.is_date_selected(date) {
            writeln!(out, "{date}: nothing to redraw")?;
        } else {
            writeln!(out, "{date}: redrew {} cell(s)", positions.len())?;
        }
    }
    write_selection(&view, out)?;
    save_view(&view, dir)
}

pub fn clear() -> Result<()> {
    let dir = get_data_dir()?;
    clear_in_dir(&dir, CalendarDate::today(), &mut std::io::stdout())
}

pub(crate) fn clear_in_dir<W: Write>(dir: &Path, today: CalendarDate, out: &mut W) -> Result<()> {
    let mut view = load_view(dir, today)?;
    let positions = view.clear_selection();
    writeln!(out, "Cleared selection, redrew {} cell(s)", positions.len())?;
    save_view(&view, dir)
}

pub fn mode(mode: SelectionMode) -> Result<()> {
    let dir = get_data_dir()?;
    mode_in_dir(&dir, CalendarDate::today(), mode, &mut std::io::stdout())
}

/// Switches the selection mode. Any current selection is dropped.
pub(crate) fn mode_in_dir<W: Write>(
    dir: &Path,
    today: CalendarDate,
    mode: SelectionMode,
    out: &mut W,
) -> Result<()> {
    let mut view = load_view(dir, today)?;
    view.set_selection_mode(mode);
    write_selection(&view, out)?;
    save_view(&view, dir)
}
