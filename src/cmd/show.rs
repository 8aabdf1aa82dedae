use crate::cmd::session::{load_view, write_selection};
use anyhow::Result;
use chrono::Weekday;
use scrollcal::data::{month_name, persistence::get_data_dir};
use scrollcal::{CalendarDate, CalendarItem, CalendarView, DateCell};
use std::io::Write;
use std::path::Path;

/// Width of one rendered week: seven cells of three columns.
const ROW_WIDTH: usize = 21;

pub fn run(before: u32, after: u32) -> Result<()> {
    let dir = get_data_dir()?;
    run_in_dir(&dir, CalendarDate::today(), before, after, &mut std::io::stdout())
}

/// Loads the view, pages `before` times backwards and `after` times forwards,
/// and prints the loaded months. Paging stops early at a bound.
pub(crate) fn run_in_dir<W: Write>(
    dir: &Path,
    today: CalendarDate,
    before: u32,
    after: u32,
    out: &mut W,
) -> Result<()> {
    let mut view = load_view(dir, today)?;
    for _ in 0..before {
        if view.load_previous_page() == 0 {
            break;
        }
    }
    for _ in 0..after {
        if view.load_next_page() == 0 {
            break;
        }
    }
    write_window(&view, out)
}

/// Renders every loaded month as a text grid.
///
/// Marks after the day number: `*` selected, `.` not selectable, `+` has
/// events. Selection takes precedence.
pub(crate) fn write_window<W: Write>(view: &CalendarView, out: &mut W) -> Result<()> {
    let displayed = view.displayed_date();
    writeln!(
        out,
        "Showing {} {}",
        month_name(displayed.month()),
        displayed.year()
    )?;
    if view.year_selector_visible() {
        writeln!(out, "Year: < {} >", displayed.year())?;
    }
    write_selection(view, out)?;

    let mut line = String::new();
    let mut column = 0;
    for item in view.items() {
        match item {
            CalendarItem::MonthMarker { date } => {
                flush(&mut line, out)?;
                column = 0;
                writeln!(out)?;
                let title = format!("{} {}", month_name(date.month()), date.year());
                writeln!(out, "{}", format!("{title:^ROW_WIDTH$}").trim_end())?;
                writeln!(out, "{}", weekday_header(view.first_day_of_week()))?;
            }
            CalendarItem::Filler => line.push_str("   "),
            CalendarItem::DateCell(cell) => {
                line.push_str(&format!("{:>2}{}", cell.date.day(), cell_mark(cell)));
            }
        }
        if !item.is_month_marker() {
            column += 1;
            if column == 7 {
                flush(&mut line, out)?;
                column = 0;
            }
        }
    }
    flush(&mut line, out)?;
    writeln!(out)?;
    writeln!(out, "* selected  . unavailable  + event")?;
    Ok(())
}

fn cell_mark(cell: &DateCell) -> char {
    if cell.is_selected {
        '*'
    } else if !cell.is_selectable {
        '.'
    } else if !cell.indicators.is_empty() {
        '+'
    } else {
        ' '
    }
}

fn weekday_header(first_day_of_week: Weekday) -> String {
    let mut day = first_day_of_week;
    let mut names = Vec::with_capacity(7);
    for _ in 0..7 {
        names.push(weekday_abbrev(day));
        day = day.succ();
    }
    names.join(" ")
}

fn weekday_abbrev(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

fn flush<W: Write>(line: &mut String, out: &mut W) -> Result<()> {
    if !line.is_empty() {
        writeln!(out, "{}", line.trim_end())?;
        line.clear();
    }
    Ok(())
}
