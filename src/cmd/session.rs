use anyhow::{Context, Result};
use scrollcal::data::{CalendarConfig, EventData, Persistable, SavedState};
use scrollcal::{CalendarDate, CalendarSetup, CalendarView, SelectionMode};
use std::path::Path;
use tracing::debug;

/// Builds the view from config.yaml and events.json, then applies
/// state.json on top when one has been saved.
pub(crate) fn load_view(dir: &Path, today: CalendarDate) -> Result<CalendarView> {
    let config = CalendarConfig::load_from(dir)?;
    let events = EventData::load_from(dir)?;

    let mut view = CalendarView::new(today).with_page_size(config.page_size_months);
    view.set_indicators(events.indicator_map());
    if config.weekdays_only {
        view.set_date_filter(Some(Box::new(|date: CalendarDate| !date.is_weekend())));
    }
    // A range has to start empty or complete, so an empty range config is set
    // up without a selection and switched to range mode afterwards.
    let mut setup = CalendarSetup::from_config(&config, today);
    let empty_range = setup.selection_mode == SelectionMode::Range && setup.selected_dates.is_empty();
    if empty_range {
        setup.selection_mode = SelectionMode::None;
    }
    view.setup(setup)
        .with_context(|| format!("bad calendar section in {}", dir.join("config.yaml").display()))?;
    if empty_range {
        view.set_selection_mode(SelectionMode::Range);
    }

    if dir.join(SavedState::filename()).exists() {
        view.restore_state(SavedState::load_from(dir)?);
    } else {
        debug!("no saved state, using config only");
    }
    Ok(view)
}

pub(crate) fn save_view(view: &CalendarView, dir: &Path) -> Result<()> {
    view.save_state().save_to(dir)
}

/// Prints the mode and the selected dates.
pub(crate) fn write_selection<W: std::io::Write>(view: &CalendarView, out: &mut W) -> Result<()> {
    let dates = view.selected_dates();
    let listed = if dates.is_empty() {
        "none".to_string()
    } else {
        dates
            .iter()
            .map(CalendarDate::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    writeln!(out, "{:<10} {}", "Mode:", view.selection_mode())?;
    writeln!(out, "{:<10} {}", "Selected:", listed)?;
    Ok(())
}
