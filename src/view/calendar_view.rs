use crate::calc::{self, CalendarItem, DateInfoProvider, Indicator, DEFAULT_PAGE_MONTHS};
use crate::data::{
    weekday_from_iso, weekday_to_iso, CalendarConfig, CalendarDate, DateRange, NullableDateRange,
    SavedState,
};
use crate::error::{CalendarError, Result};
use crate::selection::{Invalidation, SelectionEngine, SelectionMode};
use crate::view::WindowManager;
use chrono::Weekday;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// External selectability predicate. `true` means the date may be selected.
pub type DateFilter = Box<dyn Fn(CalendarDate) -> bool>;

/// Arguments of [`CalendarView::setup`].
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarSetup {
    pub initial_date: CalendarDate,
    pub min_date: Option<CalendarDate>,
    pub max_date: Option<CalendarDate>,
    pub selection_mode: SelectionMode,
    pub selected_dates: Vec<CalendarDate>,
    /// ISO weekday number, 1 = Monday … 7 = Sunday.
    pub first_day_of_week: u8,
    pub year_selector_visible: bool,
}

impl CalendarSetup {
    /// Unbounded, no selection, weeks starting on Monday.
    pub fn new(initial_date: CalendarDate) -> Self {
        CalendarSetup {
            initial_date,
            min_date: None,
            max_date: None,
            selection_mode: SelectionMode::None,
            selected_dates: Vec::new(),
            first_day_of_week: 1,
            year_selector_visible: false,
        }
    }

    pub fn from_config(config: &CalendarConfig, today: CalendarDate) -> Self {
        CalendarSetup {
            initial_date: config.initial_date.unwrap_or(today),
            min_date: config.min_date,
            max_date: config.max_date,
            selection_mode: config.selection_mode,
            selected_dates: config.selected_dates.clone(),
            first_day_of_week: config.first_day_of_week,
            year_selector_visible: config.year_selector_visible,
        }
    }

    pub fn with_bounds(mut self, min: Option<CalendarDate>, max: Option<CalendarDate>) -> Self {
        self.min_date = min;
        self.max_date = max;
        self
    }

    pub fn with_selection(mut self, mode: SelectionMode, dates: Vec<CalendarDate>) -> Self {
        self.selection_mode = mode;
        self.selected_dates = dates;
        self
    }

    pub fn with_first_day_of_week(mut self, iso_weekday: u8) -> Self {
        self.first_day_of_week = iso_weekday;
        self
    }

    pub fn with_year_selector(mut self, visible: bool) -> Self {
        self.year_selector_visible = visible;
        self
    }
}

/// Items added by [`CalendarView::on_scrolled`]. Callers keep the content
/// under the user's eye still by moving their scroll anchor by `prepended`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollOutcome {
    pub prepended: usize,
    pub appended: usize,
}

/// Inputs the view answers per-date questions from.
struct ViewContext {
    today: CalendarDate,
    bounds: NullableDateRange,
    filter: Option<DateFilter>,
    indicators: HashMap<CalendarDate, Vec<Indicator>>,
}

impl ViewContext {
    fn info<'a>(&'a self, selection: Option<&'a SelectionEngine>) -> DateInfo<'a> {
        DateInfo {
            today: self.today,
            bounds: &self.bounds,
            filter: self.filter.as_ref(),
            indicators: &self.indicators,
            selection,
        }
    }
}

/// The view's [`DateInfoProvider`]. Selection answers come from a borrowed
/// engine; without one nothing reports as selected.
#[derive(Clone, Copy)]
pub struct DateInfo<'a> {
    today: CalendarDate,
    bounds: &'a NullableDateRange,
    filter: Option<&'a DateFilter>,
    indicators: &'a HashMap<CalendarDate, Vec<Indicator>>,
    selection: Option<&'a SelectionEngine>,
}

impl DateInfoProvider for DateInfo<'_> {
    fn is_today(&self, date: CalendarDate) -> bool {
        date == self.today
    }

    fn is_date_selected(&self, date: CalendarDate) -> bool {
        self.selection.is_some_and(|s| s.is_date_selected(date))
    }

    fn is_date_out_of_range(&self, date: CalendarDate) -> bool {
        self.bounds.is_out_of_range(date)
    }

    fn is_date_selectable(&self, date: CalendarDate) -> bool {
        self.filter.is_none_or(|accept| accept(date))
    }

    fn indicators(&self, date: CalendarDate) -> Vec<Indicator> {
        self.indicators.get(&date).cloned().unwrap_or_default()
    }
}

/// Wires paging, selection and persistence together for one calendar.
pub struct CalendarView {
    context: ViewContext,
    selection: SelectionEngine,
    window: WindowManager,
    first_day_of_week: Weekday,
    displayed_date: CalendarDate,
    year_selector_visible: bool,
    page_size: u32,
}

impl Default for CalendarView {
    fn default() -> Self {
        CalendarView::new(CalendarDate::today())
    }
}

impl CalendarView {
    /// An empty view; nothing is loaded until [`CalendarView::setup`].
    pub fn new(today: CalendarDate) -> Self {
        CalendarView {
            context: ViewContext {
                today,
                bounds: NullableDateRange::unbounded(),
                filter: None,
                indicators: HashMap::new(),
            },
            selection: SelectionEngine::None,
            window: WindowManager::default(),
            first_day_of_week: Weekday::Mon,
            displayed_date: today,
            year_selector_visible: false,
            page_size: DEFAULT_PAGE_MONTHS,
        }
    }

    /// Months loaded per scroll page and on each side of the initial date.
    pub fn with_page_size(mut self, months: u32) -> Self {
        self.page_size = months.max(1);
        self
    }

    /// Configures the calendar from scratch.
    ///
    /// Fails without touching the view when the bounds are reversed, the
    /// first day of week is not 1..=7, or the initial selection does not fit
    /// the mode (none: 0 dates, single: at most 1, range: exactly 2).
    /// Initial dates that are out of range or filtered out are skipped.
    pub fn setup(&mut self, setup: CalendarSetup) -> Result<()> {
        let bounds = NullableDateRange::new(setup.min_date, setup.max_date);
        if let (Some(min), Some(max)) = (bounds.from, bounds.to) {
            if min > max {
                return Err(CalendarError::InvalidBounds { min, max });
            }
        }
        let first_day_of_week = weekday_from_iso(setup.first_day_of_week)?;
        check_selection_count(setup.selection_mode, setup.selected_dates.len())?;

        let mut selection = SelectionEngine::new(setup.selection_mode);
        let gate = DateInfo {
            bounds: &bounds,
            ..self.context.info(None)
        };
        selection.preselect(&setup.selected_dates, &gate);

        let displayed_date = bounds.clamp(setup.initial_date);
        let range = calc::initial_range(displayed_date, &bounds, self.page_size);
        let info = DateInfo {
            bounds: &bounds,
            ..self.context.info(Some(&selection))
        };
        let items = calc::generate(range.from(), range.to(), first_day_of_week, &info);

        self.context.bounds = bounds;
        self.selection = selection;
        self.first_day_of_week = first_day_of_week;
        self.displayed_date = displayed_date;
        self.year_selector_visible = setup.year_selector_visible;
        self.window.reset(items, range);
        info!(
            from = %range.from(),
            to = %range.to(),
            mode = %setup.selection_mode,
            items = self.window.len(),
            "calendar set up"
        );
        Ok(())
    }

    /// Makes `date`'s month the displayed one and returns its position.
    ///
    /// Returns `None` and changes nothing when the month lies outside the
    /// bounds. The window is rebuilt around `date` when it is not loaded.
    pub fn move_to_date(&mut self, date: CalendarDate) -> Option<usize> {
        if self.context.bounds.is_month_out_of_range(date) {
            debug!(%date, "move outside bounds ignored");
            return None;
        }
        if !self.window.contains_month(date) {
            let range = calc::initial_range(date, &self.context.bounds, self.page_size);
            let items = self.generate(range);
            self.window.reset(items, range);
            info!(from = %range.from(), to = %range.to(), "window reset around {date}");
        }
        self.displayed_date = self.context.bounds.clamp(date);
        self.window.position_of_month(date)
    }

    /// Reports the visible positions after a scroll. Loads a page at each
    /// edge the user has reached and tracks the displayed month.
    pub fn on_scrolled(&mut self, first_visible: usize, last_visible: usize) -> ScrollOutcome {
        let mut outcome = ScrollOutcome::default();
        if self.window.is_empty() {
            return outcome;
        }
        if let Some(month) = self
            .window
            .items()
            .iter()
            .skip(first_visible)
            .find_map(CalendarItem::month)
        {
            self.displayed_date = month;
        }
        if first_visible == 0 {
            outcome.prepended = self.load_previous_page();
        }
        if last_visible.saturating_add(outcome.prepended) >= self.window.len() - 1 {
            outcome.appended = self.load_next_page();
        }
        outcome
    }

    /// Prepends up to one page of earlier months. Returns the number of items
    /// added, which is also how far every existing position moved.
    pub fn load_previous_page(&mut self) -> usize {
        let Some(window) = self.window.range() else {
            return 0;
        };
        let Some(page) = calc::previous_page(window, &self.context.bounds, self.page_size) else {
            debug!("no earlier months to load");
            return 0;
        };
        let items = self.generate(page);
        let count = self.window.prepend(items, page);
        info!(from = %page.from(), to = %page.to(), items = count, "prepended page");
        count
    }

    /// Appends up to one page of later months. Returns the number of items added.
    pub fn load_next_page(&mut self) -> usize {
        let Some(window) = self.window.range() else {
            return 0;
        };
        let Some(page) = calc::next_page(window, &self.context.bounds, self.page_size) else {
            debug!("no later months to load");
            return 0;
        };
        let items = self.generate(page);
        let count = self.window.append(items, page);
        info!(from = %page.from(), to = %page.to(), items = count, "appended page");
        count
    }

    /// Applies a click and returns the positions whose cells changed, sorted.
    /// Those cells are already refreshed when this returns.
    pub fn on_date_clicked(&mut self, date: CalendarDate) -> Vec<usize> {
        let gate = self.context.info(None);
        let invalidation = self.selection.on_date_selected(date, &gate);
        self.redraw(&invalidation)
    }

    pub fn clear_selection(&mut self) -> Vec<usize> {
        let invalidation = self.selection.clear();
        self.redraw(&invalidation)
    }

    /// Swaps in a fresh strategy for `mode`; the current selection is dropped.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        if self.selection.mode() == mode {
            return;
        }
        info!(from = %self.selection.mode(), to = %mode, "selection mode changed");
        self.selection = SelectionEngine::new(mode);
        self.refresh();
    }

    /// Replaces the selectability filter and refreshes every loaded cell.
    pub fn set_date_filter(&mut self, filter: Option<DateFilter>) {
        self.context.filter = filter;
        self.refresh();
    }

    pub fn set_indicators(&mut self, indicators: HashMap<CalendarDate, Vec<Indicator>>) {
        self.context.indicators = indicators;
        self.refresh();
    }

    pub fn set_year_selector_visible(&mut self, visible: bool) {
        self.year_selector_visible = visible;
    }

    /// Re-derives all cell flags from the current provider answers.
    pub fn refresh(&mut self) {
        let info = self.context.info(Some(&self.selection));
        self.window.refresh(&info);
    }

    pub fn save_state(&self) -> SavedState {
        SavedState {
            selection_mode: Some(self.selection.mode()),
            selection: Some(self.selection.save()),
            window: self.window.range(),
            bounds: Some(self.context.bounds),
            first_day_of_week: Some(weekday_to_iso(self.first_day_of_week)),
            displayed_date: Some(self.displayed_date),
            year_selector_visible: Some(self.year_selector_visible),
        }
    }

    /// Restores what `state` carries, keeping the current value of any field
    /// that is missing or invalid. The mode is applied before the selection,
    /// and the window is regenerated last from the restored range.
    pub fn restore_state(&mut self, state: SavedState) {
        let mode = state.selection_mode.unwrap_or_else(|| self.selection.mode());
        let mut selection = SelectionEngine::new(mode);
        match &state.selection {
            Some(snapshot) => selection.restore(snapshot),
            None => debug!("no saved selection, starting empty"),
        }

        let bounds = match state.bounds {
            Some(bounds) if bounds.is_valid() => bounds,
            Some(_) => {
                warn!("saved bounds are reversed, keeping current bounds");
                self.context.bounds
            }
            None => self.context.bounds,
        };

        let first_day_of_week = match state.first_day_of_week.map(weekday_from_iso) {
            Some(Ok(weekday)) => weekday,
            Some(Err(e)) => {
                warn!(error = %e, "keeping current first day of week");
                self.first_day_of_week
            }
            None => self.first_day_of_week,
        };

        let displayed_date = bounds.clamp(state.displayed_date.unwrap_or(self.displayed_date));
        let range = state
            .window
            .or(self.window.range())
            .and_then(|range| clip_to_bounds(range, &bounds))
            .filter(|range| range.to_whole_months().contains(displayed_date))
            .unwrap_or_else(|| calc::initial_range(displayed_date, &bounds, self.page_size));

        self.selection = selection;
        self.context.bounds = bounds;
        self.first_day_of_week = first_day_of_week;
        self.displayed_date = displayed_date;
        if let Some(visible) = state.year_selector_visible {
            self.year_selector_visible = visible;
        }
        let items = self.generate(range);
        self.window.reset(items, range);
        info!(from = %range.from(), to = %range.to(), mode = %mode, "state restored");
    }

    pub fn items(&self) -> &[CalendarItem] {
        self.window.items()
    }

    pub fn item_at(&self, position: usize) -> Option<&CalendarItem> {
        self.window.item_at(position)
    }

    pub fn position_of_month(&self, date: CalendarDate) -> Option<usize> {
        self.window.position_of_month(date)
    }

    pub fn position_of_date(&self, date: CalendarDate) -> Option<usize> {
        self.window.position_of_date(date)
    }

    pub fn window_range(&self) -> Option<DateRange> {
        self.window.range()
    }

    pub fn bounds(&self) -> NullableDateRange {
        self.context.bounds
    }

    pub fn today(&self) -> CalendarDate {
        self.context.today
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    pub fn displayed_date(&self) -> CalendarDate {
        self.displayed_date
    }

    pub fn year_selector_visible(&self) -> bool {
        self.year_selector_visible
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    pub fn selected_dates(&self) -> Vec<CalendarDate> {
        self.selection.selected_dates()
    }

    pub fn is_date_selected(&self, date: CalendarDate) -> bool {
        self.selection.is_date_selected(date)
    }

    /// The provider the view builds its cells from.
    pub fn date_info(&self) -> DateInfo<'_> {
        self.context.info(Some(&self.selection))
    }

    fn generate(&self, range: DateRange) -> Vec<CalendarItem> {
        calc::generate(range.from(), range.to(), self.first_day_of_week, &self.date_info())
    }

    fn redraw(&mut self, invalidation: &Invalidation) -> Vec<usize> {
        let mut positions: Vec<usize> = invalidation
            .dates()
            .iter()
            .filter_map(|&date| self.window.position_of_date(date))
            .collect();
        for &range in invalidation.ranges() {
            positions.extend(self.window.positions_in(range));
        }
        positions.sort_unstable();
        positions.dedup();

        let info = self.context.info(Some(&self.selection));
        self.window.refresh_positions(&positions, &info);
        positions
    }
}

fn check_selection_count(mode: SelectionMode, count: usize) -> Result<()> {
    let fits = match mode {
        SelectionMode::None => count == 0,
        SelectionMode::Single => count <= 1,
        SelectionMode::Multiple => true,
        SelectionMode::Range => count == 2,
    };
    if fits {
        Ok(())
    } else {
        Err(CalendarError::SelectionCountMismatch { mode, count })
    }
}

/// `range` widened to whole months and cut to the bounds' months.
fn clip_to_bounds(range: DateRange, bounds: &NullableDateRange) -> Option<DateRange> {
    let range = range.to_whole_months();
    let mut from = range.from();
    let mut to = range.to();
    if let Some(min) = bounds.from {
        from = from.max(min.month_beginning());
    }
    if let Some(max) = bounds.to {
        to = to.min(max.month_end());
    }
    (from <= to).then(|| DateRange::new(from, to))
}
