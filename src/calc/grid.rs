use crate::data::CalendarDate;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Number of columns in a calendar week row.
pub const DAYS_PER_WEEK: usize = 7;

/// A small marker drawn under a date cell (an event, a reminder, ...).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Indicator {
    pub label: String,
}

impl Indicator {
    pub fn new(label: &str) -> Self {
        Indicator {
            label: label.to_string(),
        }
    }
}

/// Per-date answers the generator and the selection engine need.
///
/// Implementations may change their answers between calls; items that were
/// already generated keep the flags they were built with until refreshed.
pub trait DateInfoProvider {
    fn is_today(&self, date: CalendarDate) -> bool;
    fn is_date_selected(&self, date: CalendarDate) -> bool;
    fn is_date_out_of_range(&self, date: CalendarDate) -> bool;
    fn is_date_selectable(&self, date: CalendarDate) -> bool;

    fn is_weekend(&self, date: CalendarDate) -> bool {
        date.is_weekend()
    }

    fn indicators(&self, _date: CalendarDate) -> Vec<Indicator> {
        Vec::new()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateCell {
    pub date: CalendarDate,
    pub is_today: bool,
    pub is_selected: bool,
    /// False when the date is out of range or rejected by the filter.
    pub is_selectable: bool,
    pub is_weekend: bool,
    pub indicators: Vec<Indicator>,
}

impl DateCell {
    pub fn build(date: CalendarDate, info: &dyn DateInfoProvider) -> Self {
        DateCell {
            date,
            is_today: info.is_today(date),
            is_selected: info.is_date_selected(date),
            is_selectable: !info.is_date_out_of_range(date) && info.is_date_selectable(date),
            is_weekend: info.is_weekend(date),
            indicators: info.indicators(date),
        }
    }
}

/// One renderable unit of the calendar grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CalendarItem {
    /// Month header; `date` is always the first of the month.
    MonthMarker { date: CalendarDate },
    DateCell(DateCell),
    /// Non-interactive padding in the first or last week of a month.
    Filler,
}

impl CalendarItem {
    pub fn date_cell(&self) -> Option<&DateCell> {
        match self {
            CalendarItem::DateCell(cell) => Some(cell),
            _ => None,
        }
    }

    /// The day of a date cell. Markers and fillers have none.
    pub fn cell_date(&self) -> Option<CalendarDate> {
        self.date_cell().map(|cell| cell.date)
    }

    /// The first of the month this item belongs to, if it carries a date.
    pub fn month(&self) -> Option<CalendarDate> {
        match self {
            CalendarItem::MonthMarker { date } => Some(*date),
            CalendarItem::DateCell(cell) => Some(cell.date.month_beginning()),
            CalendarItem::Filler => None,
        }
    }

    pub fn is_month_marker(&self) -> bool {
        matches!(self, CalendarItem::MonthMarker { .. })
    }
}

/// Number of fillers placed before the 1st so that it lands in its weekday column.
pub fn leading_fillers(month: CalendarDate, first_day_of_week: Weekday) -> usize {
    let first = month.month_beginning().weekday().num_days_from_monday() as usize;
    let start = first_day_of_week.num_days_from_monday() as usize;
    (first + DAYS_PER_WEEK - start) % DAYS_PER_WEEK
}

/// Fillers needed after the last day to complete its week row.
pub fn trailing_fillers(month: CalendarDate, first_day_of_week: Weekday) -> usize {
    let used = leading_fillers(month, first_day_of_week) + month.days_in_month() as usize;
    (DAYS_PER_WEEK - used % DAYS_PER_WEEK) % DAYS_PER_WEEK
}

/// Produces the grid for every month from `from`'s month through `to`'s month.
///
/// Each month is laid out as marker, leading fillers, one cell per day and
/// trailing fillers, so that every month's cells fill whole week rows.
/// Returns nothing when `from > to`.
pub fn generate(
    from: CalendarDate,
    to: CalendarDate,
    first_day_of_week: Weekday,
    info: &dyn DateInfoProvider,
) -> Vec<CalendarItem> {
    let mut items = Vec::new();
    if from > to {
        return items;
    }

    let mut month = from.month_beginning();
    let last = to.month_beginning();
    while month <= last {
        items.push(CalendarItem::MonthMarker { date: month });
        items.extend(std::iter::repeat_n(
            CalendarItem::Filler,
            leading_fillers(month, first_day_of_week),
        ));
        for offset in 0..month.days_in_month() as i64 {
            let date = month.plus_days(offset);
            items.push(CalendarItem::DateCell(DateCell::build(date, info)));
        }
        items.extend(std::iter::repeat_n(
            CalendarItem::Filler,
            trailing_fillers(month, first_day_of_week),
        ));
        match month.checked_plus_months(1) {
            Some(next) => month = next,
            None => break,
        }
    }
    items
}

/// Recomputes every date cell's flags in place. Layout is untouched.
pub fn refresh(items: &mut [CalendarItem], info: &dyn DateInfoProvider) {
    for item in items.iter_mut() {
        refresh_item(item, info);
    }
}

pub fn refresh_item(item: &mut CalendarItem, info: &dyn DateInfoProvider) {
    if let CalendarItem::DateCell(cell) = item {
        *cell = DateCell::build(cell.date, info);
    }
}
