//! A configurable `DateInfoProvider` for unit tests.

use crate::calc::{DateInfoProvider, Indicator};
use crate::data::{CalendarDate, NullableDateRange};
use std::collections::{HashMap, HashSet};

#[derive(Default)]
pub(crate) struct FixedInfo {
    today: Option<CalendarDate>,
    selected: HashSet<CalendarDate>,
    unselectable: HashSet<CalendarDate>,
    indicators: HashMap<CalendarDate, Vec<Indicator>>,
    bounds: NullableDateRange,
}

impl FixedInfo {
    pub(crate) fn with_today(mut self, today: CalendarDate) -> Self {
        self.today = Some(today);
        self
    }

    pub(crate) fn with_selected(mut self, dates: &[CalendarDate]) -> Self {
        self.selected.extend(dates.iter().copied());
        self
    }

    pub(crate) fn with_unselectable(mut self, dates: &[CalendarDate]) -> Self {
        self.unselectable.extend(dates.iter().copied());
        self
    }

    pub(crate) fn with_indicator(mut self, date: CalendarDate, label: &str) -> Self {
        self.indicators
            .entry(date)
            .or_default()
            .push(Indicator::new(label));
        self
    }

    pub(crate) fn with_bounds(mut self, from: Option<CalendarDate>, to: Option<CalendarDate>) -> Self {
        self.bounds = NullableDateRange::new(from, to);
        self
    }
}

impl DateInfoProvider for FixedInfo {
    fn is_today(&self, date: CalendarDate) -> bool {
        self.today == Some(date)
    }

    fn is_date_selected(&self, date: CalendarDate) -> bool {
        self.selected.contains(&date)
    }

    fn is_date_out_of_range(&self, date: CalendarDate) -> bool {
        self.bounds.is_out_of_range(date)
    }

    fn is_date_selectable(&self, date: CalendarDate) -> bool {
        !self.unselectable.contains(&date)
    }

    fn indicators(&self, date: CalendarDate) -> Vec<Indicator> {
        self.indicators.get(&date).cloned().unwrap_or_default()
    }
}
