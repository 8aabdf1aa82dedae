//! Date selection strategies.
//!
//! A [`SelectionEngine`] owns the selection for one [`SelectionMode`].
//! Changing mode means building a new engine; state never crosses variants.

mod multiple;
mod range;
mod single;

pub use multiple::MultipleSelection;
pub use range::{RangeSelection, RangeState};
pub use single::SingleSelection;

use crate::calc::DateInfoProvider;
use crate::data::{CalendarDate, DateRange};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    None,
    Single,
    Multiple,
    Range,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectionMode::None => "none",
            SelectionMode::Single => "single",
            SelectionMode::Multiple => "multiple",
            SelectionMode::Range => "range",
        };
        f.write_str(name)
    }
}

impl FromStr for SelectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(SelectionMode::None),
            "single" => Ok(SelectionMode::Single),
            "multiple" => Ok(SelectionMode::Multiple),
            "range" => Ok(SelectionMode::Range),
            other => Err(format!(
                "unknown selection mode '{other}' (expected none, single, multiple or range)"
            )),
        }
    }
}

/// Dates whose cells must be redrawn after a selection change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Invalidation {
    dates: Vec<CalendarDate>,
    ranges: Vec<DateRange>,
}

impl Invalidation {
    pub fn none() -> Self {
        Invalidation::default()
    }

    pub fn date(date: CalendarDate) -> Self {
        let mut inv = Invalidation::default();
        inv.push_date(date);
        inv
    }

    pub fn push_date(&mut self, date: CalendarDate) {
        if !self.dates.contains(&date) {
            self.dates.push(date);
        }
    }

    /// Marks every day of `range`, inclusive.
    pub fn push_range(&mut self, range: DateRange) {
        if !self.ranges.contains(&range) {
            self.ranges.push(range);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() && self.ranges.is_empty()
    }

    pub fn dates(&self) -> &[CalendarDate] {
        &self.dates
    }

    pub fn ranges(&self) -> &[DateRange] {
        &self.ranges
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.dates.contains(&date) || self.ranges.iter().any(|r| r.contains(date))
    }
}

/// What an engine persists. Its meaning depends on the mode it is restored into.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSnapshot {
    #[serde(default)]
    pub dates: Vec<CalendarDate>,
}

impl SelectionSnapshot {
    pub fn new(dates: Vec<CalendarDate>) -> Self {
        SelectionSnapshot { dates }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectionEngine {
    #[default]
    None,
    Single(SingleSelection),
    Multiple(MultipleSelection),
    Range(RangeSelection),
}

impl SelectionEngine {
    /// A fresh engine with an empty selection.
    pub fn new(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::None => SelectionEngine::None,
            SelectionMode::Single => SelectionEngine::Single(SingleSelection::default()),
            SelectionMode::Multiple => SelectionEngine::Multiple(MultipleSelection::default()),
            SelectionMode::Range => SelectionEngine::Range(RangeSelection::default()),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            SelectionEngine::None => SelectionMode::None,
            SelectionEngine::Single(_) => SelectionMode::Single,
            SelectionEngine::Multiple(_) => SelectionMode::Multiple,
            SelectionEngine::Range(_) => SelectionMode::Range,
        }
    }

    /// Applies a click on `date`.
    ///
    /// Dates that are out of range or rejected by the provider's filter leave
    /// the selection unchanged and invalidate nothing.
    pub fn on_date_selected(
        &mut self,
        date: CalendarDate,
        info: &dyn DateInfoProvider,
    ) -> Invalidation {
        if info.is_date_out_of_range(date) || !info.is_date_selectable(date) {
            debug!(%date, "ignoring click on unselectable date");
            return Invalidation::none();
        }
        match self {
            SelectionEngine::None => Invalidation::none(),
            SelectionEngine::Single(s) => s.select(date),
            SelectionEngine::Multiple(s) => s.select(date),
            SelectionEngine::Range(s) => s.select(date),
        }
    }

    /// Selects each date that is not already selected, in order, through the
    /// same gate as a click. Used to seed an initial selection.
    pub fn preselect(&mut self, dates: &[CalendarDate], info: &dyn DateInfoProvider) {
        for &date in dates {
            if !self.is_date_selected(date) {
                self.on_date_selected(date, info);
            }
        }
    }

    pub fn is_date_selected(&self, date: CalendarDate) -> bool {
        match self {
            SelectionEngine::None => false,
            SelectionEngine::Single(s) => s.is_selected(date),
            SelectionEngine::Multiple(s) => s.is_selected(date),
            SelectionEngine::Range(s) => s.is_selected(date),
        }
    }

    /// Single: 0-1 dates; multiple: click order; range: `[start]` or `[start, end]`.
    pub fn selected_dates(&self) -> Vec<CalendarDate> {
        match self {
            SelectionEngine::None => Vec::new(),
            SelectionEngine::Single(s) => s.selected_dates(),
            SelectionEngine::Multiple(s) => s.selected_dates(),
            SelectionEngine::Range(s) => s.selected_dates(),
        }
    }

    pub fn clear(&mut self) -> Invalidation {
        match self {
            SelectionEngine::None => Invalidation::none(),
            SelectionEngine::Single(s) => s.clear(),
            SelectionEngine::Multiple(s) => s.clear(),
            SelectionEngine::Range(s) => s.clear(),
        }
    }

    pub fn save(&self) -> SelectionSnapshot {
        SelectionSnapshot::new(self.selected_dates())
    }

    /// Replaces the selection with `snapshot`. Restored dates bypass the
    /// selectability gate so that a saved state comes back unchanged.
    pub fn restore(&mut self, snapshot: &SelectionSnapshot) {
        match self {
            SelectionEngine::None => {}
            SelectionEngine::Single(s) => s.restore(&snapshot.dates),
            SelectionEngine::Multiple(s) => s.restore(&snapshot.dates),
            SelectionEngine::Range(s) => s.restore(&snapshot.dates),
        }
    }
}
