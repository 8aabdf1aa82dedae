use crate::calc::grid::{self, CalendarItem, DateInfoProvider};
use crate::data::{CalendarDate, DateRange};

/// The materialized slice of the calendar behind the scrolling list.
///
/// Items only ever grow at either end; positions of existing items shift by
/// exactly the number of prepended items and are otherwise stable until the
/// next [`WindowManager::reset`].
#[derive(Clone, Debug, Default)]
pub struct WindowManager {
    items: Vec<CalendarItem>,
    range: Option<DateRange>,
}

impl WindowManager {
    pub fn reset(&mut self, items: Vec<CalendarItem>, range: DateRange) {
        self.items = items;
        self.range = Some(range);
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.range = None;
    }

    /// Splices `items` covering `range` before the first item. Returns how many
    /// positions every existing item moved by.
    pub fn prepend(&mut self, items: Vec<CalendarItem>, range: DateRange) -> usize {
        let Some(current) = self.range else {
            let count = items.len();
            self.reset(items, range);
            return count;
        };
        let count = items.len();
        self.items.splice(0..0, items);
        self.range = Some(DateRange::new(range.from(), current.to()));
        count
    }

    /// Splices `items` covering `range` after the last item.
    pub fn append(&mut self, items: Vec<CalendarItem>, range: DateRange) -> usize {
        let Some(current) = self.range else {
            let count = items.len();
            self.reset(items, range);
            return count;
        };
        let count = items.len();
        self.items.extend(items);
        self.range = Some(DateRange::new(current.from(), range.to()));
        count
    }

    pub fn items(&self) -> &[CalendarItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The months currently loaded, `None` before the first reset.
    pub fn range(&self) -> Option<DateRange> {
        self.range
    }

    pub fn item_at(&self, position: usize) -> Option<&CalendarItem> {
        self.items.get(position)
    }

    pub fn contains_month(&self, date: CalendarDate) -> bool {
        self.range
            .is_some_and(|r| r.to_whole_months().contains(date.month_beginning()))
    }

    /// Position of the month header for `date`'s month, or of its first day
    /// when the window starts without a header for it.
    pub fn position_of_month(&self, date: CalendarDate) -> Option<usize> {
        if !self.contains_month(date) {
            return None;
        }
        let month = date.month_beginning();
        self.items
            .iter()
            .position(|item| matches!(item, CalendarItem::MonthMarker { date } if *date == month))
            .or_else(|| {
                self.items
                    .iter()
                    .position(|item| item.cell_date().is_some_and(|d| d.is_same_month(month)))
            })
    }

    pub fn position_of_date(&self, date: CalendarDate) -> Option<usize> {
        let start = self.position_of_month(date)?;
        self.items[start..]
            .iter()
            .position(|item| item.cell_date() == Some(date))
            .map(|offset| start + offset)
    }

    /// Positions of every date cell inside `range`, in order.
    pub fn positions_in(&self, range: DateRange) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.cell_date().is_some_and(|d| range.contains(d)))
            .map(|(position, _)| position)
            .collect()
    }

    /// Re-derives every cell's flags from `info`.
    pub fn refresh(&mut self, info: &dyn DateInfoProvider) {
        grid::refresh(&mut self.items, info);
    }

    /// Re-derives the flags of the given positions. Unknown positions are ignored.
    pub fn refresh_positions(&mut self, positions: &[usize], info: &dyn DateInfoProvider) {
        for &position in positions {
            if let Some(item) = self.items.get_mut(position) {
                grid::refresh_item(item, info);
            }
        }
    }
}
