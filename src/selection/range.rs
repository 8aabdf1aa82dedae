use super::Invalidation;
use crate::data::{CalendarDate, DateRange};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RangeState {
    #[default]
    Empty,
    /// Only the first end has been picked.
    Start(CalendarDate),
    /// Both ends picked; `from < to`.
    Complete(DateRange),
}

/// Two-click range picking.
///
/// `Empty -> Start -> Complete`, and a click while `Complete` throws the old
/// range away and begins a new one at the clicked date. Clicking the lone
/// start again returns to `Empty`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RangeSelection {
    state: RangeState,
}

impl RangeSelection {
    pub fn state(&self) -> RangeState {
        self.state
    }

    pub fn select(&mut self, date: CalendarDate) -> Invalidation {
        match self.state {
            RangeState::Empty => {
                self.state = RangeState::Start(date);
                Invalidation::date(date)
            }
            RangeState::Start(start) if start == date => {
                self.state = RangeState::Empty;
                Invalidation::date(date)
            }
            RangeState::Start(start) => {
                let range = DateRange::new(start, date);
                self.state = RangeState::Complete(range);
                // every day between the ends changes to "in range"
                let mut inv = Invalidation::none();
                inv.push_range(range);
                inv
            }
            RangeState::Complete(old) => {
                self.state = RangeState::Start(date);
                let mut inv = Invalidation::none();
                inv.push_range(old);
                inv.push_date(date);
                inv
            }
        }
    }

    pub fn is_selected(&self, date: CalendarDate) -> bool {
        match self.state {
            RangeState::Empty => false,
            RangeState::Start(start) => start == date,
            RangeState::Complete(range) => range.contains(date),
        }
    }

    /// The range ends in chronological order.
    pub fn selected_dates(&self) -> Vec<CalendarDate> {
        match self.state {
            RangeState::Empty => Vec::new(),
            RangeState::Start(start) => vec![start],
            RangeState::Complete(range) => vec![range.from(), range.to()],
        }
    }

    pub fn clear(&mut self) -> Invalidation {
        let mut inv = Invalidation::none();
        match std::mem::take(&mut self.state) {
            RangeState::Empty => {}
            RangeState::Start(start) => inv.push_date(start),
            RangeState::Complete(range) => inv.push_range(range),
        }
        inv
    }

    pub fn restore(&mut self, dates: &[CalendarDate]) {
        self.state = match dates {
            [start] => RangeState::Start(*start),
            [a, b] if a == b => RangeState::Start(*a),
            [a, b] => RangeState::Complete(DateRange::new(*a, *b)),
            _ => RangeState::Empty,
        };
    }
}
