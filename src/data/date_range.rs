use crate::data::CalendarDate;
use serde::{Deserialize, Serialize};

/// Closed interval `[from, to]` with `from <= to`.
///
/// "Nothing loaded yet" is expressed as `Option<DateRange>::None` by the owners
/// of a range rather than by an in-band sentinel value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(from = "RawDateRange")]
pub struct DateRange {
    from: CalendarDate,
    to: CalendarDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    from: CalendarDate,
    to: CalendarDate,
}

impl From<RawDateRange> for DateRange {
    fn from(raw: RawDateRange) -> Self {
        DateRange::new(raw.from, raw.to)
    }
}

impl DateRange {
    /// Builds a range from two dates in either order.
    pub fn new(a: CalendarDate, b: CalendarDate) -> Self {
        if a <= b {
            DateRange { from: a, to: b }
        } else {
            DateRange { from: b, to: a }
        }
    }

    pub fn single(date: CalendarDate) -> Self {
        DateRange {
            from: date,
            to: date,
        }
    }

    pub fn from(&self) -> CalendarDate {
        self.from
    }

    pub fn to(&self) -> CalendarDate {
        self.to
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date.is_between(self.from, self.to)
    }

    /// Number of calendar months touched by the range, at least 1.
    pub fn month_count(&self) -> i64 {
        self.from.months_between(self.to) + 1
    }

    /// The same range widened to whole months.
    pub fn to_whole_months(&self) -> Self {
        DateRange {
            from: self.from.month_beginning(),
            to: self.to.month_end(),
        }
    }
}

/// Optional hard boundaries. Either end may be open.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullableDateRange {
    #[serde(default)]
    pub from: Option<CalendarDate>,
    #[serde(default)]
    pub to: Option<CalendarDate>,
}

impl NullableDateRange {
    pub fn new(from: Option<CalendarDate>, to: Option<CalendarDate>) -> Self {
        NullableDateRange { from, to }
    }

    pub fn unbounded() -> Self {
        NullableDateRange::default()
    }

    /// True only when a present bound is violated.
    pub fn is_out_of_range(&self, date: CalendarDate) -> bool {
        self.from.is_some_and(|from| date < from) || self.to.is_some_and(|to| date > to)
    }

    /// Month-granular variant of [`Self::is_out_of_range`]: a date in the same
    /// month as a bound is inside.
    pub fn is_month_out_of_range(&self, date: CalendarDate) -> bool {
        self.from
            .is_some_and(|from| date.month_beginning() < from.month_beginning())
            || self
                .to
                .is_some_and(|to| date.month_beginning() > to.month_beginning())
    }

    /// True when both ends are present and ordered, or at least one is absent.
    pub fn is_valid(&self) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= to,
            _ => true,
        }
    }

    /// Pulls `date` inside the bounds.
    pub fn clamp(&self, date: CalendarDate) -> CalendarDate {
        match (self.from, self.to) {
            (Some(from), _) if date < from => from,
            (_, Some(to)) if date > to => to,
            _ => date,
        }
    }
}
