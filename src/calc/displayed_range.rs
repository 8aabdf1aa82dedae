//! Which months to materialize: the initial window and each scroll page.

use crate::data::{CalendarDate, DateRange, NullableDateRange};

/// Months loaded per page, and on each side of the anchor initially.
pub const DEFAULT_PAGE_MONTHS: u32 = 6;

/// The first window shown around `anchor`.
///
/// Spans `half_window` months on each side of the anchor's month, cut back to
/// the months of the hard bounds. The anchor is pulled inside the bounds
/// first, so the result always contains at least one month.
pub fn initial_range(
    anchor: CalendarDate,
    bounds: &NullableDateRange,
    half_window: u32,
) -> DateRange {
    let anchor = bounds.clamp(anchor);
    let half = half_window as i32;

    let mut from = anchor.minus_months(half).month_beginning();
    if let Some(min) = bounds.from {
        from = from.max(min.month_beginning());
    }
    let mut to = anchor.plus_months(half).month_end();
    if let Some(max) = bounds.to {
        to = to.min(max.month_end());
    }
    DateRange::new(from, to)
}

/// The months to prepend before `window`, or `None` when the min bound's
/// month is already loaded. Never more than `page_months`.
pub fn previous_page(
    window: DateRange,
    bounds: &NullableDateRange,
    page_months: u32,
) -> Option<DateRange> {
    let first_month = window.from().month_beginning();
    let available = match bounds.from {
        Some(min) => min.months_between(first_month),
        None => page_months as i64,
    };
    let count = available.min(page_months as i64);
    if count <= 0 {
        return None;
    }
    let page_end = first_month.checked_plus_months(-1)?.month_end();
    Some(DateRange::new(first_month.minus_months(count as i32), page_end))
}

/// The months to append after `window`, or `None` when the max bound's
/// month is already loaded. Never more than `page_months`.
pub fn next_page(
    window: DateRange,
    bounds: &NullableDateRange,
    page_months: u32,
) -> Option<DateRange> {
    let last_month = window.to().month_beginning();
    let available = match bounds.to {
        Some(max) => last_month.months_between(max),
        None => page_months as i64,
    };
    let count = available.min(page_months as i64);
    if count <= 0 {
        return None;
    }
    let page_start = last_month.checked_plus_months(1)?;
    Some(DateRange::new(page_start, last_month.plus_months(count as i32).month_end()))
}
