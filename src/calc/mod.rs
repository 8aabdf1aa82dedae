pub mod displayed_range;
pub mod grid;

#[cfg(test)]
pub(crate) mod testing;

pub use displayed_range::{DEFAULT_PAGE_MONTHS, initial_range, next_page, previous_page};
pub use grid::{CalendarItem, DateCell, DateInfoProvider, Indicator, generate};
