//! A vertically scrolling month calendar, independent of any UI toolkit.
//!
//! [`CalendarView`] turns a date range into a flat list of [`CalendarItem`]s
//! (month headers, fillers and day cells), loads more months as the list is
//! scrolled toward either end, and applies clicks through a
//! [`SelectionEngine`]. Its state can be captured as a [`SavedState`] and
//! restored later.

pub mod calc;
pub mod data;
pub mod error;
pub mod selection;
pub mod view;

pub use calc::{CalendarItem, DateCell, DateInfoProvider, Indicator};
pub use data::{CalendarDate, DateRange, NullableDateRange, SavedState};
pub use error::{CalendarError, Result};
pub use selection::{SelectionEngine, SelectionMode};
pub use view::{CalendarSetup, CalendarView, DateFilter, ScrollOutcome};
