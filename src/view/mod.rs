pub mod calendar_view;
pub mod window;

pub use calendar_view::{CalendarSetup, CalendarView, DateFilter, DateInfo, ScrollOutcome};
pub use window::WindowManager;
