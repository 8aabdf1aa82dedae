pub mod calendar_config;
pub mod calendar_date;
pub mod date_range;
pub mod event;
pub mod persistence;
pub mod saved_state;

pub use calendar_config::CalendarConfig;
pub use calendar_date::{CalendarDate, month_name, weekday_from_iso, weekday_to_iso};
pub use date_range::{DateRange, NullableDateRange};
pub use event::{Event, EventData};
pub use persistence::Persistable;
pub use saved_state::SavedState;
