use crate::data::persistence::Persistable;
use crate::data::{CalendarDate, DateRange, NullableDateRange};
use crate::selection::{SelectionMode, SelectionSnapshot};
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::warn;

/// Everything a calendar view needs to come back after being suspended.
///
/// Every field is optional: a restore keeps the current value for any field
/// that is missing or unreadable. Cell flags are never stored; the window is
/// regenerated from `window` on restore.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SavedState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_mode: Option<SelectionMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<DateRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<NullableDateRange>,
    /// ISO weekday number, 1 = Monday.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_day_of_week: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displayed_date: Option<CalendarDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_selector_visible: Option<bool>,
}

impl Persistable for SavedState {
    fn filename() -> &'static str {
        "state.json"
    }
    fn is_json() -> bool {
        true
    }

    fn parse(contents: &str, origin: &Path) -> Result<Self> {
        Ok(SavedState::from_json_lenient(contents, origin))
    }
}

impl SavedState {
    /// Reads whatever fields can be read. A corrupt document yields an empty
    /// state; a corrupt field yields `None` for that field alone.
    pub fn from_json_lenient(contents: &str, origin: &Path) -> Self {
        let object = match serde_json::from_str::<Value>(contents) {
            Ok(Value::Object(object)) => object,
            Ok(_) => {
                warn!(path = %origin.display(), "saved state is not a JSON object, ignoring it");
                return SavedState::default();
            }
            Err(e) => {
                warn!(path = %origin.display(), error = %e, "saved state is not valid JSON, ignoring it");
                return SavedState::default();
            }
        };
        SavedState {
            selection_mode: field(&object, "selection_mode"),
            selection: field(&object, "selection"),
            window: field(&object, "window"),
            bounds: field(&object, "bounds"),
            first_day_of_week: field(&object, "first_day_of_week"),
            displayed_date: field(&object, "displayed_date"),
            year_selector_visible: field(&object, "year_selector_visible"),
        }
    }
}

fn field<T: DeserializeOwned>(object: &Map<String, Value>, key: &str) -> Option<T> {
    let value = object.get(key)?;
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(field = key, error = %e, "dropping unreadable saved field");
            None
        }
    }
}
