use crate::calc::DEFAULT_PAGE_MONTHS;
use crate::data::persistence::Persistable;
use crate::data::CalendarDate;
use crate::selection::SelectionMode;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Setup values read from the `calendar` key of config.yaml.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CalendarConfig {
    /// Month shown first; today when absent.
    pub initial_date: Option<CalendarDate>,
    pub min_date: Option<CalendarDate>,
    pub max_date: Option<CalendarDate>,
    pub selection_mode: SelectionMode,
    pub selected_dates: Vec<CalendarDate>,
    /// ISO weekday number, 1 = Monday … 7 = Sunday.
    pub first_day_of_week: u8,
    pub year_selector_visible: bool,
    pub page_size_months: u32,
    /// Only Monday to Friday can be selected.
    pub weekdays_only: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            initial_date: None,
            min_date: None,
            max_date: None,
            selection_mode: SelectionMode::Single,
            selected_dates: Vec::new(),
            first_day_of_week: 1,
            year_selector_visible: false,
            page_size_months: DEFAULT_PAGE_MONTHS,
            weekdays_only: false,
        }
    }
}

#[derive(Serialize, Deserialize, Default, Debug)]
struct ConfigWrapper {
    #[serde(default)]
    calendar: CalendarConfig,
}

impl Persistable for ConfigWrapper {
    fn filename() -> &'static str {
        "config.yaml"
    }
    fn is_json() -> bool {
        false
    }
}

impl CalendarConfig {
    pub fn load_from(dir: &std::path::Path) -> Result<Self> {
        Ok(ConfigWrapper::load_from(dir)?.calendar)
    }

    pub fn save_to(&self, dir: &std::path::Path) -> Result<()> {
        let wrapper = ConfigWrapper {
            calendar: self.clone(),
        };
        wrapper.save_to(dir)
    }
}
