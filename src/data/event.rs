use crate::calc::Indicator;
use crate::data::persistence::Persistable;
use crate::data::CalendarDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A dated note shown as an indicator dot under its day cell.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Event {
    pub date: CalendarDate,
    pub description: String,
}

impl Event {
    pub fn new(date: CalendarDate, description: &str) -> Self {
        Event {
            date,
            description: description.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct EventData {
    pub events: Vec<Event>,
}

impl Persistable for EventData {
    fn filename() -> &'static str {
        "events.json"
    }
    fn is_json() -> bool {
        true
    }
}

impl EventData {
    pub fn add(&mut self, event: Event) {
        self.events.push(event);
        self.events.sort_by(|a, b| a.date.cmp(&b.date));
    }

    pub fn remove(&mut self, date: CalendarDate, description: &str) {
        self.events
            .retain(|e| !(e.date == date && e.description == description));
    }

    /// Groups events by day, keeping insertion order within a day.
    pub fn indicator_map(&self) -> HashMap<CalendarDate, Vec<Indicator>> {
        let mut map: HashMap<CalendarDate, Vec<Indicator>> = HashMap::new();
        for event in &self.events {
            map.entry(event.date)
                .or_default()
                .push(Indicator::new(&event.description));
        }
        map
    }
}
