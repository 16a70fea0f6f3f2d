// Shared test fixture for events. Defaults come from `json/event.json`.

use crate::modules::events::core::event::{Event, EventId};
use crate::modules::events::core::logistics::Logistics;
use crate::modules::events::core::participant::Participant;
use chrono::NaiveDate;

const EVENT_JSON: &str = include_str!("json/event.json");

pub struct EventBuilder {
    inner: Event,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(EVENT_JSON).unwrap(),
        }
    }

    pub fn id(mut self, v: EventId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn start_date(mut self, v: NaiveDate) -> Self {
        self.inner.start_date = v;
        self
    }

    pub fn end_date(mut self, v: NaiveDate) -> Self {
        self.inner.end_date = v;
        self
    }

    pub fn cost(mut self, v: f64) -> Self {
        self.inner.cost = v;
        self
    }

    pub fn participants(mut self, v: Option<Vec<Participant>>) -> Self {
        self.inner.participants = v;
        self
    }

    pub fn logistics(mut self, v: Option<Vec<Logistics>>) -> Self {
        self.inner.logistics = v;
        self
    }

    pub fn build(self) -> Event {
        self.inner
    }
}

#[cfg(test)]
mod event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = EventBuilder::default().build();
        assert_eq!(built.id, 1);
        assert_eq!(built.description, "Conference Tech 2024");
        assert_eq!(built.start_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(built.end_date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(built.cost, 0.0);
        assert_eq!(built.participants, Some(vec![]));
        assert_eq!(built.logistics, Some(vec![]));
    }
}
