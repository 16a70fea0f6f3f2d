// Shared test fixture for participants. Defaults come from `json/participant.json`.

use crate::modules::events::core::event::EventId;
use crate::modules::events::core::participant::{Participant, ParticipantId, Role};
use std::collections::BTreeSet;

const PARTICIPANT_JSON: &str = include_str!("json/participant.json");

pub struct ParticipantBuilder {
    inner: Participant,
}

impl Default for ParticipantBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ParticipantBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(PARTICIPANT_JSON).unwrap(),
        }
    }

    pub fn id(mut self, v: ParticipantId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn last_name(mut self, v: impl Into<String>) -> Self {
        self.inner.last_name = v.into();
        self
    }

    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.inner.first_name = v.into();
        self
    }

    pub fn role(mut self, v: Role) -> Self {
        self.inner.role = v;
        self
    }

    pub fn events(mut self, v: Option<BTreeSet<EventId>>) -> Self {
        self.inner.events = v;
        self
    }

    pub fn build(self) -> Participant {
        self.inner
    }
}

#[cfg(test)]
mod participant_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = ParticipantBuilder::default().build();
        assert_eq!(built.id, 1);
        assert_eq!(built.last_name, "Tounsi");
        assert_eq!(built.first_name, "Ahmed");
        assert_eq!(built.role, Role::Organizer);
        assert_eq!(built.events, Some(BTreeSet::new()));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let built = ParticipantBuilder::new()
            .id(2)
            .last_name("Mokhtar")
            .first_name("Salma")
            .role(Role::Animator)
            .events(None)
            .build();
        assert_eq!(built.id, 2);
        assert_eq!(built.last_name, "Mokhtar");
        assert_eq!(built.first_name, "Salma");
        assert_eq!(built.role, Role::Animator);
        assert_eq!(built.events, None);
    }
}
