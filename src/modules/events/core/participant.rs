use crate::modules::events::core::event::EventId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub type ParticipantId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Organizer,
    Animator,
    Guest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub last_name: String,
    pub first_name: String,
    pub role: Role,
    /// Ids of the events this participant is attached to. `None` until the
    /// first association.
    #[serde(default)]
    pub events: Option<BTreeSet<EventId>>,
}

impl Participant {
    /// Records the event on this side of the relation, creating the set on
    /// first use.
    pub fn join_event(&mut self, event_id: EventId) {
        self.events.get_or_insert_with(BTreeSet::new).insert(event_id);
    }

    pub fn has_identity(&self, last_name: &str, first_name: &str, role: Role) -> bool {
        self.last_name == last_name && self.first_name == first_name && self.role == role
    }
}
