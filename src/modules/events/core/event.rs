use crate::modules::events::core::logistics::Logistics;
use crate::modules::events::core::participant::{Participant, Role};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type EventId = i64;

/// An event owns the values of its participants and logistics. Participants
/// only point back through event ids, so the graph has no cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub participants: Option<Vec<Participant>>,
    #[serde(default)]
    pub logistics: Option<Vec<Logistics>>,
}

impl Event {
    /// Attaches a participant, replacing any entry with the same id.
    pub fn attach_participant(&mut self, participant: Participant) {
        let participants = self.participants.get_or_insert_with(Vec::new);
        match participants.iter_mut().find(|p| p.id == participant.id) {
            Some(existing) => *existing = participant,
            None => participants.push(participant),
        }
    }

    pub fn attach_logistics(&mut self, logistics: Logistics) {
        let items = self.logistics.get_or_insert_with(Vec::new);
        if !items.contains(&logistics) {
            items.push(logistics);
        }
    }

    pub fn has_participant(&self, last_name: &str, first_name: &str, role: Role) -> bool {
        self.participants
            .iter()
            .flatten()
            .any(|p| p.has_identity(last_name, first_name, role))
    }
}
