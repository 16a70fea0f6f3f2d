// Ports define what the event services need from persistence, without implementing it.
//
// Responsibilities
// - Keep the service independent of any database by coding against traits.
//
// Boundaries
// - No concrete storage here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - In memory implementations live in adapters/outbound. Unit tests of the
//   service use the generated mocks to assert which calls were made.

use crate::modules::events::core::event::{Event, EventId};
use crate::modules::events::core::logistics::Logistics;
use crate::modules::events::core::participant::{Participant, ParticipantId, Role};
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Store-level lookup; the service reaches events through the other finders.
    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, StoreError>;
    async fn find_by_description(&self, description: &str) -> Result<Option<Event>, StoreError>;
    /// Events whose start date lies in `[start, end]`.
    async fn find_by_start_date_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Event>, StoreError>;
    async fn find_by_participant(
        &self,
        last_name: &str,
        first_name: &str,
        role: Role,
    ) -> Result<Vec<Event>, StoreError>;
    async fn save(&self, event: Event) -> Result<Event, StoreError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParticipantStore: Send + Sync {
    async fn find_by_id(&self, id: ParticipantId) -> Result<Option<Participant>, StoreError>;
    async fn save(&self, participant: Participant) -> Result<Participant, StoreError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogisticsStore: Send + Sync {
    async fn save(&self, logistics: Logistics) -> Result<Logistics, StoreError>;
}
