use crate::modules::events::core::participant::ParticipantId;
use crate::modules::events::core::ports::{
    EventStore, LogisticsStore, ParticipantStore, StoreError,
};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error("participant {0} not found")]
    ParticipantNotFound(ParticipantId),

    #[error("event \"{0}\" not found")]
    EventNotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Façade over the event, participant and logistics stores. The operations
/// live next to their use case, one `impl` block each.
pub struct EventService<TEvents, TParticipants, TLogistics>
where
    TEvents: EventStore + 'static,
    TParticipants: ParticipantStore + 'static,
    TLogistics: LogisticsStore + 'static,
{
    pub(crate) events: Arc<TEvents>,
    pub(crate) participants: Arc<TParticipants>,
    pub(crate) logistics: Arc<TLogistics>,
}

impl<TEvents, TParticipants, TLogistics> EventService<TEvents, TParticipants, TLogistics>
where
    TEvents: EventStore + 'static,
    TParticipants: ParticipantStore + 'static,
    TLogistics: LogisticsStore + 'static,
{
    pub fn new(
        events: Arc<TEvents>,
        participants: Arc<TParticipants>,
        logistics: Arc<TLogistics>,
    ) -> Self {
        Self {
            events,
            participants,
            logistics,
        }
    }
}
