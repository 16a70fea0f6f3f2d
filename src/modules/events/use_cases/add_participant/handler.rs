use crate::modules::events::core::participant::Participant;
use crate::modules::events::core::ports::{EventStore, LogisticsStore, ParticipantStore};
use crate::modules::events::use_cases::event_service::{ApplicationError, EventService};

impl<TEvents, TParticipants, TLogistics> EventService<TEvents, TParticipants, TLogistics>
where
    TEvents: EventStore + 'static,
    TParticipants: ParticipantStore + 'static,
    TLogistics: LogisticsStore + 'static,
{
    /// Persists the participant as given and returns the stored record.
    pub async fn add_participant(
        &self,
        participant: Participant,
    ) -> Result<Participant, ApplicationError> {
        Ok(self.participants.save(participant).await?)
    }
}
