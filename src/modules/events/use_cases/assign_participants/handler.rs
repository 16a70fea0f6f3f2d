use crate::modules::events::core::event::Event;
use crate::modules::events::core::participant::{Participant, ParticipantId};
use crate::modules::events::core::ports::{EventStore, LogisticsStore, ParticipantStore};
use crate::modules::events::use_cases::event_service::{ApplicationError, EventService};

impl<TEvents, TParticipants, TLogistics> EventService<TEvents, TParticipants, TLogistics>
where
    TEvents: EventStore + 'static,
    TParticipants: ParticipantStore + 'static,
    TLogistics: LogisticsStore + 'static,
{
    /// Links the participant `participant_id` to `event` and saves the event.
    ///
    /// The participant is not saved on its own: its updated event set travels
    /// inside the saved event. An event that was never persisted is saved
    /// first so the participant records its real id.
    pub async fn add_affect_even_participant(
        &self,
        event: Event,
        participant_id: ParticipantId,
    ) -> Result<Event, ApplicationError> {
        let participant = self.load_participant(participant_id).await?;
        let mut event = self.ensure_persisted(event).await?;
        link(&mut event, participant);
        tracing::debug!(event_id = event.id, participant_id, "participant linked to event");
        Ok(self.events.save(event).await?)
    }

    /// Links every participant already attached to `event`, using the stored
    /// record of each one, and saves the event once (twice for an event that
    /// was never persisted).
    pub async fn add_affect_even_participants(
        &self,
        event: Event,
    ) -> Result<Event, ApplicationError> {
        let mut participants = Vec::new();
        for participant in event.participants.iter().flatten() {
            participants.push(self.load_participant(participant.id).await?);
        }
        let mut event = self.ensure_persisted(event).await?;
        for participant in participants {
            link(&mut event, participant);
        }
        tracing::debug!(event_id = event.id, "attached participants linked to event");
        Ok(self.events.save(event).await?)
    }

    async fn load_participant(&self, id: ParticipantId) -> Result<Participant, ApplicationError> {
        self.participants
            .find_by_id(id)
            .await?
            .ok_or(ApplicationError::ParticipantNotFound(id))
    }

    async fn ensure_persisted(&self, event: Event) -> Result<Event, ApplicationError> {
        if event.id != 0 {
            return Ok(event);
        }
        Ok(self.events.save(event).await?)
    }
}

fn link(event: &mut Event, mut participant: Participant) {
    participant.join_event(event.id);
    event.attach_participant(participant);
}
