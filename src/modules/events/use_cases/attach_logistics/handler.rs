use crate::modules::events::core::logistics::Logistics;
use crate::modules::events::core::ports::{EventStore, LogisticsStore, ParticipantStore};
use crate::modules::events::use_cases::event_service::{ApplicationError, EventService};

impl<TEvents, TParticipants, TLogistics> EventService<TEvents, TParticipants, TLogistics>
where
    TEvents: EventStore + 'static,
    TParticipants: ParticipantStore + 'static,
    TLogistics: LogisticsStore + 'static,
{
    /// Saves `logistics`, attaches the stored item to the event described
    /// exactly by `event_description` and saves the event.
    pub async fn add_affect_log(
        &self,
        logistics: Logistics,
        event_description: &str,
    ) -> Result<Logistics, ApplicationError> {
        let mut event = self
            .events
            .find_by_description(event_description)
            .await?
            .ok_or_else(|| ApplicationError::EventNotFound(event_description.to_string()))?;
        let saved = self.logistics.save(logistics).await?;
        event.attach_logistics(saved.clone());
        tracing::debug!(event_id = event.id, logistics_id = saved.id, "logistics attached to event");
        self.events.save(event).await?;
        Ok(saved)
    }
}
