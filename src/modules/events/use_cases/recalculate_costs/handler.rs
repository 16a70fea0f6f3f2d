use crate::modules::events::core::cost::event_cost;
use crate::modules::events::core::participant::Role;
use crate::modules::events::core::ports::{EventStore, LogisticsStore, ParticipantStore};
use crate::modules::events::use_cases::event_service::{ApplicationError, EventService};

// The cost job only covers the events of this organizer.
pub const ORGANIZER_LAST_NAME: &str = "Tounsi";
pub const ORGANIZER_FIRST_NAME: &str = "Ahmed";

impl<TEvents, TParticipants, TLogistics> EventService<TEvents, TParticipants, TLogistics>
where
    TEvents: EventStore + 'static,
    TParticipants: ParticipantStore + 'static,
    TLogistics: LogisticsStore + 'static,
{
    /// Recomputes and saves the cost of every event organized by
    /// Tounsi Ahmed from its reserved logistics.
    pub async fn calcul_cout(&self) -> Result<(), ApplicationError> {
        let events = self
            .events
            .find_by_participant(ORGANIZER_LAST_NAME, ORGANIZER_FIRST_NAME, Role::Organizer)
            .await?;
        for mut event in events {
            event.cost = event_cost(&event);
            tracing::info!(
                event_id = event.id,
                description = %event.description,
                cost = event.cost,
                "event cost recalculated"
            );
            self.events.save(event).await?;
        }
        Ok(())
    }
}
