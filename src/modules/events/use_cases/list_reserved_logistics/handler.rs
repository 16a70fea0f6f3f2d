use crate::modules::events::core::logistics::Logistics;
use crate::modules::events::core::ports::{EventStore, LogisticsStore, ParticipantStore};
use crate::modules::events::use_cases::event_service::{ApplicationError, EventService};
use chrono::NaiveDate;

impl<TEvents, TParticipants, TLogistics> EventService<TEvents, TParticipants, TLogistics>
where
    TEvents: EventStore + 'static,
    TParticipants: ParticipantStore + 'static,
    TLogistics: LogisticsStore + 'static,
{
    /// Reserved logistics of the events starting within `[start, end]`.
    ///
    /// Returns `Some(vec![])` when no event matches, and `None` as soon as a
    /// matching event has no logistics at all. Callers rely on telling those
    /// two apart.
    pub async fn get_logistics_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<Vec<Logistics>>, ApplicationError> {
        let events = self.events.find_by_start_date_between(start, end).await?;
        let mut reserved = Vec::new();
        for event in events {
            let Some(items) = event.logistics.filter(|items| !items.is_empty()) else {
                tracing::debug!(event_id = event.id, "event without logistics in range");
                return Ok(None);
            };
            reserved.extend(items.into_iter().filter(|l| l.reserved));
        }
        Ok(Some(reserved))
    }
}
