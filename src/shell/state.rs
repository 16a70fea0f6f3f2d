use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::events::adapters::outbound::logistics_store_in_memory::InMemoryLogisticsStore;
use crate::modules::events::adapters::outbound::participant_store_in_memory::InMemoryParticipantStore;
use crate::modules::events::use_cases::event_service::EventService;
use std::sync::Arc;

pub type InMemoryEventService =
    EventService<InMemoryEventStore, InMemoryParticipantStore, InMemoryLogisticsStore>;

#[derive(Clone)]
pub struct AppState {
    pub event_service: Arc<InMemoryEventService>,
    pub event_store: Arc<InMemoryEventStore>,
    pub participant_store: Arc<InMemoryParticipantStore>,
    pub logistics_store: Arc<InMemoryLogisticsStore>,
}

impl AppState {
    pub fn in_memory() -> Self {
        let event_store = Arc::new(InMemoryEventStore::new());
        let participant_store = Arc::new(InMemoryParticipantStore::new());
        let logistics_store = Arc::new(InMemoryLogisticsStore::new());
        let event_service = Arc::new(EventService::new(
            event_store.clone(),
            participant_store.clone(),
            logistics_store.clone(),
        ));
        Self {
            event_service,
            event_store,
            participant_store,
            logistics_store,
        }
    }
}
