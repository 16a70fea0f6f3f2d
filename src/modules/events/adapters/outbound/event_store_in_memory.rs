// In memory implementation of the EventStore port.
//
// Purpose
// - Support local runs of the service and adapter tests without a database.
//
// Responsibilities
// - Store events in a map keyed by id, upserting on save.
// - Hand out the next free id to events saved with id 0.
// - Count the saves, for assertions on how often the service persisted.

use crate::modules::events::core::event::{Event, EventId};
use crate::modules::events::core::participant::Role;
use crate::modules::events::core::ports::{EventStore, StoreError};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEventStore {
    rows: RwLock<BTreeMap<EventId, Event>>,
    saves: AtomicUsize,
    is_offline: bool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, StoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_by_description(&self, description: &str) -> Result<Option<Event>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|e| e.description == description)
            .cloned())
    }

    async fn find_by_start_date_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Event>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|e| start <= e.start_date && e.start_date <= end)
            .cloned()
            .collect())
    }

    async fn find_by_participant(
        &self,
        last_name: &str,
        first_name: &str,
        role: Role,
    ) -> Result<Vec<Event>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|e| e.has_participant(last_name, first_name, role))
            .cloned()
            .collect())
    }

    async fn save(&self, mut event: Event) -> Result<Event, StoreError> {
        self.ensure_online()?;
        let mut rows = self.rows.write().await;
        if event.id == 0 {
            event.id = rows.keys().next_back().map_or(1, |last| last + 1);
        }
        rows.insert(event.id, event.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(event)
    }
}
