// In memory implementation of the ParticipantStore port.

use crate::modules::events::core::participant::{Participant, ParticipantId};
use crate::modules::events::core::ports::{ParticipantStore, StoreError};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryParticipantStore {
    rows: RwLock<BTreeMap<ParticipantId, Participant>>,
    saves: AtomicUsize,
    is_offline: bool,
}

impl InMemoryParticipantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ParticipantStore for InMemoryParticipantStore {
    async fn find_by_id(&self, id: ParticipantId) -> Result<Option<Participant>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Participant store offline".into()));
        }
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn save(&self, mut participant: Participant) -> Result<Participant, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Participant store offline".into()));
        }
        let mut rows = self.rows.write().await;
        if participant.id == 0 {
            participant.id = rows.keys().next_back().map_or(1, |last| last + 1);
        }
        rows.insert(participant.id, participant.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(participant)
    }
}
