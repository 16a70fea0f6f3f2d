// In memory implementation of the LogisticsStore port.

use crate::modules::events::core::logistics::{Logistics, LogisticsId};
use crate::modules::events::core::ports::{LogisticsStore, StoreError};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryLogisticsStore {
    rows: RwLock<BTreeMap<LogisticsId, Logistics>>,
    saves: AtomicUsize,
    is_offline: bool,
}

impl InMemoryLogisticsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub async fn find_by_id(&self, id: LogisticsId) -> Result<Option<Logistics>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Logistics store offline".into()));
        }
        Ok(self.rows.read().await.get(&id).cloned())
    }
}

#[async_trait::async_trait]
impl LogisticsStore for InMemoryLogisticsStore {
    async fn save(&self, mut logistics: Logistics) -> Result<Logistics, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Logistics store offline".into()));
        }
        let mut rows = self.rows.write().await;
        if logistics.id == 0 {
            logistics.id = rows.keys().next_back().map_or(1, |last| last + 1);
        }
        rows.insert(logistics.id, logistics.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(logistics)
    }
}
