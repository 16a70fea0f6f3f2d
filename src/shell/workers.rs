use crate::modules::events::core::ports::{EventStore, LogisticsStore, ParticipantStore};
use crate::modules::events::use_cases::event_service::EventService;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{MissedTickBehavior, interval};

/// Runs `calcul_cout` every `period`, starting immediately, until `shutdown`
/// turns true or its sender is dropped. A failed run is logged and the next
/// tick tries again.
pub async fn run_cost_recalculation<TEvents, TParticipants, TLogistics>(
    service: Arc<EventService<TEvents, TParticipants, TLogistics>>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) where
    TEvents: EventStore + 'static,
    TParticipants: ParticipantStore + 'static,
    TLogistics: LogisticsStore + 'static,
{
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(error) = service.calcul_cout().await {
                    tracing::error!(%error, "cost recalculation failed");
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    tracing::info!("cost recalculation worker stopped");
                    return;
                }
            }
        }
    }
}
