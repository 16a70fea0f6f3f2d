// Composition root for the event services.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in memory store implementations.
// - Wire them into the EventService.
// - Spawn background workers (cost recalculation).

pub mod config;
pub mod state;
pub mod workers;
