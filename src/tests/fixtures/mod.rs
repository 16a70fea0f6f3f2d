pub mod events;
pub mod logistics;
pub mod participants;
