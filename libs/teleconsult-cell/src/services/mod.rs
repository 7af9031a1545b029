// libs/teleconsult-cell/src/services/mod.rs

pub mod meeting;
pub mod store;
pub mod teleconsult;

pub use meeting::{join_url, MeetingCredentials};
pub use store::{InMemoryTeleconsultStore, TeleconsultStore};
pub use teleconsult::TeleconsultService;
