// libs/teleconsult-cell/src/lib.rs
//! # Teleconsult Cell
//!
//! Mock teleconsultation backend: scheduling, status updates and joining of video
//! consultations between a patient and an expert. Records live in process memory
//! and are reset on restart.
//!
//! ## Architecture
//!
//! ```text
//! +-----------------------------------------------------+
//! |                 Teleconsult Cell                    |
//! +-----------------------------------------------------+
//! |  handlers.rs     |  HTTP endpoint handlers          |
//! |  router.rs       |  Route definitions               |
//! |  models.rs       |  Data structures & DTOs          |
//! |  services/       |  Business logic layer            |
//! |    store.rs      |  TeleconsultStore + in-memory    |
//! |    meeting.rs    |  Vendor meeting credentials      |
//! |    teleconsult.rs|  Scheduling / join rules         |
//! +-----------------------------------------------------+
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /api/teleconsult?userId=&userType=` - Consultations for a participant
//! - `POST /api/teleconsult` - Schedule a consultation
//! - `PATCH /api/teleconsult` - Update a consultation's status
//! - `POST /api/teleconsult/join` - Join as a participant, returns the meeting URL
//! - `GET /api/teleconsult/{id}/availability?at=` - Join-window evaluation
//! - `GET /api/teleconsult/health` - Health check
//!
//! ## Usage Example
//!
//! ```rust
//! use std::sync::Arc;
//! use shared_config::AppConfig;
//! use teleconsult_cell::{teleconsult_routes, TeleconsultService};
//!
//! let config = Arc::new(AppConfig::default());
//! let routes = teleconsult_routes(Arc::new(TeleconsultService::new(config)));
//! ```

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    CreateTeleconsultRequest, JoinTeleconsultRequest, JoinedTeleconsult, TeleconsultError,
    TeleconsultStatus, Teleconsultation, UpdateTeleconsultStatusRequest,
};
pub use router::teleconsult_routes;
pub use services::{InMemoryTeleconsultStore, TeleconsultService, TeleconsultStore};
