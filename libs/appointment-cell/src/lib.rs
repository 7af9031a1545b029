//! # Appointment Cell
//!
//! Appointment listing and scheduling over an in-memory book, plus the join-window
//! predicate that decides when a consultation may be entered.
//!
//! ## API Endpoints
//!
//! - `GET /appointments?patientId=&search=` - List appointments
//! - `POST /appointments` - Schedule an appointment
//! - `GET /appointments/{id}` - Get one appointment
//! - `GET /appointments/{id}/join-window?at=` - Evaluate the join window
//!
//! ## Join window
//!
//! A consultation at instant `T` can be joined from `T - 15min` to `T + 30min`
//! (both ends inclusive) while its status is `scheduled` or `in-progress`.
//!
//! ```rust
//! use appointment_cell::{can_join, AppointmentStatus, JoinWindowPolicy};
//! use chrono::{NaiveDate, TimeZone, Utc};
//!
//! let policy = JoinWindowPolicy::default();
//! let date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
//! let window = policy.window_for(date, "14:00").unwrap();
//! let now = Utc.with_ymd_and_hms(2026, 3, 15, 13, 50, 0).unwrap();
//!
//! assert!(can_join(AppointmentStatus::Scheduled, &window, now));
//! ```

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    Appointment, AppointmentError, AppointmentSearchQuery, AppointmentStatus, AppointmentType,
    JoinAvailability, ScheduleAppointmentRequest,
};
pub use router::appointment_routes;
pub use services::{can_join, AppointmentService, JoinWindow, JoinWindowError, JoinWindowPolicy};
