// libs/appointment-cell/src/services/mod.rs

pub mod appointment;
pub mod join_window;

pub use appointment::AppointmentService;
pub use join_window::{can_join, JoinWindow, JoinWindowError, JoinWindowPolicy};
