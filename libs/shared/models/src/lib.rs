pub mod error;
pub mod participant;

pub use error::AppError;
pub use participant::UserType;
