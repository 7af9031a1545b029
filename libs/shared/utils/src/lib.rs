pub mod fields;
pub mod latency;
pub mod test_utils;

pub use fields::{all_present, present};
pub use latency::simulate_latency;
