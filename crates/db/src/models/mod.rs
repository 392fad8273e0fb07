pub mod passenger;
pub mod stats;
