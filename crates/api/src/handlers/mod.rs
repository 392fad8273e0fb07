pub mod passengers;
pub mod statistics;
