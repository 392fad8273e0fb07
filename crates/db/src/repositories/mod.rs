pub mod passenger_repo;
pub mod stats_repo;

pub use passenger_repo::PassengerRepo;
pub use stats_repo::StatsRepo;
