// Declare modules within the adapters directory
pub mod in_memory_repository;
pub mod postgres_repository;

pub use in_memory_repository::{
    InMemoryPlantRepository, InMemoryPortfolioRepository, InMemoryTenantRepository,
};
pub use postgres_repository::{
    PostgresPlantRepository, PostgresPortfolioRepository, PostgresTenantRepository,
};
