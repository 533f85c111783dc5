use async_trait::async_trait;
use std::error::Error as StdError;
use uuid::Uuid;

// Declare modules
pub mod adapters;
pub mod domain;
pub mod services;

pub use domain::{plant::Plant, portfolio::Portfolio, tenant::Tenant};
pub use services::{PlantService, PortfolioService, TenantService};

// Define a common error type for the core library
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Record already exists: {0}")]
    AlreadyExists(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] Box<dyn StdError + Send + Sync>),
    #[error("Internal error: {0}")]
    Internal(String),
}

// --- Store ports ---
//
// Lookups report a missing record as `Ok(None)`, never as an error. `delete`
// is idempotent: removing a record that is already gone succeeds.

/// Port for the tenant table. Tenants have no parent.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Tenant>, CoreError>;

    async fn get_by_id(&self, tenant_id: Uuid) -> Result<Option<Tenant>, CoreError>;

    /// Persist a tenant whose id was assigned by the caller and echo it back.
    async fn add(&self, tenant: Tenant) -> Result<Tenant, CoreError>;

    /// Overwrite name and country of the stored row with the same id.
    /// Fails with `NotFound` if the row disappeared.
    async fn update(&self, tenant: Tenant) -> Result<Tenant, CoreError>;

    async fn delete(&self, tenant: &Tenant) -> Result<(), CoreError>;
}

/// Port for the portfolio table, keyed by parent tenant.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// All portfolios whose `tenant_id` matches; empty when there are none.
    async fn list_by_tenant(&self, tenant_id: Uuid) -> Result<Vec<Portfolio>, CoreError>;

    async fn get_by_id(&self, portfolio_id: Uuid) -> Result<Option<Portfolio>, CoreError>;

    async fn add(&self, portfolio: Portfolio) -> Result<Portfolio, CoreError>;

    async fn delete(&self, portfolio: &Portfolio) -> Result<(), CoreError>;
}

/// Port for the plant table, keyed by parent portfolio.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlantRepository: Send + Sync {
    /// All plants whose `portfolio_id` matches; empty when there are none.
    async fn list_by_portfolio(&self, portfolio_id: Uuid) -> Result<Vec<Plant>, CoreError>;

    async fn get_by_id(&self, plant_id: Uuid) -> Result<Option<Plant>, CoreError>;

    async fn add(&self, plant: Plant) -> Result<Plant, CoreError>;

    async fn delete(&self, plant: &Plant) -> Result<(), CoreError>;
}
