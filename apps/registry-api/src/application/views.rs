//! JSON shapes of the API and their mapping to domain records.
//!
//! Payloads never carry ids: a new record gets a fresh id, and the parent id
//! comes from the request path.

use core_lib::{CoreError, Plant, Portfolio, Tenant};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TenantView {
    pub tenant_id: Uuid,
    pub tenant_name: String,
    pub tenant_country: String,
}

impl From<Tenant> for TenantView {
    fn from(tenant: Tenant) -> Self {
        Self {
            tenant_id: tenant.id,
            tenant_name: tenant.name,
            tenant_country: tenant.country,
        }
    }
}

/// Body of tenant create and update requests.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TenantPayload {
    pub tenant_name: String,
    pub tenant_country: String,
}

impl TenantPayload {
    pub fn into_tenant(self) -> Result<Tenant, CoreError> {
        Tenant::new(self.tenant_name, self.tenant_country)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    pub portfolio_id: Uuid,
    pub tenant_id: Uuid,
    pub portfolio_name: String,
}

impl From<Portfolio> for PortfolioView {
    fn from(portfolio: Portfolio) -> Self {
        Self {
            portfolio_id: portfolio.id,
            tenant_id: portfolio.tenant_id,
            portfolio_name: portfolio.name,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPayload {
    pub portfolio_name: String,
}

impl PortfolioPayload {
    pub fn into_portfolio(self, tenant_id: Uuid) -> Result<Portfolio, CoreError> {
        Portfolio::new(tenant_id, self.portfolio_name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlantView {
    pub plant_id: Uuid,
    pub portfolio_id: Uuid,
    pub plant_name: String,
}

impl From<Plant> for PlantView {
    fn from(plant: Plant) -> Self {
        Self {
            plant_id: plant.id,
            portfolio_id: plant.portfolio_id,
            plant_name: plant.name,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlantPayload {
    pub plant_name: String,
}

impl PlantPayload {
    pub fn into_plant(self, portfolio_id: Uuid) -> Result<Plant, CoreError> {
        Plant::new(portfolio_id, self.plant_name)
    }
}
