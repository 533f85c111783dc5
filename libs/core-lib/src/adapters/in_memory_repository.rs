use crate::{
    CoreError, Plant, PlantRepository, Portfolio, PortfolioRepository, Tenant, TenantRepository,
};
use async_trait::async_trait;
use dashmap::{DashMap, mapref::entry::Entry};
use std::sync::Arc;
use uuid::Uuid;

/// In-memory implementation of the tenant port for testing and single-executable mode.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTenantRepository {
    // Store: Tenant ID -> Tenant
    store: Arc<DashMap<Uuid, Tenant>>,
}

/// In-memory implementation of the portfolio port.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPortfolioRepository {
    store: Arc<DashMap<Uuid, Portfolio>>,
}

/// In-memory implementation of the plant port.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlantRepository {
    store: Arc<DashMap<Uuid, Plant>>,
}

fn insert_new<T: Clone>(
    store: &DashMap<Uuid, T>,
    id: Uuid,
    record: T,
    kind: &str,
) -> Result<T, CoreError> {
    match store.entry(id) {
        Entry::Occupied(_) => Err(CoreError::AlreadyExists(format!("{kind} {id}"))),
        Entry::Vacant(slot) => {
            slot.insert(record.clone());
            Ok(record)
        }
    }
}

#[async_trait]
impl TenantRepository for InMemoryTenantRepository {
    async fn list_all(&self) -> Result<Vec<Tenant>, CoreError> {
        Ok(self.store.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn get_by_id(&self, tenant_id: Uuid) -> Result<Option<Tenant>, CoreError> {
        Ok(self.store.get(&tenant_id).map(|entry| entry.value().clone()))
    }

    async fn add(&self, tenant: Tenant) -> Result<Tenant, CoreError> {
        insert_new(&self.store, tenant.id, tenant, "tenant")
    }

    async fn update(&self, tenant: Tenant) -> Result<Tenant, CoreError> {
        match self.store.get_mut(&tenant.id) {
            Some(mut entry) => {
                *entry.value_mut() = tenant.clone();
                Ok(tenant)
            }
            None => Err(CoreError::NotFound(format!("tenant {}", tenant.id))),
        }
    }

    async fn delete(&self, tenant: &Tenant) -> Result<(), CoreError> {
        self.store.remove(&tenant.id);
        Ok(())
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolioRepository {
    async fn list_by_tenant(&self, tenant_id: Uuid) -> Result<Vec<Portfolio>, CoreError> {
        Ok(self
            .store
            .iter()
            .filter(|entry| entry.value().tenant_id == tenant_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn get_by_id(&self, portfolio_id: Uuid) -> Result<Option<Portfolio>, CoreError> {
        Ok(self.store.get(&portfolio_id).map(|entry| entry.value().clone()))
    }

    async fn add(&self, portfolio: Portfolio) -> Result<Portfolio, CoreError> {
        insert_new(&self.store, portfolio.id, portfolio, "portfolio")
    }

    async fn delete(&self, portfolio: &Portfolio) -> Result<(), CoreError> {
        self.store.remove(&portfolio.id);
        Ok(())
    }
}

#[async_trait]
impl PlantRepository for InMemoryPlantRepository {
    async fn list_by_portfolio(&self, portfolio_id: Uuid) -> Result<Vec<Plant>, CoreError> {
        Ok(self
            .store
            .iter()
            .filter(|entry| entry.value().portfolio_id == portfolio_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn get_by_id(&self, plant_id: Uuid) -> Result<Option<Plant>, CoreError> {
        Ok(self.store.get(&plant_id).map(|entry| entry.value().clone()))
    }

    async fn add(&self, plant: Plant) -> Result<Plant, CoreError> {
        insert_new(&self.store, plant.id, plant, "plant")
    }

    async fn delete(&self, plant: &Plant) -> Result<(), CoreError> {
        self.store.remove(&plant.id);
        Ok(())
    }
}
