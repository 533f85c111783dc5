use crate::{CoreError, Tenant, TenantRepository};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

#[derive(Clone)]
pub struct TenantService {
    tenant_repository: Arc<dyn TenantRepository>,
}

impl TenantService {
    pub fn new(tenant_repository: Arc<dyn TenantRepository>) -> Self {
        Self { tenant_repository }
    }

    pub async fn list_tenants(&self) -> Result<Vec<Tenant>, CoreError> {
        self.tenant_repository.list_all().await
    }

    pub async fn get_tenant(&self, tenant_id: Uuid) -> Result<Option<Tenant>, CoreError> {
        self.tenant_repository.get_by_id(tenant_id).await
    }

    pub async fn add_tenant(&self, tenant: Tenant) -> Result<Tenant, CoreError> {
        self.tenant_repository.add(tenant).await
    }

    /// Copies name and country from `updated` onto `existing` and persists it.
    /// The id of `existing` is kept whatever `updated` carries.
    pub async fn update_tenant(
        &self,
        updated: Tenant,
        mut existing: Tenant,
    ) -> Result<Tenant, CoreError> {
        existing.name = updated.name;
        existing.country = updated.country;
        self.tenant_repository.update(existing).await
    }

    /// Removes the tenant if it exists. Portfolios under it are left in place.
    pub async fn delete_tenant(&self, tenant_id: Uuid) -> Result<(), CoreError> {
        match self.tenant_repository.get_by_id(tenant_id).await? {
            Some(tenant) => self.tenant_repository.delete(&tenant).await,
            None => {
                debug!("delete of absent tenant {} ignored", tenant_id);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockTenantRepository;
    use crate::adapters::InMemoryTenantRepository;

    fn service() -> TenantService {
        TenantService::new(Arc::new(InMemoryTenantRepository::default()))
    }

    #[tokio::test]
    async fn test_add_then_get_returns_equal_record() {
        let service = service();
        let tenant = Tenant::new("Acme", "NO").unwrap();

        let created = service.add_tenant(tenant.clone()).await.unwrap();
        assert_eq!(created, tenant);
        assert_eq!(service.get_tenant(tenant.id).await.unwrap(), Some(tenant));
    }

    #[tokio::test]
    async fn test_list_tenants_empty_store() {
        assert!(service().list_tenants().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_overwrites_fields() {
        let service = service();
        let existing = service
            .add_tenant(Tenant::new("Acme", "NO").unwrap())
            .await
            .unwrap();
        // The payload carries an unrelated id that must not leak into the stored row
        let updated = Tenant::new("Acme Renewables", "SE").unwrap();

        let result = service
            .update_tenant(updated.clone(), existing.clone())
            .await
            .unwrap();

        assert_eq!(result.id, existing.id);
        assert_eq!(result.name, "Acme Renewables");
        assert_eq!(result.country, "SE");
        assert_eq!(service.get_tenant(existing.id).await.unwrap(), Some(result));
        assert_eq!(service.get_tenant(updated.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_tenant() {
        let service = service();
        let tenant = service
            .add_tenant(Tenant::new("Acme", "NO").unwrap())
            .await
            .unwrap();

        service.delete_tenant(tenant.id).await.unwrap();
        assert_eq!(service.get_tenant(tenant.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_absent_tenant_is_noop() {
        let mut repo = MockTenantRepository::new();
        repo.expect_get_by_id().times(1).returning(|_| Ok(None));
        repo.expect_delete().never();

        let service = TenantService::new(Arc::new(repo));
        service.delete_tenant(Uuid::new_v4()).await.unwrap();
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut repo = MockTenantRepository::new();
        repo.expect_list_all()
            .returning(|| Err(CoreError::Infrastructure("connection refused".into())));
        repo.expect_update()
            .returning(|_| Err(CoreError::Infrastructure("connection refused".into())));

        let service = TenantService::new(Arc::new(repo));

        match service.list_tenants().await {
            Err(CoreError::Infrastructure(e)) => assert_eq!(e.to_string(), "connection refused"),
            other => panic!("Expected Infrastructure error, got {:?}", other),
        }
        let existing = Tenant::new("Acme", "NO").unwrap();
        let updated = Tenant::new("Acme", "SE").unwrap();
        assert!(matches!(
            service.update_tenant(updated, existing).await,
            Err(CoreError::Infrastructure(_))
        ));
    }
}
