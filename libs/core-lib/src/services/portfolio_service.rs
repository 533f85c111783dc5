use crate::{CoreError, Portfolio, PortfolioRepository};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::find_scoped;

/// Portfolio operations, always scoped by the owning tenant where a child is looked up.
#[derive(Clone)]
pub struct PortfolioService {
    portfolio_repository: Arc<dyn PortfolioRepository>,
}

impl PortfolioService {
    pub fn new(portfolio_repository: Arc<dyn PortfolioRepository>) -> Self {
        Self {
            portfolio_repository,
        }
    }

    /// Portfolios owned by `tenant_id`. An unknown tenant simply has none;
    /// callers that need to tell the two apart look the tenant up themselves.
    pub async fn list_portfolios_by_tenant(
        &self,
        tenant_id: Uuid,
    ) -> Result<Vec<Portfolio>, CoreError> {
        self.portfolio_repository.list_by_tenant(tenant_id).await
    }

    /// The portfolio `portfolio_id`, but only if it belongs to `tenant_id`.
    pub async fn get_portfolio_for_tenant(
        &self,
        tenant_id: Uuid,
        portfolio_id: Uuid,
    ) -> Result<Option<Portfolio>, CoreError> {
        let portfolios = self.list_portfolios_by_tenant(tenant_id).await?;
        Ok(find_scoped(portfolios, portfolio_id, |p| p.id))
    }

    /// Unscoped lookup, used to confirm a parent exists before adding plants.
    pub async fn get_portfolio(&self, portfolio_id: Uuid) -> Result<Option<Portfolio>, CoreError> {
        self.portfolio_repository.get_by_id(portfolio_id).await
    }

    /// Persists `portfolio` as given.
    ///
    /// The caller must already have fetched the tenant named by
    /// `portfolio.tenant_id`; nothing here checks that it exists.
    pub async fn add_portfolio(&self, portfolio: Portfolio) -> Result<Portfolio, CoreError> {
        self.portfolio_repository.add(portfolio).await
    }

    /// Removes the portfolio if it exists. Plants under it are left in place.
    pub async fn delete_portfolio(&self, portfolio_id: Uuid) -> Result<(), CoreError> {
        match self.portfolio_repository.get_by_id(portfolio_id).await? {
            Some(portfolio) => self.portfolio_repository.delete(&portfolio).await,
            None => {
                debug!("delete of absent portfolio {} ignored", portfolio_id);
                Ok(())
            }
        }
    }
}
