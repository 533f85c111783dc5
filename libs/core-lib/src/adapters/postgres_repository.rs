use crate::{
    CoreError, Plant, PlantRepository, Portfolio, PortfolioRepository, Tenant, TenantRepository,
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

// Row structures matching the DB schema
#[derive(sqlx::FromRow, Debug)]
struct TenantRow {
    tenant_id: Uuid,
    tenant_name: String,
    tenant_country: String,
}

impl From<TenantRow> for Tenant {
    fn from(row: TenantRow) -> Self {
        Self {
            id: row.tenant_id,
            name: row.tenant_name,
            country: row.tenant_country,
        }
    }
}

#[derive(sqlx::FromRow, Debug)]
struct PortfolioRow {
    portfolio_id: Uuid,
    tenant_id: Uuid,
    portfolio_name: String,
}

impl From<PortfolioRow> for Portfolio {
    fn from(row: PortfolioRow) -> Self {
        Self {
            id: row.portfolio_id,
            tenant_id: row.tenant_id,
            name: row.portfolio_name,
        }
    }
}

#[derive(sqlx::FromRow, Debug)]
struct PlantRow {
    plant_id: Uuid,
    portfolio_id: Uuid,
    plant_name: String,
}

impl From<PlantRow> for Plant {
    fn from(row: PlantRow) -> Self {
        Self {
            id: row.plant_id,
            portfolio_id: row.portfolio_id,
            name: row.plant_name,
        }
    }
}

/// Unique violations become `AlreadyExists`; anything else is an infrastructure failure.
fn map_sqlx_error(err: sqlx::Error, record: impl std::fmt::Display) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return CoreError::AlreadyExists(record.to_string());
        }
    }
    warn!("DB error on {}: {}", record, err);
    CoreError::Infrastructure(Box::new(err))
}

/// PostgreSQL implementation of the tenant port using sqlx.
#[derive(Debug, Clone)]
pub struct PostgresTenantRepository {
    pool: PgPool,
}

impl PostgresTenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TenantRepository for PostgresTenantRepository {
    async fn list_all(&self) -> Result<Vec<Tenant>, CoreError> {
        let rows: Vec<TenantRow> =
            sqlx::query_as("SELECT tenant_id, tenant_name, tenant_country FROM tenants")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| map_sqlx_error(e, "tenants"))?;
        Ok(rows.into_iter().map(Tenant::from).collect())
    }

    async fn get_by_id(&self, tenant_id: Uuid) -> Result<Option<Tenant>, CoreError> {
        let row: Option<TenantRow> = sqlx::query_as(
            "SELECT tenant_id, tenant_name, tenant_country FROM tenants WHERE tenant_id = $1",
        )
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, format!("tenant {tenant_id}")))?;
        Ok(row.map(Tenant::from))
    }

    async fn add(&self, tenant: Tenant) -> Result<Tenant, CoreError> {
        sqlx::query(
            "INSERT INTO tenants (tenant_id, tenant_name, tenant_country) VALUES ($1, $2, $3)",
        )
        .bind(tenant.id)
        .bind(&tenant.name)
        .bind(&tenant.country)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, format!("tenant {}", tenant.id)))?;
        Ok(tenant)
    }

    async fn update(&self, tenant: Tenant) -> Result<Tenant, CoreError> {
        let result = sqlx::query(
            "UPDATE tenants SET tenant_name = $2, tenant_country = $3 WHERE tenant_id = $1",
        )
        .bind(tenant.id)
        .bind(&tenant.name)
        .bind(&tenant.country)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, format!("tenant {}", tenant.id)))?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(format!("tenant {}", tenant.id)));
        }
        Ok(tenant)
    }

    async fn delete(&self, tenant: &Tenant) -> Result<(), CoreError> {
        sqlx::query("DELETE FROM tenants WHERE tenant_id = $1")
            .bind(tenant.id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, format!("tenant {}", tenant.id)))?;
        Ok(())
    }
}

/// PostgreSQL implementation of the portfolio port.
#[derive(Debug, Clone)]
pub struct PostgresPortfolioRepository {
    pool: PgPool,
}

impl PostgresPortfolioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioRepository for PostgresPortfolioRepository {
    async fn list_by_tenant(&self, tenant_id: Uuid) -> Result<Vec<Portfolio>, CoreError> {
        let rows: Vec<PortfolioRow> = sqlx::query_as(
            "SELECT portfolio_id, tenant_id, portfolio_name FROM portfolios WHERE tenant_id = $1",
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, format!("portfolios of tenant {tenant_id}")))?;
        Ok(rows.into_iter().map(Portfolio::from).collect())
    }

    async fn get_by_id(&self, portfolio_id: Uuid) -> Result<Option<Portfolio>, CoreError> {
        let row: Option<PortfolioRow> = sqlx::query_as(
            "SELECT portfolio_id, tenant_id, portfolio_name FROM portfolios WHERE portfolio_id = $1",
        )
        .bind(portfolio_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, format!("portfolio {portfolio_id}")))?;
        Ok(row.map(Portfolio::from))
    }

    async fn add(&self, portfolio: Portfolio) -> Result<Portfolio, CoreError> {
        sqlx::query(
            "INSERT INTO portfolios (portfolio_id, tenant_id, portfolio_name) VALUES ($1, $2, $3)",
        )
        .bind(portfolio.id)
        .bind(portfolio.tenant_id)
        .bind(&portfolio.name)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, format!("portfolio {}", portfolio.id)))?;
        Ok(portfolio)
    }

    async fn delete(&self, portfolio: &Portfolio) -> Result<(), CoreError> {
        sqlx::query("DELETE FROM portfolios WHERE portfolio_id = $1")
            .bind(portfolio.id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, format!("portfolio {}", portfolio.id)))?;
        Ok(())
    }
}

/// PostgreSQL implementation of the plant port.
#[derive(Debug, Clone)]
pub struct PostgresPlantRepository {
    pool: PgPool,
}

impl PostgresPlantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlantRepository for PostgresPlantRepository {
    async fn list_by_portfolio(&self, portfolio_id: Uuid) -> Result<Vec<Plant>, CoreError> {
        let rows: Vec<PlantRow> = sqlx::query_as(
            "SELECT plant_id, portfolio_id, plant_name FROM plants WHERE portfolio_id = $1",
        )
        .bind(portfolio_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, format!("plants of portfolio {portfolio_id}")))?;
        Ok(rows.into_iter().map(Plant::from).collect())
    }

    async fn get_by_id(&self, plant_id: Uuid) -> Result<Option<Plant>, CoreError> {
        let row: Option<PlantRow> = sqlx::query_as(
            "SELECT plant_id, portfolio_id, plant_name FROM plants WHERE plant_id = $1",
        )
        .bind(plant_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, format!("plant {plant_id}")))?;
        Ok(row.map(Plant::from))
    }

    async fn add(&self, plant: Plant) -> Result<Plant, CoreError> {
        sqlx::query("INSERT INTO plants (plant_id, portfolio_id, plant_name) VALUES ($1, $2, $3)")
            .bind(plant.id)
            .bind(plant.portfolio_id)
            .bind(&plant.name)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, format!("plant {}", plant.id)))?;
        Ok(plant)
    }

    async fn delete(&self, plant: &Plant) -> Result<(), CoreError> {
        sqlx::query("DELETE FROM plants WHERE plant_id = $1")
            .bind(plant.id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, format!("plant {}", plant.id)))?;
        Ok(())
    }
}
