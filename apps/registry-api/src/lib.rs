use axum::{Router, routing::get};
use core_lib::{
    PlantService, PortfolioService, TenantService,
    adapters::{
        InMemoryPlantRepository, InMemoryPortfolioRepository, InMemoryTenantRepository,
        PostgresPlantRepository, PostgresPortfolioRepository, PostgresTenantRepository,
    },
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod application;
pub mod config;

use application::{health, plants, portfolios, tenants};

// Holds shared dependencies
#[derive(Clone)]
pub struct AppState {
    pub tenants: TenantService,
    pub portfolios: PortfolioService,
    pub plants: PlantService,
    pub pg_pool: Option<PgPool>, // Present when running against PostgreSQL
}

impl AppState {
    /// State backed by process-local maps. Nothing survives a restart.
    pub fn in_memory() -> Self {
        Self {
            tenants: TenantService::new(Arc::new(InMemoryTenantRepository::default())),
            portfolios: PortfolioService::new(Arc::new(InMemoryPortfolioRepository::default())),
            plants: PlantService::new(Arc::new(InMemoryPlantRepository::default())),
            pg_pool: None,
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self {
            tenants: TenantService::new(Arc::new(PostgresTenantRepository::new(pool.clone()))),
            portfolios: PortfolioService::new(Arc::new(PostgresPortfolioRepository::new(
                pool.clone(),
            ))),
            plants: PlantService::new(Arc::new(PostgresPlantRepository::new(pool.clone()))),
            pg_pool: Some(pool),
        }
    }
}

// Function to create the main Axum router with state
pub fn create_app(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::handle_health))
        .route(
            "/tenants",
            get(tenants::handle_list_tenants).post(tenants::handle_create_tenant),
        )
        .route(
            "/tenants/{tenant_id}",
            get(tenants::handle_get_tenant)
                .put(tenants::handle_update_tenant)
                .delete(tenants::handle_delete_tenant),
        )
        .route(
            "/tenants/{tenant_id}/portfolios",
            get(portfolios::handle_list_portfolios).post(portfolios::handle_create_portfolio),
        )
        .route(
            "/tenants/{tenant_id}/portfolios/{portfolio_id}",
            get(portfolios::handle_get_portfolio).delete(portfolios::handle_delete_portfolio),
        )
        .route(
            "/portfolios/{portfolio_id}/plants",
            get(plants::handle_list_plants).post(plants::handle_create_plant),
        )
        .route(
            "/portfolios/{portfolio_id}/plants/{plant_id}",
            get(plants::handle_get_plant).delete(plants::handle_delete_plant),
        );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
