use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::info;
use uuid::Uuid;

use super::error::ApiError;
use super::views::{PortfolioPayload, PortfolioView};
use crate::AppState;

fn scoped_portfolio_not_found(tenant_id: Uuid, portfolio_id: Uuid) -> ApiError {
    ApiError::not_found(format!(
        "Portfolio with tenantId '{tenant_id}' and portfolioId '{portfolio_id}' was not found"
    ))
}

/// Confirms the parent tenant exists. The portfolio service never checks this itself.
async fn require_tenant(app_state: &AppState, tenant_id: Uuid) -> Result<(), ApiError> {
    match app_state.tenants.get_tenant(tenant_id).await? {
        Some(_) => Ok(()),
        None => Err(ApiError::not_found(format!(
            "Tenant with tenantId '{tenant_id}' was not found"
        ))),
    }
}

// GET /api/tenants/{tenant_id}/portfolios
pub async fn handle_list_portfolios(
    State(app_state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
) -> Result<Json<Vec<PortfolioView>>, ApiError> {
    require_tenant(&app_state, tenant_id).await?;
    let portfolios = app_state
        .portfolios
        .list_portfolios_by_tenant(tenant_id)
        .await?;
    Ok(Json(portfolios.into_iter().map(PortfolioView::from).collect()))
}

// POST /api/tenants/{tenant_id}/portfolios
pub async fn handle_create_portfolio(
    State(app_state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    payload: Result<Json<PortfolioPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<PortfolioView>), ApiError> {
    let Json(payload) = payload?;
    require_tenant(&app_state, tenant_id).await?;

    let portfolio = payload.into_portfolio(tenant_id)?;
    let created = app_state.portfolios.add_portfolio(portfolio).await?;
    info!("Portfolio {} created for tenant {}", created.id, tenant_id);
    Ok((StatusCode::CREATED, Json(created.into())))
}

// GET /api/tenants/{tenant_id}/portfolios/{portfolio_id}
pub async fn handle_get_portfolio(
    State(app_state): State<AppState>,
    Path((tenant_id, portfolio_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<PortfolioView>, ApiError> {
    let portfolio = app_state
        .portfolios
        .get_portfolio_for_tenant(tenant_id, portfolio_id)
        .await?
        .ok_or_else(|| scoped_portfolio_not_found(tenant_id, portfolio_id))?;
    Ok(Json(portfolio.into()))
}

// DELETE /api/tenants/{tenant_id}/portfolios/{portfolio_id}
pub async fn handle_delete_portfolio(
    State(app_state): State<AppState>,
    Path((tenant_id, portfolio_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    let scoped = app_state
        .portfolios
        .get_portfolio_for_tenant(tenant_id, portfolio_id)
        .await?;
    if scoped.is_none() {
        return Err(scoped_portfolio_not_found(tenant_id, portfolio_id));
    }

    app_state.portfolios.delete_portfolio(portfolio_id).await?;
    info!("Portfolio {} deleted from tenant {}", portfolio_id, tenant_id);
    Ok(StatusCode::NO_CONTENT)
}
