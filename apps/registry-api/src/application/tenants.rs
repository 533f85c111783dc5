use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::info;
use uuid::Uuid;

use super::error::ApiError;
use super::views::{TenantPayload, TenantView};
use crate::AppState;

fn tenant_not_found(tenant_id: Uuid) -> ApiError {
    ApiError::not_found(format!("Tenant with tenantId '{tenant_id}' not found"))
}

// GET /api/tenants
pub async fn handle_list_tenants(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<TenantView>>, ApiError> {
    let tenants = app_state.tenants.list_tenants().await?;
    Ok(Json(tenants.into_iter().map(TenantView::from).collect()))
}

// GET /api/tenants/{tenant_id}
pub async fn handle_get_tenant(
    State(app_state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
) -> Result<Json<TenantView>, ApiError> {
    let tenant = app_state
        .tenants
        .get_tenant(tenant_id)
        .await?
        .ok_or_else(|| tenant_not_found(tenant_id))?;
    Ok(Json(tenant.into()))
}

// POST /api/tenants
pub async fn handle_create_tenant(
    State(app_state): State<AppState>,
    payload: Result<Json<TenantPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<TenantView>), ApiError> {
    let Json(payload) = payload?;
    let tenant = payload.into_tenant()?;

    let created = app_state.tenants.add_tenant(tenant).await?;
    info!("Tenant {} created", created.id);
    Ok((StatusCode::CREATED, Json(created.into())))
}

// PUT /api/tenants/{tenant_id}
pub async fn handle_update_tenant(
    State(app_state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    payload: Result<Json<TenantPayload>, JsonRejection>,
) -> Result<Json<TenantView>, ApiError> {
    let Json(payload) = payload?;
    let existing = app_state
        .tenants
        .get_tenant(tenant_id)
        .await?
        .ok_or_else(|| tenant_not_found(tenant_id))?;

    let updated = payload.into_tenant()?;
    let tenant = app_state.tenants.update_tenant(updated, existing).await?;
    Ok(Json(tenant.into()))
}

// DELETE /api/tenants/{tenant_id}
pub async fn handle_delete_tenant(
    State(app_state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if app_state.tenants.get_tenant(tenant_id).await?.is_none() {
        return Err(tenant_not_found(tenant_id));
    }
    app_state.tenants.delete_tenant(tenant_id).await?;
    info!("Tenant {} deleted", tenant_id);
    Ok(StatusCode::NO_CONTENT)
}
